use std::fmt;
use std::hash::{Hash, Hasher};

use webdom::Color;

use crate::icon::IconSpec;

/// Value produced by a column's data extraction function.
///
/// The variant must match the column's [`ColumnType`](super::ColumnType).
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum CellValue {
    Icon(IconSpec),
    Text(TextValue),
    TextColor(TextColorSpec),
}

impl CellValue {
    /// Short variant name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Icon(_) => "icon",
            Self::Text(_) => "text",
            Self::TextColor(_) => "text-color",
        }
    }
}

impl From<IconSpec> for CellValue {
    fn from(icon: IconSpec) -> Self {
        Self::Icon(icon)
    }
}

impl From<TextColorSpec> for CellValue {
    fn from(spec: TextColorSpec) -> Self {
        Self::TextColor(spec)
    }
}

impl From<TextValue> for CellValue {
    fn from(value: TextValue) -> Self {
        Self::Text(value)
    }
}

macro_rules! text_cell_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.into())
                }
            }
        )*
    };
}

text_cell_from!(&str, String, i64, i32, u32, f64, f32, bool);

/// A scalar shown in a text cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TextValue {
    #[default]
    Empty,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Hash for TextValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Empty => {}
            Self::Str(s) => s.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(x) => x.to_bits().hash(state),
            Self::Bool(b) => b.hash(state),
        }
    }
}

impl From<&str> for TextValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for TextValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for TextValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for TextValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for TextValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for TextValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for TextValue {
    fn from(x: f32) -> Self {
        Self::Float(x.into())
    }
}

impl From<bool> for TextValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<V: Into<TextValue>> From<Option<V>> for TextValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Text with its own colours, for `TextColor` columns.
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct TextColorSpec {
    pub text: String,
    pub foreground: Color,
    pub background: Color,
    /// Render only the bare cell, without text or colours.
    pub suppress: bool,
}

impl TextColorSpec {
    pub fn new(text: impl Into<String>, foreground: Color, background: Color) -> Self {
        Self {
            text: text.into(),
            foreground,
            background,
            suppress: false,
        }
    }

    pub fn suppressed(mut self) -> Self {
        self.suppress = true;
        self
    }
}
