use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use webdom::Color;

use crate::error::GridError;
use crate::fingerprint::{HashCode, identity};
use crate::icon::IconSpec;

use super::cell::{CellValue, TextColorSpec, TextValue};

/// A shared per-row extraction function.
pub type Extractor<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

// =============================================================================
// ColumnType
// =============================================================================

/// Content kind of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Icon,
    Text,
    TextColor,
    /// A kind name the grid does not support. Rendering or fingerprinting a
    /// column of this kind fails.
    Unknown(String),
}

impl ColumnType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Icon => "icon",
            Self::Text => "text",
            Self::TextColor => "text-color",
            Self::Unknown(name) => name,
        }
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "icon" => Self::Icon,
            "text" => Self::Text,
            "text-color" | "textcolor" => Self::TextColor,
            _ => Self::Unknown(name),
        }
    }
}

impl From<ColumnType> for String {
    fn from(kind: ColumnType) -> Self {
        kind.as_str().to_string()
    }
}

// =============================================================================
// ColumnConfiguration
// =============================================================================

/// One displayed column: title, content kind, extraction functions and
/// presentation options.
pub struct ColumnConfiguration<T> {
    pub title: String,
    pub column_type: ColumnType,
    /// Produces the cell content. A column without one renders empty cells.
    pub data: Option<Extractor<T, CellValue>>,
    /// Text colour for `Text` cells.
    pub foreground: Option<Extractor<T, Color>>,
    /// Background colour for `Text` cells. Transparent results are skipped.
    pub background: Option<Extractor<T, Color>>,
    pub format: Option<String>,
    /// Cell may be blurred when the grid obscures sensitive data.
    pub sensitive: bool,
    /// Width in the grid's unit; ignored when fitting to data.
    pub width: Option<f32>,
    pub header_foreground: Color,
    pub header_background: Color,
}

impl<T> Clone for ColumnConfiguration<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            column_type: self.column_type.clone(),
            data: self.data.clone(),
            foreground: self.foreground.clone(),
            background: self.background.clone(),
            format: self.format.clone(),
            sensitive: self.sensitive,
            width: self.width,
            header_foreground: self.header_foreground.clone(),
            header_background: self.header_background.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnConfiguration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnConfiguration")
            .field("title", &self.title)
            .field("column_type", &self.column_type)
            .field("format", &self.format)
            .field("sensitive", &self.sensitive)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> ColumnConfiguration<T> {
    /// A column of the given kind with no extraction function yet.
    pub fn new(title: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            title: title.into(),
            column_type,
            data: None,
            foreground: None,
            background: None,
            format: None,
            sensitive: false,
            width: None,
            header_foreground: Color::BLACK,
            header_background: Color::WHITE,
        }
    }

    pub fn icon(title: impl Into<String>, f: impl Fn(&T) -> IconSpec + Send + Sync + 'static) -> Self {
        Self::new(title, ColumnType::Icon).data(move |row| CellValue::Icon(f(row)))
    }

    pub fn text<V: Into<TextValue>>(
        title: impl Into<String>,
        f: impl Fn(&T) -> V + Send + Sync + 'static,
    ) -> Self {
        Self::new(title, ColumnType::Text).data(move |row| CellValue::Text(f(row).into()))
    }

    pub fn text_color(
        title: impl Into<String>,
        f: impl Fn(&T) -> TextColorSpec + Send + Sync + 'static,
    ) -> Self {
        Self::new(title, ColumnType::TextColor).data(move |row| CellValue::TextColor(f(row)))
    }

    /// Replace the data extraction function.
    pub fn data(mut self, f: impl Fn(&T) -> CellValue + Send + Sync + 'static) -> Self {
        self.data = Some(Arc::new(f));
        self
    }

    pub fn foreground(mut self, f: impl Fn(&T) -> Color + Send + Sync + 'static) -> Self {
        self.foreground = Some(Arc::new(f));
        self
    }

    pub fn background(mut self, f: impl Fn(&T) -> Color + Send + Sync + 'static) -> Self {
        self.background = Some(Arc::new(f));
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn header_colors(mut self, foreground: Color, background: Color) -> Self {
        self.header_foreground = foreground;
        self.header_background = background;
        self
    }
}

impl<T> ColumnConfiguration<T> {
    /// Fail for kinds the grid cannot render.
    pub(crate) fn check_kind(&self) -> Result<(), GridError> {
        match &self.column_type {
            ColumnType::Unknown(kind) => Err(GridError::UnknownColumnType {
                column: self.title.clone(),
                kind: kind.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Run the data extraction function, checking the result against the
    /// column kind.
    pub(crate) fn extract(&self, row: &T) -> Result<Option<CellValue>, GridError> {
        self.check_kind()?;
        let Some(data) = &self.data else {
            return Ok(None);
        };
        let value = data(row);
        let expected = self.column_type.as_str();
        if value.kind_name() == expected {
            return Ok(Some(value));
        }
        Err(GridError::MalformedCell {
            column: self.title.clone(),
            expected: match self.column_type {
                ColumnType::Icon => "icon",
                ColumnType::TextColor => "text-color",
                _ => "text",
            },
            actual: value.kind_name(),
        })
    }

    pub(crate) fn foreground_of(&self, row: &T) -> Option<Color> {
        self.foreground.as_ref().map(|f| f(row))
    }

    pub(crate) fn background_of(&self, row: &T) -> Option<Color> {
        self.background.as_ref().map(|f| f(row))
    }

    /// Fingerprint of everything about this column that affects output.
    pub(crate) fn config_hash(&self) -> HashCode {
        HashCode::of(&self.title)
            .and(&self.column_type)
            .and(&self.data.as_ref().map(identity))
            .and(&self.foreground.as_ref().map(identity))
            .and(&self.background.as_ref().map(identity))
            .and(&self.format)
            .and(&self.sensitive)
            .and(&self.width.map(f32::to_bits))
            .and(&self.header_foreground)
            .and(&self.header_background)
    }
}

// =============================================================================
// ColumnDefinition
// =============================================================================

/// Declarative column description, e.g. loaded from JSON.
///
/// # Example
///
/// ```
/// use gridkit::grid::{ColumnDefinition, ColumnType};
///
/// let def: ColumnDefinition =
///     serde_json::from_str(r#"{"title": "Name", "kind": "text", "width": 20}"#).unwrap();
/// assert_eq!(def.kind, ColumnType::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub title: String,
    pub kind: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub sensitive: bool,
    /// CSS colour string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_foreground: Option<String>,
    /// CSS colour string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_background: Option<String>,
}

impl ColumnDefinition {
    /// Attach a data extraction function, producing a full configuration.
    pub fn into_configuration<T: 'static>(
        self,
        data: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Result<ColumnConfiguration<T>, GridError> {
        let mut column = ColumnConfiguration::new(self.title, self.kind)
            .data(data)
            .sensitive(self.sensitive);
        column.width = self.width;
        column.format = self.format;
        if let Some(fg) = self.header_foreground {
            column.header_foreground = fg.parse()?;
        }
        if let Some(bg) = self.header_background {
            column.header_background = bg.parse()?;
        }
        Ok(column)
    }
}
