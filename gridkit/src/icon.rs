//! Icon markup for icon columns.

use serde::{Deserialize, Serialize};
use webdom::{Color, Element};

/// Material Icons font theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialTheme {
    #[default]
    Filled,
    Outlined,
    Round,
    TwoTone,
    Sharp,
}

impl MaterialTheme {
    /// The font class for this theme.
    pub fn class(self) -> &'static str {
        match self {
            Self::Filled => "material-icons",
            Self::Outlined => "material-icons-outlined",
            Self::Round => "material-icons-round",
            Self::TwoTone => "material-icons-two-tone",
            Self::Sharp => "material-icons-sharp",
        }
    }
}

/// Where an icon's glyph comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IconFoundry {
    #[default]
    Material,
    MaterialThemed(MaterialTheme),
}

impl IconFoundry {
    pub fn theme(self) -> MaterialTheme {
        match self {
            Self::Material => MaterialTheme::default(),
            Self::MaterialThemed(theme) => theme,
        }
    }
}

/// An icon cell's content.
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct IconSpec {
    pub name: String,
    pub foundry: IconFoundry,
    pub color: Color,
}

impl IconSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foundry: IconFoundry::default(),
            color: Color::BLACK,
        }
    }

    pub fn foundry(mut self, foundry: IconFoundry) -> Self {
        self.foundry = foundry;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// `<i class="material-icons…">name</i>` with the ligature name
    /// lowercased. An empty name yields `None`.
    pub fn element(&self) -> Option<Element> {
        if self.name.is_empty() {
            return None;
        }
        Some(
            Element::i()
                .class(self.foundry.theme().class())
                .text(self.name.to_lowercase()),
        )
    }
}
