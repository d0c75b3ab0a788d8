use super::Element;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Escaped on output.
    Text(String),
    Children(Vec<Element>),
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
