use super::Content;

/// Tags serialized without a closing tag or content.
const VOID_TAGS: &[&str] = &["br", "col", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    /// Tag name. Empty for a fragment, which serializes only its children.
    pub tag: String,
    pub id: Option<String>,
    /// Diffing identity for sibling reuse. Never serialized.
    pub key: Option<String>,

    // Markup
    /// Class attribute, kept verbatim (not split into tokens).
    pub class: Option<String>,
    /// Inline style attribute, kept verbatim.
    pub style: Option<String>,
    /// Remaining attributes in insertion order.
    pub attributes: Vec<(String, String)>,

    // Content
    pub content: Content,

    // Interaction
    pub clickable: bool,
    pub scrollable: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// A tagless container whose children are emitted in place.
    pub fn fragment() -> Self {
        Self::default()
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn colgroup() -> Self {
        Self::new("colgroup")
    }

    pub fn col() -> Self {
        Self::new("col")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn td() -> Self {
        Self::new("td")
    }

    pub fn i() -> Self {
        Self::new("i")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    // Queries
    pub fn is_fragment(&self) -> bool {
        self.tag.is_empty()
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|token| token == class))
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}
