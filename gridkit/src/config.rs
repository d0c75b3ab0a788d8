//! Grid configuration

/// Class names and tuning for measurement and markup.
///
/// # Example
///
/// ```
/// use gridkit::GridConfig;
///
/// let config = GridConfig::default().with_width_slack(2.0);
/// assert_eq!(config.width_slack, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Class applied by the backend when measuring header titles.
    ///
    /// Default: `mb-grid-header-td-measure`
    pub header_measure_class: String,

    /// Class applied by the backend when measuring body cells.
    ///
    /// Default: `mb-grid-body-td-measure`
    pub body_measure_class: String,

    /// Class of the scrolling body container, used for the scrollbar query.
    ///
    /// Default: `mb-grid-div-body`
    pub body_container_class: String,

    /// Pixels added to every measured column width.
    ///
    /// Default: 1.0
    pub width_slack: f32,

    /// Prefix for generated header/body element ids.
    ///
    /// Default: `mb-grid`
    pub id_prefix: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            header_measure_class: "mb-grid-header-td-measure".to_string(),
            body_measure_class: "mb-grid-body-td-measure".to_string(),
            body_container_class: "mb-grid-div-body".to_string(),
            width_slack: 1.0,
            id_prefix: "mb-grid".to_string(),
        }
    }
}

impl GridConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_measure_class(mut self, class: impl Into<String>) -> Self {
        self.header_measure_class = class.into();
        self
    }

    pub fn with_body_measure_class(mut self, class: impl Into<String>) -> Self {
        self.body_measure_class = class.into();
        self
    }

    pub fn with_body_container_class(mut self, class: impl Into<String>) -> Self {
        self.body_container_class = class.into();
        self
    }

    /// Sets the per-column slack in pixels.
    pub fn with_width_slack(mut self, slack: f32) -> Self {
        self.width_slack = slack;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}
