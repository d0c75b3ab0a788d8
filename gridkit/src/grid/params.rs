use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::column::{ColumnConfiguration, Extractor};

/// Callback invoked with the key of a clicked row.
pub type RowClickCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Ordered groups of ordered `(row key, row)` pairs.
pub type GroupedOrderedData<T> = Vec<(String, Vec<(String, T)>)>;

/// How column widths are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Measurement {
    Em,
    /// Widths come from measuring rendered text.
    FitToData,
    Px,
    #[default]
    Percent,
}

impl Measurement {
    /// CSS unit for the explicit-width modes.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::Em => Some("em"),
            Self::Px => Some("px"),
            Self::Percent => Some("%"),
            Self::FitToData => None,
        }
    }

    pub fn is_fit_to_data(self) -> bool {
        self == Self::FitToData
    }
}

/// Everything the host hands the grid on a parameter update.
///
/// # Example
///
/// ```
/// use gridkit::grid::{ColumnConfiguration, GridParams, Measurement};
///
/// let columns = vec![ColumnConfiguration::text("Name", |name: &String| name.clone())];
/// let data = vec![(String::new(), vec![("r1".to_string(), "Ada".to_string())])];
///
/// let params = GridParams::new(columns, data)
///     .measurement(Measurement::FitToData)
///     .highlight_selected_row(true);
/// assert!(params.highlight_selected_row);
/// ```
pub struct GridParams<T> {
    pub columns: Vec<ColumnConfiguration<T>>,
    pub data: GroupedOrderedData<T>,
    pub measurement: Measurement,
    /// Emit a header row before each group.
    pub group: bool,
    pub highlight_selected_row: bool,
    pub suppress_header: bool,
    /// Blur cells of sensitive columns.
    pub obscure_sensitive: bool,
    /// Overrides the pair key as the row key.
    pub key_expression: Option<Extractor<T, String>>,
    pub on_row_click: Option<RowClickCallback>,
    pub class: String,
    pub style: String,
    /// Prefix for this grid's log lines.
    pub log_identification: String,
}

impl<T> fmt::Debug for GridParams<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridParams")
            .field("columns", &self.columns)
            .field("groups", &self.data.len())
            .field("measurement", &self.measurement)
            .field("group", &self.group)
            .field("highlight_selected_row", &self.highlight_selected_row)
            .field("suppress_header", &self.suppress_header)
            .field("obscure_sensitive", &self.obscure_sensitive)
            .field("class", &self.class)
            .field("style", &self.style)
            .field("log_identification", &self.log_identification)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> GridParams<T> {
    pub fn new(columns: Vec<ColumnConfiguration<T>>, data: GroupedOrderedData<T>) -> Self {
        Self {
            columns,
            data,
            measurement: Measurement::default(),
            group: false,
            highlight_selected_row: false,
            suppress_header: false,
            obscure_sensitive: false,
            key_expression: None,
            on_row_click: None,
            class: String::new(),
            style: String::new(),
            log_identification: String::new(),
        }
    }

    pub fn measurement(mut self, measurement: Measurement) -> Self {
        self.measurement = measurement;
        self
    }

    pub fn group(mut self, group: bool) -> Self {
        self.group = group;
        self
    }

    pub fn highlight_selected_row(mut self, highlight: bool) -> Self {
        self.highlight_selected_row = highlight;
        self
    }

    pub fn suppress_header(mut self, suppress: bool) -> Self {
        self.suppress_header = suppress;
        self
    }

    pub fn obscure_sensitive(mut self, obscure: bool) -> Self {
        self.obscure_sensitive = obscure;
        self
    }

    pub fn key_expression(mut self, f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.key_expression = Some(Arc::new(f));
        self
    }

    pub fn on_row_click(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Arc::new(f));
        self
    }

    /// Share an existing callback so its identity stays stable across
    /// parameter updates.
    pub fn on_row_click_shared(mut self, callback: RowClickCallback) -> Self {
        self.on_row_click = Some(callback);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn log_identification(mut self, id: impl Into<String>) -> Self {
        self.log_identification = id.into();
        self
    }
}

impl<T> GridParams<T> {
    /// Key of a row: the key expression when set, else the pair key.
    pub fn row_key(&self, pair_key: &str, row: &T) -> String {
        match &self.key_expression {
            Some(f) => f(row),
            None => pair_key.to_string(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.iter().map(|(_, rows)| rows.len()).sum()
    }
}
