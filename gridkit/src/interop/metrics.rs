use std::sync::Mutex;

use async_trait::async_trait;
use unicode_width::UnicodeWidthStr;

use crate::error::InteropError;

use super::{GridInterop, merge_widths};

/// Calls received by a [`MonospaceMetrics`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsCalls {
    pub scrollbar_width: usize,
    /// Measure classes, one per `text_widths` call, in call order.
    pub text_widths: Vec<String>,
    pub scrolled_to: Vec<String>,
    pub sync_scroll: usize,
}

/// Measures text as if every column were one fixed-width glyph per display
/// cell.
///
/// # Example
///
/// ```
/// use gridkit::interop::MonospaceMetrics;
///
/// let metrics = MonospaceMetrics::new(8.0);
/// assert_eq!(metrics.text_width("abc"), 24.0);
/// ```
#[derive(Debug)]
pub struct MonospaceMetrics {
    char_width: f32,
    scrollbar_width: f32,
    calls: Mutex<MetricsCalls>,
}

impl MonospaceMetrics {
    pub fn new(char_width: f32) -> Self {
        Self {
            char_width,
            scrollbar_width: 17.0,
            calls: Mutex::new(MetricsCalls::default()),
        }
    }

    pub fn with_scrollbar_width(mut self, width: f32) -> Self {
        self.scrollbar_width = width;
        self
    }

    pub fn text_width(&self, text: &str) -> f32 {
        text.width() as f32 * self.char_width
    }

    /// Snapshot of the calls received so far.
    pub fn calls(&self) -> MetricsCalls {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, f: impl FnOnce(&mut MetricsCalls)) {
        if let Ok(mut calls) = self.calls.lock() {
            f(&mut calls);
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0)
    }
}

#[async_trait]
impl GridInterop for MonospaceMetrics {
    async fn scrollbar_width(&self, _container_class: &str) -> Result<f32, InteropError> {
        self.record(|calls| calls.scrollbar_width += 1);
        Ok(self.scrollbar_width)
    }

    async fn text_widths(
        &self,
        measure_class: &str,
        current_widths: &[f32],
        texts: &[String],
    ) -> Result<Vec<f32>, InteropError> {
        self.record(|calls| calls.text_widths.push(measure_class.to_string()));
        Ok(merge_widths(
            current_widths,
            texts.iter().map(|text| self.text_width(text)),
        ))
    }

    async fn scroll_to_row(&self, row_id: &str) -> Result<(), InteropError> {
        self.record(|calls| calls.scrolled_to.push(row_id.to_string()));
        Ok(())
    }

    async fn sync_scroll(&self, _header_id: &str, _body_id: &str) -> Result<(), InteropError> {
        self.record(|calls| calls.sync_scroll += 1);
        Ok(())
    }
}
