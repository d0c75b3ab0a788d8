//! The boundary between the grid and whatever lays out text.
//!
//! [`GridInterop`] is the seam. [`JsGridInterop`] forwards each call to a
//! browser-side script through a [`JsRuntime`]; [`MonospaceMetrics`]
//! measures in-process for tests and headless rendering.

mod js;
mod metrics;

pub use js::*;
pub use metrics::*;

use async_trait::async_trait;

use crate::error::InteropError;

/// Operations the grid needs from its rendering environment.
#[async_trait]
pub trait GridInterop: Send + Sync {
    /// Width of a vertical scrollbar inside an element of `container_class`.
    async fn scrollbar_width(&self, container_class: &str) -> Result<f32, InteropError>;

    /// Measure `texts` styled with `measure_class`.
    ///
    /// Text `i` belongs to column `i % current_widths.len()`. Returns
    /// `current_widths` with each entry raised to the widest text seen for
    /// its column.
    async fn text_widths(
        &self,
        measure_class: &str,
        current_widths: &[f32],
        texts: &[String],
    ) -> Result<Vec<f32>, InteropError>;

    /// Smoothly scroll the row with element id `row_id` to the top.
    async fn scroll_to_row(&self, row_id: &str) -> Result<(), InteropError>;

    /// Copy the body's horizontal scroll offset onto the header.
    async fn sync_scroll(&self, header_id: &str, body_id: &str) -> Result<(), InteropError>;
}

/// Raise `current[i % len]` to `measured[i]` for every measured width.
///
/// An empty `current` stays empty.
pub fn merge_widths(current: &[f32], measured: impl IntoIterator<Item = f32>) -> Vec<f32> {
    let mut widths = current.to_vec();
    if widths.is_empty() {
        return widths;
    }
    let len = widths.len();
    for (i, width) in measured.into_iter().enumerate() {
        let slot = &mut widths[i % len];
        if width > *slot {
            *slot = width;
        }
    }
    widths
}
