//! Measurement coordinator for fit-to-data sizing.

use crate::config::GridConfig;
use crate::error::{GridError, InteropError};
use crate::format::format_value;
use crate::interop::GridInterop;

use super::cell::CellValue;
use super::params::GridParams;

/// Result of one measurement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured {
    pub widths: Vec<f32>,
    pub scrollbar_width: f32,
}

/// Header titles in column order.
pub fn header_texts<T>(params: &GridParams<T>) -> Vec<String> {
    params.columns.iter().map(|c| c.title.clone()).collect()
}

/// Display strings for every row and column, row-major in display order.
///
/// Icon cells and suppressed text-colour cells contribute an empty string so
/// their width is driven by the title.
pub fn body_texts<T>(params: &GridParams<T>) -> Result<Vec<String>, GridError> {
    let mut texts = Vec::with_capacity(params.row_count() * params.columns.len());
    for (_, rows) in &params.data {
        for (_, row) in rows {
            for column in &params.columns {
                let text = match column.extract(row)? {
                    Some(CellValue::Text(value)) => format_value(&value, column.format.as_deref())?,
                    Some(CellValue::TextColor(spec)) if !spec.suppress => spec.text,
                    _ => String::new(),
                };
                texts.push(text);
            }
        }
    }
    Ok(texts)
}

/// Measure header and body text and merge into `current`.
///
/// The scrollbar width is queried and then deliberately zeroed; header
/// padding for the scrollbar is disabled.
pub async fn measure_widths<T>(
    params: &GridParams<T>,
    current: &[f32],
    interop: &dyn GridInterop,
    config: &GridConfig,
) -> Result<Measured, GridError> {
    let log_id = &params.log_identification;
    let header = header_texts(params);
    let body = body_texts(params)?;

    let queried = interop.scrollbar_width(&config.body_container_class).await?;
    log::trace!("[{log_id}] scrollbar width {queried}px not applied");
    let scrollbar_width = 0.0;

    let widths = interop
        .text_widths(&config.header_measure_class, current, &header)
        .await?;
    let widths = checked_merge(current, widths)?;

    log::debug!(
        "[{log_id}] measuring {} strings with a total size of {} bytes",
        body.len(),
        body.iter().map(String::len).sum::<usize>()
    );

    let measured = interop
        .text_widths(&config.body_measure_class, &widths, &body)
        .await?;
    let mut widths = checked_merge(&widths, measured)?;

    for width in &mut widths {
        *width += config.width_slack;
    }

    Ok(Measured {
        widths,
        scrollbar_width,
    })
}

/// Take the larger of the sent and returned width for each column.
fn checked_merge(sent: &[f32], returned: Vec<f32>) -> Result<Vec<f32>, InteropError> {
    if returned.len() != sent.len() {
        return Err(InteropError::LengthMismatch {
            expected: sent.len(),
            actual: returned.len(),
        });
    }
    Ok(sent
        .iter()
        .zip(returned)
        .map(|(sent, returned)| sent.max(returned))
        .collect())
}
