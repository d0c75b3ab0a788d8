//! Change detection over grid parameters.

use crate::error::GridError;
use crate::fingerprint::{HashCode, combine, identity};
use crate::format::format_value;

use super::cell::CellValue;
use super::params::GridParams;

/// Fingerprint of the configuration part of the parameters.
///
/// The selected key only participates when highlighting is enabled, so
/// selecting a row re-renders exactly when the selection is visible.
pub fn config_fingerprint<T>(params: &GridParams<T>, selected_key: &str) -> Result<HashCode, GridError> {
    let mut columns = Vec::with_capacity(params.columns.len());
    for column in &params.columns {
        column.check_kind()?;
        columns.push(column.config_hash().value());
    }

    let hash = HashCode::of_each(columns.iter())
        .and(&params.class)
        .and(&params.group)
        .and(&params.highlight_selected_row)
        .and(&params.key_expression.as_ref().map(identity))
        .and(&params.measurement)
        .and(&params.obscure_sensitive)
        .and(&params.on_row_click.as_ref().map(identity));

    let hash = if params.highlight_selected_row {
        hash.and(selected_key)
    } else {
        hash
    };

    Ok(hash.and(&params.style).and(&params.suppress_header))
}

/// Fingerprint of the displayed data, in display order.
pub fn data_fingerprint<T>(params: &GridParams<T>) -> Result<HashCode, GridError> {
    let mut hash = HashCode::new();

    for (group, rows) in &params.data {
        hash = hash.and(group);
        for (pair_key, row) in rows {
            hash = hash.and(&params.row_key(pair_key, row));
            for column in &params.columns {
                hash = match column.extract(row)? {
                    None => hash.and(&()),
                    Some(CellValue::Text(value)) => hash
                        .and(&format_value(&value, column.format.as_deref())?)
                        .and(&column.foreground_of(row))
                        .and(&column.background_of(row)),
                    Some(other) => hash.and(&other),
                };
            }
        }
    }

    Ok(hash)
}

/// Combined configuration and data fingerprint.
pub fn fingerprint<T>(params: &GridParams<T>, selected_key: &str) -> Result<i32, GridError> {
    let config = config_fingerprint(params, selected_key)?;
    let data = data_fingerprint(params)?;
    Ok(combine(config.value(), data.value()))
}
