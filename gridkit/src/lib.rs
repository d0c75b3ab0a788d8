//! Measured data grid engine.
//!
//! Renders grouped, keyed rows into table markup with content-hash change
//! detection and a placeholder-then-full render protocol that lets column
//! widths be measured from the data before the table is shown.

pub mod config;
pub mod driver;
pub mod error;
pub mod fingerprint;
pub mod format;
pub mod grid;
pub mod icon;
pub mod interop;
pub mod prelude;

pub use config::GridConfig;
pub use driver::GridDriver;
pub use error::{GridError, InteropError};
pub use grid::{
    CellValue, ColumnConfiguration, ColumnDefinition, ColumnType, Grid, GridParams, Measurement,
    RenderMode, Rendered, TextColorSpec, TextValue,
};
pub use icon::{IconFoundry, IconSpec, MaterialTheme};
pub use interop::{GridInterop, JsGridInterop, JsRuntime, MonospaceMetrics};
