//! Common imports for building grids.

pub use crate::config::GridConfig;
pub use crate::driver::GridDriver;
pub use crate::error::{GridError, InteropError};
pub use crate::grid::{
    CellValue, ColumnConfiguration, ColumnDefinition, ColumnType, GroupedOrderedData, Grid,
    GridParams, Measurement, RenderMode, Rendered, TextColorSpec, TextValue,
};
pub use crate::icon::{IconFoundry, IconSpec, MaterialTheme};
pub use crate::interop::{GridInterop, MonospaceMetrics};

pub use webdom::{Color, Element};
