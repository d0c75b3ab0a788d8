//! Error types

/// Errors raised at the measurement boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InteropError {
    /// No measurement backend is attached.
    #[error("measurement backend unavailable")]
    Unavailable,

    /// A named call failed on the other side.
    #[error("call to {identifier} failed: {message}")]
    Call {
        /// The invoked function name.
        identifier: String,
        /// Failure description reported by the backend.
        message: String,
    },

    /// The backend answered with a value of the wrong shape.
    #[error("could not decode result of {identifier}: {message}")]
    Decode {
        identifier: String,
        message: String,
    },

    /// A width array came back with a different length than was sent.
    #[error("expected {expected} widths, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl InteropError {
    /// Creates a call failure for the given function name.
    pub fn call(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Call {
            identifier: identifier.into(),
            message: message.into(),
        }
    }
}

/// Errors raised by the grid. All of them are fatal for the render attempt
/// that discovered them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Parameters were delivered without any column configuration.
    #[error("grid requires column configuration definitions")]
    MissingColumns,

    /// A column declares a content kind the grid cannot render.
    #[error("column {column:?} has unsupported type {kind:?}")]
    UnknownColumnType { column: String, kind: String },

    /// A data extraction function returned a value that does not fit its
    /// column's content kind.
    #[error("column {column:?} expects {expected} values, got {actual}")]
    MalformedCell {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A format string could not be applied to a value.
    #[error("invalid format {format:?} for value {value:?}")]
    InvalidFormat { format: String, value: String },

    /// A colour in a declarative column could not be parsed.
    #[error(transparent)]
    InvalidColor(#[from] webdom::ParseColorError),

    /// Two rows in the same render share a key.
    #[error("duplicate row key {0:?}")]
    DuplicateRowKey(String),

    /// The width array no longer lines up with the columns.
    #[error("{widths} column widths for {columns} columns")]
    ColumnWidthMismatch { widths: usize, columns: usize },

    /// An operation needed parameters before any were delivered.
    #[error("grid has not received parameters")]
    NotConfigured,

    #[error(transparent)]
    Interop(#[from] InteropError),
}
