//! Table error types.

use thiserror::Error;

/// Table operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Row index outside `[0, num_rows)`
    #[error("Row {row} out of bounds (num_rows: {num_rows})")]
    RowOutOfBounds { row: usize, num_rows: usize },

    /// Column index outside `[0, num_cols)`
    #[error("Column {col} out of bounds (num_cols: {num_cols})")]
    ColumnOutOfBounds { col: usize, num_cols: usize },

    /// Row tuple handed over by a loader has the wrong width
    #[error("Malformed row {row}: expected {expected} bytes, got {got}")]
    MalformedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Table is too narrow for the fixed query set
    #[error("Table needs at least {required} columns, loader supplied {got}")]
    TooFewColumns { required: usize, got: usize },

    /// Index column does not exist in the table
    #[error("Index column {col} out of bounds (num_cols: {num_cols})")]
    InvalidIndexColumn { col: usize, num_cols: usize },

    /// Capacity calculation overflow
    #[error("Capacity overflow during {operation}")]
    CapacityOverflow { operation: &'static str },

    /// Buffer would exceed the configured size limit
    #[error("Memory limit exceeded: requested {requested} bytes, limit {limit} bytes")]
    MemoryLimitExceeded { requested: usize, limit: usize },

    /// Buffer allocation failed
    #[error("Allocation of {requested} bytes failed")]
    AllocationFailed { requested: usize },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
