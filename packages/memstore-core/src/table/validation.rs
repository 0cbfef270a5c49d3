//! Validation of loader input and field coordinates.

use crate::error::{Result, TableError};
use crate::loader::Row;
use crate::storage::FIELD_LEN;

/// Columns addressed by the fixed query set (col0 through col3).
pub const QUERY_COLUMNS: usize = 4;

/// Validates that the table is wide enough for the query set.
pub(crate) fn validate_num_cols(num_cols: usize) -> Result<()> {
    if num_cols < QUERY_COLUMNS {
        return Err(TableError::TooFewColumns {
            required: QUERY_COLUMNS,
            got: num_cols,
        });
    }
    Ok(())
}

/// Validates that an index column exists.
pub(crate) fn validate_index_column(col: usize, num_cols: usize) -> Result<()> {
    if col >= num_cols {
        return Err(TableError::InvalidIndexColumn { col, num_cols });
    }
    Ok(())
}

/// Validates that every row tuple has exactly `num_cols` fields.
///
/// # Arguments
/// * `rows` - Row tuples in load order
/// * `num_cols` - Column count announced by the loader
pub(crate) fn validate_rows(rows: &[Row], num_cols: usize) -> Result<()> {
    let expected = num_cols
        .checked_mul(FIELD_LEN)
        .ok_or(TableError::CapacityOverflow {
            operation: "row width calculation",
        })?;

    for (row, tuple) in rows.iter().enumerate() {
        let got = tuple.as_bytes().len();
        if got != expected {
            return Err(TableError::MalformedRow { row, expected, got });
        }
    }
    Ok(())
}

/// Enforces the configured buffer size limit.
pub(crate) fn validate_buffer_size(requested: usize, limit: usize) -> Result<()> {
    if requested > limit {
        return Err(TableError::MemoryLimitExceeded { requested, limit });
    }
    Ok(())
}

/// Checks that `(row, col)` lies within `[0, num_rows) x [0, num_cols)`.
#[inline]
pub(crate) fn check_bounds(row: usize, col: usize, num_rows: usize, num_cols: usize) -> Result<()> {
    if row >= num_rows {
        return Err(TableError::RowOutOfBounds { row, num_rows });
    }
    if col >= num_cols {
        return Err(TableError::ColumnOutOfBounds { col, num_cols });
    }
    Ok(())
}
