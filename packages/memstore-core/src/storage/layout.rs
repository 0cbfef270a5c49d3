use super::buffer::FIELD_LEN;
use crate::error::{Result, TableError};

/// Physical arrangement of fields inside a [`TableBuffer`](super::TableBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `row 0 | row 1 | ... | row n`
    RowMajor,
    /// `col 0 | col 1 | ... | col m`
    ColumnMajor,
}

impl Layout {
    /// Byte offset of field `(row, col)`.
    #[inline]
    pub fn offset(self, row: usize, col: usize, num_rows: usize, num_cols: usize) -> usize {
        match self {
            Layout::RowMajor => (row * num_cols + col) * FIELD_LEN,
            Layout::ColumnMajor => (col * num_rows + row) * FIELD_LEN,
        }
    }
}

/// Computes the buffer size in bytes for a `num_rows x num_cols` table.
pub fn buffer_len(num_rows: usize, num_cols: usize) -> Result<usize> {
    num_rows
        .checked_mul(num_cols)
        .and_then(|fields| fields.checked_mul(FIELD_LEN))
        .ok_or(TableError::CapacityOverflow {
            operation: "buffer size calculation",
        })
}
