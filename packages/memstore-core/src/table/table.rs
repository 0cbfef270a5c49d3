//! The contract every physical layout implements.
//!
//! All layouts expose the same logical `num_rows x num_cols` matrix of `i32`
//! fields. Query methods default to the canonical scans in [`scan`](super::scan);
//! a layout overrides one only to take a faster path that yields the same answer.
//!
//! Tables are not internally synchronised. Every mutation takes `&mut self`,
//! so callers sharing a table across threads must provide their own locking.

use crate::error::Result;

use super::scan;
use super::validation;

/// Shared contract of all table layouts.
pub trait Table {
    /// Number of rows, fixed at load.
    fn num_rows(&self) -> usize;

    /// Number of columns, fixed at load.
    fn num_cols(&self) -> usize;

    /// Reads field `(row, col)` without a recoverable bounds check.
    ///
    /// # Panics
    /// Panics if the coordinates are out of range.
    fn field(&self, row: usize, col: usize) -> i32;

    /// Overwrites field `(row, col)`, keeping index and aggregate state
    /// consistent before returning.
    ///
    /// # Panics
    /// Panics if the coordinates are out of range. No state is modified in
    /// that case.
    fn set_field(&mut self, row: usize, col: usize, value: i32);

    /// Returns the value of field `(row, col)`.
    ///
    /// # Returns
    /// `Err(RowOutOfBounds)` or `Err(ColumnOutOfBounds)` for coordinates
    /// outside the table.
    fn get_int_field(&self, row: usize, col: usize) -> Result<i32> {
        validation::check_bounds(row, col, self.num_rows(), self.num_cols())?;
        Ok(self.field(row, col))
    }

    /// Replaces the value of field `(row, col)`.
    ///
    /// Out-of-range coordinates fail before any state is touched.
    fn put_int_field(&mut self, row: usize, col: usize, value: i32) -> Result<()> {
        validation::check_bounds(row, col, self.num_rows(), self.num_cols())?;
        self.set_field(row, col, value);
        Ok(())
    }

    /// `SELECT SUM(col0) FROM table`
    fn column_sum(&self) -> i64 {
        scan::column_sum(self)
    }

    /// `SELECT SUM(col0) FROM table WHERE col1 > threshold1 AND col2 < threshold2`
    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        scan::predicated_column_sum(self, threshold1, threshold2)
    }

    /// `SELECT SUM(col0) + ... + SUM(coln) FROM table WHERE col0 > threshold`
    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        scan::predicated_all_columns_sum(self, threshold)
    }

    /// `UPDATE table SET col3 = col3 + col2 WHERE col0 < threshold`
    ///
    /// Returns the number of rows updated.
    fn predicated_update(&mut self, threshold: i32) -> usize {
        scan::predicated_update(self, threshold)
    }
}
