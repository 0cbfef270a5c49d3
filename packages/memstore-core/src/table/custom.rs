//! Row-major table tuned for a column-0 heavy query mix.

use crate::error::Result;
use crate::loader::DataLoader;
use crate::storage::Layout;

use super::store::FieldStore;
use super::Table;

/// Row-major table that maintains two aggregates instead of an index:
/// the sum of every row and the sum of column 0.
///
/// Both aggregates are adjusted by the delta of each write, never rebuilt by
/// scanning. `column_sum` is O(1) and `predicated_all_columns_sum` reads one
/// precomputed total per qualifying row. Predicates on columns 1 and 2 get no
/// help and scan.
#[derive(Debug, Clone)]
pub struct CustomTable {
    store: FieldStore,
    row_sums: Vec<i64>,
    col0_sum: i64,
}

impl CustomTable {
    /// Loads all rows from `loader` and computes the initial aggregates.
    pub fn load(loader: &dyn DataLoader) -> Result<Self> {
        Self::load_with_limit(loader, usize::MAX)
    }

    /// Like [`load`](Self::load), refusing buffers larger than `max_buffer_size` bytes.
    pub fn load_with_limit(loader: &dyn DataLoader, max_buffer_size: usize) -> Result<Self> {
        let store = FieldStore::load(loader, Layout::RowMajor, max_buffer_size)?;

        let mut row_sums: Vec<i64> = Vec::with_capacity(store.num_rows());
        let mut col0_sum = 0i64;
        for row in 0..store.num_rows() {
            let sum: i64 = (0..store.num_cols())
                .map(|col| i64::from(store.get(row, col)))
                .sum();
            row_sums.push(sum);
            col0_sum += i64::from(store.get(row, 0));
        }

        tracing::debug!(
            "Loaded custom table: {} rows x {} cols",
            store.num_rows(),
            store.num_cols()
        );

        Ok(Self {
            store,
            row_sums,
            col0_sum,
        })
    }

    /// Maintained sum of every field in `row`, or `None` if the row does not exist.
    pub fn row_sum(&self, row: usize) -> Option<i64> {
        self.row_sums.get(row).copied()
    }
}

impl Table for CustomTable {
    fn num_rows(&self) -> usize {
        self.store.num_rows()
    }

    fn num_cols(&self) -> usize {
        self.store.num_cols()
    }

    #[inline]
    fn field(&self, row: usize, col: usize) -> i32 {
        self.store.get(row, col)
    }

    fn set_field(&mut self, row: usize, col: usize, value: i32) {
        let old = self.store.get(row, col);
        if old == value {
            return;
        }
        let delta = i64::from(value) - i64::from(old);
        self.row_sums[row] += delta;
        if col == 0 {
            self.col0_sum += delta;
        }
        self.store.set(row, col, value);
    }

    fn column_sum(&self) -> i64 {
        self.col0_sum
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        (0..self.store.num_rows())
            .filter(|&row| self.store.get(row, 0) > threshold)
            .map(|row| self.row_sums[row])
            .sum()
    }
}
