//! Row-major table with a sorted secondary index on one column.
//!
//! The index maps each distinct value of `index_column` to the ids of the
//! rows currently holding it. Queries whose predicate or aggregate targets
//! the indexed column walk only the matching key range; everything else
//! falls back to the canonical scan.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use crate::error::Result;
use crate::loader::DataLoader;
use crate::storage::Layout;

use super::scan;
use super::store::FieldStore;
use super::validation;
use super::Table;

/// Row-major table plus a `value -> row ids` index on `index_column`.
///
/// Invariant: every row id appears in exactly one bucket, the one keyed by
/// its current `index_column` value, and no bucket is empty.
#[derive(Debug, Clone)]
pub struct IndexedRowTable {
    store: FieldStore,
    index_column: usize,
    index: BTreeMap<i32, Vec<usize>>,
}

impl IndexedRowTable {
    /// Loads all rows from `loader` and builds the index on `index_column`.
    pub fn load(loader: &dyn DataLoader, index_column: usize) -> Result<Self> {
        Self::load_with_limit(loader, index_column, usize::MAX)
    }

    /// Like [`load`](Self::load), refusing buffers larger than `max_buffer_size` bytes.
    pub fn load_with_limit(
        loader: &dyn DataLoader,
        index_column: usize,
        max_buffer_size: usize,
    ) -> Result<Self> {
        validation::validate_index_column(index_column, loader.num_cols())?;
        let store = FieldStore::load(loader, Layout::RowMajor, max_buffer_size)?;

        let mut index: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for row in 0..store.num_rows() {
            index
                .entry(store.get(row, index_column))
                .or_default()
                .push(row);
        }

        tracing::debug!(
            "Loaded indexed row table: {} rows x {} cols, {} distinct keys on column {}",
            store.num_rows(),
            store.num_cols(),
            index.len(),
            index_column
        );

        Ok(Self {
            store,
            index_column,
            index,
        })
    }

    /// Column the index is keyed on.
    pub fn index_column(&self) -> usize {
        self.index_column
    }

    /// Ids of rows whose indexed column currently equals `value`.
    pub fn rows_with_value(&self, value: i32) -> &[usize] {
        self.index.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct values in the indexed column.
    pub fn distinct_values(&self) -> usize {
        self.index.len()
    }

    /// Index buckets in ascending key order.
    pub fn index_entries(&self) -> impl Iterator<Item = (i32, &[usize])> + '_ {
        self.index.iter().map(|(&value, rows)| (value, rows.as_slice()))
    }

    fn unindex(&mut self, value: i32, row: usize) {
        if let Entry::Occupied(mut bucket) = self.index.entry(value) {
            let rows = bucket.get_mut();
            if let Some(pos) = rows.iter().position(|&r| r == row) {
                rows.swap_remove(pos);
            }
            if rows.is_empty() {
                bucket.remove();
            }
        }
    }
}

impl Table for IndexedRowTable {
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
        if col == self.index_column {
            // Reading first also enforces the bounds check before the index is touched.
            let old = self.store.get(row, col);
            if old != value {
                self.unindex(old, row);
                self.index.entry(value).or_default().push(row);
            }
        }
        self.store.set(row, col, value);
    }

    fn column_sum(&self) -> i64 {
        if self.index_column != 0 {
            return scan::column_sum(self);
        }
        tracing::trace!("column_sum via index");
        self.index
            .iter()
            .map(|(&value, rows)| i64::from(value) * rows.len() as i64)
            .sum()
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        match self.index_column {
            1 => {
                tracing::trace!("predicated_column_sum via index range col1 > {}", threshold1);
                self.index
                    .range((Excluded(threshold1), Unbounded))
                    .flat_map(|(_, rows)| rows.iter().copied())
                    .filter(|&row| self.store.get(row, 2) < threshold2)
                    .map(|row| i64::from(self.store.get(row, 0)))
                    .sum()
            }
            2 => {
                tracing::trace!("predicated_column_sum via index range col2 < {}", threshold2);
                self.index
                    .range(..threshold2)
                    .flat_map(|(_, rows)| rows.iter().copied())
                    .filter(|&row| self.store.get(row, 1) > threshold1)
                    .map(|row| i64::from(self.store.get(row, 0)))
                    .sum()
            }
            _ => scan::predicated_column_sum(self, threshold1, threshold2),
        }
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        if self.index_column != 0 {
            return scan::predicated_all_columns_sum(self, threshold);
        }
        tracing::trace!("predicated_all_columns_sum via index range col0 > {}", threshold);
        self.index
            .range((Excluded(threshold), Unbounded))
            .flat_map(|(_, rows)| rows.iter().copied())
            .map(|row| scan::row_total(self, row))
            .sum()
    }

    fn predicated_update(&mut self, threshold: i32) -> usize {
        if self.index_column != 0 {
            return scan::predicated_update(self, threshold);
        }
        tracing::trace!("predicated_update via index range col0 < {}", threshold);
        // col3 is written, never col0, so the range stays valid; collected to release the borrow.
        let rows: Vec<usize> = self
            .index
            .range(..threshold)
            .flat_map(|(_, rows)| rows.iter().copied())
            .collect();
        for &row in &rows {
            scan::update_row(self, row);
        }
        rows.len()
    }
}
