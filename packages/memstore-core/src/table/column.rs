//! Column-major table without auxiliary structures.

use crate::error::Result;
use crate::loader::DataLoader;
use crate::storage::Layout;

use super::store::FieldStore;
use super::Table;

/// Column-major layout: `col 0 | col 1 | ... | col m`.
///
/// Single-column scans touch one contiguous region; whole-row reads stride
/// across the buffer.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    store: FieldStore,
}

impl ColumnTable {
    /// Loads all rows from `loader`.
    pub fn load(loader: &dyn DataLoader) -> Result<Self> {
        Self::load_with_limit(loader, usize::MAX)
    }

    /// Loads all rows from `loader`, refusing buffers larger than `max_buffer_size` bytes.
    pub fn load_with_limit(loader: &dyn DataLoader, max_buffer_size: usize) -> Result<Self> {
        let store = FieldStore::load(loader, Layout::ColumnMajor, max_buffer_size)?;
        tracing::debug!(
            "Loaded column table: {} rows x {} cols",
            store.num_rows(),
            store.num_cols()
        );
        Ok(Self { store })
    }
}

impl Table for ColumnTable {
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

    #[inline]
    fn set_field(&mut self, row: usize, col: usize, value: i32) {
        self.store.set(row, col, value);
    }
}
