//! Row-major table without auxiliary structures.

use crate::error::Result;
use crate::loader::DataLoader;
use crate::storage::Layout;

use super::store::FieldStore;
use super::Table;

/// Row-major layout: `row 0 | row 1 | ... | row n`.
///
/// Every query is a linear scan; this is the baseline the other layouts
/// are measured against.
#[derive(Debug, Clone)]
pub struct RowTable {
    store: FieldStore,
}

impl RowTable {
    /// Loads all rows from `loader`.
    pub fn load(loader: &dyn DataLoader) -> Result<Self> {
        Self::load_with_limit(loader, usize::MAX)
    }

    /// Loads all rows from `loader`, refusing buffers larger than `max_buffer_size` bytes.
    pub fn load_with_limit(loader: &dyn DataLoader, max_buffer_size: usize) -> Result<Self> {
        let store = FieldStore::load(loader, Layout::RowMajor, max_buffer_size)?;
        tracing::debug!(
            "Loaded row table: {} rows x {} cols",
            store.num_rows(),
            store.num_cols()
        );
        Ok(Self { store })
    }
}

impl Table for RowTable {
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
