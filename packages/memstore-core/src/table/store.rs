//! Field storage shared by every layout: one buffer plus its addressing scheme.

use crate::error::Result;
use crate::loader::DataLoader;
use crate::storage::{buffer_len, Layout, TableBuffer};

use super::validation;

/// Fixed-size field matrix backed by a single [`TableBuffer`].
#[derive(Debug, Clone)]
pub(crate) struct FieldStore {
    buffer: TableBuffer,
    layout: Layout,
    num_rows: usize,
    num_cols: usize,
}

impl FieldStore {
    /// Copies every row handed over by `loader` into a freshly allocated buffer.
    ///
    /// Either the whole table is built or an error is returned; no partially
    /// filled store escapes.
    ///
    /// # Arguments
    /// * `loader` - Source of `num_cols` and the row tuples
    /// * `layout` - Addressing scheme for the buffer
    /// * `max_buffer_size` - Upper bound on the buffer size in bytes
    pub(crate) fn load(
        loader: &dyn DataLoader,
        layout: Layout,
        max_buffer_size: usize,
    ) -> Result<Self> {
        let result = Self::try_load(loader, layout, max_buffer_size);
        if let Err(e) = &result {
            tracing::warn!("Rejected {:?} table load: {}", layout, e);
        }
        result
    }

    fn try_load(loader: &dyn DataLoader, layout: Layout, max_buffer_size: usize) -> Result<Self> {
        let num_cols = loader.num_cols();
        validation::validate_num_cols(num_cols)?;

        let rows = loader.rows()?;
        validation::validate_rows(&rows, num_cols)?;

        let num_rows = rows.len();
        let len = buffer_len(num_rows, num_cols)?;
        validation::validate_buffer_size(len, max_buffer_size)?;

        let mut buffer = TableBuffer::try_zeroed(len)?;
        for (row_id, row) in rows.iter().enumerate() {
            for col in 0..num_cols {
                buffer.write_int(layout.offset(row_id, col, num_rows, num_cols), row.field(col));
            }
        }

        Ok(Self {
            buffer,
            layout,
            num_rows,
            num_cols,
        })
    }

    #[inline]
    pub(crate) fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub(crate) fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Reads field `(row, col)`.
    ///
    /// # Panics
    /// Panics on out-of-range coordinates. In column-major order an
    /// out-of-range row would otherwise alias a field of the next column.
    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.num_rows && col < self.num_cols, "field ({row}, {col}) out of bounds");
        self.buffer
            .read_int(self.layout.offset(row, col, self.num_rows, self.num_cols))
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: i32) {
        assert!(row < self.num_rows && col < self.num_cols, "field ({row}, {col}) out of bounds");
        let offset = self.layout.offset(row, col, self.num_rows, self.num_cols);
        self.buffer.write_int(offset, value);
    }
}
