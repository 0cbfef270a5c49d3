//! TableBuffer - a fixed-size `Vec<u8>` holding every integer field of a table.
//!
//! The buffer is allocated once at load time and never grows or shrinks;
//! row and column counts are fixed for the lifetime of a table.

use std::ops::Deref;

use crate::error::{Result, TableError};

/// Width in bytes of one integer field.
pub const FIELD_LEN: usize = 4;

/// A storage buffer wrapping `Vec<u8>` for table fields.
///
/// Fields are stored as little-endian `i32` slots addressed by byte offset.
/// The offset scheme (row-major or column-major) belongs to the owning table,
/// see [`Layout`](super::Layout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBuffer {
    data: Vec<u8>,
}

impl TableBuffer {
    /// Creates a buffer of `len` zeroed bytes.
    pub fn new_zeroed(len: usize) -> Self {
        Self { data: vec![0; len] }
    }

    /// Attempts to create a zeroed buffer of `len` bytes.
    ///
    /// Returns `Err` instead of aborting when the allocation cannot be satisfied.
    pub fn try_zeroed(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| TableError::AllocationFailed { requested: len })?;
        data.resize(len, 0);
        Ok(Self { data })
    }

    /// Returns the length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a slice view of the buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Reads the integer field starting at byte `offset`.
    ///
    /// # Panics
    /// Panics if `offset + FIELD_LEN` exceeds the buffer length.
    #[inline]
    pub fn read_int(&self, offset: usize) -> i32 {
        let mut bytes = [0u8; FIELD_LEN];
        bytes.copy_from_slice(&self.data[offset..offset + FIELD_LEN]);
        i32::from_le_bytes(bytes)
    }

    /// Overwrites the integer field starting at byte `offset`.
    ///
    /// # Panics
    /// Panics if `offset + FIELD_LEN` exceeds the buffer length.
    #[inline]
    pub fn write_int(&mut self, offset: usize, value: i32) {
        self.data[offset..offset + FIELD_LEN].copy_from_slice(&value.to_le_bytes());
    }
}

impl Deref for TableBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
