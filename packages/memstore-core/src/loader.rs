//! Loader collaborators that supply the initial table contents.
//!
//! A loader hands over `num_cols` and an ordered sequence of row tuples.
//! Each tuple stores its fields as little-endian `i32` values at
//! [`FIELD_LEN`]-byte strides. Row identifiers are assigned by position.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, TableError};
use crate::storage::FIELD_LEN;

/// One row tuple as raw field bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    bytes: Vec<u8>,
}

impl Row {
    /// Encodes `fields` into a row tuple.
    pub fn from_fields(fields: &[i32]) -> Self {
        let mut bytes = Vec::with_capacity(fields.len() * FIELD_LEN);
        for field in fields {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        Self { bytes }
    }

    /// Wraps already encoded field bytes.
    ///
    /// The length is not validated here; tables reject rows whose width
    /// does not match the loader's column count.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Number of complete fields in the tuple.
    pub fn num_fields(&self) -> usize {
        self.bytes.len() / FIELD_LEN
    }

    /// Reads field `col`.
    ///
    /// # Panics
    /// Panics if `col >= self.num_fields()`.
    pub fn field(&self, col: usize) -> i32 {
        let start = col * FIELD_LEN;
        let mut bytes = [0u8; FIELD_LEN];
        bytes.copy_from_slice(&self.bytes[start..start + FIELD_LEN]);
        i32::from_le_bytes(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Source of the initial table state.
pub trait DataLoader {
    /// Number of columns every row carries.
    fn num_cols(&self) -> usize;

    /// Returns all rows in table order.
    fn rows(&self) -> Result<Vec<Row>>;
}

/// Loader over rows already held in memory.
#[derive(Debug, Clone)]
pub struct MemoryLoader {
    num_cols: usize,
    rows: Vec<Row>,
}

impl MemoryLoader {
    pub fn new(num_cols: usize, rows: Vec<Row>) -> Self {
        Self { num_cols, rows }
    }

    /// Builds a loader from plain integer tuples.
    pub fn from_values(num_cols: usize, rows: &[Vec<i32>]) -> Self {
        Self {
            num_cols,
            rows: rows.iter().map(|r| Row::from_fields(r)).collect(),
        }
    }
}

impl DataLoader for MemoryLoader {
    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn rows(&self) -> Result<Vec<Row>> {
        Ok(self.rows.clone())
    }
}

/// Generates a deterministic pseudo-random table.
///
/// Every field is drawn uniformly from `0..max_value`; the same seed always
/// yields the same rows.
#[derive(Debug, Clone, Copy)]
pub struct RandomizedLoader {
    pub seed: u64,
    pub num_rows: usize,
    pub num_cols: usize,
    pub max_value: i32,
}

impl RandomizedLoader {
    pub fn new(seed: u64, num_rows: usize, num_cols: usize, max_value: i32) -> Self {
        Self {
            seed,
            num_rows,
            num_cols,
            max_value,
        }
    }
}

impl DataLoader for RandomizedLoader {
    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn rows(&self) -> Result<Vec<Row>> {
        if self.max_value <= 0 {
            return Err(TableError::Config(format!(
                "max_value must be positive, got {}",
                self.max_value
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut fields = vec![0i32; self.num_cols];
        let rows = (0..self.num_rows)
            .map(|_| {
                for field in fields.iter_mut() {
                    *field = rng.gen_range(0..self.max_value);
                }
                Row::from_fields(&fields)
            })
            .collect();
        Ok(rows)
    }
}
