//! In-memory integer table storage engine.
//!
//! Provides interchangeable physical layouts (row-major, column-major,
//! row-major with a sorted secondary index, and a row-major layout with
//! incrementally maintained aggregates) behind one [`Table`] contract.

pub mod config;
pub mod error;
pub mod loader;
pub mod storage;
pub mod table;

pub use config::{LayoutKind, TableConfig};
pub use error::{Result, TableError};
pub use loader::{DataLoader, MemoryLoader, RandomizedLoader, Row};
pub use table::{ColumnTable, CustomTable, IndexedRowTable, RowTable, Table};
