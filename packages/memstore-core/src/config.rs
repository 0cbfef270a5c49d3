//! Table configuration: which layout to build and how large it may grow.
//!
//! Supports JSON config strings, environment variable overrides, and defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::loader::DataLoader;
use crate::table::{ColumnTable, CustomTable, IndexedRowTable, RowTable, Table};

/// Physical layout selected for a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutKind {
    /// Row-major, no index
    Row,
    /// Column-major, no index
    Column,
    /// Row-major with a sorted index on `index_column`
    IndexedRow { index_column: usize },
    /// Row-major with row-sum and column-0 aggregates
    Custom,
}

/// Table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Physical layout (default: row-major)
    pub layout: LayoutKind,
    /// Maximum buffer size in bytes (default: unlimited)
    pub max_buffer_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Row,
            max_buffer_size: usize::MAX,
        }
    }
}

impl TableConfig {
    /// Creates a configuration for `layout` with default limits.
    pub fn new(layout: LayoutKind) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Parses configuration from a JSON string. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TableError::Config(format!("Invalid JSON: {}", e)))
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TableError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Applies environment variable overrides.
    ///
    /// - `MEMSTORE_LAYOUT`: `row`, `column`, `indexed` or `custom`
    /// - `MEMSTORE_INDEX_COLUMN`: index column for the indexed layout
    /// - `MEMSTORE_MAX_BUFFER_SIZE`: buffer limit in bytes
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("MEMSTORE_LAYOUT") {
            self.layout = match val.as_str() {
                "row" => LayoutKind::Row,
                "column" => LayoutKind::Column,
                "indexed" => match self.layout {
                    LayoutKind::IndexedRow { .. } => self.layout,
                    _ => LayoutKind::IndexedRow { index_column: 0 },
                },
                "custom" => LayoutKind::Custom,
                other => {
                    return Err(TableError::Config(format!("Invalid layout: {}", other)));
                }
            };
        }
        if let Some(val) = lookup("MEMSTORE_INDEX_COLUMN") {
            let col: usize = val
                .parse()
                .map_err(|_| TableError::Config(format!("Invalid index_column: {}", val)))?;
            match &mut self.layout {
                LayoutKind::IndexedRow { index_column } => *index_column = col,
                _ => {
                    return Err(TableError::Config(
                        "MEMSTORE_INDEX_COLUMN requires the indexed layout".to_string(),
                    ));
                }
            }
        }
        if let Some(val) = lookup("MEMSTORE_MAX_BUFFER_SIZE") {
            self.max_buffer_size = val
                .parse()
                .map_err(|_| TableError::Config(format!("Invalid max_buffer_size: {}", val)))?;
        }
        Ok(())
    }

    /// Loads a table with the configured layout.
    ///
    /// # Returns
    /// `Result<Box<dyn Table>, TableError>` containing the loaded table or the
    /// load error. No table exists on error.
    pub fn load_table(&self, loader: &dyn DataLoader) -> Result<Box<dyn Table>> {
        let limit = self.max_buffer_size;
        let table: Box<dyn Table> = match self.layout {
            LayoutKind::Row => Box::new(RowTable::load_with_limit(loader, limit)?),
            LayoutKind::Column => Box::new(ColumnTable::load_with_limit(loader, limit)?),
            LayoutKind::IndexedRow { index_column } => Box::new(
                IndexedRowTable::load_with_limit(loader, index_column, limit)?,
            ),
            LayoutKind::Custom => Box::new(CustomTable::load_with_limit(loader, limit)?),
        };
        Ok(table)
    }
}
