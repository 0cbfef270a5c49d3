//! Shared fixtures for integration tests.

use memstore_core::{DataLoader, LayoutKind, MemoryLoader, Table, TableConfig};

/// Every layout the engine offers, with the indexed layout keyed on each query column.
pub fn layout_kinds() -> Vec<LayoutKind> {
    let mut kinds = vec![LayoutKind::Row, LayoutKind::Column, LayoutKind::Custom];
    for index_column in 0..memstore_core::table::QUERY_COLUMNS {
        kinds.push(LayoutKind::IndexedRow { index_column });
    }
    kinds
}

/// Loads one table per layout from the same loader.
pub fn load_all(loader: &dyn DataLoader) -> anyhow::Result<Vec<(LayoutKind, Box<dyn Table>)>> {
    let mut tables = Vec::new();
    for kind in layout_kinds() {
        let table = TableConfig::new(kind).load_table(loader)?;
        tables.push((kind, table));
    }
    Ok(tables)
}

/// The 3x4 table used throughout the query examples.
pub fn example_loader() -> MemoryLoader {
    MemoryLoader::from_values(
        4,
        &[vec![5, 10, 2, 1], vec![3, 1, 9, 0], vec![8, 4, 0, 7]],
    )
}

/// Reads the full logical contents of a table.
pub fn snapshot(table: &dyn Table) -> anyhow::Result<Vec<Vec<i32>>> {
    let mut rows = Vec::with_capacity(table.num_rows());
    for row in 0..table.num_rows() {
        let mut fields = Vec::with_capacity(table.num_cols());
        for col in 0..table.num_cols() {
            fields.push(table.get_int_field(row, col)?);
        }
        rows.push(fields);
    }
    Ok(rows)
}
