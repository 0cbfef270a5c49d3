//! Worked query examples through the public API.

use memstore_core::table::scan;
use memstore_core::{
    CustomTable, IndexedRowTable, LayoutKind, MemoryLoader, RandomizedLoader, Table, TableConfig,
    TableError,
};

use super::helpers::{example_loader, load_all, snapshot};

#[test]
fn test_example_table() -> anyhow::Result<()> {
    for (kind, mut table) in load_all(&example_loader())? {
        assert_eq!(table.column_sum(), 16, "{:?}", kind);
        // col1 > 2 AND col2 < 5 keeps rows 0 and 2
        assert_eq!(table.predicated_column_sum(2, 5), 13, "{:?}", kind);
        // col0 > 4 keeps rows 0 and 2
        assert_eq!(table.predicated_all_columns_sum(4), 37, "{:?}", kind);
        // col0 < 6 updates rows 0 and 1
        assert_eq!(table.predicated_update(6), 2, "{:?}", kind);

        assert_eq!(
            snapshot(table.as_ref())?,
            vec![vec![5, 10, 2, 3], vec![3, 1, 9, 9], vec![8, 4, 0, 7]],
            "{:?}",
            kind
        );
        assert_eq!(table.predicated_all_columns_sum(4), 39, "{:?}", kind);
    }
    Ok(())
}

#[test]
fn test_repeated_updates_accumulate() -> anyhow::Result<()> {
    for (kind, mut table) in load_all(&example_loader())? {
        for _ in 0..3 {
            assert_eq!(table.predicated_update(6), 2, "{:?}", kind);
        }
        assert_eq!(table.get_int_field(0, 3)?, 1 + 3 * 2, "{:?}", kind);
        assert_eq!(table.get_int_field(1, 3)?, 3 * 9, "{:?}", kind);
        assert_eq!(table.get_int_field(2, 3)?, 7, "{:?}", kind);
    }
    Ok(())
}

#[test]
fn test_column_sum_tracks_writes() -> anyhow::Result<()> {
    let loader = RandomizedLoader::new(5, 64, 8, 1000);
    for (kind, mut table) in load_all(&loader)? {
        for row in (0..64).step_by(3) {
            table.put_int_field(row, 0, -(row as i32))?;
        }
        let expected: i64 = (0..64)
            .map(|row| table.get_int_field(row, 0).map(i64::from))
            .sum::<Result<i64, TableError>>()?;
        assert_eq!(table.column_sum(), expected, "{:?}", kind);
    }
    Ok(())
}

#[test]
fn test_config_from_json_selects_layout() -> anyhow::Result<()> {
    let config = TableConfig::from_json(r#"{"layout": {"kind": "indexed_row", "index_column": 1}}"#)?;
    assert_eq!(config.layout, LayoutKind::IndexedRow { index_column: 1 });

    let table = config.load_table(&example_loader())?;
    assert_eq!(table.predicated_column_sum(2, 5), 13);
    Ok(())
}

#[test]
fn test_failed_load_yields_no_table() {
    let loader = MemoryLoader::from_values(4, &[vec![1, 2, 3, 4], vec![5, 6]]);
    for kind in super::helpers::layout_kinds() {
        let result = TableConfig::new(kind).load_table(&loader);
        assert!(
            matches!(result, Err(TableError::MalformedRow { row: 1, .. })),
            "{:?}",
            kind
        );
    }
}

#[test]
fn test_index_and_aggregate_introspection() -> anyhow::Result<()> {
    let loader = example_loader();

    let indexed = IndexedRowTable::load(&loader, 1)?;
    assert_eq!(indexed.distinct_values(), 3);
    assert_eq!(indexed.rows_with_value(10), &[0]);
    let keys: Vec<i32> = indexed.index_entries().map(|(value, _)| value).collect();
    assert_eq!(keys, vec![1, 4, 10]);

    let custom = CustomTable::load(&loader)?;
    for row in 0..3 {
        assert_eq!(custom.row_sum(row), Some(scan::row_total(&custom, row)));
    }
    Ok(())
}
