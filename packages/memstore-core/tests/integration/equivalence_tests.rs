//! Cross-layout equivalence: every layout answers every query exactly like a
//! brute-force scan, at every point of an arbitrary mutation sequence.

use proptest::prelude::*;

use memstore_core::table::scan;
use memstore_core::{MemoryLoader, RowTable, Table};

use super::helpers::{load_all, snapshot};

#[derive(Debug, Clone)]
enum Op {
    Put { row: usize, col: usize, value: i32 },
    /// Rewrites a field with its current value.
    Rewrite { row: usize, col: usize },
    Update { threshold: i32 },
    Query { threshold1: i32, threshold2: i32 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<usize>(), any::<usize>(), -20i32..20)
            .prop_map(|(row, col, value)| Op::Put { row, col, value }),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(row, col)| Op::Rewrite { row, col }),
        1 => (-20i32..20).prop_map(|threshold| Op::Update { threshold }),
        2 => (-20i32..20, -20i32..20)
            .prop_map(|(threshold1, threshold2)| Op::Query { threshold1, threshold2 }),
    ]
}

fn table_strategy() -> impl Strategy<Value = (usize, Vec<Vec<i32>>)> {
    (4usize..7).prop_flat_map(|num_cols| {
        (
            Just(num_cols),
            prop::collection::vec(prop::collection::vec(-20i32..20, num_cols), 0..30),
        )
    })
}

fn assert_queries_match(
    reference: &RowTable,
    table: &dyn Table,
    threshold1: i32,
    threshold2: i32,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(table.column_sum(), scan::column_sum(reference));
    prop_assert_eq!(
        table.predicated_column_sum(threshold1, threshold2),
        scan::predicated_column_sum(reference, threshold1, threshold2)
    );
    prop_assert_eq!(
        table.predicated_all_columns_sum(threshold1),
        scan::predicated_all_columns_sum(reference, threshold1)
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn layouts_agree_under_mutation(
        (num_cols, rows) in table_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let loader = MemoryLoader::from_values(num_cols, &rows);
        let mut reference = RowTable::load(&loader).unwrap();
        let mut tables = load_all(&loader).unwrap();
        let num_rows = rows.len();

        for op in ops {
            match op {
                Op::Put { row, col, value } if num_rows > 0 => {
                    let (row, col) = (row % num_rows, col % num_cols);
                    reference.put_int_field(row, col, value).unwrap();
                    for (_, table) in tables.iter_mut() {
                        table.put_int_field(row, col, value).unwrap();
                        prop_assert_eq!(table.get_int_field(row, col).unwrap(), value);
                    }
                }
                Op::Rewrite { row, col } if num_rows > 0 => {
                    let (row, col) = (row % num_rows, col % num_cols);
                    for (_, table) in tables.iter_mut() {
                        let current = table.get_int_field(row, col).unwrap();
                        table.put_int_field(row, col, current).unwrap();
                    }
                }
                Op::Update { threshold } => {
                    let expected = scan::predicated_update(&mut reference, threshold);
                    for (kind, table) in tables.iter_mut() {
                        prop_assert_eq!(table.predicated_update(threshold), expected, "{:?}", kind);
                    }
                }
                Op::Query { threshold1, threshold2 } => {
                    for (_, table) in tables.iter() {
                        assert_queries_match(&reference, table.as_ref(), threshold1, threshold2)?;
                    }
                }
                _ => {}
            }

            for (_, table) in tables.iter() {
                assert_queries_match(&reference, table.as_ref(), 0, 0)?;
            }
        }

        let expected = snapshot(&reference).unwrap();
        for (kind, table) in tables.iter() {
            prop_assert_eq!(&snapshot(table.as_ref()).unwrap(), &expected, "{:?}", kind);
        }
    }
}
