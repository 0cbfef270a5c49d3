//! Canonical brute-force definitions of the query set.
//!
//! Every layout's accelerated path must agree with these.

use super::Table;

/// Sum of column 0 over all rows.
pub fn column_sum<T: Table + ?Sized>(table: &T) -> i64 {
    (0..table.num_rows())
        .map(|row| i64::from(table.field(row, 0)))
        .sum()
}

/// Sum of column 0 over rows where `col1 > threshold1 AND col2 < threshold2`.
pub fn predicated_column_sum<T: Table + ?Sized>(table: &T, threshold1: i32, threshold2: i32) -> i64 {
    (0..table.num_rows())
        .filter(|&row| table.field(row, 1) > threshold1 && table.field(row, 2) < threshold2)
        .map(|row| i64::from(table.field(row, 0)))
        .sum()
}

/// Sum of every column over rows where `col0 > threshold`.
pub fn predicated_all_columns_sum<T: Table + ?Sized>(table: &T, threshold: i32) -> i64 {
    (0..table.num_rows())
        .filter(|&row| table.field(row, 0) > threshold)
        .map(|row| row_total(table, row))
        .sum()
}

/// Applies `col3 = col3 + col2` to every row where `col0 < threshold`.
///
/// The predicate is tested before the row is written; col0 is never modified.
pub fn predicated_update<T: Table + ?Sized>(table: &mut T, threshold: i32) -> usize {
    let mut updated = 0;
    for row in 0..table.num_rows() {
        if table.field(row, 0) >= threshold {
            continue;
        }
        update_row(table, row);
        updated += 1;
    }
    updated
}

/// Sum of every field in `row`.
pub fn row_total<T: Table + ?Sized>(table: &T, row: usize) -> i64 {
    (0..table.num_cols())
        .map(|col| i64::from(table.field(row, col)))
        .sum()
}

/// `col3 = col3 + col2` for one row, with 32-bit wrapping.
pub fn update_row<T: Table + ?Sized>(table: &mut T, row: usize) {
    let value = table.field(row, 3).wrapping_add(table.field(row, 2));
    table.set_field(row, 3, value);
}
