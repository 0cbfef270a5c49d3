//! Table layouts and the contract they share.

mod column;
mod custom;
mod indexed;
mod row;
pub mod scan;
mod store;
#[allow(clippy::module_inception)]
mod table;
pub(crate) mod validation;

pub use column::ColumnTable;
pub use custom::CustomTable;
pub use indexed::IndexedRowTable;
pub use row::RowTable;
pub use table::Table;
pub use validation::QUERY_COLUMNS;
