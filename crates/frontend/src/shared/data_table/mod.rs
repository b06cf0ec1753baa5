//! Generic data table
//!
//! - model.rs: column/filter descriptors and the search, filter, sort and page pipeline
//! - selection.rs: row selection with page-scoped "select all"
//! - view.rs: Leptos component

pub mod model;
pub mod selection;
mod view;

pub use model::{Align, CellValue, ColumnDef, FilterDef, FilterOption, TableRow};
pub use view::DataTable;
