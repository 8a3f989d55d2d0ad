//! Reusable view components shared across templates.

pub mod data_table;

pub use data_table::{DataTable, TableColumn};
