//! Data table component types.
//!
//! These types carry a table preview in display form: column headers plus
//! rows of pre-formatted cells, ready for the template to print.

use serde::{Deserialize, Serialize};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Warehouse column name.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// A rendered table preview.
///
/// Rows hold one string cell per column, in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Row cells, pre-formatted for display.
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given columns.
    #[must_use]
    pub const fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of cells.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Number of rows in the preview.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the preview has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_table_counts_rows() {
        let mut table = DataTable::new(vec![
            TableColumn::new("customer_id", "Customer ID"),
            TableColumn::new("customer_name", "Customer Name"),
        ]);
        assert!(table.is_empty());

        table.push_row(vec!["1".to_string(), "Ada Flynn".to_string()]);
        table.push_row(vec!["2".to_string(), "Noah Reyes".to_string()]);

        assert!(!table.is_empty());
        assert_eq!(table.row_count(), 2);
    }
}
