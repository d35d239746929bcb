//! Test utilities for table store testing

use crate::app::models::{ColumnDescriptor, ParsedRow, StorageType};


/// Descriptors of the sample `testformat1` table
pub fn create_test_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("name", StorageType::Text),
        ColumnDescriptor::new("valid", StorageType::Int),
        ColumnDescriptor::new("count", StorageType::Int),
    ]
}

/// Rows as produced by the fixed-width parser for the sample data
pub fn create_test_rows() -> Vec<ParsedRow> {
    [
        ["Foonyor", "1", "1"],
        ["Barzane", "0", "-12"],
        ["Quuxitude", "1", "103"],
    ]
    .iter()
    .map(|row| row.iter().map(|field| field.to_string()).collect())
    .collect()
}

/// Expected grid for the sample table with widths 10, 1, 3
pub fn expected_test_grid() -> String {
    [
        "name       | valid | count",
        "---------- | ----- | -----",
        "Foonyor    | true  |     1",
        "Barzane    | false |   -12",
        "Quuxitude  | true  |   103",
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}
