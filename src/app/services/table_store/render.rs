//! Grid rendering for stored tables
//!
//! Layout:
//!
//! ```text
//! name       | valid | count
//! ---------- | ----- | -----
//! Foonyor    | true  |     1
//! ```
//!
//! Column display width is the larger of the spec width and the column name
//! length. Data cells of the last column are right-aligned, everything else is
//! left-aligned.

use rusqlite::types::Value;

use crate::app::models::StorageType;
use crate::constants::{
    BOOLEAN_COLUMN_WIDTH, BOOLEAN_FALSE, BOOLEAN_TRUE, GRID_RULE_CHAR, GRID_SEPARATOR,
};

/// Format one stored value for display.
///
/// INT columns declared one character wide hold booleans and render as
/// `true`/`false`.
pub fn format_cell(value: &Value, storage_type: &StorageType, spec_width: Option<usize>) -> String {
    if storage_type.is_int() && spec_width == Some(BOOLEAN_COLUMN_WIDTH) {
        let truthy = match value {
            Value::Null => false,
            Value::Integer(n) => *n != 0,
            Value::Real(f) => *f != 0.0,
            Value::Text(s) => !s.is_empty(),
            Value::Blob(b) => !b.is_empty(),
        };
        return if truthy { BOOLEAN_TRUE } else { BOOLEAN_FALSE }.to_string();
    }

    match value {
        Value::Null => String::new(),
        Value::Integer(n) => n.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}

/// Lay out a header row, a rule and the formatted data rows
pub fn render_grid(column_names: &[String], rows: &[Vec<String>], column_widths: &[usize]) -> String {
    if column_names.is_empty() {
        return String::new();
    }

    let widths: Vec<usize> = column_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            column_widths
                .get(i)
                .copied()
                .unwrap_or(0)
                .max(name.chars().count())
        })
        .collect();
    let last = widths.len() - 1;

    let mut output = String::new();

    let header: Vec<String> = column_names
        .iter()
        .zip(&widths)
        .map(|(name, &width)| format!("{:<width$}", name))
        .collect();
    output.push_str(&header.join(GRID_SEPARATOR));
    output.push('\n');

    let rule: Vec<String> = widths
        .iter()
        .map(|&width| GRID_RULE_CHAR.to_string().repeat(width))
        .collect();
    output.push_str(&rule.join(GRID_SEPARATOR));
    output.push('\n');

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                if i == last {
                    format!("{:>width$}", cell)
                } else {
                    format!("{:<width$}", cell)
                }
            })
            .collect();
        output.push_str(&cells.join(GRID_SEPARATOR));
        output.push('\n');
    }

    output
}
