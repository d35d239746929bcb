//! Line slicing by cumulative column offsets
//!
//! Widths are measured in characters. Slices past the end of the line are
//! empty, so callers decide separately whether a short line is acceptable.

use crate::app::models::ParsedRow;

/// Slice a line into trimmed fields, walking the widths left to right
pub fn slice_line(line: &str, widths: &[usize]) -> ParsedRow {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut cursor = 0;

    widths
        .iter()
        .map(|&width| {
            let start = cursor.min(len);
            let end = (cursor + width).min(len);
            cursor += width;

            let field: String = chars[start..end].iter().collect();
            field.trim().to_string()
        })
        .collect()
}
