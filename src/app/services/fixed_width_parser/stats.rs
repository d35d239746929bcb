//! Parsing statistics and result structures for fixed-width data files

use crate::app::models::ParsedRow;
use chrono::NaiveDate;

/// Parsed rows of one data file with basic statistics
#[derive(Debug, Clone)]
pub struct DataParseResult {
    /// Format name derived from the data filename
    pub format_name: String,

    /// Date embedded in the data filename
    pub date: NaiveDate,

    /// One row per record line, in file order
    pub rows: Vec<ParsedRow>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines read from the file
    pub lines_read: usize,

    /// Number of rows produced
    pub rows_parsed: usize,

    /// Number of empty lines skipped
    pub blank_lines_skipped: usize,

    /// Number of short lines padded with blanks (pad policy only)
    pub padded_rows: usize,

    /// Number of lines longer than the total column width
    pub overlong_lines: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every line matched the layout width exactly
    pub fn is_clean(&self) -> bool {
        self.padded_rows == 0 && self.overlong_lines == 0
    }
}
