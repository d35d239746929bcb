//! Fixed-width data file parser
//!
//! Data files hold one record per line with fields packed side by side and
//! padded with spaces. The layout comes from a previously registered spec.
//!
//! ## Architecture
//!
//! - [`parser`] - File handling, format lookup and line-by-line parsing
//! - [`slicer`] - Cumulative-offset slicing of a single line
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fixed_width_loader::app::services::fixed_width_parser::FixedWidthParser;
//! use fixed_width_loader::{FormatRegistry, LoaderConfig};
//!
//! # fn example(registry: &FormatRegistry) -> fixed_width_loader::Result<()> {
//! let parser = FixedWidthParser::from_config(&LoaderConfig::default());
//! let result = parser.parse_data(std::path::Path::new("data/testformat1_2015-06-28.txt"), registry)?;
//!
//! println!("Parsed {} rows from {} lines", result.stats.rows_parsed, result.stats.lines_read);
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod slicer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::FixedWidthParser;
pub use slicer::slice_line;
pub use stats::{DataParseResult, ParseStats};
