//! Layout specification parser
//!
//! Spec files are small CSV files describing the columns of one fixed-width
//! format: a header line followed by one `name,width,type` line per column.
//!
//! ## Architecture
//!
//! - [`parser`] - File handling, registry interaction and whole-file parsing
//! - [`line`] - Parsing and validation of individual column lines
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fixed_width_loader::app::services::spec_parser::SpecParser;
//! use fixed_width_loader::FormatRegistry;
//!
//! # fn example() -> fixed_width_loader::Result<()> {
//! let mut registry = FormatRegistry::new();
//! let result = SpecParser::new().parse_spec(std::path::Path::new("specs/testformat1.csv"), &mut registry)?;
//!
//! println!("{} declares {} columns", result.format_name, result.columns.len());
//! # Ok(())
//! # }
//! ```

pub mod line;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use line::parse_column_line;
pub use parser::{SpecParseResult, SpecParser};
