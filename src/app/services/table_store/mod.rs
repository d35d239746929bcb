//! Relational table storage for parsed formats
//!
//! Each format gets one table named after the format, with one column per
//! spec column. Rows are inserted transactionally and the table can be
//! rendered back as an aligned text grid.
//!
//! ## Architecture
//!
//! - [`sqlite`] - SQLite-backed store
//! - [`render`] - Cell formatting and grid layout

pub mod render;
pub mod sqlite;

#[cfg(test)]
pub mod tests;

use std::io::Write;

use crate::app::models::{ColumnDescriptor, ParsedRow};
use crate::{Error, Result};

pub use render::render_grid;
pub use sqlite::SqliteTableStore;

/// Storage operations the loader needs from a table backend
pub trait TableStore {
    /// Create the table for a format if it does not exist yet
    fn create_table(&mut self, table_name: &str, columns: &[ColumnDescriptor]) -> Result<()>;

    /// Insert all rows in one transaction, returning the number inserted
    fn fill_table(&mut self, table_name: &str, rows: &[ParsedRow]) -> Result<usize>;

    /// Render the table as an aligned grid using the spec column widths
    fn render_table(&self, table_name: &str, column_widths: &[usize]) -> Result<String>;

    /// Write the rendered grid to `out`
    fn print_table(
        &self,
        table_name: &str,
        column_widths: &[usize],
        out: &mut dyn Write,
    ) -> Result<()> {
        let grid = self.render_table(table_name, column_widths)?;
        out.write_all(grid.as_bytes())
            .map_err(|e| Error::io(format!("Failed to write table {}", table_name), e))
    }
}
