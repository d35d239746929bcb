//! SQLite-backed table store
//!
//! One connection is owned for the lifetime of the store and closed on drop.
//! Table and column names come from spec files and are always quoted.

use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use tracing::{debug, info};

use super::TableStore;
use super::render::{format_cell, render_grid};
use crate::app::models::{ColumnDescriptor, ParsedRow, StorageType};
use crate::{Error, Result};

/// Table store writing to a SQLite database
#[derive(Debug)]
pub struct SqliteTableStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteTableStore {
    /// Open (or create) a database file, creating its parent directory if needed
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create database directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let conn = Connection::open(path).map_err(|e| {
            Error::storage(format!("Failed to open database {}", path.display()), e)
        })?;
        debug!("Opened database {}", path.display());

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::storage("Failed to open in-memory database", e))?;
        Ok(Self { conn, path: None })
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if a table exists
    pub fn table_exists(&self, table_name: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table_name],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| Error::storage(format!("Failed to look up table {}", table_name), e))?;
        Ok(found.is_some())
    }

    /// Declared columns of a table, in table order
    pub fn table_columns(&self, table_name: &str) -> Result<Vec<ColumnDescriptor>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, type FROM pragma_table_info(?1) ORDER BY cid")
            .map_err(|e| Error::storage("Failed to prepare table_info query", e))?;

        let columns = stmt
            .query_map(params![table_name], |row| {
                let name: String = row.get(0)?;
                let sql_type: String = row.get(1)?;
                Ok(ColumnDescriptor::new(name, StorageType::from_sql(&sql_type)))
            })
            .and_then(|rows| rows.collect::<std::result::Result<Vec<_>, _>>())
            .map_err(|e| Error::storage(format!("Failed to read columns of {}", table_name), e))?;

        Ok(columns)
    }

    /// Number of rows stored in a table
    pub fn row_count(&self, table_name: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table_name));
        let count: i64 = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|e| Error::storage(format!("Failed to count rows of {}", table_name), e))?;
        Ok(count as usize)
    }

    fn existing_columns(&self, table_name: &str) -> Result<Vec<ColumnDescriptor>> {
        let columns = self.table_columns(table_name)?;
        if columns.is_empty() {
            return Err(Error::table_not_found(table_name));
        }
        Ok(columns)
    }
}

impl TableStore for SqliteTableStore {
    fn create_table(&mut self, table_name: &str, columns: &[ColumnDescriptor]) -> Result<()> {
        let sql = create_table_sql(table_name, columns);
        debug!("{}", sql);

        self.conn
            .execute(&sql, [])
            .map_err(|e| Error::storage(format!("Failed to create table {}", table_name), e))?;

        info!("Table '{}' ready with {} columns", table_name, columns.len());
        Ok(())
    }

    fn fill_table(&mut self, table_name: &str, rows: &[ParsedRow]) -> Result<usize> {
        if rows.is_empty() {
            debug!("No rows to insert into '{}'", table_name);
            return Ok(0);
        }

        let columns = self.existing_columns(table_name)?;
        let placeholders = vec!["?"; columns.len()].join(",");
        let sql = format!(
            "INSERT INTO {} VALUES({})",
            quote_identifier(table_name),
            placeholders
        );

        // Dropping the transaction on any error rolls back every insert
        let tx = self
            .conn
            .transaction()
            .map_err(|e| Error::storage("Failed to begin transaction", e))?;
        {
            let mut stmt = tx
                .prepare(&sql)
                .map_err(|e| Error::storage(format!("Failed to prepare insert into {}", table_name), e))?;

            for (index, row) in rows.iter().enumerate() {
                if row.len() != columns.len() {
                    return Err(Error::storage(
                        format!("Row {} does not match the columns of {}", index + 1, table_name),
                        rusqlite::Error::InvalidParameterCount(row.len(), columns.len()),
                    ));
                }

                let values = row
                    .iter()
                    .zip(&columns)
                    .map(|(raw, column)| coerce_value(&column.storage_type, raw));

                stmt.execute(params_from_iter(values)).map_err(|e| {
                    Error::storage(format!("Failed to insert row {} into {}", index + 1, table_name), e)
                })?;
            }
        }
        tx.commit()
            .map_err(|e| Error::storage(format!("Failed to commit rows into {}", table_name), e))?;

        info!("Inserted {} rows into '{}'", rows.len(), table_name);
        Ok(rows.len())
    }

    fn render_table(&self, table_name: &str, column_widths: &[usize]) -> Result<String> {
        if !self.table_exists(table_name)? {
            return Err(Error::table_not_found(table_name));
        }

        let columns = self.existing_columns(table_name)?;
        let sql = format!("SELECT * FROM {} ORDER BY rowid", quote_identifier(table_name));

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| Error::storage(format!("Failed to query {}", table_name), e))?;

        let rows = stmt
            .query_map([], |row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        let value: Value = row.get(i)?;
                        Ok(format_cell(
                            &value,
                            &column.storage_type,
                            column_widths.get(i).copied(),
                        ))
                    })
                    .collect::<rusqlite::Result<Vec<String>>>()
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| Error::storage(format!("Failed to read rows of {}", table_name), e))?;

        let names: Vec<String> = columns.into_iter().map(|column| column.name).collect();
        Ok(render_grid(&names, &rows, column_widths))
    }
}

/// `CREATE TABLE IF NOT EXISTS` statement for a format
pub fn create_table_sql(table_name: &str, columns: &[ColumnDescriptor]) -> String {
    let definitions: Vec<String> = columns
        .iter()
        .map(|column| {
            format!(
                "{} {}",
                quote_identifier(&column.name),
                column.storage_type.as_sql()
            )
        })
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {}({})",
        quote_identifier(table_name),
        definitions.join(", ")
    )
}

/// Quote an identifier for SQLite, doubling embedded quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Convert a parsed field into the value stored for its column type
pub fn coerce_value(storage_type: &StorageType, raw: &str) -> Value {
    match storage_type {
        StorageType::Int if raw.is_empty() => Value::Null,
        StorageType::Int => raw
            .parse::<i64>()
            .map(Value::Integer)
            .unwrap_or_else(|_| Value::Text(raw.to_string())),
        StorageType::Text | StorageType::Other(_) => Value::Text(raw.to_string()),
    }
}
