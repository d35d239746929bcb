//! Data models for fixed-width loading
//!
//! This module contains the core data structures describing a format's column
//! layout, as declared in a spec file and as stored in the database.

use crate::constants::{declared_types, storage_types};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Column Types
// =============================================================================

/// Column type as written in a spec file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclaredType {
    Text,
    Boolean,
    Integer,
    /// Any other type name, passed through to storage unchanged
    Other(String),
}

impl DeclaredType {
    /// Parse a declared type name (case-sensitive, as written in spec files)
    pub fn parse(raw: &str) -> Self {
        match raw {
            declared_types::TEXT => DeclaredType::Text,
            declared_types::BOOLEAN => DeclaredType::Boolean,
            declared_types::INTEGER => DeclaredType::Integer,
            other => DeclaredType::Other(other.to_string()),
        }
    }

    /// Normalize to the storage type: BOOLEAN and INTEGER collapse into INT
    pub fn storage_type(&self) -> StorageType {
        match self {
            DeclaredType::Text => StorageType::Text,
            DeclaredType::Boolean | DeclaredType::Integer => StorageType::Int,
            DeclaredType::Other(name) => StorageType::Other(name.clone()),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Text => f.write_str(declared_types::TEXT),
            DeclaredType::Boolean => f.write_str(declared_types::BOOLEAN),
            DeclaredType::Integer => f.write_str(declared_types::INTEGER),
            DeclaredType::Other(name) => f.write_str(name),
        }
    }
}

/// Column type used in table definitions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    Text,
    Int,
    Other(String),
}

impl StorageType {
    /// Type name as written into `CREATE TABLE`
    pub fn as_sql(&self) -> &str {
        match self {
            StorageType::Text => storage_types::TEXT,
            StorageType::Int => storage_types::INT,
            StorageType::Other(name) => name,
        }
    }

    /// Recover a storage type from a declared SQLite column type
    pub fn from_sql(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            storage_types::TEXT => StorageType::Text,
            storage_types::INT => StorageType::Int,
            _ => StorageType::Other(raw.to_string()),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, StorageType::Int)
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

// =============================================================================
// Column Layout
// =============================================================================

/// One column line of a spec file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, used verbatim as the table column name
    pub name: String,

    /// Number of characters the column occupies in a data line
    pub width: usize,

    /// Type as declared in the spec file
    pub declared_type: DeclaredType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, width: usize, declared_type: DeclaredType) -> Self {
        Self {
            name: name.into(),
            width,
            declared_type,
        }
    }

    pub fn storage_type(&self) -> StorageType {
        self.declared_type.storage_type()
    }

    /// Name and normalized type pair handed to the table store
    pub fn descriptor(&self) -> ColumnDescriptor {
        ColumnDescriptor {
            name: self.name.clone(),
            storage_type: self.storage_type(),
        }
    }
}

/// Column name with its normalized storage type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub storage_type: StorageType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, storage_type: StorageType) -> Self {
        Self {
            name: name.into(),
            storage_type,
        }
    }
}

/// Complete column layout of one format, in physical left-to-right order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatLayout {
    /// Canonical format name shared by the spec file and its data files
    pub format_name: String,

    /// Columns in spec order
    pub columns: Vec<ColumnSpec>,
}

impl FormatLayout {
    pub fn new(format_name: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            format_name: format_name.into(),
            columns,
        }
    }

    /// Ordered column widths
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|column| column.width).collect()
    }

    /// Ordered (name, storage type) descriptors
    pub fn descriptors(&self) -> Vec<ColumnDescriptor> {
        self.columns.iter().map(ColumnSpec::descriptor).collect()
    }

    /// Sum of all column widths, i.e. the expected data line length
    pub fn total_width(&self) -> usize {
        self.columns.iter().map(|column| column.width).sum()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// One data line split into trimmed fields, one per column
pub type ParsedRow = Vec<String>;
