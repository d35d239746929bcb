//! Fixed-Width Loader Library
//!
//! A Rust library for loading fixed-width data files into SQLite tables, driven
//! by small CSV layout specifications.
//!
//! This library provides tools for:
//! - Deriving format names from spec and data filenames
//! - Parsing layout specifications into column descriptors and widths
//! - Keeping a registry of known formats so data is only parsed against a known layout
//! - Slicing fixed-width data lines into trimmed fields
//! - Creating, filling and rendering SQLite tables for each format
//! - Comprehensive error handling with fail-fast semantics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fixed_width_parser;
        pub mod format_name;
        pub mod format_registry;
        pub mod ingest;
        pub mod loader;
        pub mod spec_parser;
        pub mod table_store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ColumnDescriptor, ColumnSpec, DeclaredType, FormatLayout, StorageType};
pub use app::services::format_registry::FormatRegistry;
pub use app::services::loader::FormatLoader;
pub use config::LoaderConfig;

/// Result type alias for the fixed-width loader
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for loading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Path does not reference an existing file
    #[error("Invalid file: {path}")]
    InvalidFile { path: String },

    /// Data file parsed before its spec was loaded
    #[error("Data format not specified: no spec loaded for format '{format_name}'")]
    FormatNotRegistered { format_name: String },

    /// Spec line with the wrong shape or an unusable value
    #[error("Malformed spec line {line_number} in file '{file}': {reason}")]
    MalformedSpecLine {
        file: String,
        line_number: usize,
        reason: String,
    },

    /// Filename does not follow the spec or data naming convention
    #[error("Malformed filename '{path}': {reason}")]
    MalformedFilename { path: String, reason: String },

    /// Data line shorter than the format's total width
    #[error(
        "Row too short at line {line_number} in file '{file}': expected {expected} characters, found {found}"
    )]
    RowTooShort {
        file: String,
        line_number: usize,
        expected: usize,
        found: usize,
    },

    /// SQLite operation failed
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Table lookup failed
    #[error("Table <{table}> does not exist")]
    TableNotFound { table: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid file error
    pub fn invalid_file(path: impl Into<String>) -> Self {
        Self::InvalidFile { path: path.into() }
    }

    /// Create a format not registered error
    pub fn format_not_registered(format_name: impl Into<String>) -> Self {
        Self::FormatNotRegistered {
            format_name: format_name.into(),
        }
    }

    /// Create a malformed spec line error
    pub fn malformed_spec_line(
        file: impl Into<String>,
        line_number: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedSpecLine {
            file: file.into(),
            line_number,
            reason: reason.into(),
        }
    }

    /// Create a malformed filename error
    pub fn malformed_filename(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFilename {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a row too short error
    pub fn row_too_short(
        file: impl Into<String>,
        line_number: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::RowTooShort {
            file: file.into(),
            line_number,
            expected,
            found,
        }
    }

    /// Create a storage error with context
    pub fn storage(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }

    /// Create a table not found error
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::Storage {
            message: "SQLite operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
