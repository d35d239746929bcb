//! Application constants for the fixed-width loader
//!
//! This module contains file naming conventions, declared type names,
//! default locations and rendering constants used throughout the loader.

// =============================================================================
// File Naming Conventions
// =============================================================================

/// Extension of layout specification files
pub const SPEC_FILE_EXTENSION: &str = "csv";

/// Extension of fixed-width data files
pub const DATA_FILE_EXTENSION: &str = "txt";

/// Data filename pattern: `<format_name>_<YYYY-MM-DD>.txt`
pub const DATA_FILENAME_PATTERN: &str = r"^(?P<name>.+)_(?P<date>\d{4}-\d{2}-\d{2})\.txt$";

/// Date format embedded in data filenames
pub const DATA_FILENAME_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Spec File Layout
// =============================================================================

/// Field separator inside spec lines
pub const SPEC_FIELD_SEPARATOR: char = ',';

/// Number of fields on every spec column line (name, width, type)
pub const SPEC_FIELD_COUNT: usize = 3;

/// Declared type names recognised in spec files
pub mod declared_types {
    pub const TEXT: &str = "TEXT";
    pub const BOOLEAN: &str = "BOOLEAN";
    pub const INTEGER: &str = "INTEGER";
}

/// Keywords that start or belong to a SQLite column constraint.
///
/// A declared type equal to one of these (any case) would turn into a
/// constraint inside `CREATE TABLE` instead of a type name.
pub const RESERVED_TYPE_KEYWORDS: &[&str] = &[
    "AS",
    "ASC",
    "AUTOINCREMENT",
    "CHECK",
    "COLLATE",
    "CONFLICT",
    "CONSTRAINT",
    "DEFAULT",
    "DESC",
    "FOREIGN",
    "GENERATED",
    "KEY",
    "NOT",
    "NULL",
    "ON",
    "PRIMARY",
    "REFERENCES",
    "UNIQUE",
];

/// Storage type names used in generated table definitions
pub mod storage_types {
    pub const TEXT: &str = "TEXT";
    pub const INT: &str = "INT";
}

// =============================================================================
// Default Locations
// =============================================================================

/// Default SQLite database location (relative to the working directory)
pub const DEFAULT_DATABASE_PATH: &str = "db/fixed_width.db";

/// Default directory holding spec files for `ingest`
pub const DEFAULT_SPECS_DIR: &str = "specs";

/// Default directory holding data files for `ingest`
pub const DEFAULT_DATA_DIR: &str = "data";

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "fixed-width-loader";

/// Config filename looked up under the application config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "FWL_";

// =============================================================================
// Table Rendering
// =============================================================================

/// Separator placed between rendered cells
pub const GRID_SEPARATOR: &str = " | ";

/// Character used for the rule under the header row
pub const GRID_RULE_CHAR: char = '-';

/// Spec width at which an INT column is rendered as a boolean
pub const BOOLEAN_COLUMN_WIDTH: usize = 1;

/// Rendered value for truthy boolean cells
pub const BOOLEAN_TRUE: &str = "true";

/// Rendered value for falsy boolean cells
pub const BOOLEAN_FALSE: &str = "false";
