//! Test utilities for fixed-width parser testing
//!
//! Provides a registry preloaded with the sample layout and helpers that write
//! data files under date-suffixed names.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::app::models::{ColumnSpec, DeclaredType, FormatLayout};
use crate::app::services::format_registry::FormatRegistry;

// Test modules
mod parser_tests;

/// Registry holding the `testformat1` layout (widths 10, 1, 3)
pub fn create_test_registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.put(FormatLayout::new(
        "testformat1",
        vec![
            ColumnSpec::new("name", 10, DeclaredType::Text),
            ColumnSpec::new("valid", 1, DeclaredType::Boolean),
            ColumnSpec::new("count", 3, DeclaredType::Integer),
        ],
    ));
    registry
}

/// Sample data matching the `testformat1` layout
pub fn create_test_data() -> String {
    "Foonyor   1  1\nBarzane   0-12\nQuuxitude 1103\n".to_string()
}

/// Write data content to `<dir>/<filename>` and return the path
pub fn write_data_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).unwrap();
    path
}
