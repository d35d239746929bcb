//! Test utilities for spec parser testing
//!
//! Provides fixture content and helpers that place spec files under the
//! filenames the format name resolver expects.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// Spec content matching the sample `testformat1` layout
pub fn create_test_spec() -> String {
    "\"column name\",width,datatype\nname,10,TEXT\nvalid,1,BOOLEAN\ncount,3,INTEGER\n"
        .to_string()
}

/// Write spec content to `<dir>/<filename>` and return the path
pub fn write_spec_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).unwrap();
    path
}
