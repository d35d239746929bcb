//! Core spec file parser implementation
//!
//! This module handles file validation, format name resolution, the registry
//! short-circuit for already known formats, and whole-file parsing.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use super::line::parse_column_line;
use crate::app::models::{ColumnDescriptor, FormatLayout};
use crate::app::services::format_name;
use crate::app::services::format_registry::FormatRegistry;
use crate::{Error, Result};

/// Result of parsing (or re-visiting) a spec file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecParseResult {
    /// Format name derived from the spec filename
    pub format_name: String,

    /// Column names with normalized storage types, in spec order
    pub columns: Vec<ColumnDescriptor>,

    /// Column widths, in spec order
    pub widths: Vec<usize>,

    /// False when the format was already registered and the file was not re-read
    pub newly_registered: bool,
}

impl SpecParseResult {
    fn from_layout(layout: &FormatLayout, newly_registered: bool) -> Self {
        Self {
            format_name: layout.format_name.clone(),
            columns: layout.descriptors(),
            widths: layout.widths(),
            newly_registered,
        }
    }
}

/// Parser for layout spec files
#[derive(Debug, Clone, Default)]
pub struct SpecParser;

impl SpecParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a spec file and register its layout.
    ///
    /// When the format is already registered the file is not parsed again and
    /// the cached descriptors are returned with `newly_registered == false`.
    pub fn parse_spec(&self, path: &Path, registry: &mut FormatRegistry) -> Result<SpecParseResult> {
        if !path.is_file() {
            return Err(Error::invalid_file(path.display().to_string()));
        }

        let format_name = format_name::resolve(path)?;

        if let Some(existing) = registry.get(&format_name) {
            info!(
                "Spec for format '{}' already loaded, skipping {}",
                format_name,
                path.display()
            );
            return Ok(SpecParseResult::from_layout(existing, false));
        }

        info!("Parsing spec file: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read spec file {}", path.display()), e)
        })?;

        let layout = parse_spec_content(&format_name, &path.display().to_string(), &content)?;
        debug!(
            "Format '{}': {} columns, total width {}",
            format_name,
            layout.column_count(),
            layout.total_width()
        );

        let result = SpecParseResult::from_layout(&layout, true);
        registry.put(layout);

        Ok(result)
    }
}

/// Parse spec file content into a layout without touching the filesystem
pub fn parse_spec_content(format_name: &str, file: &str, content: &str) -> Result<FormatLayout> {
    let mut lines = content.lines().enumerate();

    // The header only names the spec columns; its content is not used
    if lines.next().is_none() {
        return Err(Error::malformed_spec_line(file, 1, "missing header line"));
    }

    let mut columns = Vec::new();
    let mut seen = HashSet::new();

    for (index, line) in lines {
        let line_number = index + 1;

        if line.trim().is_empty() {
            debug!("Skipping blank spec line {}", line_number);
            continue;
        }

        let column = parse_column_line(file, line_number, line)?;

        // SQLite column names are case-insensitive
        if !seen.insert(column.name.to_ascii_lowercase()) {
            return Err(Error::malformed_spec_line(
                file,
                line_number,
                format!("duplicate column name '{}'", column.name),
            ));
        }

        columns.push(column);
    }

    if columns.is_empty() {
        return Err(Error::malformed_spec_line(
            file,
            1,
            "spec declares no columns after the header",
        ));
    }

    Ok(FormatLayout::new(format_name, columns))
}
