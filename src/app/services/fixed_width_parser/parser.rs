//! Core fixed-width parser implementation
//!
//! This module handles file validation, format lookup in the registry, whole
//! file reading and the per-line shape checks around slicing.

use std::path::Path;
use tracing::{debug, info, warn};

use super::slicer::slice_line;
use super::stats::{DataParseResult, ParseStats};
use crate::app::models::ParsedRow;
use crate::app::services::format_name;
use crate::app::services::format_registry::FormatRegistry;
use crate::config::{LoaderConfig, ShortRowPolicy};
use crate::{Error, Result};

/// Parser for fixed-width data files
#[derive(Debug, Clone)]
pub struct FixedWidthParser {
    short_row_policy: ShortRowPolicy,
    skip_blank_lines: bool,
}

impl FixedWidthParser {
    /// Create a parser with explicit line handling rules
    pub fn new(short_row_policy: ShortRowPolicy, skip_blank_lines: bool) -> Self {
        Self {
            short_row_policy,
            skip_blank_lines,
        }
    }

    /// Create a parser from loader configuration
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.short_row_policy, config.skip_blank_lines)
    }

    /// Parse a data file against the layout registered for its format
    pub fn parse_data(&self, path: &Path, registry: &FormatRegistry) -> Result<DataParseResult> {
        if !path.is_file() {
            return Err(Error::invalid_file(path.display().to_string()));
        }

        let file_name = format_name::resolve_data(path)?;
        let widths = registry
            .widths(&file_name.format_name)
            .ok_or_else(|| Error::format_not_registered(&file_name.format_name))?;

        info!(
            "Parsing data file: {} (format '{}', dated {})",
            path.display(),
            file_name.format_name,
            file_name.date
        );

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read data file {}", path.display()), e)
        })?;

        let (rows, stats) = self.parse_content(&path.display().to_string(), &content, &widths)?;

        info!(
            "Parsed {} rows from {} lines",
            stats.rows_parsed, stats.lines_read
        );

        Ok(DataParseResult {
            format_name: file_name.format_name,
            date: file_name.date,
            rows,
            stats,
        })
    }

    /// Parse whole-file content with the given widths
    pub fn parse_content(
        &self,
        file: &str,
        content: &str,
        widths: &[usize],
    ) -> Result<(Vec<ParsedRow>, ParseStats)> {
        let total_width: usize = widths.iter().sum();
        let mut stats = ParseStats::new();
        let mut rows = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            stats.lines_read += 1;

            if self.skip_blank_lines && line.trim().is_empty() {
                stats.blank_lines_skipped += 1;
                debug!("Skipping blank line {}", line_number);
                continue;
            }

            let found = line.chars().count();
            if found < total_width {
                match self.short_row_policy {
                    ShortRowPolicy::Reject => {
                        return Err(Error::row_too_short(file, line_number, total_width, found));
                    }
                    ShortRowPolicy::Pad => {
                        warn!(
                            "Line {} has {} of {} characters, padding with blanks",
                            line_number, found, total_width
                        );
                        stats.padded_rows += 1;
                    }
                }
            } else if found > total_width {
                debug!(
                    "Line {} has {} characters beyond the layout width",
                    line_number,
                    found - total_width
                );
                stats.overlong_lines += 1;
            }

            rows.push(slice_line(line, widths));
            stats.rows_parsed += 1;
        }

        Ok((rows, stats))
    }
}

impl Default for FixedWidthParser {
    fn default() -> Self {
        Self::from_config(&LoaderConfig::default())
    }
}
