//! Load orchestration: spec files, data files and table rendering
//!
//! The loader owns the format registry and the table store. Spec files must be
//! loaded before data files of the same format; the registry is per loader, so
//! a new process re-reads every spec it needs.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::services::fixed_width_parser::{FixedWidthParser, ParseStats};
use crate::app::services::format_registry::FormatRegistry;
use crate::app::services::ingest::IngestPlan;
use crate::app::services::spec_parser::{SpecParseResult, SpecParser};
use crate::app::services::table_store::TableStore;
use crate::config::LoaderConfig;
use crate::{Error, Result};

/// Outcome of loading one data file
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Data file that was loaded
    pub data_path: PathBuf,

    /// Format (and table) the rows went into
    pub format_name: String,

    /// Date embedded in the data filename
    pub date: NaiveDate,

    /// Rows inserted into the table
    pub rows_inserted: usize,

    /// Parsing statistics for the file
    pub stats: ParseStats,
}

/// Outcome of a directory ingestion run
#[derive(Debug, Clone, Default)]
pub struct IngestSummary {
    pub specs: Vec<SpecParseResult>,
    pub loads: Vec<LoadReport>,
}

impl IngestSummary {
    /// Distinct formats that received data, in first-loaded order
    pub fn loaded_formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = Vec::new();
        for report in &self.loads {
            if !formats.contains(&report.format_name.as_str()) {
                formats.push(&report.format_name);
            }
        }
        formats
    }

    pub fn total_rows(&self) -> usize {
        self.loads.iter().map(|report| report.rows_inserted).sum()
    }
}

/// Sequences spec parsing, data parsing and storage for one run
#[derive(Debug)]
pub struct FormatLoader<S: TableStore> {
    registry: FormatRegistry,
    spec_parser: SpecParser,
    data_parser: FixedWidthParser,
    store: S,
}

impl<S: TableStore> FormatLoader<S> {
    /// Create a loader with an empty registry
    pub fn new(store: S, config: &LoaderConfig) -> Self {
        Self {
            registry: FormatRegistry::new(),
            spec_parser: SpecParser::new(),
            data_parser: FixedWidthParser::from_config(config),
            store,
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse a spec file, register its layout and create its table.
    ///
    /// A newly registered layout is removed again if its table cannot be created.
    pub fn load_spec(&mut self, path: &Path) -> Result<SpecParseResult> {
        let result = self.spec_parser.parse_spec(path, &mut self.registry)?;

        if let Err(e) = self.store.create_table(&result.format_name, &result.columns) {
            if result.newly_registered {
                warn!(
                    "Unregistering format '{}' after table creation failed",
                    result.format_name
                );
                self.registry.remove(&result.format_name);
            }
            return Err(e);
        }

        Ok(result)
    }

    /// Parse a data file and insert its rows into the format's table
    pub fn load_data(&mut self, path: &Path) -> Result<LoadReport> {
        let parsed = self.data_parser.parse_data(path, &self.registry)?;
        let rows_inserted = self.store.fill_table(&parsed.format_name, &parsed.rows)?;

        info!(
            "Loaded {} rows from {} into '{}'",
            rows_inserted,
            path.display(),
            parsed.format_name
        );

        Ok(LoadReport {
            data_path: path.to_path_buf(),
            format_name: parsed.format_name,
            date: parsed.date,
            rows_inserted,
            stats: parsed.stats,
        })
    }

    /// Render a format's table using its registered widths
    pub fn render(&self, format_name: &str) -> Result<String> {
        let widths = self
            .registry
            .widths(format_name)
            .ok_or_else(|| Error::format_not_registered(format_name))?;
        self.store.render_table(format_name, &widths)
    }

    /// Load a data file and render the resulting table
    pub fn run(&mut self, data_path: &Path) -> Result<String> {
        let report = self.load_data(data_path)?;
        self.render(&report.format_name)
    }

    /// Load every spec in the plan, then every data file, stopping at the first error.
    ///
    /// `on_file` is called after each file completes.
    pub fn ingest<F>(&mut self, plan: &IngestPlan, mut on_file: F) -> Result<IngestSummary>
    where
        F: FnMut(&Path),
    {
        let mut summary = IngestSummary::default();

        for spec_path in &plan.spec_files {
            summary.specs.push(self.load_spec(spec_path)?);
            on_file(spec_path);
        }

        for data_path in &plan.data_files {
            summary.loads.push(self.load_data(data_path)?);
            on_file(data_path);
        }

        info!(
            "Ingested {} specs and {} data files ({} rows)",
            summary.specs.len(),
            summary.loads.len(),
            summary.total_rows()
        );

        Ok(summary)
    }
}
