//! Directory discovery for batch ingestion
//!
//! Scans a specs directory for `*.csv` layout files and a data directory for
//! `*.txt` data files. Only the top level of each directory is scanned and
//! results are sorted by filename so runs are reproducible.

use crate::constants::{DATA_FILE_EXTENSION, SPEC_FILE_EXTENSION};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Files selected for one ingestion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestPlan {
    /// Spec files, loaded first
    pub spec_files: Vec<PathBuf>,

    /// Data files, loaded after every spec
    pub data_files: Vec<PathBuf>,
}

impl IngestPlan {
    pub fn file_count(&self) -> usize {
        self.spec_files.len() + self.data_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}

/// Discover spec and data files in the given directories
pub fn discover(specs_dir: &Path, data_dir: &Path) -> Result<IngestPlan> {
    let plan = IngestPlan {
        spec_files: collect_files(specs_dir, SPEC_FILE_EXTENSION)?,
        data_files: collect_files(data_dir, DATA_FILE_EXTENSION)?,
    };

    info!(
        "Discovered {} spec files in {} and {} data files in {}",
        plan.spec_files.len(),
        specs_dir.display(),
        plan.data_files.len(),
        data_dir.display()
    );

    Ok(plan)
}

fn collect_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::invalid_file(dir.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to scan {}", dir.display()), e)
        })?;

        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        } else {
            debug!("Ignoring {}", path.display());
        }
    }

    Ok(files)
}
