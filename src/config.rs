//! Configuration management and validation.
//!
//! Provides the loader configuration with layered resolution: built-in
//! defaults, an optional TOML file, `FWL_*` environment overrides and finally
//! command-line flags applied by the CLI layer.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATA_DIR, DEFAULT_DATABASE_PATH, DEFAULT_SPECS_DIR,
    ENV_PREFIX,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// How data lines shorter than the format's total width are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShortRowPolicy {
    /// Fail the whole file with a row-too-short error
    #[default]
    Reject,
    /// Treat missing trailing characters as blanks
    Pad,
}

impl fmt::Display for ShortRowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortRowPolicy::Reject => f.write_str("reject"),
            ShortRowPolicy::Pad => f.write_str("pad"),
        }
    }
}

impl FromStr for ShortRowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(ShortRowPolicy::Reject),
            "pad" => Ok(ShortRowPolicy::Pad),
            other => Err(Error::configuration(format!(
                "Invalid short row policy '{}' (expected 'reject' or 'pad')",
                other
            ))),
        }
    }
}

/// Global configuration for loading runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// SQLite database file receiving one table per format
    pub database_path: PathBuf,

    /// Policy for data lines shorter than the total column width
    pub short_row_policy: ShortRowPolicy,

    /// Skip empty or whitespace-only data lines instead of treating them as records
    pub skip_blank_lines: bool,

    /// Directory scanned for spec files by `ingest`
    pub specs_dir: PathBuf,

    /// Directory scanned for data files by `ingest`
    pub data_dir: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            short_row_policy: ShortRowPolicy::Reject,
            skip_blank_lines: true,
            specs_dir: PathBuf::from(DEFAULT_SPECS_DIR),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl LoaderConfig {
    /// Create configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::configuration(format!("Invalid TOML: {}", e)))
    }

    /// Default config file location, e.g. `~/.config/fixed-width-loader/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve configuration: explicit file, else the default file when it exists,
    /// else built-in defaults; environment overrides are applied last.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path().filter(|path| path.is_file()) {
                Some(path) => {
                    debug!("Loading configuration from {}", path.display());
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `FWL_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{}{}", ENV_PREFIX, suffix));

        if let Some(val) = var("DATABASE") {
            self.database_path = PathBuf::from(val);
        }
        if let Some(val) = var("SHORT_ROWS") {
            self.short_row_policy = val.parse()?;
        }
        if let Some(val) = var("SKIP_BLANK_LINES") {
            self.skip_blank_lines = val.trim().parse().map_err(|_| {
                Error::configuration(format!("Invalid skip_blank_lines: {}", val))
            })?;
        }
        if let Some(val) = var("SPECS_DIR") {
            self.specs_dir = PathBuf::from(val);
        }
        if let Some(val) = var("DATA_DIR") {
            self.data_dir = PathBuf::from(val);
        }

        Ok(())
    }

    /// Set the database path
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the short row policy
    pub fn with_short_row_policy(mut self, policy: ShortRowPolicy) -> Self {
        self.short_row_policy = policy;
        self
    }

    /// Keep empty data lines as records
    pub fn with_blank_lines(mut self) -> Self {
        self.skip_blank_lines = false;
        self
    }

    /// Set the ingestion directories
    pub fn with_directories(
        mut self,
        specs_dir: impl Into<PathBuf>,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        self.specs_dir = specs_dir.into();
        self.data_dir = data_dir.into();
        self
    }
}
