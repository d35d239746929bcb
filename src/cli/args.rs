//! Command-line argument definitions for the fixed-width loader
//!
//! Global options (database, config file, short row policy, verbosity) apply to
//! every subcommand and are layered on top of the file and environment
//! configuration.

use crate::config::{LoaderConfig, ShortRowPolicy};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the fixed-width loader
///
/// Loads fixed-width text files into SQLite tables using CSV layout specs.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fixed-width-loader",
    version,
    about = "Load fixed-width data files into SQLite tables described by CSV specs",
    long_about = "Reads CSV layout specifications (column name, width, datatype), creates one \
                  SQLite table per format and loads fixed-width data files named \
                  <format>_<YYYY-MM-DD>.txt into the matching table. Each loaded table is \
                  printed as an aligned grid."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SQLite database file
    ///
    /// Created together with its parent directory when missing.
    #[arg(
        long = "database",
        value_name = "PATH",
        global = true,
        help = "SQLite database file (default: db/fixed_width.db)"
    )]
    pub database: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/fixed-width-loader/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// How to treat data lines shorter than the layout
    #[arg(
        long = "short-rows",
        value_enum,
        global = true,
        help = "Policy for data lines shorter than the layout width"
    )]
    pub short_rows: Option<ShortRowPolicy>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the rendered tables. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors and tables",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands for the loader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load spec files and data files given on the command line
    Load(LoadArgs),
    /// Load every spec and data file found in two directories
    Ingest(IngestArgs),
}

/// Arguments for the load command
#[derive(Debug, Clone, ClapArgs)]
pub struct LoadArgs {
    /// Spec files, loaded before any data file
    #[arg(
        short = 's',
        long = "spec",
        value_name = "FILE",
        required = true,
        num_args = 1..,
        help = "CSV spec file(s) named <format>.csv"
    )]
    pub specs: Vec<PathBuf>,

    /// Data files, loaded in the order given
    #[arg(
        short = 'd',
        long = "data",
        value_name = "FILE",
        num_args = 1..,
        help = "Data file(s) named <format>_<YYYY-MM-DD>.txt"
    )]
    pub data: Vec<PathBuf>,
}

/// Arguments for the ingest command
#[derive(Debug, Clone, ClapArgs)]
pub struct IngestArgs {
    /// Directory scanned for `*.csv` spec files
    #[arg(
        long = "specs-dir",
        value_name = "DIR",
        help = "Directory containing spec files (default: specs)"
    )]
    pub specs_dir: Option<PathBuf>,

    /// Directory scanned for `*.txt` data files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        help = "Directory containing data files (default: data)"
    )]
    pub data_dir: Option<PathBuf>,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Result<&Commands> {
        self.command
            .as_ref()
            .ok_or_else(|| Error::configuration("No command specified"))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Apply CLI overrides on top of a resolved configuration
    pub fn apply_to(&self, config: &mut LoaderConfig) {
        if let Some(database) = &self.database {
            config.database_path = database.clone();
        }
        if let Some(policy) = self.short_rows {
            config.short_row_policy = policy;
        }
        if let Some(Commands::Ingest(ingest)) = &self.command {
            if let Some(specs_dir) = &ingest.specs_dir {
                config.specs_dir = specs_dir.clone();
            }
            if let Some(data_dir) = &ingest.data_dir {
                config.data_dir = data_dir.clone();
            }
        }
    }

    /// Validate argument consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}
