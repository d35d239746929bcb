//! Shared components for CLI commands
//!
//! Logging setup, configuration layering, loader construction and table output
//! used by both the `load` and `ingest` commands.

use crate::app::services::loader::FormatLoader;
use crate::app::services::table_store::{SqliteTableStore, TableStore};
use crate::cli::args::Args;
use crate::config::LoaderConfig;
use crate::{Error, Result};
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::io::Write;
use tracing::{debug, info};

/// Run statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of spec files loaded
    pub specs_loaded: usize,
    /// Number of data files loaded
    pub data_files_loaded: usize,
    /// Number of rows inserted across all tables
    pub rows_inserted: usize,
    /// Number of tables printed
    pub tables_rendered: usize,
    /// Total run time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fixed_width_loader={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<LoaderConfig> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, checking the default location"),
    }

    let config = LoaderConfig::load(args.config_file.as_deref())?;
    Ok(apply_cli_overrides(config, args))
}

/// Apply CLI argument overrides on top of file and environment settings
pub fn apply_cli_overrides(mut config: LoaderConfig, args: &Args) -> LoaderConfig {
    args.apply_to(&mut config);
    debug!("Resolved configuration: {:?}", config);
    config
}

/// Open the configured database and wrap it in a loader
pub fn open_loader(config: &LoaderConfig) -> Result<FormatLoader<SqliteTableStore>> {
    let store = SqliteTableStore::open(&config.database_path)?;
    info!("Using database {}", config.database_path.display());
    Ok(FormatLoader::new(store, config))
}

/// Print the grid of each format to `out`, with a coloured heading unless quiet
pub fn print_tables<S: TableStore>(
    loader: &FormatLoader<S>,
    format_names: &[&str],
    quiet: bool,
    out: &mut dyn Write,
) -> Result<usize> {
    let write_err = |e| Error::io("Failed to write table output", e);

    for format_name in format_names {
        let grid = loader.render(format_name)?;
        if !quiet {
            writeln!(out, "\n{}", format!("Table {}", format_name).bold().cyan())
                .map_err(write_err)?;
        }
        out.write_all(grid.as_bytes()).map_err(write_err)?;
    }

    Ok(format_names.len())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print the run summary to stderr
pub fn print_summary(stats: &RunStats) {
    eprintln!();
    eprintln!("{}", "Load complete".green().bold());
    eprintln!("   • Spec files loaded: {}", stats.specs_loaded);
    eprintln!("   • Data files loaded: {}", stats.data_files_loaded);
    eprintln!("   • Rows inserted: {}", stats.rows_inserted);
    eprintln!("   • Tables printed: {}", stats.tables_rendered);
    eprintln!("   • Time: {}", HumanDuration(stats.processing_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.specs_loaded, 0);
        assert_eq!(stats.rows_inserted, 0);
    }

    #[test]
    fn test_print_tables_quiet_writes_only_grids() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let spec = dir.path().join("pair.csv");
        let data = dir.path().join("pair_2021-03-04.txt");
        fs::write(&spec, "\"column name\",width,datatype\nkey,3,TEXT\nn,2,INTEGER\n").unwrap();
        fs::write(&data, "abc 7\n").unwrap();

        let store = SqliteTableStore::open_in_memory().unwrap();
        let mut loader = FormatLoader::new(store, &LoaderConfig::default());
        loader.load_spec(&spec).unwrap();
        loader.load_data(&data).unwrap();

        let mut out = Vec::new();
        let printed = print_tables(&loader, &["pair"], true, &mut out).unwrap();
        assert_eq!(printed, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "key | n \n--- | --\nabc |  7\n");

        let mut out = Vec::new();
        print_tables(&loader, &["pair"], false, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\nTable pair\n"));
    }

    #[test]
    fn test_cli_overrides_win_over_environment() {
        use clap::Parser;
        use std::path::PathBuf;

        let args = Args::try_parse_from([
            "fixed-width-loader",
            "--database",
            "custom.db",
            "ingest",
            "--data-dir",
            "incoming",
        ])
        .unwrap();

        let mut config = LoaderConfig::default();
        config
            .apply_overrides_from(|name| match name {
                "FWL_DATABASE" => Some("env.db".to_string()),
                "FWL_SPECS_DIR" => Some("env_specs".to_string()),
                _ => None,
            })
            .unwrap();

        let config = apply_cli_overrides(config, &args);
        assert_eq!(config.database_path, PathBuf::from("custom.db"));
        assert_eq!(config.data_dir, PathBuf::from("incoming"));
        // Settings without a flag keep the environment value
        assert_eq!(config.specs_dir, PathBuf::from("env_specs"));
    }
}
