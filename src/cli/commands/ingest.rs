//! Ingest command: directory-driven batch loading
//!
//! Discovers `*.csv` specs and `*.txt` data files, loads every spec and then
//! every data file, stopping at the first failure.

use super::shared::{
    RunStats, create_progress_bar, load_configuration, open_loader, print_tables, setup_logging,
};
use crate::Result;
use crate::app::services::ingest::discover;
use crate::cli::args::Args;
use std::time::Instant;
use tracing::{info, warn};

/// Run the ingest command
pub fn run_ingest(args: &Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args)?;
    args.validate()?;

    let config = load_configuration(args)?;
    let plan = discover(&config.specs_dir, &config.data_dir)?;

    if plan.is_empty() {
        warn!(
            "Nothing to ingest in {} and {}",
            config.specs_dir.display(),
            config.data_dir.display()
        );
        return Ok(RunStats {
            processing_time: start_time.elapsed(),
            ..Default::default()
        });
    }

    let mut loader = open_loader(&config)?;

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(plan.file_count() as u64, "Loading files"));

    let result = loader.ingest(&plan, |path| {
        if let Some(pb) = &progress {
            pb.set_message(
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            pb.inc(1);
        }
    });

    if let Some(pb) = &progress {
        match &result {
            Ok(_) => pb.finish_with_message("done"),
            Err(_) => pb.abandon(),
        }
    }
    let summary = result?;

    info!(
        "Loaded {} formats: {:?}",
        summary.loaded_formats().len(),
        summary.loaded_formats()
    );

    let tables_rendered = print_tables(
        &loader,
        &summary.loaded_formats(),
        args.quiet,
        &mut std::io::stdout().lock(),
    )?;

    Ok(RunStats {
        specs_loaded: summary.specs.len(),
        data_files_loaded: summary.loads.len(),
        rows_inserted: summary.total_rows(),
        tables_rendered,
        processing_time: start_time.elapsed(),
    })
}
