//! Command implementations for the fixed-width loader CLI
//!
//! Each subcommand lives in its own module; shared setup (logging,
//! configuration, loader construction, table output) is in [`shared`].

pub mod ingest;
pub mod load;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `load`: explicit spec and data files
/// - `ingest`: every spec and data file in two directories
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command()? {
        Commands::Load(load_args) => load::run_load(&args, load_args),
        Commands::Ingest(_) => ingest::run_ingest(&args),
    }
}
