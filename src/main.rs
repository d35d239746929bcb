use anyhow::Context;
use clap::Parser;
use fixed_width_loader::cli::{
    args::Args,
    commands::{self, shared::print_summary},
};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let quiet = args.quiet;
    let result = commands::run(args).context("Loading failed");

    match result {
        Ok(stats) => {
            if !quiet {
                print_summary(&stats);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Fixed-Width Loader - load fixed-width text files into SQLite");
    println!("============================================================");
    println!();
    println!("Reads CSV layout specs (column name, width, datatype), creates one table");
    println!("per format and loads data files named <format>_<YYYY-MM-DD>.txt into it.");
    println!();
    println!("USAGE:");
    println!("    fixed-width-loader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load        Load the given spec files, then the given data files");
    println!("    ingest      Load every spec and data file found in two directories");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    --database <PATH>        SQLite database file (default: db/fixed_width.db)");
    println!("    -c, --config <FILE>      Configuration file (TOML)");
    println!("    --short-rows <POLICY>    reject (default) or pad short data lines");
    println!("    -v, --verbose            Increase logging verbosity");
    println!("    -q, --quiet              Only print errors and tables");
    println!("    -h, --help               Show help information");
    println!("    -V, --version            Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Load one format and print its table:");
    println!(
        "    fixed-width-loader load --spec specs/testformat1.csv --data data/testformat1_2015-06-28.txt"
    );
    println!();
    println!("    # Load everything under specs/ and data/:");
    println!("    fixed-width-loader ingest --specs-dir specs --data-dir data");
    println!();
    println!("For detailed help on any command, use:");
    println!("    fixed-width-loader <COMMAND> --help");
}
