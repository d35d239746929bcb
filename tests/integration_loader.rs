//! Integration tests for the loader with the bundled sample files
//!
//! These tests run the sample `specs/testformat1.csv` layout and its data file
//! end to end through a file-backed SQLite database.

use chrono::NaiveDate;
use fixed_width_loader::app::services::format_name;
use fixed_width_loader::app::services::ingest::discover;
use fixed_width_loader::app::services::table_store::{SqliteTableStore, TableStore};
use fixed_width_loader::config::ShortRowPolicy;
use fixed_width_loader::{Error, FormatLoader, LoaderConfig, StorageType};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const EXPECTED_GRID: &str = "\
name       | valid | count
---------- | ----- | -----
Foonyor    | true  |     1
Barzane    | false |   -12
Quuxitude  | true  |   103
";

fn sample_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

fn sample_spec() -> PathBuf {
    sample_dir("specs").join("testformat1.csv")
}

fn sample_data() -> PathBuf {
    sample_dir("data").join("testformat1_2015-06-28.txt")
}

fn file_loader(dir: &TempDir, config: LoaderConfig) -> FormatLoader<SqliteTableStore> {
    let config = config.with_database_path(dir.path().join("db").join("loader.db"));
    let store = SqliteTableStore::open(&config.database_path).expect("open database");
    FormatLoader::new(store, &config)
}

/// Spec and data filenames of the sample resolve to the same format
#[test]
fn test_sample_filenames_share_format_name() {
    assert_eq!(format_name::resolve(&sample_spec()).unwrap(), "testformat1");
    assert_eq!(format_name::resolve(&sample_data()).unwrap(), "testformat1");

    let data_name = format_name::resolve_data(&sample_data()).unwrap();
    assert_eq!(data_name.date, NaiveDate::from_ymd_opt(2015, 6, 28).unwrap());
}

/// Load the sample spec and data file, then print the table
#[test]
fn test_load_sample_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut loader = file_loader(&dir, LoaderConfig::default());

    let spec = loader.load_spec(&sample_spec()).unwrap();
    assert_eq!(spec.format_name, "testformat1");
    assert_eq!(spec.widths, vec![10, 1, 3]);
    let storage: Vec<&StorageType> = spec.columns.iter().map(|c| &c.storage_type).collect();
    assert_eq!(
        storage,
        vec![&StorageType::Text, &StorageType::Int, &StorageType::Int]
    );

    let report = loader.load_data(&sample_data()).unwrap();
    assert_eq!(report.rows_inserted, 3);
    assert_eq!(report.stats.lines_read, 3);

    let mut out = Vec::new();
    loader
        .store()
        .print_table("testformat1", &[10, 1, 3], &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_GRID);
}

/// Rows persist in the database file after the loader is dropped
#[test]
fn test_rows_persist_across_runs() {
    let dir = TempDir::new().unwrap();
    {
        let mut loader = file_loader(&dir, LoaderConfig::default());
        loader.load_spec(&sample_spec()).unwrap();
        loader.load_data(&sample_data()).unwrap();
    }

    // A fresh loader must re-read the spec before it can render
    let mut loader = file_loader(&dir, LoaderConfig::default());
    assert!(matches!(
        loader.render("testformat1"),
        Err(Error::FormatNotRegistered { .. })
    ));
    loader.load_spec(&sample_spec()).unwrap();
    assert_eq!(loader.render("testformat1").unwrap(), EXPECTED_GRID);
}

/// Re-parsing a spec keeps the first registered layout
#[test]
fn test_reloading_spec_keeps_registry_entry() {
    let dir = TempDir::new().unwrap();
    let mut loader = file_loader(&dir, LoaderConfig::default());

    let first = loader.load_spec(&sample_spec()).unwrap();
    let second = loader.load_spec(&sample_spec()).unwrap();

    assert!(first.newly_registered);
    assert!(!second.newly_registered);
    assert_eq!(first.columns, second.columns);
    assert_eq!(loader.registry().len(), 1);
}

/// Ingest the bundled sample directories
#[test]
fn test_ingest_sample_directories() {
    let dir = TempDir::new().unwrap();
    let plan = discover(&sample_dir("specs"), &sample_dir("data")).unwrap();
    assert!(plan.spec_files.contains(&sample_spec()));
    assert!(plan.data_files.contains(&sample_data()));

    let mut loader = file_loader(&dir, LoaderConfig::default());
    let summary = loader.ingest(&plan, |_| {}).unwrap();

    assert!(summary.loaded_formats().contains(&"testformat1"));
    assert_eq!(loader.render("testformat1").unwrap(), EXPECTED_GRID);
}

/// Short rows are rejected by default and padded when configured
#[test]
fn test_short_row_policies() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("testformat1_2016-01-01.txt");
    fs::write(&data, "Grault    1\n").unwrap();

    let mut strict = file_loader(&dir, LoaderConfig::default());
    strict.load_spec(&sample_spec()).unwrap();
    match strict.load_data(&data) {
        Err(Error::RowTooShort {
            line_number,
            expected,
            found,
            ..
        }) => {
            assert_eq!(line_number, 1);
            assert_eq!(expected, 14);
            assert_eq!(found, 11);
        }
        other => panic!("expected RowTooShort, got {:?}", other),
    }
    assert_eq!(strict.store().row_count("testformat1").unwrap(), 0);
    drop(strict);

    let padded_dir = TempDir::new().unwrap();
    let config = LoaderConfig::default().with_short_row_policy(ShortRowPolicy::Pad);
    let mut lenient = file_loader(&padded_dir, config);
    lenient.load_spec(&sample_spec()).unwrap();
    let report = lenient.load_data(&data).unwrap();
    assert_eq!(report.rows_inserted, 1);
    assert_eq!(report.stats.padded_rows, 1);
}

/// Data named after an unknown format fails before touching the database
#[test]
fn test_data_without_spec() {
    let dir = TempDir::new().unwrap();
    let mut loader = file_loader(&dir, LoaderConfig::default());

    match loader.load_data(&sample_data()) {
        Err(Error::FormatNotRegistered { format_name }) => assert_eq!(format_name, "testformat1"),
        other => panic!("expected FormatNotRegistered, got {:?}", other),
    }
    assert!(!loader.store().table_exists("testformat1").unwrap());
}
