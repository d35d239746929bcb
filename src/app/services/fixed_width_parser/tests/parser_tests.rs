//! Tests for the fixed-width data parser

use super::*;
use crate::Error;
use crate::app::services::fixed_width_parser::FixedWidthParser;
use crate::config::ShortRowPolicy;
use chrono::NaiveDate;
use std::path::Path;

#[test]
fn test_parse_sample_file() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(&dir, "testformat1_2015-06-28.txt", &create_test_data());
    let registry = create_test_registry();

    let result = FixedWidthParser::default()
        .parse_data(&path, &registry)
        .unwrap();

    assert_eq!(result.format_name, "testformat1");
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2015, 6, 28).unwrap());
    assert_eq!(
        result.rows,
        vec![
            vec!["Foonyor", "1", "1"],
            vec!["Barzane", "0", "-12"],
            vec!["Quuxitude", "1", "103"],
        ]
    );
    assert_eq!(result.stats.lines_read, 3);
    assert_eq!(result.stats.rows_parsed, 3);
    assert!(result.stats.is_clean());
}

#[test]
fn test_trimmed_fields_scenario() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(&dir, "testformat1_2015-06-28.txt", "Foonyor   11  \n");
    let registry = create_test_registry();

    let result = FixedWidthParser::default()
        .parse_data(&path, &registry)
        .unwrap();

    assert_eq!(result.rows, vec![vec!["Foonyor", "1", "1"]]);
}

#[test]
fn test_unregistered_format() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(&dir, "unknown_2015-06-28.txt", &create_test_data());
    let registry = create_test_registry();

    let result = FixedWidthParser::default().parse_data(&path, &registry);

    match result {
        Err(Error::FormatNotRegistered { format_name }) => assert_eq!(format_name, "unknown"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_empty_registry_rejects_data() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(&dir, "testformat1_2015-06-28.txt", &create_test_data());

    let result = FixedWidthParser::default().parse_data(&path, &FormatRegistry::new());
    assert!(matches!(result, Err(Error::FormatNotRegistered { .. })));
}

#[test]
fn test_missing_file_is_invalid() {
    let registry = create_test_registry();
    let result = FixedWidthParser::default()
        .parse_data(Path::new("/nonexistent/testformat1_2015-06-28.txt"), &registry);

    assert!(matches!(result, Err(Error::InvalidFile { .. })));
}

#[test]
fn test_malformed_data_filename() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(&dir, "testformat1.txt", &create_test_data());
    let registry = create_test_registry();

    let result = FixedWidthParser::default().parse_data(&path, &registry);
    assert!(matches!(result, Err(Error::MalformedFilename { .. })));
}

#[test]
fn test_short_row_rejected_by_default() {
    let dir = TempDir::new().unwrap();
    let path = write_data_file(
        &dir,
        "testformat1_2015-06-28.txt",
        "Foonyor   1  1\nBarzane   0\n",
    );
    let registry = create_test_registry();

    let result = FixedWidthParser::default().parse_data(&path, &registry);

    match result {
        Err(Error::RowTooShort {
            line_number,
            expected,
            found,
            ..
        }) => {
            assert_eq!(line_number, 2);
            assert_eq!(expected, 14);
            assert_eq!(found, 11);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_short_row_padded_when_lenient() {
    let parser = FixedWidthParser::new(ShortRowPolicy::Pad, true);
    let (rows, stats) = parser
        .parse_content("inline", "Foonyor   1  1\nBarzane   0\n", &[10, 1, 3])
        .unwrap();

    assert_eq!(rows[1], vec!["Barzane", "0", ""]);
    assert_eq!(stats.padded_rows, 1);
    assert!(!stats.is_clean());
}

#[test]
fn test_exact_width_line_has_no_out_of_range_slice() {
    let parser = FixedWidthParser::default();
    let (rows, stats) = parser
        .parse_content("inline", "abcdefghij1xyz", &[10, 1, 3])
        .unwrap();

    assert_eq!(rows, vec![vec!["abcdefghij", "1", "xyz"]]);
    assert!(stats.is_clean());
}

#[test]
fn test_overlong_line_ignores_tail() {
    let parser = FixedWidthParser::default();
    let (rows, stats) = parser
        .parse_content("inline", "Foonyor   1  1 trailing junk", &[10, 1, 3])
        .unwrap();

    assert_eq!(rows, vec![vec!["Foonyor", "1", "1"]]);
    assert_eq!(stats.overlong_lines, 1);
}

#[test]
fn test_blank_lines_skipped_by_default() {
    let parser = FixedWidthParser::default();
    let (rows, stats) = parser
        .parse_content("inline", "Foonyor   1  1\n\nBarzane   0-12\n", &[10, 1, 3])
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(stats.lines_read, 3);
    assert_eq!(stats.blank_lines_skipped, 1);
}

#[test]
fn test_whitespace_only_lines_skipped_by_default() {
    let parser = FixedWidthParser::default();
    let (rows, stats) = parser
        .parse_content("inline", "Foonyor   1  1\n   \n\t\nBarzane   0-12\n  ", &[10, 1, 3])
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(stats.lines_read, 5);
    assert_eq!(stats.blank_lines_skipped, 3);
}

#[test]
fn test_blank_line_is_short_when_not_skipped() {
    let parser = FixedWidthParser::new(ShortRowPolicy::Reject, false);
    let result = parser.parse_content("inline", "Foonyor   1  1\n\n", &[10, 1, 3]);

    assert!(matches!(
        result,
        Err(Error::RowTooShort { line_number: 2, .. })
    ));
}

#[test]
fn test_crlf_line_endings() {
    let parser = FixedWidthParser::default();
    let (rows, stats) = parser
        .parse_content("inline", "Foonyor   1  1\r\nBarzane   0-12\r\n", &[10, 1, 3])
        .unwrap();

    assert_eq!(rows[1], vec!["Barzane", "0", "-12"]);
    assert!(stats.is_clean());
}

#[test]
fn test_empty_file_yields_no_rows() {
    let parser = FixedWidthParser::default();
    let (rows, stats) = parser.parse_content("inline", "", &[10, 1, 3]).unwrap();

    assert!(rows.is_empty());
    assert_eq!(stats, super::super::ParseStats::default());
}

#[test]
fn test_round_trip_widths_match_spec() {
    let registry = create_test_registry();
    let widths = registry.widths("testformat1").unwrap();

    let parser = FixedWidthParser::default();
    let (rows, _) = parser
        .parse_content("inline", &create_test_data(), &widths)
        .unwrap();

    for row in &rows {
        assert_eq!(row.len(), widths.len());
    }
    assert_eq!(widths, vec![10, 1, 3]);
}
