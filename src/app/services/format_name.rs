//! Format name derivation from spec and data file paths
//!
//! A spec file `specs/<name>.csv` and its data files `data/<name>_<YYYY-MM-DD>.txt`
//! must resolve to the same format name. Data filenames are matched structurally
//! and rejected when the date suffix is missing or not a real calendar date.

use crate::constants::{
    DATA_FILENAME_DATE_FORMAT, DATA_FILENAME_PATTERN, SPEC_FILE_EXTENSION,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DATA_FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DATA_FILENAME_PATTERN).expect("data filename pattern is a valid regex")
});

/// Components of a data filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFileName {
    pub format_name: String,
    pub date: NaiveDate,
}

/// True when the path carries the spec file extension
pub fn is_spec_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == SPEC_FILE_EXTENSION)
}

/// Resolve the format name for either kind of file, chosen by extension
pub fn resolve(path: &Path) -> Result<String> {
    if is_spec_path(path) {
        resolve_spec(path)
    } else {
        resolve_data(path).map(|parsed| parsed.format_name)
    }
}

/// Resolve the format name of a spec file: the basename without `.csv`
pub fn resolve_spec(path: &Path) -> Result<String> {
    let basename = basename(path)?;
    let suffix = format!(".{}", SPEC_FILE_EXTENSION);

    match basename.strip_suffix(&suffix) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(Error::malformed_filename(
            path.display().to_string(),
            format!("expected '<format>{}'", suffix),
        )),
    }
}

/// Resolve the format name and date of a data file named `<format>_<YYYY-MM-DD>.txt`
pub fn resolve_data(path: &Path) -> Result<DataFileName> {
    let basename = basename(path)?;

    let captures = DATA_FILENAME_RE.captures(basename).ok_or_else(|| {
        Error::malformed_filename(
            path.display().to_string(),
            "expected '<format>_<YYYY-MM-DD>.txt'",
        )
    })?;

    let date_str = &captures["date"];
    let date = NaiveDate::parse_from_str(date_str, DATA_FILENAME_DATE_FORMAT).map_err(|e| {
        Error::malformed_filename(
            path.display().to_string(),
            format!("'{}' is not a valid date ({})", date_str, e),
        )
    })?;

    Ok(DataFileName {
        format_name: captures["name"].to_string(),
        date,
    })
}

fn basename(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::malformed_filename(
                path.display().to_string(),
                "path has no UTF-8 file name",
            )
        })
}
