//! Column line parsing for spec files
//!
//! Each column line has exactly three comma-separated fields: the column name,
//! its width in characters and its declared type. Fields are trimmed.

use crate::app::models::{ColumnSpec, DeclaredType};
use crate::constants::{RESERVED_TYPE_KEYWORDS, SPEC_FIELD_COUNT, SPEC_FIELD_SEPARATOR};
use crate::{Error, Result};

/// Parse one `name,width,type` line into a column spec
pub fn parse_column_line(file: &str, line_number: usize, line: &str) -> Result<ColumnSpec> {
    let fields: Vec<&str> = line.split(SPEC_FIELD_SEPARATOR).map(str::trim).collect();

    if fields.len() != SPEC_FIELD_COUNT {
        return Err(Error::malformed_spec_line(
            file,
            line_number,
            format!(
                "expected {} comma-separated fields (name,width,type), found {}",
                SPEC_FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(Error::malformed_spec_line(
            file,
            line_number,
            "column name is empty",
        ));
    }

    let width = parse_width(file, line_number, fields[1])?;
    let declared_type = parse_declared_type(file, line_number, fields[2])?;

    Ok(ColumnSpec::new(name, width, declared_type))
}

fn parse_width(file: &str, line_number: usize, raw: &str) -> Result<usize> {
    let width = raw.parse::<usize>().map_err(|e| {
        Error::malformed_spec_line(
            file,
            line_number,
            format!("width '{}' is not a valid integer ({})", raw, e),
        )
    })?;

    if width == 0 {
        return Err(Error::malformed_spec_line(
            file,
            line_number,
            "width must be positive",
        ));
    }

    Ok(width)
}

fn parse_declared_type(file: &str, line_number: usize, raw: &str) -> Result<DeclaredType> {
    let declared_type = DeclaredType::parse(raw);

    // Unknown types go into CREATE TABLE verbatim, so they must be plain identifiers
    if let DeclaredType::Other(name) = &declared_type {
        if !is_type_identifier(name) {
            return Err(Error::malformed_spec_line(
                file,
                line_number,
                format!("type '{}' is not a valid type name", name),
            ));
        }
        if is_reserved_keyword(name) {
            return Err(Error::malformed_spec_line(
                file,
                line_number,
                format!("type '{}' is a reserved SQL keyword", name),
            ));
        }
    }

    Ok(declared_type)
}

fn is_type_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_TYPE_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name))
}
