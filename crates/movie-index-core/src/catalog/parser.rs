//! Line splitting and record validation.

use crate::config::CatalogLayout;
use crate::models::Movie;
use std::fmt;

/// Why a catalog line did not produce a [`Movie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRejection {
    /// Fewer than [`CatalogLayout::MIN_FIELDS`] fields.
    TooFewFields { found: usize },
    /// The field holds the missing-value marker.
    MissingValue { field: &'static str },
    /// The field is present but not an integer.
    InvalidInteger { field: &'static str, value: String },
}

impl fmt::Display for RecordRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRejection::TooFewFields { found } => write!(
                f,
                "expected at least {} fields, found {}",
                CatalogLayout::MIN_FIELDS,
                found
            ),
            RecordRejection::MissingValue { field } => write!(f, "missing {}", field),
            RecordRejection::InvalidInteger { field, value } => {
                write!(f, "invalid {} {:?}", field, value)
            }
        }
    }
}

/// Split a line on tabs.
///
/// Every tab starts a new field, so a trailing tab yields a trailing empty
/// field and a line without tabs yields exactly one field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(CatalogLayout::FIELD_SEPARATOR).collect()
}

/// Build a [`Movie`] from one catalog line.
pub fn parse_record(line: &str) -> Result<Movie, RecordRejection> {
    let fields = split_fields(line);
    if fields.len() < CatalogLayout::MIN_FIELDS {
        return Err(RecordRejection::TooFewFields {
            found: fields.len(),
        });
    }

    let year = parse_integer(fields[CatalogLayout::YEAR_FIELD], "year")?;
    let runtime = parse_integer(fields[CatalogLayout::RUNTIME_FIELD], "runtime")?;
    let genre = fields.get(CatalogLayout::GENRE_FIELD).copied().unwrap_or("");

    Ok(Movie::new(
        fields[CatalogLayout::TITLE_FIELD],
        year,
        runtime,
        genre,
    ))
}

fn parse_integer(value: &str, field: &'static str) -> Result<i32, RecordRejection> {
    if value == CatalogLayout::MISSING_VALUE {
        return Err(RecordRejection::MissingValue { field });
    }
    value
        .trim()
        .parse()
        .map_err(|_| RecordRejection::InvalidInteger {
            field,
            value: value.to_string(),
        })
}
