//! Catalog file reader.

use super::parser::parse_record;
use crate::config::CatalogLayout;
use crate::models::Movie;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// Outcome of loading a catalog into a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Whether the catalog file could be opened.
    pub opened: bool,
    /// Data lines read, header excluded.
    pub lines_read: usize,
    /// Lines that produced a record.
    pub accepted: usize,
    /// Lines dropped as malformed.
    pub skipped: usize,
    /// Records held by the backend after duplicate keys collapsed.
    pub stored: usize,
    /// Wall time of the load in milliseconds.
    pub load_time_ms: f64,
}

impl LoadReport {
    /// Records lost to the backend's duplicate-key policy.
    pub fn collapsed(&self) -> usize {
        self.accepted.saturating_sub(self.stored)
    }

    pub(crate) fn finish(mut self, stored: usize, started: Instant) -> Self {
        self.stored = stored;
        self.load_time_ms = started.elapsed().as_secs_f64() * 1000.0;
        self
    }
}

/// Read a catalog file, passing every accepted record to `sink` in file order.
///
/// The header line is discarded. Malformed lines are logged at debug level
/// and counted, never returned as errors. A file that cannot be opened is
/// treated as empty and reported with `opened == false`.
pub fn read_catalog<F>(path: &Path, mut sink: F) -> LoadReport
where
    F: FnMut(Movie),
{
    let mut report = LoadReport::default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("Could not open catalog {}: {}", path.display(), e);
            return report;
        }
    };
    report.opened = true;

    let reader = BufReader::new(file);
    for (index, raw) in reader
        .split(b'\n')
        .enumerate()
        .skip(CatalogLayout::HEADER_LINES)
    {
        let line_number = index + 1;
        let mut raw = match raw {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Stopped reading {} at line {}: {}",
                    path.display(),
                    line_number,
                    e
                );
                break;
            }
        };
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        report.lines_read += 1;

        let line = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = line {
            debug!("Line {} is not valid UTF-8, decoding lossily", line_number);
        }

        match parse_record(&line) {
            Ok(movie) => {
                report.accepted += 1;
                sink(movie);
            }
            Err(rejection) => {
                debug!("Skipping line {}: {}: {:?}", line_number, rejection, line);
                report.skipped += 1;
            }
        }
    }

    report
}
