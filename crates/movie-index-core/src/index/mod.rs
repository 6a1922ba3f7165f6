//! Interchangeable in-memory movie indexes.
//!
//! This module provides:
//! - The [`MovieIndex`] capability shared by every backend
//! - Three backends with different storage organizations
//! - [`BackendKind`] and [`create_index`] for choosing a backend at runtime
//!
//! Backends differ in how duplicate keys collapse on load:
//!
//! | Backend      | Key              | Duplicates kept            |
//! |--------------|------------------|----------------------------|
//! | `Sequential` | none             | all                        |
//! | `Ordered`    | `(title, year)`  | last per title and year    |
//! | `Hashed`     | `title`          | last per title             |
//!
//! The hashed backend therefore reports fewer records than the others for
//! catalogs with remakes or re-releases. This is part of the contract.

#[cfg(test)]
pub(crate) mod fixtures;
mod hashed;
mod ordered;
mod sequential;

pub use hashed::HashedIndex;
pub use ordered::OrderedIndex;
pub use sequential::SequentialIndex;

use crate::catalog::LoadReport;
use crate::error::MovieIndexError;
use crate::models::{Criteria, Movie};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Storage organization of a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Append-ordered vector.
    #[default]
    Sequential,
    /// Ordered map keyed by `(title, year)`.
    Ordered,
    /// Hash map keyed by title.
    Hashed,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [
        BackendKind::Sequential,
        BackendKind::Ordered,
        BackendKind::Hashed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Sequential => "sequential",
            BackendKind::Ordered => "ordered",
            BackendKind::Hashed => "hashed",
        }
    }

    /// Name shown to users choosing a data structure.
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendKind::Sequential => "Vector",
            BackendKind::Ordered => "B-Tree",
            BackendKind::Hashed => "Hash Map",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BackendKind {
    type Err = MovieIndexError;

    /// Accepts either the identifier or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BackendKind::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(wanted)
                    || kind.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| MovieIndexError::InvalidBackend(s.to_string()))
    }
}

/// Load-and-query capability implemented by every backend.
///
/// An index starts empty, is fully replaced by each [`load`](MovieIndex::load),
/// and answers any number of [`search`](MovieIndex::search) calls. Results
/// borrow from the index, so none can outlive the next `load`.
pub trait MovieIndex: Send + Sync {
    /// The organization this index uses.
    fn kind(&self) -> BackendKind;

    /// Replace all records with those parsed from the catalog at `path`.
    ///
    /// Never fails: malformed lines are skipped and an unopenable file leaves
    /// the index empty. The returned report says which happened.
    fn load(&mut self, path: &Path) -> LoadReport;

    /// Every record satisfying `criteria`, in the backend's iteration order.
    fn search(&self, criteria: &Criteria) -> Vec<&Movie>;

    /// Records whose title equals `title` exactly.
    fn find_by_title(&self, title: &str) -> Vec<&Movie>;

    /// Number of records currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Create an empty index of the given kind.
pub fn create_index(kind: BackendKind) -> Box<dyn MovieIndex> {
    match kind {
        BackendKind::Sequential => Box::new(SequentialIndex::new()),
        BackendKind::Ordered => Box::new(OrderedIndex::new()),
        BackendKind::Hashed => Box::new(HashedIndex::new()),
    }
}

/// Apply `criteria` to an iterator of records, preserving its order.
pub(crate) fn filter_movies<'a, I>(movies: I, criteria: &Criteria) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    movies
        .into_iter()
        .filter(|movie| criteria.matches(movie))
        .collect()
}

pub(crate) fn log_load(kind: BackendKind, report: &LoadReport) {
    info!(
        "Loaded {} movies into {} ({} accepted, {} skipped) in {:.1}ms",
        report.stored,
        kind.display_name(),
        report.accepted,
        report.skipped,
        report.load_time_ms
    );
}
