//! Holder for the single active index.
//!
//! The selector owns one backend at a time and the catalog path it was loaded
//! from. Switching builds and loads the replacement before the old backend is
//! dropped, so a populated index is available at every point.

use crate::catalog::LoadReport;
use crate::config::IndexConfig;
use crate::index::{create_index, BackendKind, MovieIndex};
use crate::models::{Criteria, Movie};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Result of a search through the selector.
#[derive(Debug)]
pub struct SearchResult<'a> {
    /// Matching records, borrowed from the active index.
    pub movies: Vec<&'a Movie>,
    /// Backend that answered.
    pub backend: BackendKind,
    /// Query time in milliseconds.
    pub query_time_ms: f64,
}

/// Outcome of [`IndexSelector::switch_to`].
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    /// The requested backend was already active; nothing was rebuilt.
    AlreadyActive(BackendKind),
    Switched {
        from: BackendKind,
        to: BackendKind,
        report: LoadReport,
    },
}

/// Owns exactly one active [`MovieIndex`].
pub struct IndexSelector {
    active: Box<dyn MovieIndex>,
    catalog_path: PathBuf,
    last_report: LoadReport,
}

impl IndexSelector {
    /// Build and load the configured backend.
    pub fn new(config: &IndexConfig) -> Self {
        Self::with_backend(config.backend, &config.catalog_path)
    }

    /// Build and load `kind` from `catalog_path`.
    pub fn with_backend(kind: BackendKind, catalog_path: impl Into<PathBuf>) -> Self {
        let catalog_path = catalog_path.into();
        let (active, last_report) = build(kind, &catalog_path);
        Self {
            active,
            catalog_path,
            last_report,
        }
    }

    pub fn active_kind(&self) -> BackendKind {
        self.active.kind()
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Report from the most recent load of the active backend.
    pub fn last_report(&self) -> &LoadReport {
        &self.last_report
    }

    /// The active index.
    pub fn index(&self) -> &dyn MovieIndex {
        self.active.as_ref()
    }

    /// Replace the active backend with a freshly loaded `kind`.
    pub fn switch_to(&mut self, kind: BackendKind) -> SwitchOutcome {
        let from = self.active.kind();
        if from == kind {
            debug!("Data structure is already set to {}", kind);
            return SwitchOutcome::AlreadyActive(kind);
        }

        let (replacement, report) = build(kind, &self.catalog_path);
        self.active = replacement;
        self.last_report = report.clone();
        info!("Switched data structure from {} to {}", from, kind);

        SwitchOutcome::Switched {
            from,
            to: kind,
            report,
        }
    }

    /// Reload the active backend from the catalog path.
    pub fn reload(&mut self) -> &LoadReport {
        self.last_report = self.active.load(&self.catalog_path);
        &self.last_report
    }

    /// Search the active backend.
    pub fn search(&self, criteria: &Criteria) -> SearchResult<'_> {
        let start = Instant::now();
        let movies = self.active.search(criteria);
        let query_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        SearchResult {
            movies,
            backend: self.active.kind(),
            query_time_ms,
        }
    }
}

impl std::fmt::Debug for IndexSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexSelector")
            .field("active", &self.active.kind())
            .field("records", &self.active.len())
            .field("catalog_path", &self.catalog_path)
            .finish()
    }
}

fn build(kind: BackendKind, catalog_path: &Path) -> (Box<dyn MovieIndex>, LoadReport) {
    let mut index = create_index(kind);
    let report = index.load(catalog_path);
    (index, report)
}
