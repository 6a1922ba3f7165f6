//! Append-ordered vector backend.

use super::{filter_movies, log_load, BackendKind, MovieIndex};
use crate::catalog::{read_catalog, LoadReport};
use crate::models::{Criteria, Movie};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Keeps every accepted record in file order. Searches scan linearly.
#[derive(Debug, Default)]
pub struct SequentialIndex {
    movies: Vec<Movie>,
}

impl SequentialIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovieIndex for SequentialIndex {
    fn kind(&self) -> BackendKind {
        BackendKind::Sequential
    }

    fn load(&mut self, path: &Path) -> LoadReport {
        let started = Instant::now();
        self.movies.clear();

        let report = read_catalog(path, |movie| self.movies.push(movie))
            .finish(self.movies.len(), started);
        log_load(self.kind(), &report);
        report
    }

    fn search(&self, criteria: &Criteria) -> Vec<&Movie> {
        let results = filter_movies(&self.movies, criteria);
        debug!("Vector search matched {} of {}", results.len(), self.movies.len());
        results
    }

    fn find_by_title(&self, title: &str) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.title == title).collect()
    }

    fn len(&self) -> usize {
        self.movies.len()
    }
}
