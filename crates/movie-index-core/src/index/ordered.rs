//! Ordered map backend keyed by `(title, year)`.

use super::{filter_movies, log_load, BackendKind, MovieIndex};
use crate::catalog::{read_catalog, LoadReport};
use crate::models::{Criteria, Movie};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

type TitleYear = (String, i32);

/// Records ordered by title, then year.
///
/// A later record with the same title and year replaces the earlier one.
/// Searches visit keys in ascending order, so results are title-major,
/// year-minor regardless of file order.
#[derive(Debug, Default)]
pub struct OrderedIndex {
    movies: BTreeMap<TitleYear, Movie>,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records whose title starts with `prefix`, in key order.
    pub fn titles_starting_with(&self, prefix: &str) -> Vec<&Movie> {
        let start = Bound::Included((prefix.to_string(), i32::MIN));
        self.movies
            .range((start, Bound::Unbounded))
            .take_while(|((title, _), _)| title.starts_with(prefix))
            .map(|(_, movie)| movie)
            .collect()
    }
}

impl MovieIndex for OrderedIndex {
    fn kind(&self) -> BackendKind {
        BackendKind::Ordered
    }

    fn load(&mut self, path: &Path) -> LoadReport {
        let started = Instant::now();
        self.movies.clear();

        let report = read_catalog(path, |movie| {
            self.movies.insert((movie.title.clone(), movie.year), movie);
        })
        .finish(self.movies.len(), started);
        log_load(self.kind(), &report);
        report
    }

    fn search(&self, criteria: &Criteria) -> Vec<&Movie> {
        let results = filter_movies(self.movies.values(), criteria);
        debug!("B-Tree search matched {} of {}", results.len(), self.movies.len());
        results
    }

    fn find_by_title(&self, title: &str) -> Vec<&Movie> {
        let title = title.to_string();
        self.movies
            .range((title.clone(), i32::MIN)..=(title, i32::MAX))
            .map(|(_, movie)| movie)
            .collect()
    }

    fn len(&self) -> usize {
        self.movies.len()
    }
}
