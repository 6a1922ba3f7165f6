//! Hash map backend keyed by title.

use super::{filter_movies, log_load, BackendKind, MovieIndex};
use crate::catalog::{read_catalog, LoadReport};
use crate::models::{Criteria, Movie};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Records keyed by title alone.
///
/// Any two records sharing a title collapse to the later one, even when
/// their years differ. This is lossier than [`super::OrderedIndex`] on
/// purpose. Search order is unspecified.
#[derive(Debug, Default)]
pub struct HashedIndex {
    movies: HashMap<String, Movie>,
}

impl HashedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record stored under `title`, if any.
    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.get(title)
    }
}

impl MovieIndex for HashedIndex {
    fn kind(&self) -> BackendKind {
        BackendKind::Hashed
    }

    fn load(&mut self, path: &Path) -> LoadReport {
        let started = Instant::now();
        self.movies.clear();

        let report = read_catalog(path, |movie| {
            self.movies.insert(movie.title.clone(), movie);
        })
        .finish(self.movies.len(), started);
        log_load(self.kind(), &report);
        report
    }

    fn search(&self, criteria: &Criteria) -> Vec<&Movie> {
        let results = filter_movies(self.movies.values(), criteria);
        debug!("Hash Map search matched {} of {}", results.len(), self.movies.len());
        results
    }

    fn find_by_title(&self, title: &str) -> Vec<&Movie> {
        self.get(title).into_iter().collect()
    }

    fn len(&self) -> usize {
        self.movies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::fixtures::create_test_catalog;

    #[test]
    fn test_same_title_collapses_across_years() {
        let (_temp, path) = create_test_catalog(&[
            ("Heat", "1986", "101", "Drama"),
            ("Alien", "1979", "117", "Horror"),
            ("Heat", "1995", "170", "Crime"),
        ]);
        let mut index = HashedIndex::new();
        let report = index.load(&path);

        assert_eq!(report.accepted, 3);
        assert_eq!(report.stored, 2);
        let heat = index.get("Heat").unwrap();
        assert_eq!(heat.year, 1995);
        assert_eq!(heat.runtime, 170);
    }

    #[test]
    fn test_find_by_title() {
        let (_temp, path) = create_test_catalog(&[("Alien", "1979", "117", "Horror")]);
        let mut index = HashedIndex::new();
        index.load(&path);

        assert_eq!(index.find_by_title("Alien").len(), 1);
        assert!(index.find_by_title("alien").is_empty());
    }

    #[test]
    fn test_search_filters() {
        let (_temp, path) = create_test_catalog(&[
            ("Alien", "1979", "117", "Horror, Sci-Fi"),
            ("Aliens", "1986", "137", "Action, Sci-Fi"),
            ("Heat", "1995", "170", "Crime"),
        ]);
        let mut index = HashedIndex::new();
        index.load(&path);

        let mut titles: Vec<_> = index
            .search(&Criteria::new().with_genres(["sci-fi"]))
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        titles.sort_unstable();
        assert_eq!(titles, vec!["Alien", "Aliens"]);
    }
}
