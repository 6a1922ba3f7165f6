//! Query criteria and their construction from user-entered text.

use super::movie::Movie;
use crate::config::SearchConfig;
use crate::error::{MovieIndexError, Result};
use crate::genre;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Filter applied by every backend's `search`.
///
/// All bounds are inclusive. The default is maximally permissive: integer
/// extremes on every bound and no required genres. Inverted bounds are not
/// rejected; they simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub min_year: i32,
    pub max_year: i32,
    pub min_runtime: i32,
    pub max_runtime: i32,
    /// Genres a movie must carry, all of them (AND).
    pub genres: Vec<String>,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            min_year: i32::MIN,
            max_year: i32::MAX,
            min_runtime: i32::MIN,
            max_runtime: i32::MAX,
            genres: Vec::new(),
        }
    }
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn with_runtime_range(mut self, min_runtime: i32, max_runtime: i32) -> Self {
        self.min_runtime = min_runtime;
        self.max_runtime = max_runtime;
        self
    }

    /// Require every listed genre. Any number is accepted here; the
    /// selectable cap lives in [`CriteriaInput`].
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// The predicate shared by all backends.
    pub fn matches(&self, movie: &Movie) -> bool {
        (self.min_year..=self.max_year).contains(&movie.year)
            && (self.min_runtime..=self.max_runtime).contains(&movie.runtime)
            && genre::matches(&movie.genre, self.genres.as_slice())
    }
}

/// Raw text bounds as typed into a search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaInput {
    pub min_year: String,
    pub max_year: String,
    pub min_runtime: String,
    pub max_runtime: String,
    pub genres: Vec<String>,
}

impl CriteriaInput {
    /// Convert into [`Criteria`].
    ///
    /// Blank bounds stay unbounded. A non-blank bound that is not an integer
    /// fails validation. Genres past [`SearchConfig::MAX_GENRES`] are dropped.
    pub fn into_criteria(self) -> Result<Criteria> {
        let mut genres = self.genres;
        if genres.len() > SearchConfig::MAX_GENRES {
            warn!(
                "Truncating {} selected genres to {}",
                genres.len(),
                SearchConfig::MAX_GENRES
            );
            genres.truncate(SearchConfig::MAX_GENRES);
        }

        Ok(Criteria {
            min_year: parse_bound(&self.min_year, "min_year", "Invalid minimum year.")?
                .unwrap_or(i32::MIN),
            max_year: parse_bound(&self.max_year, "max_year", "Invalid maximum year.")?
                .unwrap_or(i32::MAX),
            min_runtime: parse_bound(&self.min_runtime, "min_runtime", "Invalid minimum runtime.")?
                .unwrap_or(i32::MIN),
            max_runtime: parse_bound(&self.max_runtime, "max_runtime", "Invalid maximum runtime.")?
                .unwrap_or(i32::MAX),
            genres,
        })
    }
}

fn parse_bound(text: &str, field: &str, message: &str) -> Result<Option<i32>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i32>()
        .map(Some)
        .map_err(|_| MovieIndexError::validation(field, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(year: i32, runtime: i32, genre: &str) -> Movie {
        Movie::new("Test", year, runtime, genre)
    }

    #[test]
    fn test_default_is_unbounded() {
        let criteria = Criteria::default();
        assert!(criteria.matches(&movie(i32::MIN, i32::MAX, "")));
        assert!(criteria.matches(&movie(i32::MAX, i32::MIN, "Drama")));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let criteria = Criteria::new()
            .with_year_range(2000, 2010)
            .with_runtime_range(90, 120);
        assert!(criteria.matches(&movie(2010, 90, "")));
        assert!(criteria.matches(&movie(2000, 120, "")));
        assert!(!criteria.matches(&movie(2011, 100, "")));
        assert!(!criteria.matches(&movie(2005, 89, "")));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let criteria = Criteria::new().with_year_range(2020, 2010);
        assert!(!criteria.matches(&movie(2015, 100, "")));
        assert!(!criteria.matches(&movie(2020, 100, "")));
    }

    #[test]
    fn test_genres_must_all_match() {
        let criteria = Criteria::new().with_genres(["Action", "Comedy"]);
        assert!(criteria.matches(&movie(2024, 94, "Action, Comedy")));
        assert!(!criteria.matches(&movie(2024, 94, "Action")));
    }

    #[test]
    fn test_input_blank_fields_are_unbounded() {
        let criteria = CriteriaInput {
            min_year: "  ".to_string(),
            max_year: "1999".to_string(),
            ..Default::default()
        }
        .into_criteria()
        .unwrap();
        assert_eq!(criteria.min_year, i32::MIN);
        assert_eq!(criteria.max_year, 1999);
        assert_eq!(criteria.min_runtime, i32::MIN);
        assert_eq!(criteria.max_runtime, i32::MAX);
    }

    #[test]
    fn test_input_invalid_bound_fails() {
        let result = CriteriaInput {
            min_runtime: "ninety".to_string(),
            ..Default::default()
        }
        .into_criteria();
        match result {
            Err(MovieIndexError::Validation { field, message }) => {
                assert_eq!(field, "min_runtime");
                assert_eq!(message, "Invalid minimum runtime.");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_input_truncates_genres() {
        let criteria = CriteriaInput {
            genres: vec!["Action".into(), "Comedy".into(), "Drama".into(), "War".into()],
            ..Default::default()
        }
        .into_criteria()
        .unwrap();
        assert_eq!(criteria.genres, vec!["Action", "Comedy", "Drama"]);
    }
}
