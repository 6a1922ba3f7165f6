//! The catalog record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry.
///
/// `year` and `runtime` are always parsed integers; lines that fail to parse
/// never become a `Movie`. `genre` keeps the raw comma-separated text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    /// Runtime in minutes.
    pub runtime: i32,
    pub genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        runtime: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            runtime,
            genre: genre.into(),
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nYear: {}\nRuntime: {}\nGenre: {}",
            self.title, self.year, self.runtime, self.genre
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let movie = Movie::new("Nope", 2022, 130, "Horror, Mystery");
        assert_eq!(
            movie.to_string(),
            "Title: Nope\nYear: 2022\nRuntime: 130\nGenre: Horror, Mystery"
        );
    }

    #[test]
    fn test_equal_fields_are_indistinguishable() {
        let a = Movie::new("Heat", 1995, 170, "Crime");
        let b = Movie::new("Heat", 1995, 170, "Crime");
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let movie = Movie::new("Heat", 1995, 170, "Crime,Drama");
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["title"], "Heat");
        assert_eq!(json["runtime"], 170);
    }
}
