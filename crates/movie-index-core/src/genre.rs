//! Genre AND-matching shared by every backend.

use crate::config::SearchConfig;

/// Iterate the trimmed genre tokens of a stored genre string.
///
/// Empty pieces between commas are skipped before trimming, so `"A,,B"` has
/// two tokens while `"A, ,B"` keeps a blank middle token.
pub fn genre_tokens(stored: &str) -> impl Iterator<Item = &str> {
    stored
        .trim()
        .split(SearchConfig::GENRE_SEPARATOR)
        .filter(|piece| !piece.is_empty())
        .map(str::trim)
}

/// Check whether `stored` carries every genre in `required`.
///
/// Comparison is exact per token after Unicode lowercasing. An empty
/// requirement matches anything, including a movie with no genres.
pub fn matches<S: AsRef<str>>(stored: &str, required: &[S]) -> bool {
    required.iter().all(|wanted| {
        let wanted = wanted.as_ref().to_lowercase();
        genre_tokens(stored).any(|token| token.to_lowercase() == wanted)
    })
}
