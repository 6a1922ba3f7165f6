//! Centralized configuration for the movie index.
//!
//! Constant holders describe the catalog file layout and search limits.
//! [`IndexConfig`] is the runtime configuration, loadable from JSON.

use crate::error::{MovieIndexError, Result};
use crate::index::BackendKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout of the tab-separated catalog file.
pub struct CatalogLayout;

impl CatalogLayout {
    pub const FIELD_SEPARATOR: char = '\t';
    pub const TITLE_FIELD: usize = 2;
    pub const YEAR_FIELD: usize = 5;
    pub const RUNTIME_FIELD: usize = 7;
    pub const GENRE_FIELD: usize = 8;
    pub const MIN_FIELDS: usize = 9;
    pub const MISSING_VALUE: &'static str = "\\N";
    /// Lines discarded before the first record.
    pub const HEADER_LINES: usize = 1;
}

/// Search limits and the genre vocabulary offered to callers.
pub struct SearchConfig;

impl SearchConfig {
    pub const GENRE_SEPARATOR: char = ',';
    pub const MAX_GENRES: usize = 3;
    pub const AVAILABLE_GENRES: &'static [&'static str] = &[
        "Action",
        "Adventure",
        "Animation",
        "Biography",
        "Comedy",
        "Crime",
        "Documentary",
        "Drama",
        "Family",
        "Fantasy",
        "Film-Noir",
        "History",
        "Horror",
        "Music",
        "Musical",
        "Mystery",
        "Romance",
        "Sci-Fi",
        "Sport",
        "Thriller",
        "War",
        "Western",
    ];
}

/// Runtime configuration: which catalog to load and which backend to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct IndexConfig {
    /// Path of the tab-separated catalog file.
    pub catalog_path: PathBuf,
    /// Backend built on startup.
    pub backend: BackendKind,
}

impl IndexConfig {
    pub const DEFAULT_CATALOG_FILE: &'static str = "movies.tsv";

    /// Create a configuration for a catalog path and backend.
    pub fn new(catalog_path: impl Into<PathBuf>, backend: BackendKind) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            backend,
        }
    }

    /// Parse a configuration from a JSON string.
    ///
    /// Missing keys fall back to [`IndexConfig::default`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: IndexConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| MovieIndexError::io_with_path(e, path))?;
        Self::from_json_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(MovieIndexError::Config {
                message: "catalog_path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(Self::DEFAULT_CATALOG_FILE),
            backend: BackendKind::default(),
        }
    }
}
