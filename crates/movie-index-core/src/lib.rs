//! Movie Index - in-memory movie catalog with interchangeable storage backends.
//!
//! A tab-separated catalog is loaded into one of three backends, each
//! answering the same range and genre queries with a different storage
//! organization. Callers can swap backends at runtime and compare how they
//! behave on the same catalog.
//!
//! # Example
//!
//! ```rust,no_run
//! use movie_index::{BackendKind, Criteria, IndexSelector};
//!
//! let mut selector = IndexSelector::with_backend(BackendKind::Sequential, "movies.tsv");
//! let criteria = Criteria::new()
//!     .with_year_range(2024, 2025)
//!     .with_genres(["Comedy"]);
//!
//! for movie in selector.search(&criteria).movies {
//!     println!("{movie}\n");
//! }
//!
//! selector.switch_to(BackendKind::Hashed);
//! println!("{} records", selector.index().len());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod genre;
pub mod index;
pub mod models;
pub mod selector;

// Re-export commonly used types
pub use catalog::{LoadReport, RecordRejection};
pub use config::{CatalogLayout, IndexConfig, SearchConfig};
pub use error::{MovieIndexError, Result};
pub use index::{
    create_index, BackendKind, HashedIndex, MovieIndex, OrderedIndex, SequentialIndex,
};
pub use models::{Criteria, CriteriaInput, Movie};
pub use selector::{IndexSelector, SearchResult, SwitchOutcome};
