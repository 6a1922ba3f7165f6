//! Tab-separated catalog ingestion.
//!
//! This module provides:
//! - Field splitting and record validation for a single line
//! - A file reader that feeds accepted records to a backend
//! - Load statistics reported back to callers

mod parser;
mod reader;

pub use parser::{parse_record, split_fields, RecordRejection};
pub use reader::{read_catalog, LoadReport};
