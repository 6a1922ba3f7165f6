//! Record and query value types.

mod criteria;
mod movie;

pub use criteria::{Criteria, CriteriaInput};
pub use movie::Movie;
