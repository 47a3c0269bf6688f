//! Fuzzy search over dataset records.
//!
//! # Design
//!
//! - One index per dataset, built from a fixed [`Schema`](mym_core::types::Schema).
//! - Records are validated as a whole batch, then inserted in chunks.
//! - String fields are kept as nucleo haystacks plus a word list. A field
//!   matches when every query token is within the query's tolerance of one
//!   of its words; nucleo's score ranks the hits that it also matches.
//!
//! # API
//!
//! - `SearchIndex::create()`: empty index for a schema
//! - `insert_batch()`: validate and insert records
//! - `query()`: ranked matches, truncated to the query limit

mod config;
mod engine;
mod error;
mod query;
mod results;
mod tolerance;

pub use config::{CaseMatching, SearchConfig};
pub use engine::SearchIndex;
pub use error::SearchError;
pub use query::SearchQuery;
pub use results::{Match, SearchResults};
