//! Search results types.

use mym_core::types::Record;
use std::time::Duration;

/// A matched record and its relevance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    /// Position of the record in insertion order.
    pub id: usize,
    pub score: u32,
    pub record: &'a Record,
}

/// Ranked hits of one query. Borrows from the SearchIndex.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    pub hits: Vec<Match<'a>>,
    /// Number of matching records before truncation to the limit.
    pub count: usize,
    pub elapsed: Duration,
}

impl<'a> SearchResults<'a> {
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.hits.iter().map(|hit| hit.record)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
