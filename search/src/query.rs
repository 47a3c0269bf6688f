//! Search query types.

/// Default number of hits when a query sets no limit.
pub const DEFAULT_LIMIT: usize = 10;

/// A single search request.
///
/// An empty `properties` list searches every string field of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub properties: Vec<String>,
    pub limit: usize,
    /// Maximum edit distance for typo matches.
    pub tolerance: usize,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            properties: Vec::new(),
            limit: DEFAULT_LIMIT,
            tolerance: 0,
        }
    }

    pub fn properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn tolerance(mut self, tolerance: usize) -> Self {
        self.tolerance = tolerance;
        self
    }
}
