mod index;

use crate::config::{CaseMatching, SearchConfig};
use crate::error::SearchError;
use crate::query::SearchQuery;
use crate::results::{Match, SearchResults};
use crate::tolerance::{query_tokens, typo_score};
use index::{Document, Index};
use mym_core::types::{Record, Schema};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher};
use std::time::Instant;
use tracing::{debug, info};

/// Added to every nucleo score so a nucleo hit outranks a typo-only hit.
pub(crate) const FUZZY_BONUS: u32 = 1 << 16;

/// Fuzzy full-text index over a batch of records.
pub struct SearchIndex {
    index: Index,
    config: SearchConfig,
}

/// Create operations.
impl SearchIndex {
    pub fn create(schema: Schema, config: SearchConfig) -> Self {
        debug!(fields = schema.len(), "creating search index");
        Self {
            index: Index::new(schema),
            config,
        }
    }
}

/// Mutation operations.
impl SearchIndex {
    /// Validates all records against the schema, then inserts them in chunks
    /// of `batch_size`, yielding to the runtime between chunks.
    ///
    /// A single invalid record fails the whole batch and nothing is inserted.
    pub async fn insert_batch(
        &mut self,
        records: Vec<Record>,
        batch_size: usize,
    ) -> Result<(), SearchError> {
        self.index.validate(&records)?;

        let total = records.len();
        let batch_size = batch_size.max(1);
        let mut records = records.into_iter().peekable();
        let mut chunk = 0;

        while records.peek().is_some() {
            for record in records.by_ref().take(batch_size) {
                self.index.insert(record);
            }
            chunk += 1;
            debug!(chunk, inserted = self.index.len(), "inserted chunk");
            tokio::task::yield_now().await;
        }

        info!(records = total, chunks = chunk, "batch inserted");
        Ok(())
    }
}

/// Search operations.
impl SearchIndex {
    /// Runs a query and returns hits ranked by descending score, ties in
    /// insertion order, truncated to `query.limit`.
    ///
    /// An empty term matches every record with score 0.
    pub fn query(&self, query: &SearchQuery) -> Result<SearchResults<'_>, SearchError> {
        let started = Instant::now();
        let slots = self.index.resolve(&query.properties)?;
        let term = query.term.trim();

        if term.is_empty() {
            let hits = self
                .index
                .documents()
                .iter()
                .take(query.limit)
                .enumerate()
                .map(|(id, document)| Match {
                    id,
                    score: 0,
                    record: &document.record,
                })
                .collect();
            return Ok(SearchResults {
                hits,
                count: self.index.len(),
                elapsed: started.elapsed(),
            });
        }

        let pattern = Pattern::parse(
            term,
            self.nucleo_case_matching(),
            self.normalization(),
        );
        let case_sensitive = self.is_case_sensitive(term);
        let tokens = query_tokens(term, case_sensitive);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);

        let mut hits: Vec<Match<'_>> = self
            .index
            .documents()
            .iter()
            .enumerate()
            .filter_map(|(id, document)| {
                let score = slots
                    .iter()
                    .filter_map(|&slot| {
                        score_field(
                            document,
                            slot,
                            &pattern,
                            &mut matcher,
                            &tokens,
                            query.tolerance,
                            case_sensitive,
                        )
                    })
                    .max()?;
                Some(Match {
                    id,
                    score,
                    record: &document.record,
                })
            })
            .collect();

        let count = hits.len();
        hits.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        hits.truncate(query.limit);

        let elapsed = started.elapsed();
        debug!(
            term,
            count,
            returned = hits.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "query finished"
        );

        Ok(SearchResults {
            hits,
            count,
            elapsed,
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }

    pub fn schema(&self) -> &Schema {
        self.index.schema()
    }

    fn nucleo_case_matching(&self) -> NucleoCaseMatching {
        match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        }
    }

    fn normalization(&self) -> Normalization {
        if self.config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        }
    }

    fn is_case_sensitive(&self, term: &str) -> bool {
        match self.config.case_matching {
            CaseMatching::Sensitive => true,
            CaseMatching::Insensitive => false,
            CaseMatching::Smart => term.chars().any(char::is_uppercase),
        }
    }
}

/// Score of one field. Every token must be within `tolerance` of a field
/// word; the nucleo score then ranks the hit, falling back to the typo score.
fn score_field(
    document: &Document,
    slot: usize,
    pattern: &Pattern,
    matcher: &mut Matcher,
    tokens: &[Vec<char>],
    tolerance: usize,
    case_sensitive: bool,
) -> Option<u32> {
    let field = document.field(slot)?;
    let typo = typo_score(tokens, &field.words, tolerance, case_sensitive)?;

    match pattern.score(field.haystack.slice(..), matcher) {
        Some(score) => Some(score.saturating_add(FUZZY_BONUS)),
        None => Some(typo.min(FUZZY_BONUS - 1)),
    }
}
