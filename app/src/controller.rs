//! Wires input events to index queries and table renders.

use crate::error::ControllerError;
use crate::render::{ColumnPolicy, ResultRenderer, ResultTable};
use mym_core::loader::DatasetLoader;
use mym_core::types::Schema;
use mym_core::types::config::{AppConfig, SearchSettings};
use mym_search::{SearchConfig, SearchIndex, SearchQuery};
use tracing::{debug, info, warn};

/// An `input` event; carries the value of the field that fired it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub target_value: String,
}

impl InputEvent {
    pub fn new(target_value: impl Into<String>) -> Self {
        Self {
            target_value: target_value.into(),
        }
    }
}

/// Uninitialized until the dataset is loaded and indexed, then Ready for
/// the rest of the controller's life.
pub enum ControllerState {
    Uninitialized,
    Ready(SearchIndex),
}

pub struct SearchController {
    state: ControllerState,
    schema: Schema,
    search_config: SearchConfig,
    settings: SearchSettings,
    batch_size: usize,
    renderer: ResultRenderer,
    table: ResultTable,
}

impl SearchController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: ControllerState::Uninitialized,
            schema: Schema::restaurants(),
            search_config: SearchConfig::from(&config.search),
            settings: config.search.clone(),
            batch_size: config.dataset.batch_size,
            renderer: ResultRenderer::new(ColumnPolicy::new(
                config.render.deny_list.iter().cloned(),
            )),
            table: ResultTable::new(config.render.table_id.clone()),
        }
    }

    /// Indexes records with `schema` instead of the restaurant schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ControllerState::Ready(_))
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    /// Loads the dataset, builds the index and renders the initial (empty)
    /// search.
    ///
    /// On failure the controller stays Uninitialized and input keeps being
    /// ignored.
    pub async fn initialize(&mut self, loader: &DatasetLoader) -> Result<(), ControllerError> {
        if self.is_ready() {
            return Err(ControllerError::AlreadyInitialized);
        }

        let records = loader.load().await?;
        let mut index = SearchIndex::create(self.schema.clone(), self.search_config.clone());
        index.insert_batch(records, self.batch_size).await?;

        info!(records = index.len(), "search index ready");
        self.state = ControllerState::Ready(index);
        self.on_input(&InputEvent::new(""));
        Ok(())
    }

    /// Re-queries with the event's value and re-renders the table.
    ///
    /// A blank term or an index that isn't ready yet clears the table.
    pub fn on_input(&mut self, event: &InputEvent) {
        let term = event.target_value.trim();

        let ControllerState::Ready(index) = &self.state else {
            debug!("input before index is ready, ignoring");
            self.table.clear();
            return;
        };

        if term.is_empty() {
            self.table.clear();
            return;
        }

        let query = SearchQuery::new(term)
            .properties(self.settings.properties.iter().cloned())
            .limit(self.settings.limit)
            .tolerance(self.settings.tolerance);

        match index.query(&query) {
            Ok(results) => {
                debug!(term, hits = results.len(), count = results.count, "search");
                self.renderer.render(&mut self.table, results.records());
            }
            Err(err) => {
                warn!(%err, term, "search failed");
                self.table.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests;
