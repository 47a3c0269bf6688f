use mym_core::SchemaError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("record {index} rejected: {source}")]
    Schema {
        index: usize,
        #[source]
        source: SchemaError,
    },

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("property {0} is not a string field")]
    NotSearchable(String),
}
