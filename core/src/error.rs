use thiserror::Error;

/// Failures while fetching or parsing the dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("http error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} fetching {url}")]
    Status { url: String, status: u16 },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset is not a json array")]
    NotAnArray,

    #[error("dataset entry {index} is not a json object")]
    NotAnObject { index: usize },
}

/// A record that does not fit the index schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field {field} expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid field name: {0}")]
    InvalidFieldName(String),
}
