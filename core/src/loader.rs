//! Dataset loading.
//!
//! The dataset is a JSON array of flat objects, served either from disk or
//! over HTTP. Loading suspends the caller until the fetch and parse finish;
//! failures are returned as-is, there is no retry.

use crate::error::LoadError;
use crate::types::Record;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Something that can produce the raw dataset text.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs.
    fn location(&self) -> String;

    async fn fetch(&self) -> Result<String, LoadError>;
}

/// Reads the dataset from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.location(),
                source,
            })
    }
}

/// Fetches the dataset with an HTTP GET.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        let http_err = |source: reqwest::Error| LoadError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(http_err)
    }
}

pub struct DatasetLoader {
    source: Box<dyn DatasetSource>,
}

impl DatasetLoader {
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Picks a source for `endpoint`: http(s) URLs are fetched over the
    /// network, anything else is a path resolved against `base_dir`.
    pub fn for_endpoint(endpoint: &str, base_dir: &Path) -> Self {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            Self::new(HttpSource::new(endpoint))
        } else {
            Self::new(FileSource::new(base_dir.join(endpoint)))
        }
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    pub async fn load(&self) -> Result<Vec<Record>, LoadError> {
        let location = self.source.location();
        debug!(%location, "fetching dataset");

        let body = self.source.fetch().await?;
        let records = parse_records(&body)?;

        info!(%location, records = records.len(), "dataset loaded");
        Ok(records)
    }
}

/// Parses a JSON array of objects into records.
pub fn parse_records(json: &str) -> Result<Vec<Record>, LoadError> {
    let Value::Array(items) = serde_json::from_str(json)? else {
        return Err(LoadError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(Record::new(fields)),
            _ => Err(LoadError::NotAnObject { index }),
        })
        .collect()
}

#[cfg(test)]
mod tests;
