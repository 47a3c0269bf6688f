use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Largest accepted fuzzy tolerance. Larger distances match nearly everything.
pub const MAX_TOLERANCE: usize = 8;

/// Application configuration, persisted as mym.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl AppConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> std::path::PathBuf {
        dir.join("mym.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.dataset.endpoint.trim().is_empty() {
            errors.push("dataset.endpoint must not be empty".to_string());
        }

        if self.dataset.batch_size == 0 {
            errors.push("dataset.batch_size must be at least 1".to_string());
        }

        if self.search.properties.iter().all(|p| p.trim().is_empty()) {
            errors.push("search.properties must name at least one field".to_string());
        }

        if self.search.limit == 0 {
            errors.push("search.limit must be at least 1".to_string());
        }

        if self.search.tolerance > MAX_TOLERANCE {
            errors.push(format!("search.tolerance must be at most {MAX_TOLERANCE}"));
        }

        if self.render.table_id.trim().is_empty() {
            errors.push("render.table_id must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            dataset: DatasetConfig {
                endpoint: if self.dataset.endpoint.trim().is_empty() {
                    defaults.dataset.endpoint
                } else {
                    self.dataset.endpoint.clone()
                },
                batch_size: if self.dataset.batch_size == 0 {
                    defaults.dataset.batch_size
                } else {
                    self.dataset.batch_size
                },
            },
            search: SearchSettings {
                properties: if self.search.properties.iter().all(|p| p.trim().is_empty()) {
                    defaults.search.properties
                } else {
                    self.search
                        .properties
                        .iter()
                        .filter(|p| !p.trim().is_empty())
                        .cloned()
                        .collect()
                },
                limit: if self.search.limit == 0 {
                    defaults.search.limit
                } else {
                    self.search.limit
                },
                tolerance: self.search.tolerance.min(MAX_TOLERANCE),
                case_matching: self.search.case_matching,
                unicode_normalization: self.search.unicode_normalization,
            },
            render: RenderConfig {
                table_id: if self.render.table_id.trim().is_empty() {
                    defaults.render.table_id
                } else {
                    self.render.table_id.clone()
                },
                deny_list: self.render.deny_list.clone(),
            },
        }
    }
}

/// Where the dataset comes from and how it is fed to the index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// File path (relative to the config directory) or http(s) URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            batch_size: default_batch_size(),
        }
    }
}

fn default_endpoint() -> String {
    "data.json".to_string()
}

fn default_batch_size() -> usize {
    500
}

/// Parameters of every keystroke query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_properties")]
    pub properties: Vec<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: usize,
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default = "default_true")]
    pub unicode_normalization: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            properties: default_properties(),
            limit: default_limit(),
            tolerance: default_tolerance(),
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
        }
    }
}

fn default_properties() -> Vec<String> {
    ["Name", "Address", "Location", "Cuisine"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_limit() -> usize {
    50
}

fn default_tolerance() -> usize {
    3
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

/// Result table settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_table_id")]
    pub table_id: String,
    /// Columns never shown, whatever the dataset contains.
    #[serde(default = "default_deny_list")]
    pub deny_list: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            table_id: default_table_id(),
            deny_list: default_deny_list(),
        }
    }
}

fn default_table_id() -> String {
    "search-results".to_string()
}

fn default_deny_list() -> Vec<String> {
    [
        "Longitude",
        "Latitude",
        "Url",
        "WebsiteUrl",
        "FacilitiesAndServices",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
