//! JSON configuration for a choropleth session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::style::Palette;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where the boundary GeoJSON lives: an `http(s)://` URL or a local path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundaryConfig {
    pub url: String,
}

/// Metric query: service endpoint (URL or local path), query text and dataset id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    pub endpoint: String,
    pub query: String,
    pub dataset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("choroselect/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub boundary: BoundaryConfig,
    pub metrics: MetricsConfig,
    /// Field of the embedded visualization the selection filters on.
    pub filter_field: String,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter_field.trim().is_empty() {
            return Err(ConfigError::Invalid("filter_field must not be empty".into()));
        }
        if self.boundary.url.trim().is_empty() {
            return Err(ConfigError::Invalid("boundary.url must not be empty".into()));
        }
        if self.metrics.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("metrics.endpoint must not be empty".into()));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid("http.timeout_secs must be positive".into()));
        }
        self.palette.validate()
    }
}
