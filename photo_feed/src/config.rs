//! Pipeline configuration: compile-time defaults plus an optional TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Metadata endpoint of the reference deployment (about 5000 photos).
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/photos";
/// Number of leading records whose images are downloaded.
pub const DEFAULT_PREFIX_LIMIT: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// URL of the JSON photo list.
    pub endpoint: String,
    /// How many records from the front of the list get their image downloaded.
    pub prefix_limit: usize,
    /// Stop the busy indicator when a run fails. Off by default: a failed run
    /// leaves the indicator running.
    pub clear_busy_on_failure: bool,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            prefix_limit: DEFAULT_PREFIX_LIMIT,
            clear_busy_on_failure: false,
            request_timeout_secs: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&s)?;
        log::debug!("Loaded pipeline config from {}", path.display());
        Ok(config)
    }
}
