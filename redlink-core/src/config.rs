use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_ENDPOINT: &str = "https://api.redlink.io";

// Default value functions for serde
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_user_agent() -> String {
    format!("RedlinkRustSDK/{}", env!("CARGO_PKG_VERSION"))
}

/// Connection settings shared by the analysis and data clients.
///
/// The API key is not part of the configuration; it is always handed to the
/// client constructors by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without the version segment
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Semantic version string; its `major.minor` prefix selects the API version
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            version: default_version(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ClientConfig = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path, e)))?;
        config.api_version()?;
        Ok(config)
    }

    /// Load configuration with fallback to defaults
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}, using defaults: {}", p, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// The `major.minor` API version derived from [`ClientConfig::version`].
    pub fn api_version(&self) -> Result<String> {
        let mut parts = self.version.split('.');
        match (parts.next(), parts.next()) {
            (Some(major), Some(minor)) if is_numeric(major) && is_numeric(minor) => {
                Ok(format!("{}.{}", major, minor))
            }
            _ => Err(Error::InvalidVersion(self.version.clone())),
        }
    }
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}
