//! Authenticated resource URLs.

use crate::config::ClientConfig;
use crate::error::Result;

pub const PARAM_KEY: &str = "key";
pub const PARAM_IN: &str = "in";
pub const PARAM_OUT: &str = "out";
pub const PARAM_URI: &str = "uri";

/// Builds `{endpoint}/{major}.{minor}{path}?key={key}&...` URLs.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: String,
    version: String,
    key: String,
}

impl RequestBuilder {
    pub fn new(endpoint: &str, version: &str, key: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            version: version.to_string(),
            key: key.to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig, key: &str) -> Result<Self> {
        Ok(Self::new(&config.endpoint, &config.api_version()?, key))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Base URL of the versioned API, without path or query.
    pub fn base(&self) -> String {
        format!("{}/{}", self.endpoint, self.version)
    }

    /// Build a resource URL. The key always comes first; every other value is
    /// percent-encoded and appended in the order given.
    pub fn build(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = self.base();
        if !path.is_empty() && !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);

        url.push('?');
        url.push_str(PARAM_KEY);
        url.push('=');
        url.push_str(&urlencoding::encode(&self.key));

        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Join path segments with `/`, encoding each one.
    pub fn path(segments: &[&str]) -> String {
        segments
            .iter()
            .map(|s| format!("/{}", urlencoding::encode(s)))
            .collect()
    }
}
