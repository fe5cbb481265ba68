use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::format::{formats, FormatRegistry};
use crate::request::RequestBuilder;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, UreqTransport};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::debug;

/// Account status reported by the API for a key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub accessible: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub owner: Option<String>,
    #[serde(default)]
    pub datasets: BTreeSet<String>,
    /// Analyses in the order the API lists them; the first one is used by `enhance`
    #[serde(default)]
    pub analyses: Vec<String>,
    /// Quotas, limits and anything else the API reports
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// The owner is an opaque identifier; accept it as a string or a number.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Authenticated access to the Redlink API.
///
/// Construction probes the status endpoint once and fails with
/// [`Error::InvalidCredential`] when the key is not usable. The status is
/// cached for the lifetime of the client.
pub struct ApiClient {
    transport: Box<dyn Transport>,
    registry: &'static FormatRegistry,
    requests: RequestBuilder,
    user_agent: String,
    status: Status,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("requests", &self.requests)
            .field("user_agent", &self.user_agent)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Connect to the default endpoint with the given key
    pub fn new(key: &str) -> Result<Self> {
        Self::with_config(key, ClientConfig::default())
    }

    pub fn with_config(key: &str, config: ClientConfig) -> Result<Self> {
        Self::new_with_dependencies(
            key,
            &config,
            Box::new(UreqTransport::new()),
            FormatRegistry::standard(),
        )
    }

    /// Use a preconfigured `ureq::Agent`, e.g. one trusting a specific certificate.
    pub fn with_agent(key: &str, config: ClientConfig, agent: ureq::Agent) -> Result<Self> {
        Self::new_with_dependencies(
            key,
            &config,
            Box::new(UreqTransport::with_agent(agent)),
            FormatRegistry::standard(),
        )
    }

    /// Create ApiClient with full dependency injection
    pub fn new_with_dependencies(
        key: &str,
        config: &ClientConfig,
        transport: Box<dyn Transport>,
        registry: &'static FormatRegistry,
    ) -> Result<Self> {
        if key.trim().is_empty() {
            return Err(Error::InvalidCredential("empty key".to_string()));
        }

        let mut client = Self {
            transport,
            registry,
            requests: RequestBuilder::from_config(config, key)?,
            user_agent: config.user_agent.clone(),
            status: Status::default(),
        };

        let status = client.fetch_status()?;
        if !status.accessible {
            return Err(Error::InvalidCredential("key is not accessible".to_string()));
        }
        client.status = status;
        Ok(client)
    }

    fn fetch_status(&self) -> Result<Status> {
        let url = self.requests.build("", &[]);
        let response = self.get(&url, Some(formats::JSON.mimetype))?;
        if !response.is_success() {
            return Err(Error::InvalidCredential(format!(
                "status probe returned {} {}",
                response.status, response.reason
            )));
        }
        serde_json::from_slice(&response.body)
            .map_err(|e| Error::InvalidCredential(format!("unreadable status: {}", e)))
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn registry(&self) -> &'static FormatRegistry {
        self.registry
    }

    pub fn requests(&self) -> &RequestBuilder {
        &self.requests
    }

    pub fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        self.requests.build(path, params)
    }

    pub fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse> {
        self.execute(Method::Get, url, None, None, accept)
    }

    pub fn post(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        content_type: Option<&str>,
        accept: Option<&str>,
    ) -> Result<HttpResponse> {
        self.execute(Method::Post, url, body, content_type, accept)
    }

    pub fn put(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        content_type: Option<&str>,
        accept: Option<&str>,
    ) -> Result<HttpResponse> {
        self.execute(Method::Put, url, body, content_type, accept)
    }

    pub fn delete(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse> {
        self.execute(Method::Delete, url, None, None, accept)
    }

    fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        content_type: Option<&str>,
        accept: Option<&str>,
    ) -> Result<HttpResponse> {
        debug!("Making {} request to {}", method.as_str(), url);
        let request = HttpRequest {
            method,
            url: url.to_string(),
            user_agent: self.user_agent.clone(),
            content_type: content_type.map(str::to_string),
            accept: accept.map(str::to_string),
            body,
        };
        let response = self.transport.execute(&request)?;
        debug!("{} {} answered {}", method.as_str(), url, response.status);
        Ok(response)
    }
}
