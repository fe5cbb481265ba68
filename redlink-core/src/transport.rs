// HTTP transport abstraction
//
// The SDK never talks to the network directly; every call goes through a
// Transport. The default implementation wraps a blocking ureq agent.

use crate::error::{Error, Result};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub user_agent: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Option<Vec<u8>>,
}

/// A response of any status. Non-2xx answers are data, not errors.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    /// Raw `Content-Type` header, parameters included
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes a single HTTP exchange.
///
/// Implementations return `Ok` for every response the server produced,
/// whatever its status, and `Err` only for transport faults.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking transport backed by a `ureq::Agent`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Use a preconfigured agent, e.g. one with a pinned TLS trust anchor.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut call = self
            .agent
            .request(request.method.as_str(), &request.url)
            .set("User-Agent", &request.user_agent);
        if let Some(content_type) = &request.content_type {
            call = call.set("Content-Type", content_type);
        }
        if let Some(accept) = &request.accept {
            call = call.set("Accept", accept);
        }

        let result = match &request.body {
            Some(body) => call.send_bytes(body),
            None => call.call(),
        };

        let response = match result {
            Ok(response) => response,
            // ureq reports 4xx/5xx as errors; the SDK treats them as answers
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => return Err(Error::transport(transport)),
        };

        let status = response.status();
        let reason = response.status_text().to_string();
        let content_type = response.header("Content-Type").map(str::to_string);

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;

        Ok(HttpResponse {
            status,
            reason,
            content_type,
            body,
        })
    }
}
