//! Response classification.
//!
//! A successful response is turned into one of three shapes depending on its
//! `Content-Type`: a JSON value, an RDF graph, or the raw body. Raw results are
//! a degraded but valid outcome and are logged, never raised.

use crate::error::Result;
use crate::format::{FormatDescriptor, FormatRegistry};
use crate::graph::parse_graph;
use crate::transport::HttpResponse;
use oxrdf::Graph;
use serde_json::Value;
use tracing::warn;

/// The unparsed form of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl From<HttpResponse> for RawResponse {
    fn from(response: HttpResponse) -> Self {
        let body = response.text();
        Self {
            status: response.status,
            reason: response.reason,
            content_type: response.content_type,
            body,
        }
    }
}

#[derive(Debug)]
pub enum ApiResponse {
    Json(Value),
    Graph(Graph),
    Raw(RawResponse),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&Graph> {
        match self {
            ApiResponse::Graph(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawResponse> {
        match self {
            ApiResponse::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn into_graph(self) -> Option<Graph> {
        match self {
            ApiResponse::Graph(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Which handlers a caller is prepared to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handlers {
    /// JSON, graph, then raw
    All,
    /// Graph, then raw; JSON media types are returned raw
    GraphOnly,
}

/// Classify a successful response body.
///
/// JSON formats are checked before graph formats. Unknown or missing content
/// types and formats without a handler fall back to the raw body.
pub fn dispatch(
    registry: &FormatRegistry,
    response: HttpResponse,
    handlers: Handlers,
) -> Result<ApiResponse> {
    let format = match response.content_type.as_deref() {
        Some(content_type) => registry.lookup_by_mimetype(content_type),
        None => None,
    };

    let Some(format) = format else {
        warn!(
            "Unresolved content type {:?}, returning raw text response",
            response.content_type
        );
        return Ok(ApiResponse::Raw(response.into()));
    };

    if handlers == Handlers::All && registry.is_json(format) {
        let value: Value = serde_json::from_slice(&response.body)?;
        return Ok(ApiResponse::Json(value));
    }

    if let Some(syntax) = format.syntax {
        let graph = parse_graph(&response.body, syntax)?;
        return Ok(ApiResponse::Graph(graph));
    }

    warn_no_handler(format);
    Ok(ApiResponse::Raw(response.into()))
}

fn warn_no_handler(format: &FormatDescriptor) {
    warn!(
        "Handler not found for {}, returning raw text response",
        format
    );
}
