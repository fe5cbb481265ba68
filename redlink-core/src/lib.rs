// Redlink SDK
//
// Client library for the Redlink analysis and data APIs. Method calls are
// turned into authenticated HTTP requests; responses are classified by
// content type into JSON values, RDF graphs or raw text.

pub mod analysis;
pub mod client;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod graph;
pub mod payload;
pub mod request;
pub mod transport;

// Re-export main types and functions for easy use
pub use analysis::RedlinkAnalysis;
pub use client::{ApiClient, Status};
pub use config::ClientConfig;
pub use data::RedlinkData;
pub use dispatch::{ApiResponse, RawResponse};
pub use error::{Error, Result};
pub use format::{formats, FormatDescriptor, FormatRegistry};
pub use graph::RdfGraph;
pub use payload::Payload;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, UreqTransport};

/// Create an analysis client for the given API key
pub fn create_analysis_client(key: &str) -> Result<RedlinkAnalysis> {
    RedlinkAnalysis::new(key)
}

/// Create a data client for the given API key
pub fn create_data_client(key: &str) -> Result<RedlinkData> {
    RedlinkData::new(key)
}
