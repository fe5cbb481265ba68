//! Write payloads.

use crate::error::{Error, Result};
use crate::format::FormatDescriptor;
use crate::graph::serialize_graph;
use oxrdf::Graph;
use std::fmt;
use std::io::Read;

/// Content sent to the API by import and enhance calls.
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
    /// Serialized in the target format's RDF syntax
    Graph(Graph),
    /// Consumed fully into memory before the request is sent
    Stream(Box<dyn Read + Send>),
}

impl Payload {
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Payload::Stream(Box::new(reader))
    }

    /// Produce the request body for the given target format.
    ///
    /// Fails before any I/O when a graph is sent in a format that has no RDF
    /// syntax.
    pub fn into_body(self, format: &FormatDescriptor) -> Result<Vec<u8>> {
        match self {
            Payload::Text(text) => Ok(text.into_bytes()),
            Payload::Bytes(bytes) => Ok(bytes),
            Payload::Graph(graph) => match format.syntax {
                Some(syntax) => serialize_graph(&graph, syntax),
                None => Err(Error::UnsupportedPayloadType(format!(
                    "a graph cannot be sent as {}",
                    format
                ))),
            },
            Payload::Stream(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Payload::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Payload::Graph(graph) => write!(f, "Graph({} triples)", graph.len()),
            Payload::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<Graph> for Payload {
    fn from(graph: Graph) -> Self {
        Payload::Graph(graph)
    }
}
