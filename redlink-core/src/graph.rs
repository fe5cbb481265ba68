//! RDF graph parsing and serialization by structured syntax id.
//!
//! The registry names RDF syntaxes with short ids ("turtle", "json-ld", ...).
//! This module resolves an id through the registry to its mimetype, maps that
//! onto an oxrdfio format and moves graphs in and out of bytes.

use crate::error::{Error, Result};
use crate::format::FormatRegistry;
use oxrdf::{Graph, Quad, Triple};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};

pub use oxrdf::Graph as RdfGraph;

/// Resolve a structured syntax id to the parser/serializer format.
fn rdf_format(syntax: &str) -> Result<RdfFormat> {
    let descriptor = FormatRegistry::standard()
        .lookup_by_syntax(syntax)
        .ok_or_else(|| Error::Rdf(format!("unknown RDF syntax '{}'", syntax)))?;
    RdfFormat::from_media_type(descriptor.mimetype)
        .ok_or_else(|| Error::Rdf(format!("RDF syntax '{}' is not supported", syntax)))
}

/// Parse a document in the given syntax into a graph.
///
/// Named graphs are flattened into the default graph.
pub fn parse_graph(data: &[u8], syntax: &str) -> Result<Graph> {
    let parser = RdfParser::from_format(rdf_format(syntax)?);

    let quads: std::result::Result<Vec<Quad>, _> = parser.for_reader(data).collect();
    let quads = quads.map_err(|e| Error::Rdf(format!("failed to parse {}: {}", syntax, e)))?;

    let mut graph = Graph::new();
    for quad in quads {
        let triple = Triple {
            subject: quad.subject,
            predicate: quad.predicate,
            object: quad.object,
        };
        graph.insert(&triple);
    }
    Ok(graph)
}

/// Serialize a graph in the given syntax.
pub fn serialize_graph(graph: &Graph, syntax: &str) -> Result<Vec<u8>> {
    let mut serializer = RdfSerializer::from_format(rdf_format(syntax)?).for_writer(Vec::new());
    for triple in graph.iter() {
        serializer
            .serialize_triple(triple)
            .map_err(|e: std::io::Error| Error::Rdf(e.to_string()))?;
    }
    serializer
        .finish()
        .map_err(|e: std::io::Error| Error::Rdf(e.to_string()))
}
