//! Known Redlink formats and mimetype resolution.
//!
//! Every format the API speaks is described by a [`FormatDescriptor`]. The
//! [`FormatRegistry`] keeps them in declaration order and resolves incoming
//! `Content-Type` headers back to a descriptor.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    /// Symbolic name, also used as the `in`/`out` parameter of the analysis API
    pub name: &'static str,
    pub mimetype: &'static str,
    /// RDF syntax understood by the graph parser; `None` for non-RDF formats
    pub syntax: Option<&'static str>,
}

impl FormatDescriptor {
    pub const fn new(name: &'static str, mimetype: &'static str, syntax: Option<&'static str>) -> Self {
        Self {
            name,
            mimetype,
            syntax,
        }
    }

    /// Compare against a raw header value, ignoring any `;`-separated parameters.
    pub fn matches_mimetype(&self, raw: &str) -> bool {
        self.mimetype == strip_parameters(raw)
    }

    /// Two descriptors denote the same format when their mimetypes agree.
    pub fn equals(&self, other: &FormatDescriptor) -> bool {
        self.mimetype == other.mimetype
    }

    pub fn is_rdf(&self) -> bool {
        self.syntax.is_some()
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.mimetype)
    }
}

/// Drop everything from the first `;` onward (charset, boundary, ...).
fn strip_parameters(raw: &str) -> &str {
    match raw.find(';') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

pub mod formats {
    use super::FormatDescriptor;

    pub const TEXT: FormatDescriptor = FormatDescriptor::new("text", "text/plain", None);
    pub const PDF: FormatDescriptor = FormatDescriptor::new("pdf", "application/pdf", None);
    pub const HTML: FormatDescriptor = FormatDescriptor::new("html", "text/html", None);
    pub const OFFICE: FormatDescriptor = FormatDescriptor::new("office", "application/doc", None);
    pub const OCTET_STREAM: FormatDescriptor =
        FormatDescriptor::new("octetstream", "application/octet-stream", None);

    pub const JSON: FormatDescriptor = FormatDescriptor::new("json", "application/json", None);
    pub const XML: FormatDescriptor = FormatDescriptor::new("xml", "application/xml", None);
    pub const REDLINK_JSON: FormatDescriptor =
        FormatDescriptor::new("redlinkjson", "application/redlink-analysis+json", None);
    pub const REDLINK_XML: FormatDescriptor =
        FormatDescriptor::new("redlinkxml", "application/redlink-analysis+xml", None);

    pub const JSON_LD: FormatDescriptor =
        FormatDescriptor::new("jsonld", "application/ld+json", Some("json-ld"));
    pub const RDF_XML: FormatDescriptor =
        FormatDescriptor::new("rdfxml", "application/rdf+xml", Some("rdf-xml"));
    // No graph parser handles RDF/JSON, so it is served as raw text.
    pub const RDF_JSON: FormatDescriptor =
        FormatDescriptor::new("rdfjson", "application/rdf+json", None);
    pub const TURTLE: FormatDescriptor = FormatDescriptor::new("turtle", "text/turtle", Some("turtle"));
    pub const N_TRIPLES: FormatDescriptor =
        FormatDescriptor::new("nt", "application/n-triples", Some("n-triples"));

    pub(super) const ALL: [FormatDescriptor; 14] = [
        TEXT,
        PDF,
        HTML,
        OFFICE,
        OCTET_STREAM,
        JSON,
        XML,
        REDLINK_JSON,
        REDLINK_XML,
        JSON_LD,
        RDF_XML,
        RDF_JSON,
        TURTLE,
        N_TRIPLES,
    ];
}

/// Read-only, ordered table of every format the SDK knows about.
#[derive(Debug, Clone, Copy)]
pub struct FormatRegistry {
    descriptors: &'static [FormatDescriptor],
}

static STANDARD: FormatRegistry = FormatRegistry {
    descriptors: &formats::ALL,
};

impl FormatRegistry {
    /// The registry of all Redlink formats, in declaration order.
    pub fn standard() -> &'static FormatRegistry {
        &STANDARD
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FormatDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Resolve a `Content-Type` value to its descriptor.
    ///
    /// Parameters after the first `;` are ignored; the remaining value must
    /// match a registered mimetype exactly (case-sensitive, no trimming).
    pub fn lookup_by_mimetype(&self, raw: &str) -> Option<&'static FormatDescriptor> {
        self.descriptors.iter().find(|d| d.matches_mimetype(raw))
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&'static FormatDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Find the RDF format carrying the given graph syntax id.
    pub fn lookup_by_syntax(&self, syntax: &str) -> Option<&'static FormatDescriptor> {
        self.descriptors.iter().find(|d| d.syntax == Some(syntax))
    }

    /// The JSON-shaped formats, which dispatch to a JSON value.
    pub fn is_json(&self, descriptor: &FormatDescriptor) -> bool {
        descriptor.equals(&formats::JSON) || descriptor.equals(&formats::REDLINK_JSON)
    }
}
