//! Error types for the Redlink SDK.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The key was rejected by the status probe, or the probe itself failed.
    #[error("invalid key: {0}")]
    InvalidCredential(String),

    /// A write payload could not be turned into a request body.
    #[error("unsupported payload type: {0}")]
    UnsupportedPayloadType(String),

    /// An endpoint that is expected to succeed answered outside its success range.
    #[error("remote execution failed with {status}: {reason}")]
    RemoteExecution { status: u16, reason: String },

    /// No analysis is configured for the key, so there is nothing to enhance with.
    #[error("no analysis available for this key")]
    NoAnalysis,

    #[error("invalid API version '{0}', expected at least major.minor")]
    InvalidVersion(String),

    /// Faults raised by the HTTP transport (DNS, refused connections, TLS).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RDF error: {0}")]
    Rdf(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport(Box::new(err))
    }
}
