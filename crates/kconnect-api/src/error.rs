use thiserror::Error;

/// Top-level error type for the `kconnect-api` crate.
///
/// Covers every failure mode when talking to a Kafka Connect worker:
/// non-success HTTP responses, transport failures, and malformed payloads.
/// `kconnect-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// The worker answered outside the 200–299 range. Carries enough
    /// context to show the operator exactly which request failed.
    #[error("Request {method} '{url}' failed ({status}):\n{body}")]
    Remote {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Response body was not the JSON shape we asked for.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status of a [`Error::Remote`], if that is what this is.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Remote { status: 404, .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}
