use std::path::PathBuf;

use thiserror::Error;

/// Error taxonomy for the core layer.
///
/// Remote failures abort the current action and leave in-memory state
/// untouched; path and format failures are per-item and batch operations
/// skip past them. Nothing here retries.
#[derive(Debug, Error)]
pub enum Error {
    /// A remote API call failed (non-2xx or transport-level).
    #[error(transparent)]
    Api(#[from] kconnect_api::Error),

    /// A JSON document (config file, editor buffer, status payload) did not
    /// have the expected shape.
    #[error("malformed document in {context}: {message}")]
    Format { context: String, message: String },

    /// A backup/restore target is missing or of the wrong type.
    #[error("{}: {reason}", path.display())]
    Path { path: PathBuf, reason: String },

    /// Filesystem or child-process failure (temp files, editor spawn).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A refresh step failed; carries the connector the step was for.
    #[error("refreshing connector '{connector}' failed: {source}")]
    Refresh {
        connector: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Tag an error with the connector a refresh step was working on.
    pub fn for_connector(self, name: &str) -> Self {
        Self::Refresh {
            connector: name.to_owned(),
            source: Box::new(self),
        }
    }

    /// Shorthand for a [`Error::Format`] out of a serde_json failure.
    pub fn format(context: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Format {
            context: context.into(),
            message: err.to_string(),
        }
    }
}
