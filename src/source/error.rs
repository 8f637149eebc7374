use std::path::PathBuf;

/// Failure to obtain boundary or metric data. Absorbed by the controller, never shown as a fault.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request failed or returned an error status.
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// A local source could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document does not have the expected shape.
    #[error("malformed response: {0}")]
    Schema(String),

    /// The document was well-formed but carried nothing usable.
    #[error("empty response: {0}")]
    Empty(String),
}
