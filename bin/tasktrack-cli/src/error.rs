use thiserror::Error;

/// Errors that can be returned by tasktrack-cli operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An HTTP request failed (network error, malformed response, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A filesystem I/O error occurred while touching preferences.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences could not be encoded.
    #[error("failed to encode preferences: {0}")]
    Toml(#[from] toml::ser::Error),

    /// The server answered with a non-success status.
    #[error("server rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
}
