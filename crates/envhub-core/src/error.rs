//! Error types for envhub-core

use thiserror::Error;

/// Result type alias using envhub-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in envhub-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The remote store processed the call and reported failure
    #[error("{message}")]
    Remote {
        /// Error detail returned by the remote store
        message: String,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Wrap a remote error detail
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }
}
