//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for toppingrank operations
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The order dataset could not be obtained or understood
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("Invalid JSON data. {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP errors
    #[error("Could not reach the server. {0}")]
    Http(#[from] reqwest::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
