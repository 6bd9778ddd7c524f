//! Error types for shift-request

use thiserror::Error;

/// Errors produced by the library
#[derive(Debug, Error)]
pub enum Error {
    /// A required setting or secret is absent
    #[error("missing configuration: {0}")]
    ConfigurationMissing(String),

    /// Config file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Notion answered a page-creation call with a non-success status
    #[error("Notion API returned {status}: {body}")]
    NotionApi {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Chatwork answered a message post with a non-success status
    #[error("Chatwork API returned {status}: {body}")]
    ChatworkApi {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Transport-level failure (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed shift request or month string
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive prompt failure
    #[error("prompt error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Self::Dialog(e.to_string())
    }
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
