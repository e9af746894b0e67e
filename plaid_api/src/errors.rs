//! Error types for the API client.

use crate::types::ApiError;

/// Errors that can occur when resolving configuration or making API requests.
///
/// Configuration errors are raised before any network activity. Everything
/// after that is either a transport failure, a structured API error, or a
/// body that could not be decoded.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required credential (`client_id` or `secret`) was absent after merging
    /// the per-call configuration with the defaults.
    #[error("Missing required credential: {0}")]
    MissingCredential(&'static str),
    /// An environment name that does not map to a known API host.
    #[error("Unknown environment: {0}")]
    InvalidEnvironment(String),
    /// A configuration value that could not be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },
    /// The base URL or endpoint path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Request parameters did not serialize to a JSON object.
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),
    /// The HTTP call itself failed (connect, TLS, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status with a structured error body.
    #[error("API error (HTTP {status}): {error}")]
    Api { status: u16, error: Box<ApiError> },
    /// The API returned a non-success status with a body that is not an error object.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A success response whose body did not match the resource schema.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },
}

impl Error {
    /// True for errors raised while resolving configuration, before dispatch.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential(_)
                | Error::InvalidEnvironment(_)
                | Error::InvalidSetting { .. }
                | Error::InvalidUrl(_)
        )
    }

    /// True if the transport gave up because a configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// The structured API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { error, .. } => Some(&**error),
            _ => None,
        }
    }

    /// HTTP status for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
