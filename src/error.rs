use serde_json::Value;
use std::fmt;

/// Convenient result alias used throughout the crate
pub type LuxmedResult<T> = Result<T, AppError>;

/// Failure raised while loading the client configuration, before any
/// HTTP activity takes place
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    MissingKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingKey(key) => write!(f, "missing configuration key: {key}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type covering every failure mode of the client.
///
/// The two API variants carry the upstream error body parsed as JSON,
/// exactly as the portal returned it, so callers can surface the
/// service's own error messages.
#[derive(Debug)]
pub enum AppError {
    /// The token endpoint rejected the credentials; carries the parsed error body
    Authentication(Value),
    /// A data endpoint returned a non-200 status; carries the parsed error body
    Api(Value),
    /// The client configuration is incomplete
    Config(ConfigError),
    /// Transport or body decoding failure reported by the HTTP stack
    Http(reqwest::Error),
    /// A response body could not be parsed as JSON
    Json(serde_json::Error),
    /// A header value built from the configuration is not valid ASCII
    InvalidHeader(reqwest::header::InvalidHeaderValue),
}

impl AppError {
    /// Returns the upstream error body for the API-level variants
    pub fn payload(&self) -> Option<&Value> {
        match self {
            AppError::Authentication(value) | AppError::Api(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication(value) => write!(f, "authentication failed: {value}"),
            AppError::Api(value) => write!(f, "api error: {value}"),
            AppError::Config(e) => write!(f, "configuration error: {e}"),
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidHeader(e) => write!(f, "invalid header value: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Http(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::InvalidHeader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Http(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(error: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(error)
    }
}
