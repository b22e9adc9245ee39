/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;
use std::io;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type of the library
///
/// Network-side variants are produced by the strict `MarketService` layer and
/// swallowed by `MarketDataService`, which turns them into empty results.
#[derive(Debug)]
pub enum AppError {
    /// The request could not be sent or the connection failed
    Network(reqwest::Error),
    /// The server answered with a non-success status
    Unexpected(StatusCode),
    /// The requested resource does not exist
    NotFound,
    /// The server rejected the request because of its rate limit
    RateLimitExceeded,
    /// The response body was not valid JSON for the expected shape
    Json(serde_json::Error),
    /// The response body decoded but carried an unusable shape
    Deserialization(String),
    /// User supplied input could not be understood
    InvalidInput(String),
    /// Terminal input/output failure
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return AppError::Deserialization(error.to_string());
        }
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}

impl AppError {
    /// Returns true when the error was produced by the remote side or the wire
    /// rather than by local input
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, AppError::InvalidInput(_) | AppError::Io(_))
    }
}
