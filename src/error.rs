/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type shared by the executor and the account resource

use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type AccountResult<T> = Result<T, AppError>;

/// Errors raised while building, executing or decoding account requests
#[derive(Debug)]
pub enum AppError {
    /// The caller supplied an argument that failed local validation
    InvalidInput(String),
    /// Network level failure raised by `reqwest`
    Network(reqwest::Error),
    /// Transport failure reported by an executor that does not use `reqwest`
    Transport(String),
    /// The server rejected the credentials (HTTP 401)
    Unauthorized,
    /// The requested resource does not exist (HTTP 404)
    NotFound,
    /// The server throttled the request (HTTP 429)
    RateLimitExceeded,
    /// Any other non-success status
    Unexpected(StatusCode),
    /// JSON encoding or decoding failed
    Json(serde_json::Error),
    /// The response decoded as JSON but did not have the expected shape
    Deserialization(String),
    /// I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// Returns `true` when the failure was detected locally, before any
    /// request was attempted
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Transport(msg) => write!(f, "transport error: {msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
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
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
