/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

//! Error types for the Globus client.
//!
//! All fallible operations in the library return [`AppError`]. Status-shaped
//! variants (`NotFound`, `Unexpected`, ...) carry what the Transfer API
//! answered; the remaining variants wrap transport and serialization
//! failures.

use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the library
pub type GlobusResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The API rejected the request credentials
    Unauthorized,
    /// The bearer access token has expired and must be refreshed
    OAuthTokenExpired,
    /// The API reported too many requests
    RateLimitExceeded,
    /// The requested resource does not exist
    NotFound,
    /// The caller supplied an invalid value
    InvalidInput(String),
    /// The API answered with an unexpected status code
    Unexpected(StatusCode),
    /// A value could not be serialized
    SerializationError(String),
    /// A response could not be deserialized
    Deserialization(String),
    /// JSON handling error
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
    /// Transport-level HTTP error
    Network(reqwest::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::OAuthTokenExpired => write!(f, "oauth token expired"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::NotFound => write!(f, "not found"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Network(e) => Some(e),
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
