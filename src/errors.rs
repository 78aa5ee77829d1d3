//! Application Errors
//!
//! One error type for HTTP, configuration, routing and identity failures.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    /// The route parameter is not a numeric list id
    InvalidListId(String),
    Auth(String),
    /// The owning component was torn down before the operation finished
    Cancelled,
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
            AppError::InvalidListId(raw) => write!(formatter, "Invalid list id: {raw:?}"),
            AppError::Auth(message) => write!(formatter, "Authentication error: {message}"),
            AppError::Cancelled => write!(formatter, "Operation cancelled"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<auth0_spa::AuthError> for AppError {
    fn from(err: auth0_spa::AuthError) -> Self {
        AppError::Auth(err.to_string())
    }
}
