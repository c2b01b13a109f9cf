//! Error handling for the attendance client
//!
//! This module defines the error type used internally by the client. Errors
//! never cross the API surface as-is: the request helper turns them into
//! `ApiResult::Failure` values, so the `Display` text of the transport and
//! parse variants is exactly what a caller ends up seeing.

use thiserror::Error;

/// Message reported when the server answers with an empty body
pub const EMPTY_RESPONSE_MESSAGE: &str = "Empty response from server";

/// Main error type for the attendance client
#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("{}", EMPTY_RESPONSE_MESSAGE)]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Result type alias for attendance client operations
pub type Result<T> = std::result::Result<T, AttendanceError>;

impl AttendanceError {
    /// Check if retrying the same call could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            AttendanceError::Http(_) => true,
            AttendanceError::EmptyResponse => true,
            AttendanceError::Io(_) => true,
            AttendanceError::Storage(_) => true,
            AttendanceError::Serialization(_) => false,
            AttendanceError::Config(_) => false,
            AttendanceError::ConfigLoad(_) => false,
            AttendanceError::UrlParse(_) => false,
            AttendanceError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AttendanceError::Config(_) => ErrorSeverity::Critical,
            AttendanceError::ConfigLoad(_) => ErrorSeverity::Critical,
            AttendanceError::UrlParse(_) => ErrorSeverity::Critical,
            AttendanceError::Http(_) => ErrorSeverity::Warning,
            AttendanceError::EmptyResponse => ErrorSeverity::Warning,
            AttendanceError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
