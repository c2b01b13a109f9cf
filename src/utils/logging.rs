//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the attendance client. The library itself only emits
//! `tracing` events; installing a subscriber is left to the binary.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{AttendanceError, ErrorSeverity, Result};

/// Initialize logging based on configuration
///
/// Console output goes to stderr so command output on stdout stays
/// machine-readable. When a log directory is configured the returned guard
/// must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AttendanceError::Config(format!("Invalid log filter: {}", e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "attendance-client.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| AttendanceError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing API request
pub fn log_api_request(method: &str, url: &str, has_body: bool) {
    debug!(
        method = method,
        url = url,
        has_body = has_body,
        "Sending API request"
    );
}

/// Log a received API response
pub fn log_api_response(method: &str, url: &str, status: u16, body_len: usize) {
    debug!(
        method = method,
        url = url,
        status = status,
        body_len = body_len,
        "API response received"
    );
}

/// Log API errors with context
pub fn log_api_error(method: &str, endpoint: &str, error: &AttendanceError) {
    match error.severity() {
        ErrorSeverity::Info | ErrorSeverity::Warning => warn!(
            method = method,
            endpoint = endpoint,
            error = %error,
            recoverable = error.is_recoverable(),
            "API request failed"
        ),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(
            method = method,
            endpoint = endpoint,
            error = %error,
            recoverable = error.is_recoverable(),
            "API request failed"
        ),
    }
}

/// Log session lifecycle events (sign in, logout, missing session)
pub fn log_session_event(event: &str, role: Option<&str>, details: Option<&str>) {
    info!(
        event = event,
        role = role,
        details = details,
        "Session event"
    );
}
