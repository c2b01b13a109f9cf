//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{AttendanceError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(AttendanceError::Config(
            "API base URL is required".to_string()
        ));
    }

    let base_url = Url::parse(&config.base_url)?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(AttendanceError::Config(
            format!("Unsupported API URL scheme: {}", base_url.scheme())
        ));
    }

    if !config.api_root.starts_with('/') {
        return Err(AttendanceError::Config(
            "API root must start with '/'".to_string()
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.storage_key.is_empty() {
        return Err(AttendanceError::Config(
            "Session storage key is required".to_string()
        ));
    }

    if config.entry_page.is_empty() {
        return Err(AttendanceError::Config(
            "Entry page is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AttendanceError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AttendanceError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
