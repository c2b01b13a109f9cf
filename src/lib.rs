//! Attendance Client
//!
//! Client library for the school attendance management REST API: one async
//! method per endpoint, a uniform success/error result, and the session and
//! status-banner helpers the web front end relies on, with storage, page and
//! navigation injected so they run outside a browser.

pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AttendanceError, Result};

// Re-export main components for easy access
pub use models::{ApiResult, AttendanceStatus, Role, SessionUser};
pub use services::{ApiClient, AttendanceApi};
pub use state::{SessionManager, SessionStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
