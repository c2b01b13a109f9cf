//! Services module
//!
//! This module contains the HTTP wrapper and the domain call surface built
//! on top of it.

pub mod api;
pub mod http;

// Re-export commonly used services
pub use api::AttendanceApi;
pub use http::ApiClient;
