//! Domain call surface
//!
//! One method per server endpoint, split by resource. Each method only maps
//! its arguments onto a path and body and delegates to [`ApiClient`]; there
//! is no validation or aggregation here.

mod attendance;
mod auth;
mod classes;
mod students;
mod subjects;
mod teachers;

use crate::config::Settings;
use crate::utils::errors::Result;
use super::http::ApiClient;

/// Client for every attendance server endpoint
#[derive(Clone, Debug)]
pub struct AttendanceApi {
    http: ApiClient,
}

impl AttendanceApi {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(settings)?))
    }

    pub fn from_client(http: ApiClient) -> Self {
        Self { http }
    }

    /// Underlying HTTP wrapper, for endpoints not covered here
    pub fn http(&self) -> &ApiClient {
        &self.http
    }
}
