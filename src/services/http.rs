//! HTTP client wrapper for the attendance REST API
//!
//! All four verbs go through [`ApiClient::request`], which never fails: any
//! transport, serialization or parse problem comes back as
//! [`ApiResult::Failure`] carrying the underlying error's message.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;

use crate::config::Settings;
use crate::models::ApiResult;
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::logging::{log_api_error, log_api_request, log_api_response};

/// Thin JSON client bound to one API root
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    api_url: String,
}

impl ApiClient {
    /// Create a client for the API root described by `settings`
    ///
    /// No request timeout is configured; calls wait for the server.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.api.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, settings.api_url()))
    }

    /// Wrap an existing `reqwest` client
    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn get(&self, endpoint: &str) -> ApiResult {
        self.request(Method::GET, endpoint, None::<&Value>).await
    }

    pub async fn post<B>(&self, endpoint: &str, body: &B) -> ApiResult
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<B>(&self, endpoint: &str, body: &B) -> ApiResult
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> ApiResult {
        self.request(Method::DELETE, endpoint, None::<&Value>).await
    }

    /// Issue one request and fold every failure into the result envelope
    pub async fn request<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> ApiResult
    where
        B: Serialize + ?Sized,
    {
        match self.send(&method, endpoint, body).await {
            Ok(result) => result,
            Err(e) => {
                log_api_error(method.as_str(), endpoint, &e);
                ApiResult::failure(e.to_string())
            }
        }
    }

    async fn send<B>(&self, method: &Method, endpoint: &str, body: Option<&B>) -> Result<ApiResult>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.api_url, endpoint);
        log_api_request(method.as_str(), &url, body.is_some());

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        log_api_response(method.as_str(), &url, status.as_u16(), text.len());

        if text.is_empty() {
            return Err(AttendanceError::EmptyResponse);
        }

        let value: Value = serde_json::from_str(&text)?;
        Ok(ApiResult::from(value))
    }
}
