//! Mock attendance server for testing
//!
//! This module provides a mock HTTP server that stands in for the attendance
//! REST backend. It uses wiremock to serve configurable envelopes under the
//! `/api` root.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use attendance_client::{config::Settings, AttendanceApi};

/// Mock attendance API server
pub struct ApiMockServer {
    pub server: MockServer,
}

impl ApiMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Settings pointing the client at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.server.uri();
        settings
    }

    pub fn api(&self) -> AttendanceApi {
        AttendanceApi::new(&self.settings()).expect("client builds")
    }

    /// Expect exactly one `verb` request on `/api{endpoint}` and answer `response`
    pub async fn expect_call(&self, verb: &str, endpoint: &str, response: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", endpoint)))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Like [`expect_call`](Self::expect_call) but also matches the JSON body
    pub async fn expect_call_with_body(&self, verb: &str, endpoint: &str, body: Value, response: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", endpoint)))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer any request with a raw body and status
    pub async fn respond_raw(&self, status: u16, body: &str) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Query string of the only request received so far
    pub async fn single_request_query(&self) -> Option<String> {
        let requests = self.server.received_requests().await.unwrap_or_default();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].url.query().map(str::to_string)
    }
}

pub fn ok_ack() -> Value {
    json!({"success": true})
}

pub fn ok_data(data: Value) -> Value {
    json!({"success": true, "data": data})
}

pub fn failed(message: &str) -> Value {
    json!({"success": false, "error": message})
}
