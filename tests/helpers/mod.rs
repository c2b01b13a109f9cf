//! Test helpers module
//!
//! Shared mock server and envelope builders for the integration tests.

#![allow(dead_code)]

pub mod api_mock;

pub use api_mock::*;

/// Address on localhost that nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
