//! Shared helpers for the wiremock integration tests

#![allow(dead_code)]

use edgegrid_sdk::{ClientConfig, Session};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Read a JSON fixture from `tests/testdata`
pub fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {}", path.display(), e))
}

/// Decode a fixture into `T`
pub fn fixture_as<T: serde::de::DeserializeOwned>(name: &str) -> T {
    serde_json::from_str(&fixture(name)).expect("fixture should decode")
}

/// Unsigned session pointed at the mock server
pub fn mock_session(server: &MockServer) -> Session {
    Session::new(&ClientConfig::new(server.uri())).expect("session should build")
}

/// Fail the test if the server receives any request at all
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .named("no request expected")
        .mount(server)
        .await;
}

/// Path and query of every request the server received, in order
pub async fn received_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|r| match r.url.query() {
            Some(q) => format!("{}?{}", r.url.path(), q),
            None => r.url.path().to_string(),
        })
        .collect()
}

/// Problem JSON body as the API sends it
pub fn problem_body(error_type: &str, title: &str, detail: &str, status: u16) -> String {
    serde_json::json!({
        "type": error_type,
        "title": title,
        "detail": detail,
        "status": status
    })
    .to_string()
}
