//! Shared fixtures: a scripted transport that records every request.

#![allow(dead_code)]

use redlink::{ApiClient, ClientConfig, Error, FormatRegistry, HttpRequest, HttpResponse, Result, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const KEY: &str = "test-key";
pub const ENDPOINT: &str = "http://redlink.test";

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<HttpResponse>>,
    requests: Vec<HttpRequest>,
}

/// Answers requests from a queue of canned responses.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: HttpResponse) -> &Self {
        self.script.lock().unwrap().responses.push_back(Ok(response));
        self
    }

    pub fn fail(&self, error: Error) -> &Self {
        self.script.lock().unwrap().responses.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request recorded")
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut script = self.script.lock().unwrap();
        script.requests.push(request.clone());
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {}", request.url))
    }
}

pub fn response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        reason: reason_for(status).to_string(),
        content_type: content_type.map(str::to_string),
        body: body.as_bytes().to_vec(),
    }
}

fn reason_for(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

pub fn status_response(accessible: bool, analyses: &[&str]) -> HttpResponse {
    let body = serde_json::json!({
        "accessible": accessible,
        "owner": "tester",
        "datasets": ["test"],
        "analyses": analyses,
    });
    response(200, Some("application/json;charset=UTF-8"), &body.to_string())
}

pub fn config() -> ClientConfig {
    ClientConfig {
        endpoint: ENDPOINT.to_string(),
        version: "1.0.0".to_string(),
        ..ClientConfig::default()
    }
}

/// A client whose status probe has already been answered.
pub fn connect(analyses: &[&str]) -> (ApiClient, MockTransport) {
    let transport = MockTransport::new();
    transport.respond(status_response(true, analyses));
    let client = ApiClient::new_with_dependencies(
        KEY,
        &config(),
        Box::new(transport.clone()),
        FormatRegistry::standard(),
    )
    .expect("client connects");
    (client, transport)
}

pub fn url(path_and_query: &str) -> String {
    format!("{}/1.0{}", ENDPOINT, path_and_query)
}
