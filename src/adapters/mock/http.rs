//! Mock HTTP client for testing.
//!
//! Responses are configured per URL; a request URL matches exactly first and
//! otherwise by the longest configured prefix, so `/v2/projects` does not
//! shadow `/v2/projects/1/faults`.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail at the transport layer
    Error(HttpError),
    /// Never complete
    Hang,
}

impl MockResponse {
    /// 200 with the given JSON document.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(&value))
    }

    /// 200 with `{"results": value}`, the Data API list envelope.
    pub fn results(value: serde_json::Value) -> Self {
        Self::json(serde_json::json!({ "results": value }))
    }

    /// Arbitrary status with a raw body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// Clones share configuration and recorded requests.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://app.honeybadger.io/v2/accounts",
///     MockResponse::results(serde_json::json!([{"id": "abc", "name": "Acme"}])),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL (exact or prefix).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// URLs of all recorded requests, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        lock(&self.requests).iter().map(|r| r.url.clone()).collect()
    }

    fn response_for(&self, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let by_prefix = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if by_prefix.is_some() {
            return by_prefix;
        }

        lock(&self.default_response).clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        lock(&self.requests).push(RecordedRequest {
            method: "GET".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.response_for(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Hang) => futures::future::pending().await,
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
