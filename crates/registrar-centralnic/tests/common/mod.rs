//! Test doubles and common utilities for adapter contract tests
//!
//! This module provides a scripted transport double that records every
//! outgoing request and serves queued responses, so the tests can verify the
//! exact wire contract without any network access.

use registrar_core::error::Result;
use registrar_core::traits::HttpTransport;
use registrar_core::{Contact, Error};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One request as seen by the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// First value for a form parameter, if present
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of occurrences of a form parameter
    pub fn param_count(&self, key: &str) -> usize {
        self.params.iter().filter(|(k, _)| k == key).count()
    }

    /// All parameter keys starting with a prefix, in emission order
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.params
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| k.starts_with(prefix))
            .collect()
    }
}

/// A scripted HttpTransport that records calls
///
/// Responses are served in queue order; when the queue is empty a bare
/// `{"code":200}` envelope is returned.
pub struct MockTransport {
    /// Queued responses, consumed front to back
    responses: Mutex<VecDeque<Result<String>>>,
    /// Every request the adapter issued, in order
    requests: Mutex<Vec<RecordedRequest>>,
    /// Call counter for post_form()
    call_count: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        })
    }

    /// Create a transport pre-loaded with a single response body
    pub fn with_response(body: &str) -> Arc<Self> {
        let transport = Self::new();
        transport.queue_ok(body);
        transport
    }

    /// Queue a successful response body
    pub fn queue_ok(&self, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.to_string()));
    }

    /// Queue a transport-level failure
    pub fn queue_err(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(Error::transport(message)));
    }

    /// Get the number of times post_form() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the recorded requests
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the single recorded request, panicking unless exactly one was made
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            params: params.to_vec(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(r#"{"code":200}"#.to_string()))
    }
}

/// A contact with every field populated, for upsert tests
pub fn sample_contact() -> Contact {
    Contact {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        address1: "1 Example Street".to_string(),
        city: "Springfield".to_string(),
        zip: "12345".to_string(),
        state: Some("CA".to_string()),
        country: "US".to_string(),
        email: "jane@example.com".to_string(),
        tel_cc: "1".to_string(),
        tel: "5551234567".to_string(),
    }
}
