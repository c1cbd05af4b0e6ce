//! Transport layer abstraction.
//!
//! Defines the capability interface the client dispatches through,
//! allowing the routing layer to work with any HTTP backend.

use crate::error::ClientResult;
use crate::types::QueryParams;
use async_trait::async_trait;
use serde_json::Value;

/// An HTTP transport the client routes requests through.
///
/// Each operation resolves to the parsed JSON response body. Transports
/// do not retry, interpret, or unwrap bodies; that is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET request.
    async fn get(&self, path: &str, params: Option<&QueryParams>) -> ClientResult<Value>;

    /// Issues a POST request.
    async fn post(&self, path: &str, body: Option<&Value>) -> ClientResult<Value>;

    /// Issues a PUT request.
    async fn put(&self, path: &str, body: Option<&Value>) -> ClientResult<Value>;

    /// Issues a PATCH request.
    async fn patch(&self, path: &str, body: Option<&Value>) -> ClientResult<Value>;

    /// Issues a DELETE request.
    async fn delete(&self, path: &str, params: Option<&QueryParams>) -> ClientResult<Value>;
}

/// A mock transport for testing.
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// One request dispatched through the mock.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        /// HTTP verb ("GET", "PATCH", ...).
        pub method: &'static str,
        /// Resolved request path.
        pub path: String,
        /// Query parameters, if any were passed.
        pub params: Option<QueryParams>,
        /// Request body, if any was passed.
        pub body: Option<Value>,
    }

    /// Records every dispatched request and replays queued response
    /// bodies in order. With the queue empty it answers `{ "data": null }`.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        requests: Mutex<Vec<RecordedRequest>>,
        responses: Mutex<VecDeque<Value>>,
    }

    impl MockTransport {
        /// Creates a mock with no queued responses.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response body to be returned by the next request.
        pub fn queue_response(&self, body: Value) {
            self.responses.lock().unwrap().push_back(body);
        }

        /// Returns a copy of every request dispatched so far.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn record(
            &self,
            method: &'static str,
            path: &str,
            params: Option<&QueryParams>,
            body: Option<&Value>,
        ) -> Value {
            self.requests.lock().unwrap().push(RecordedRequest {
                method,
                path: path.to_string(),
                params: params.cloned(),
                body: body.cloned(),
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| serde_json::json!({ "data": null }))
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, path: &str, params: Option<&QueryParams>) -> ClientResult<Value> {
            Ok(self.record("GET", path, params, None))
        }

        async fn post(&self, path: &str, body: Option<&Value>) -> ClientResult<Value> {
            Ok(self.record("POST", path, None, body))
        }

        async fn put(&self, path: &str, body: Option<&Value>) -> ClientResult<Value> {
            Ok(self.record("PUT", path, None, body))
        }

        async fn patch(&self, path: &str, body: Option<&Value>) -> ClientResult<Value> {
            Ok(self.record("PATCH", path, None, body))
        }

        async fn delete(&self, path: &str, params: Option<&QueryParams>) -> ClientResult<Value> {
            Ok(self.record("DELETE", path, params, None))
        }
    }
}
