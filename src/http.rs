//! reqwest-backed transport implementation.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport::Transport;
use crate::types::QueryParams;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP transport speaking to a live API.
pub struct HttpTransport {
    config: ClientConfig,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport for the configured API.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> ClientResult<Value> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // DELETE and similar answer 204 with no body.
        let body = response.text().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Flattens params into query pairs. String values go through verbatim,
/// arrays as comma-separated lists, everything else in JSON notation.
fn query_pairs(params: &QueryParams) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| (key.clone(), render_query_value(value)))
        .collect()
}

fn render_query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_query_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: Option<&QueryParams>) -> ClientResult<Value> {
        debug!("GET {}", path);
        let mut request = self.apply_auth(self.client.get(self.url(path)));
        if let Some(params) = params {
            request = request.query(&query_pairs(params));
        }
        self.execute(request).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> ClientResult<Value> {
        debug!("POST {}", path);
        let mut request = self.apply_auth(self.client.post(self.url(path)));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    async fn put(&self, path: &str, body: Option<&Value>) -> ClientResult<Value> {
        debug!("PUT {}", path);
        let mut request = self.apply_auth(self.client.put(self.url(path)));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    async fn patch(&self, path: &str, body: Option<&Value>) -> ClientResult<Value> {
        debug!("PATCH {}", path);
        let mut request = self.apply_auth(self.client.patch(self.url(path)));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    async fn delete(&self, path: &str, params: Option<&QueryParams>) -> ClientResult<Value> {
        debug!("DELETE {}", path);
        let mut request = self.apply_auth(self.client.delete(self.url(path)));
        if let Some(params) = params {
            request = request.query(&query_pairs(params));
        }
        self.execute(request).await
    }
}
