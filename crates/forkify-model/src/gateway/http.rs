use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::provider::RecipeGateway;
use crate::error::{ModelError, ModelResult};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// reqwest-backed gateway to the recipe API
pub struct HttpGateway {
    client: Client,
    timeout: Duration,
}

impl HttpGateway {
    pub fn new(timeout: Duration) -> ModelResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ModelError::Gateway(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, timeout })
    }

    fn send_error(&self, err: reqwest::Error) -> ModelError {
        if err.is_timeout() {
            ModelError::Timeout(self.timeout.as_secs())
        } else {
            ModelError::Gateway(err.to_string())
        }
    }
}

/// Error text for a non-success response: the API's `message` field when it has one
fn status_error(status: StatusCode, body: &str) -> ModelError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
    ModelError::Gateway(format!("{} ({})", message, status.as_u16()))
}

#[async_trait]
impl RecipeGateway for HttpGateway {
    async fn fetch(&self, url: &str, payload: Option<&Value>) -> ModelResult<Value> {
        let request = match payload {
            Some(body) => self.client.post(url).json(body),
            None => self.client.get(url),
        };
        debug!(upload = payload.is_some(), "Sending recipe API request");

        let response = request.send().await.map_err(|e| self.send_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.send_error(e))?;

        if !status.is_success() {
            return Err(status_error(status, &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| ModelError::MalformedResponse(format!("invalid JSON body: {}", e)))
    }
}
