//! HTTP transport for the blob-hosting service.
//!
//! The service speaks a two-call protocol per document id: `GET
//! {base}/{id}/latest` returns the latest snapshot wrapped in a `record`
//! envelope, `PUT {base}/{id}` replaces the document wholesale. Both carry
//! the master key in the `X-Master-Key` header. Calls fail fast: one bounded
//! attempt, no retries.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use mensa_core::store::{BlobStore, Result, StoreError};

use crate::config::Config;

/// Envelope around a fetched snapshot.
#[derive(Debug, Deserialize)]
struct ReadEnvelope {
    record: Value,
}

/// HTTP client for a JSONBin-style blob service.
#[derive(Debug, Clone)]
pub struct JsonBinClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl JsonBinClient {
    /// Create a new client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.base_url, &config.api_key, config.request_timeout())
    }

    /// URL of the latest-snapshot endpoint for a document.
    fn read_url(&self, document_id: &str) -> String {
        format!("{}/{}/latest", self.base_url, document_id)
    }

    /// URL of the replace endpoint for a document.
    fn write_url(&self, document_id: &str) -> String {
        format!("{}/{}", self.base_url, document_id)
    }

    /// Map a reqwest failure onto the store error kinds.
    fn map_request_error(&self, err: reqwest::Error) -> StoreError {
        if err.is_timeout() {
            StoreError::Timeout(self.timeout)
        } else {
            StoreError::Connection(err.to_string())
        }
    }

    /// Turn a non-success response into an `Http` error with its body.
    async fn error_for_status(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StoreError::Http { status, body }
    }
}

#[async_trait]
impl BlobStore for JsonBinClient {
    async fn read(&self, document_id: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.read_url(document_id))
            .header("X-Master-Key", &self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let envelope: ReadEnvelope = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        tracing::trace!(document_id, "Fetched document snapshot");
        Ok(envelope.record)
    }

    async fn write(&self, document_id: &str, document: &Value) -> Result<()> {
        let response = self
            .client
            .put(self.write_url(document_id))
            .header("X-Master-Key", &self.api_key)
            .json(document)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        tracing::debug!(document_id, "Replaced document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client() -> JsonBinClient {
        JsonBinClient::new(
            "https://api.jsonbin.io/v3/b",
            "key",
            Duration::from_millis(8000),
        )
    }

    #[test]
    fn test_read_url_targets_latest_snapshot() {
        let client = test_client();
        assert_eq!(
            client.read_url("abc123"),
            "https://api.jsonbin.io/v3/b/abc123/latest"
        );
    }

    #[test]
    fn test_write_url_targets_document() {
        let client = test_client();
        assert_eq!(client.write_url("abc123"), "https://api.jsonbin.io/v3/b/abc123");
    }

    #[test]
    fn test_envelope_unwraps_record() {
        let envelope: ReadEnvelope =
            serde_json::from_value(json!({ "record": { "users": [] }, "metadata": {} })).unwrap();
        assert_eq!(envelope.record, json!({ "users": [] }));
    }
}
