//! HTTP transport and signed URL creation

use std::future::Future;

use comicmeta_core::marvel::auth::{build_url, Credentials};
use comicmeta_core::marvel::wire::MarvelResponse;
use serde::de::DeserializeOwned;

use crate::prelude::MetadataError;

/// Fetches the body of a GET request
///
/// Implementations report connection failures, timeouts and non-2xx statuses
/// alike as [`MetadataError::Transport`].
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, MetadataError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, MetadataError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MetadataError::transport("Failed to send request to Marvel", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::transport_status(format!(
                "Failed to fetch Marvel data [{}]: {}",
                status, body
            )));
        }

        response
            .text()
            .await
            .map_err(|e| MetadataError::transport("Failed to read Marvel response", e))
    }
}

/// Compose a signed URL stamped with the current time
///
/// The signature is time-bound, so every request gets a fresh timestamp.
pub fn create_url(base_url: &str, path: &str, query: &str, credentials: &Credentials) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    build_url(base_url, path, query, credentials, timestamp)
}

/// Fetch one page and decode the response envelope
pub async fn fetch_page<T, W>(transport: &T, url: &str) -> Result<MarvelResponse<W>, MetadataError>
where
    T: Transport,
    W: DeserializeOwned,
{
    let body = transport.get(url).await?;

    if body.trim().is_empty() {
        return Err(MetadataError::Response("Failed to receive response".to_string()));
    }

    serde_json::from_str(&body)
        .map_err(|e| MetadataError::Response(format!("Failed to parse Marvel response: {}", e)))
}
