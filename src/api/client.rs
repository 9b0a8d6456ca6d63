//! HTTP client for the inventory backend.
//!
//! A thin wrapper around reqwest against a fixed base URL. Every call is a
//! single attempt — no retries, no client-side timeout; retry policy belongs
//! to the caller (and there is none in this app).

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::InventoryApi;
use super::types::{Envelope, ErrorBody, Item, ItemDraft};

/// Errors that can come out of a single request. The three variants are
/// deliberately distinguishable so callers can classify failures.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, reset mid-body).
    Network(String),
    /// Non-2xx response. `message` is the server's error string when the
    /// body was the usual `{success:false, error}` shape, raw text otherwise.
    Http { status: u16, message: String },
    /// The response body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the inventory REST API (`baseURL + "/items"`).
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Sends one request and returns the `data` field of the parsed envelope.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, body).await?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<T> =
            serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?;
        if !envelope.success {
            // The backend has never sent success:false with a 2xx status;
            // tolerate it the way the original client did and use the data.
            warn!("2xx response with success=false for {path}");
        }
        Ok(envelope.data)
    }

    /// Like `request`, but discards the response body (DELETE ack).
    async fn request_ack(
        &self,
        method: Method,
        path: &str,
    ) -> Result<(), ApiError> {
        self.send::<()>(method, path, None).await.map(|_| ())
    }

    /// Common send path: builds the URL, attaches the JSON body if any, and
    /// turns a non-2xx status into `ApiError::Http` with the server's error
    /// message extracted from the body when possible.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");

        let mut builder = self.client.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => body.error,
                Err(_) => text,
            };
            warn!("request to {url} failed: HTTP {status} - {message}");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl InventoryApi for ApiClient {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.request(Method::GET, "/items", None::<&()>).await
    }

    async fn get(&self, id: &str) -> Result<Item, ApiError> {
        self.request(Method::GET, &format!("/items/{id}"), None::<&()>)
            .await
    }

    async fn create(&self, draft: &ItemDraft) -> Result<Item, ApiError> {
        self.request(Method::POST, "/items", Some(draft)).await
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<Item, ApiError> {
        self.request(Method::PUT, &format!("/items/{id}"), Some(draft))
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.request_ack(Method::DELETE, &format!("/items/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:5000/api/".to_string());
        assert_eq!(client.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Http {
            status: 409,
            message: "Item with this name already exists".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server error (HTTP 409): Item with this name already exists"
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
    }
}
