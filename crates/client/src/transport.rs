//! Network seam for listing fetches.

use serde_json::Value;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::state::FetchRequest;

/// A failed fetch. `Display` is the message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body was not JSON.
    #[error("{0}")]
    Decode(String),
}

/// Fetches one listing page as raw JSON.
#[async_trait::async_trait]
pub trait ItemsTransport: Send + Sync {
    async fn fetch_items(&self, request: &FetchRequest) -> Result<Value, FetchError>;
}

/// `reqwest`-backed transport talking to `GET {base_url}/api/items`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn query_pairs(request: &FetchRequest) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", request.page.to_string()),
            ("limit", request.limit.to_string()),
        ];
        if !request.query.is_empty() {
            pairs.push(("q", request.query.clone()));
        }
        pairs
    }
}

#[async_trait::async_trait]
impl ItemsTransport for HttpTransport {
    async fn fetch_items(&self, request: &FetchRequest) -> Result<Value, FetchError> {
        let url = format!("{}/api/items", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&Self::query_pairs(request))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_read_like_http_codes() {
        assert_eq!(FetchError::Status(500).to_string(), "HTTP 500");
        assert_eq!(FetchError::Network("connection refused".into()).to_string(), "connection refused");
    }

    #[test]
    fn empty_query_is_not_sent() {
        let request = FetchRequest {
            page: 2,
            limit: 50,
            query: String::new(),
        };
        let pairs = HttpTransport::query_pairs(&request);
        assert_eq!(pairs, vec![("page", "2".to_string()), ("limit", "50".to_string())]);

        let pairs = HttpTransport::query_pairs(&FetchRequest {
            query: "lamp".into(),
            ..request
        });
        assert_eq!(pairs.last(), Some(&("q", "lamp".to_string())));
    }
}
