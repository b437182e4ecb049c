//! Transport port for the catalog service.
//!
//! The gateway talks to the outside world only through [`CatalogTransport`],
//! which keeps the normalization and fail-soft logic testable without a
//! network. [`HttpTransport`] is the production implementation.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::CatalogConfig;

/// Errors a transport implementation can surface to the gateway.
///
/// None of these ever reach gateway callers; the gateway absorbs them at
/// its fail-soft boundary.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Read-only access to the catalog service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// GET `path` relative to the service base with extra query pairs.
    ///
    /// Implementations inject the API key and language parameters
    /// uniformly; callers only pass operation-specific parameters.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, TransportError>;
}

/// reqwest-backed transport against the real catalog service
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpTransport {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            path
        ))
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, TransportError> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_eating_the_base_path() {
        let transport = HttpTransport::new(CatalogConfig::new("k"));
        let url = transport.endpoint("/movie/popular").unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/movie/popular");

        let mut config = CatalogConfig::new("k");
        config.base_url = "https://api.themoviedb.org/3/".to_string();
        let transport = HttpTransport::new(config);
        let url = transport.endpoint("/tv/popular").unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/tv/popular");
    }
}
