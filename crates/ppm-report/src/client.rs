//! HTTP client for the provider API

use crate::config::ReportConfig;
use crate::error::ReportError;
use async_trait::async_trait;
use ppm_model::{
    Envelope, PortfolioHealth, PortfolioSource, PortfolioSummary, ProjectRecord, ServiceStatus,
    SourceError,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// [`PortfolioSource`] backed by the provider's REST API
///
/// Each request is attempted once. Transport failures and timeouts map to
/// [`SourceError::Unavailable`] and anything else unusable to
/// [`SourceError::Malformed`]. Only a 404 for a single project is
/// [`SourceError::NotFound`].
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    base: String,
}

impl ProviderClient {
    /// Create client from configuration
    ///
    /// # Errors
    /// Returns [`ReportError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &ReportConfig) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ReportError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are resolved against
    #[inline]
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn send(&self, url: &str) -> Result<Response, SourceError> {
        tracing::debug!(%url, "GET");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::unavailable(url, e))
    }

    /// Decode a response; every non-success status is malformed here
    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, SourceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::malformed(url, format!("HTTP {status}")));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::unavailable(url, e)
            } else {
                SourceError::malformed(url, e)
            }
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = self.url(path);
        let response = self.send(&url).await?;
        Self::decode(&url, response).await
    }

    async fn fetch_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let envelope: Envelope<T> = self.fetch(path).await?;
        envelope.into_data(&self.url(path))
    }

    /// Check the provider's health endpoint
    ///
    /// # Errors
    /// Returns [`SourceError::Unavailable`] if the provider is down.
    pub async fn ping(&self) -> Result<ServiceStatus, SourceError> {
        self.fetch("/health").await
    }
}

#[async_trait]
impl PortfolioSource for ProviderClient {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, SourceError> {
        self.fetch_data("/projects").await
    }

    async fn get_project(&self, id: &str) -> Result<ProjectRecord, SourceError> {
        let url = self.url(&format!("/projects/{id}"));
        let response = self.send(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id.to_string()));
        }
        let envelope: Envelope<ProjectRecord> = Self::decode(&url, response).await?;
        envelope.into_data(&url)
    }

    async fn portfolio_summary(&self) -> Result<PortfolioSummary, SourceError> {
        self.fetch_data("/portfolio/summary").await
    }

    async fn portfolio_health(&self) -> Result<PortfolioHealth, SourceError> {
        self.fetch_data("/portfolio/health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_trimmed() {
        let config = ReportConfig::new().with_api_base("http://localhost:5000/api/");
        let client = ProviderClient::new(&config).unwrap();
        assert_eq!(client.url("/projects"), "http://localhost:5000/api/projects");
    }
}
