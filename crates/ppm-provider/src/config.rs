//! Provider configuration

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Mock API server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Interface to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// JSON catalog to serve instead of the built-in sample
    pub catalog_path: Option<PathBuf>,
}

impl ProviderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With listen host
    #[inline]
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// With listen port
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Resolved listen address
    ///
    /// # Errors
    /// Returns [`ProviderError::InvalidAddress`] if host and port do not form a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ProviderError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| ProviderError::InvalidAddress(raw))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            catalog_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_5000() {
        let config = ProviderConfig::new();
        assert_eq!(config.socket_addr().unwrap().port(), 5000);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ProviderConfig::new()
            .with_host("127.0.0.1")
            .with_port(8080)
            .with_catalog_path("catalog.json");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.catalog_path.unwrap(), PathBuf::from("catalog.json"));
    }

    #[test]
    fn rejects_hostname() {
        let config = ProviderConfig::new().with_host("not a host");
        assert!(config.socket_addr().is_err());
    }
}
