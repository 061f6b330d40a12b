//! Report configuration

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Report generation configuration
///
/// Loaded from TOML when given; CLI flags override individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Base URL of the provider API, including the `/api` prefix
    pub api_base: String,
    /// Directory the report files are written to
    pub output_dir: PathBuf,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ReportConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With provider base URL
    #[inline]
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// With output directory
    #[inline]
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse from TOML text; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ReportError::Config`] on invalid TOML or values.
    pub fn from_toml(text: &str) -> Result<Self, ReportError> {
        let config: Self = toml::from_str(text).map_err(|e| ReportError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ReportError::Io`] if unreadable, else as [`Self::from_toml`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        Self::from_toml(&text)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ReportError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.api_base.trim().is_empty() {
            return Err(ReportError::Config("api_base must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ReportError::Config(
                "timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000/api".to_string(),
            output_dir: PathBuf::from("./reports"),
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReportConfig::new();
        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ReportConfig::from_toml("output_dir = \"/tmp/reports\"\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = ReportConfig::from_toml("timeout_secs = 0").unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn builders_override() {
        let config = ReportConfig::new()
            .with_api_base("http://127.0.0.1:9000/api")
            .with_timeout_secs(3);
        assert_eq!(config.api_base, "http://127.0.0.1:9000/api");
        assert_eq!(config.timeout_secs, 3);
    }
}
