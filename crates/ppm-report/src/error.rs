//! Error types for report generation

use ppm_model::SourceError;
use std::path::PathBuf;

/// Report generation errors
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Data provider failed
    #[error("data source error: {0}")]
    Source(#[from] SourceError),

    /// Report could not be written
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be serialized
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration invalid or unreadable
    #[error("configuration error: {0}")]
    Config(String),
}

impl ReportError {
    /// Check if the provider could not be reached
    #[inline]
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Source(e) if e.is_unavailable())
    }

    /// Create I/O error for `path`
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_display() {
        let err = ReportError::from(SourceError::unavailable(
            "http://localhost:5000/api/projects",
            "connection refused",
        ));
        assert!(err.is_unavailable());
        assert_eq!(
            err.to_string(),
            "data source error: provider unavailable at http://localhost:5000/api/projects: connection refused"
        );

        let err = ReportError::Config("timeout_secs must be positive".to_string());
        assert!(!err.is_unavailable());
        assert_eq!(
            err.to_string(),
            "configuration error: timeout_secs must be positive"
        );
    }
}
