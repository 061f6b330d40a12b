//! Error types for the data provider

use ppm_model::ValidationError;
use std::path::PathBuf;

/// Provider errors
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Catalog JSON could not be parsed
    #[error("catalog parse failed: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("cannot read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog record breaks its invariants
    #[error("invalid project {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: ValidationError,
    },

    /// Two records share an identifier
    #[error("duplicate project id: {0}")]
    DuplicateId(String),

    /// Listen address is not valid
    #[error("invalid listen address {0}")]
    InvalidAddress(String),

    /// Server could not bind
    #[error("cannot bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

impl ProviderError {
    /// Check if the error came from catalog contents rather than I/O or networking
    #[inline]
    #[must_use]
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::CatalogParse(_) | Self::InvalidRecord { .. } | Self::DuplicateId(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display() {
        let err = ProviderError::DuplicateId("PRJ001".to_string());
        assert_eq!(err.to_string(), "duplicate project id: PRJ001");
    }

    #[test]
    fn provider_error_classification() {
        assert!(ProviderError::DuplicateId("x".into()).is_catalog_error());
        assert!(!ProviderError::InvalidAddress("nope".into()).is_catalog_error());
    }
}
