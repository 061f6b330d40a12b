//! Wire envelopes
//!
//! Every provider response is wrapped as
//! `{"success": bool, "timestamp": ..., "total"?: n, "data"?: T, "error"?: msg}`.

use crate::error::SourceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Number of items in `data`, for collection responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    /// When the response was produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`
    #[inline]
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            total: None,
            timestamp: Some(Utc::now()),
            data: Some(data),
            error: None,
        }
    }

    /// Failed response
    #[inline]
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            total: None,
            timestamp: None,
            data: None,
            error: Some(error.into()),
        }
    }

    /// With item count
    #[inline]
    #[must_use]
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    /// Unwrap the payload, treating `success: false` or a missing payload as malformed
    ///
    /// # Errors
    /// Returns [`SourceError::Malformed`] naming `endpoint`.
    pub fn into_data(self, endpoint: &str) -> Result<T, SourceError> {
        if !self.success {
            let reason = self.error.unwrap_or_else(|| "request failed".to_string());
            return Err(SourceError::malformed(endpoint, reason));
        }
        self.data
            .ok_or_else(|| SourceError::malformed(endpoint, "missing data"))
    }
}

/// Body of the service health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// `"ok"` when serving
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// When the check ran
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_serializes_without_data() {
        let env = Envelope::<()>::failure("Project not found");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "Project not found"})
        );
    }

    #[test]
    fn into_data_rejects_failure() {
        let env = Envelope::<u32>::failure("boom");
        let err = env.into_data("/api/x").unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn into_data_rejects_missing_payload() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.into_data("/api/x").is_err());
    }

    #[test]
    fn ok_round_trip() {
        let env = Envelope::ok(vec![1, 2, 3]).with_total(3);
        let json = serde_json::to_string(&env).unwrap();
        let back: Envelope<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, Some(3));
        assert_eq!(back.into_data("/api/x").unwrap(), vec![1, 2, 3]);
    }
}
