//! Error types for portfolio data
//!
//! - [`ValidationError`]: a record breaks one of its invariants
//! - [`SourceError`]: the data provider could not deliver what was asked

/// Record invariant violations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Total budget must be positive
    #[error("budget total must be positive, got {0}")]
    NonPositiveBudget(i64),

    /// Remaining budget does not match total minus spent
    #[error("budget remaining {remaining} != total {total} - spent {spent}")]
    BudgetMismatch {
        /// Approved budget
        total: i64,
        /// Spent to date
        spent: i64,
        /// Reported remaining
        remaining: i64,
    },

    /// Percentage outside 0-100
    #[error("{field} out of range: {value}")]
    PercentOutOfRange {
        /// Dotted field path
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Risk total does not match the per-severity counts
    #[error("risk total {total} != sum of severities {sum}")]
    RiskCountMismatch {
        /// Reported total
        total: u32,
        /// Sum of the per-severity counts
        sum: u64,
    },

    /// Tracked scope items exceed the (grown) baseline
    #[error("scope items {tracked} exceed allowed {allowed}")]
    ScopeOverflow {
        /// Completed, in-progress and pending items
        tracked: u64,
        /// Baseline grown by the scope variance
        allowed: u32,
    },

    /// Malformed milestone pair
    #[error("invalid milestone completion: {0}")]
    InvalidMilestones(String),

    /// Identifier is empty
    #[error("project id is empty")]
    EmptyId,
}

/// Data provider failures
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Provider could not be reached
    #[error("provider unavailable at {endpoint}: {reason}")]
    Unavailable {
        /// URL or endpoint requested
        endpoint: String,
        /// Transport failure
        reason: String,
    },

    /// Requested project does not exist
    #[error("project not found: {0}")]
    NotFound(String),

    /// Provider answered with something that could not be used
    #[error("malformed response from {endpoint}: {reason}")]
    Malformed {
        /// URL or endpoint requested
        endpoint: String,
        /// What was wrong with the response
        reason: String,
    },

    /// Provider returned a record that breaks its invariants
    #[error("invalid record {id}: {source}")]
    InvalidRecord {
        /// Record identifier
        id: String,
        /// Violated invariant
        #[source]
        source: ValidationError,
    },
}

impl SourceError {
    /// Create unavailable error
    #[inline]
    pub fn unavailable(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unavailable {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    /// Create malformed-response error
    #[inline]
    pub fn malformed(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::Malformed {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the provider could not be reached
    #[inline]
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Check if a requested project was missing
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
