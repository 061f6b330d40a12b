//! Project records
//!
//! A [`ProjectRecord`] is an immutable snapshot of one project: identity,
//! dates, budget, schedule, scope, health labels, risks and team.
//! Field names follow the PPM wire format so records round-trip through
//! JSON without renaming.

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Project priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
    /// Critical priority
    Critical,
}

/// Project-level categorical health label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallStatus {
    /// Healthy project
    #[serde(rename = "On Track")]
    OnTrack,
    /// Needs enhanced monitoring
    #[serde(rename = "At Risk")]
    AtRisk,
    /// Needs executive intervention
    Critical,
}

impl OverallStatus {
    /// Wire label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::AtRisk => "At Risk",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Red/amber/green status of a single dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RagStatus {
    /// On track
    Green,
    /// At risk
    Yellow,
    /// Critical
    Red,
}

impl RagStatus {
    /// Overall status equivalent of this label
    #[inline]
    #[must_use]
    pub fn as_overall(&self) -> OverallStatus {
        match self {
            Self::Green => OverallStatus::OnTrack,
            Self::Yellow => OverallStatus::AtRisk,
            Self::Red => OverallStatus::Critical,
        }
    }
}

/// Budget figures in whole currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Approved budget
    pub total: i64,
    /// Spent to date
    pub spent: i64,
    /// Remaining budget (`total - spent`)
    pub remaining: i64,
    /// Signed variance against plan; negative means over budget
    pub variance: i64,
    /// Signed variance relative to plan, in percent
    pub variance_percentage: f64,
}

impl Budget {
    /// Percentage of the total budget already spent
    ///
    /// `total` must be positive; see [`ProjectRecord::validate`].
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn utilization(&self) -> f64 {
        self.spent as f64 / self.total as f64 * 100.0
    }

    /// Whether the variance amount is unfavourable
    #[inline]
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.variance < 0
    }
}

/// Schedule figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Planned duration in days
    pub planned_duration_days: u32,
    /// Actual (forecast) duration in days
    pub actual_duration_days: u32,
    /// Completion, 0-100
    pub percent_complete: u8,
    /// Signed variance in days; negative means behind
    pub variance_days: i32,
    /// Milestones completed out of total
    pub milestone_completion: MilestoneProgress,
}

/// Scope figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    /// Baseline number of scope items
    pub original_scope_items: u32,
    /// Items done
    pub completed_items: u32,
    /// Items being worked
    pub in_progress_items: u32,
    /// Items not started
    pub pending_items: u32,
    /// Number of approved change requests
    pub scope_changes: u32,
    /// Growth relative to the original baseline, in percent
    pub scope_variance_percentage: f64,
}

impl Scope {
    /// Items currently tracked across all states
    #[inline]
    #[must_use]
    pub fn tracked_items(&self) -> u64 {
        [self.completed_items, self.in_progress_items, self.pending_items]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

/// Health labels as reported by the PPM system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Project-level status
    pub overall_status: OverallStatus,
    /// Scope dimension
    pub scope_status: RagStatus,
    /// Budget dimension
    pub budget_status: RagStatus,
    /// Schedule dimension
    pub schedule_status: RagStatus,
    /// Composite score, 0-100
    pub health_score: u8,
}

/// Open risks by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    /// All open risks
    pub total: u32,
    /// Critical severity
    pub critical: u32,
    /// High severity
    pub high: u32,
    /// Medium severity
    pub medium: u32,
    /// Low severity
    pub low: u32,
}

impl RiskCounts {
    /// Sum of the per-severity counts
    #[inline]
    #[must_use]
    pub fn by_severity_sum(&self) -> u64 {
        [self.critical, self.high, self.medium, self.low]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

/// Team figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Headcount
    pub size: u32,
    /// Utilization, 0-100
    pub utilization: u8,
}

/// One project as reported by the PPM system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable identifier, e.g. `PRJ001`
    pub id: String,
    /// Display name
    pub name: String,
    /// Short code
    pub code: String,
    /// Project manager
    pub manager: String,
    /// Executive sponsor
    pub sponsor: String,
    /// Owning department
    pub department: String,
    /// Priority
    pub priority: Priority,
    /// Start date
    pub start_date: NaiveDate,
    /// Baseline end date
    pub planned_end_date: NaiveDate,
    /// Forecast end date
    pub current_end_date: NaiveDate,
    /// Budget figures
    pub budget: Budget,
    /// Schedule figures
    pub schedule: Schedule,
    /// Scope figures
    pub scope: Scope,
    /// Health labels
    pub health: HealthStatus,
    /// Open risks
    pub risks: RiskCounts,
    /// Team figures
    pub team: Team,
}

impl ProjectRecord {
    /// Project-level status
    #[inline]
    #[must_use]
    pub fn overall_status(&self) -> OverallStatus {
        self.health.overall_status
    }

    /// Whether the project is in critical status
    #[inline]
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.overall_status() == OverallStatus::Critical
    }

    /// Whether the project is at risk
    #[inline]
    #[must_use]
    pub fn is_at_risk(&self) -> bool {
        self.overall_status() == OverallStatus::AtRisk
    }
}

/// Milestones completed out of total, written as `"completed/total"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MilestoneProgress {
    /// Milestones reached
    pub completed: u32,
    /// Milestones planned
    pub total: u32,
}

impl MilestoneProgress {
    /// Create new progress pair
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidMilestones`] if `completed > total`.
    pub fn new(completed: u32, total: u32) -> Result<Self, ValidationError> {
        if completed > total {
            return Err(ValidationError::InvalidMilestones(format!("{completed}/{total}")));
        }
        Ok(Self { completed, total })
    }
}

impl fmt::Display for MilestoneProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

impl FromStr for MilestoneProgress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidMilestones(s.to_string());
        let (completed, total) = s.trim().split_once('/').ok_or_else(invalid)?;
        let completed = completed.trim().parse::<u32>().map_err(|_| invalid())?;
        let total = total.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(completed, total)
    }
}

impl Serialize for MilestoneProgress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MilestoneProgress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_parse_and_display() {
        let progress: MilestoneProgress = "5/9".parse().unwrap();
        assert_eq!(progress, MilestoneProgress { completed: 5, total: 9 });
        assert_eq!(progress.to_string(), "5/9");
    }

    #[test]
    fn milestone_rejects_garbage() {
        assert!("5".parse::<MilestoneProgress>().is_err());
        assert!("a/9".parse::<MilestoneProgress>().is_err());
        assert!("10/9".parse::<MilestoneProgress>().is_err());
    }

    #[test]
    fn milestone_serde_as_string() {
        let progress = MilestoneProgress::new(8, 12).unwrap();
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, "\"8/12\"");

        let back: MilestoneProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
    }

    #[test]
    fn overall_status_wire_labels() {
        assert_eq!(serde_json::to_string(&OverallStatus::OnTrack).unwrap(), "\"On Track\"");
        assert_eq!(serde_json::to_string(&OverallStatus::AtRisk).unwrap(), "\"At Risk\"");
        let parsed: OverallStatus = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(parsed, OverallStatus::Critical);
    }

    #[test]
    fn rag_maps_to_overall() {
        assert_eq!(RagStatus::Green.as_overall(), OverallStatus::OnTrack);
        assert_eq!(RagStatus::Yellow.as_overall(), OverallStatus::AtRisk);
        assert_eq!(RagStatus::Red.as_overall(), OverallStatus::Critical);
    }

    #[test]
    fn budget_utilization() {
        let budget = Budget {
            total: 400,
            spent: 100,
            remaining: 300,
            variance: -10,
            variance_percentage: -2.5,
        };
        assert!((budget.utilization() - 25.0).abs() < f64::EPSILON);
        assert!(budget.is_over_budget());
    }
}
