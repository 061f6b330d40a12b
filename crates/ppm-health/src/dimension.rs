//! Per-project dimension assessors
//!
//! Each assessor classifies one metric into a tagged verdict carrying the
//! figures its narrative needs. Wording lives only in the `Display` impls,
//! so the threshold logic can be tested without matching sentences.
//!
//! | dimension | CRITICAL     | WARNING          | otherwise                      |
//! |-----------|--------------|------------------|--------------------------------|
//! | scope     | `v > 15`     | `5 < v <= 15`    | HEALTHY                        |
//! | budget    | `p < -5`     | `-5 <= p < 0`    | HEALTHY                        |
//! | timeline  | `d < -20`    | `-20 <= d < -5`  | AHEAD if `d > 5`, else ON TRACK |

use serde::{Serialize, Serializer};
use std::fmt;

/// Scope variance above which growth is critical
pub const SCOPE_CRITICAL_PCT: f64 = 15.0;
/// Scope variance above which growth needs monitoring
pub const SCOPE_WARNING_PCT: f64 = 5.0;
/// Budget variance below which overrun is critical
pub const BUDGET_CRITICAL_PCT: f64 = -5.0;
/// Budget variance below which the project trends over budget
pub const BUDGET_WARNING_PCT: f64 = 0.0;
/// Schedule variance below which delay is critical
pub const TIMELINE_CRITICAL_DAYS: f64 = -20.0;
/// Schedule variance below which delay needs attention
pub const TIMELINE_WARNING_DAYS: f64 = -5.0;
/// Schedule variance above which the project is ahead
pub const TIMELINE_AHEAD_DAYS: f64 = 5.0;

/// Severity tier of a dimension verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Needs immediate action
    Critical,
    /// Needs monitoring
    Warning,
    /// Within tolerance
    Healthy,
    /// Ahead of plan (timeline only)
    Ahead,
    /// On plan (timeline only)
    OnTrack,
}

impl Tier {
    /// Narrative prefix
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Warning => "WARNING",
            Self::Healthy => "HEALTHY",
            Self::Ahead => "AHEAD",
            Self::OnTrack => "ON TRACK",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classified dimension with a renderable narrative
pub trait DimensionVerdict: fmt::Display {
    /// Severity tier
    fn tier(&self) -> Tier;

    /// Narrative sentence
    fn narrative(&self) -> String {
        self.to_string()
    }
}

/// Scope verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScopeVerdict {
    /// Significant scope creep
    Critical {
        /// Scope growth in percent
        variance_pct: f64,
        /// Change requests
        changes: u32,
    },
    /// Growth worth monitoring
    Warning {
        /// Scope growth in percent
        variance_pct: f64,
        /// Change requests
        changes: u32,
    },
    /// Scope under control
    Healthy {
        /// Scope growth in percent
        variance_pct: f64,
    },
}

impl DimensionVerdict for ScopeVerdict {
    fn tier(&self) -> Tier {
        match self {
            Self::Critical { .. } => Tier::Critical,
            Self::Warning { .. } => Tier::Warning,
            Self::Healthy { .. } => Tier::Healthy,
        }
    }
}

impl fmt::Display for ScopeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Critical { variance_pct, changes } => write!(
                f,
                "CRITICAL: Scope has grown {variance_pct:.1}% with {changes} change requests. \
                 Significant scope creep detected."
            ),
            Self::Warning { variance_pct, changes } => write!(
                f,
                "WARNING: Scope variance of {variance_pct:.1}% with {changes} changes. \
                 Monitor closely to prevent further creep."
            ),
            Self::Healthy { variance_pct } => write!(
                f,
                "HEALTHY: Scope is well-controlled with only {variance_pct:.1}% variance."
            ),
        }
    }
}

/// Budget verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetVerdict {
    /// Overrun needing immediate cost control
    Critical {
        /// Overrun magnitude in percent
        overrun_pct: f64,
    },
    /// Trending over budget
    Warning {
        /// Overrun magnitude in percent
        overrun_pct: f64,
        /// Spent as a share of total, in percent
        utilization_pct: f64,
    },
    /// On or under budget
    Healthy {
        /// Signed variance in percent
        variance_pct: f64,
    },
}

impl DimensionVerdict for BudgetVerdict {
    fn tier(&self) -> Tier {
        match self {
            Self::Critical { .. } => Tier::Critical,
            Self::Warning { .. } => Tier::Warning,
            Self::Healthy { .. } => Tier::Healthy,
        }
    }
}

impl fmt::Display for BudgetVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Critical { overrun_pct } => write!(
                f,
                "CRITICAL: Project is {overrun_pct:.1}% over budget. Immediate cost control required."
            ),
            Self::Warning {
                overrun_pct,
                utilization_pct,
            } => write!(
                f,
                "WARNING: Project trending {overrun_pct:.1}% over budget at \
                 {utilization_pct:.1}% utilization."
            ),
            Self::Healthy { variance_pct } => write!(
                f,
                "HEALTHY: Budget on track with {variance_pct:.1}% positive variance."
            ),
        }
    }
}

/// Timeline verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineVerdict {
    /// Far behind schedule
    Critical {
        /// Days behind plan
        days_behind: f64,
        /// Completion in percent
        percent_complete: f64,
    },
    /// Behind schedule
    Warning {
        /// Days behind plan
        days_behind: f64,
        /// Completion in percent
        percent_complete: f64,
    },
    /// Ahead of schedule
    Ahead {
        /// Days ahead of plan
        days_ahead: f64,
    },
    /// Within five days of plan
    OnTrack {
        /// Completion in percent
        percent_complete: f64,
    },
}

impl DimensionVerdict for TimelineVerdict {
    fn tier(&self) -> Tier {
        match self {
            Self::Critical { .. } => Tier::Critical,
            Self::Warning { .. } => Tier::Warning,
            Self::Ahead { .. } => Tier::Ahead,
            Self::OnTrack { .. } => Tier::OnTrack,
        }
    }
}

impl fmt::Display for TimelineVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Critical {
                days_behind,
                percent_complete,
            } => write!(
                f,
                "CRITICAL: Project is {days_behind} days behind schedule at \
                 {percent_complete}% completion."
            ),
            Self::Warning {
                days_behind,
                percent_complete,
            } => write!(
                f,
                "WARNING: Project is {days_behind} days behind with {percent_complete}% complete."
            ),
            Self::Ahead { days_ahead } => {
                write!(f, "AHEAD: Project is {days_ahead} days ahead of schedule.")
            }
            Self::OnTrack { percent_complete } => write!(
                f,
                "ON TRACK: Project is on schedule with {percent_complete}% completion."
            ),
        }
    }
}

/// Classify scope growth
#[must_use]
pub fn assess_scope(variance_pct: f64, changes: u32) -> ScopeVerdict {
    if variance_pct > SCOPE_CRITICAL_PCT {
        ScopeVerdict::Critical {
            variance_pct,
            changes,
        }
    } else if variance_pct > SCOPE_WARNING_PCT {
        ScopeVerdict::Warning {
            variance_pct,
            changes,
        }
    } else {
        ScopeVerdict::Healthy { variance_pct }
    }
}

/// Classify budget variance
///
/// `total` must be positive.
#[must_use]
pub fn assess_budget(variance_pct: f64, spent: f64, total: f64) -> BudgetVerdict {
    if variance_pct < BUDGET_CRITICAL_PCT {
        BudgetVerdict::Critical {
            overrun_pct: variance_pct.abs(),
        }
    } else if variance_pct < BUDGET_WARNING_PCT {
        BudgetVerdict::Warning {
            overrun_pct: variance_pct.abs(),
            utilization_pct: spent / total * 100.0,
        }
    } else {
        BudgetVerdict::Healthy { variance_pct }
    }
}

/// Classify schedule variance
#[must_use]
pub fn assess_timeline(variance_days: f64, percent_complete: f64) -> TimelineVerdict {
    if variance_days < TIMELINE_CRITICAL_DAYS {
        TimelineVerdict::Critical {
            days_behind: variance_days.abs(),
            percent_complete,
        }
    } else if variance_days < TIMELINE_WARNING_DAYS {
        TimelineVerdict::Warning {
            days_behind: variance_days.abs(),
            percent_complete,
        }
    } else if variance_days > TIMELINE_AHEAD_DAYS {
        TimelineVerdict::Ahead {
            days_ahead: variance_days,
        }
    } else {
        TimelineVerdict::OnTrack { percent_complete }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_boundaries() {
        assert_eq!(assess_scope(5.0, 0).tier(), Tier::Healthy);
        assert_eq!(assess_scope(5.1, 0).tier(), Tier::Warning);
        assert_eq!(assess_scope(15.0, 0).tier(), Tier::Warning);
        assert_eq!(assess_scope(15.0001, 0).tier(), Tier::Critical);
    }

    #[test]
    fn scope_narratives() {
        assert_eq!(
            assess_scope(17.9, 5).narrative(),
            "CRITICAL: Scope has grown 17.9% with 5 change requests. Significant scope creep detected."
        );
        assert_eq!(
            assess_scope(6.7, 3).narrative(),
            "WARNING: Scope variance of 6.7% with 3 changes. Monitor closely to prevent further creep."
        );
        assert_eq!(
            assess_scope(3.1, 1).narrative(),
            "HEALTHY: Scope is well-controlled with only 3.1% variance."
        );
    }

    #[test]
    fn budget_boundaries() {
        assert_eq!(assess_budget(-5.0, 1.0, 2.0).tier(), Tier::Warning);
        assert_eq!(assess_budget(-5.01, 1.0, 2.0).tier(), Tier::Critical);
        assert_eq!(assess_budget(-0.01, 1.0, 2.0).tier(), Tier::Warning);
        assert_eq!(assess_budget(0.0, 1.0, 2.0).tier(), Tier::Healthy);
    }

    #[test]
    fn budget_narratives() {
        assert_eq!(
            assess_budget(-8.0, 300.0, 320.0).narrative(),
            "CRITICAL: Project is 8.0% over budget. Immediate cost control required."
        );
        assert_eq!(
            assess_budget(-4.0, 625_000.0, 750_000.0).narrative(),
            "WARNING: Project trending 4.0% over budget at 83.3% utilization."
        );
        assert_eq!(
            assess_budget(3.3, 280_000.0, 450_000.0).narrative(),
            "HEALTHY: Budget on track with 3.3% positive variance."
        );
    }

    #[test]
    fn budget_warning_carries_utilization() {
        match assess_budget(-1.2, 310_000.0, 420_000.0) {
            BudgetVerdict::Warning {
                overrun_pct,
                utilization_pct,
            } => {
                assert!((overrun_pct - 1.2).abs() < 1e-9);
                assert!((utilization_pct - 73.809_523_809_523_81).abs() < 1e-9);
            }
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn timeline_boundaries() {
        assert_eq!(assess_timeline(-21.0, 50.0).tier(), Tier::Critical);
        assert_eq!(assess_timeline(-20.0, 50.0).tier(), Tier::Warning);
        assert_eq!(assess_timeline(-5.0001, 50.0).tier(), Tier::Warning);
        assert_eq!(assess_timeline(-5.0, 50.0).tier(), Tier::OnTrack);
        assert_eq!(assess_timeline(5.0, 50.0).tier(), Tier::OnTrack);
        assert_eq!(assess_timeline(6.0, 50.0).tier(), Tier::Ahead);
    }

    #[test]
    fn timeline_narratives() {
        assert_eq!(
            assess_timeline(-25.0, 85.0).narrative(),
            "CRITICAL: Project is 25 days behind schedule at 85% completion."
        );
        assert_eq!(
            assess_timeline(-12.0, 68.0).narrative(),
            "WARNING: Project is 12 days behind with 68% complete."
        );
        assert_eq!(
            assess_timeline(9.0, 40.0).narrative(),
            "AHEAD: Project is 9 days ahead of schedule."
        );
        assert_eq!(
            assess_timeline(3.0, 72.0).narrative(),
            "ON TRACK: Project is on schedule with 72% completion."
        );
    }

    #[test]
    fn tier_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Tier::OnTrack).unwrap(), "\"ON TRACK\"");
    }
}
