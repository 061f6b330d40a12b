//! Project health analyzer
//!
//! Runs the three dimension assessors against one record and echoes the
//! figures behind each verdict so a reader can trace how it was reached.

use crate::dimension::{
    assess_budget, assess_scope, assess_timeline, BudgetVerdict, DimensionVerdict, ScopeVerdict,
    Tier, TimelineVerdict,
};
use ppm_model::{MilestoneProgress, OverallStatus, ProjectRecord, RagStatus};
use serde::{Serialize, Serializer};
use std::fmt;

/// Health assessment of one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    /// Project identifier
    pub project_id: String,
    /// Project name
    pub project_name: String,
    /// Reported overall status
    pub overall_status: OverallStatus,
    /// Reported health score
    pub health_score: u8,
    /// Per-dimension assessments
    pub dimensions: Dimensions,
}

/// The three assessed dimensions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimensions {
    /// Scope
    pub scope: ScopeDimension,
    /// Budget
    pub budget: BudgetDimension,
    /// Timeline
    pub timeline: TimelineDimension,
}

/// Scope assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeDimension {
    /// Reported scope status
    pub status: RagStatus,
    /// Scope growth in percent
    pub variance_percentage: f64,
    /// Verdict, serialized as its narrative
    #[serde(rename = "assessment", serialize_with = "render")]
    pub verdict: ScopeVerdict,
    /// Underlying figures
    pub metrics: ScopeMetrics,
}

/// Scope figures echoed from the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeMetrics {
    /// Original scope items
    pub total_items: u32,
    /// Completed items
    pub completed: u32,
    /// In-progress items
    pub in_progress: u32,
    /// Change requests
    pub scope_changes: u32,
}

/// Budget assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetDimension {
    /// Reported budget status
    pub status: RagStatus,
    /// Variance in percent
    pub variance_percentage: f64,
    /// Variance in currency units
    pub variance_amount: i64,
    /// Verdict, serialized as its narrative
    #[serde(rename = "assessment", serialize_with = "render")]
    pub verdict: BudgetVerdict,
    /// Underlying figures
    pub metrics: BudgetMetrics,
}

/// Budget figures echoed from the record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetMetrics {
    /// Approved budget
    pub total: i64,
    /// Spent to date
    pub spent: i64,
    /// Remaining
    pub remaining: i64,
    /// Spent as a percentage of total
    pub utilization: f64,
}

/// Timeline assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineDimension {
    /// Reported schedule status
    pub status: RagStatus,
    /// Variance in days
    pub variance_days: i32,
    /// Verdict, serialized as its narrative
    #[serde(rename = "assessment", serialize_with = "render")]
    pub verdict: TimelineVerdict,
    /// Underlying figures
    pub metrics: TimelineMetrics,
}

/// Schedule figures echoed from the record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineMetrics {
    /// Percent complete
    pub percent_complete: u8,
    /// Planned duration in days
    pub planned_duration: u32,
    /// Actual duration in days
    pub actual_duration: u32,
    /// Milestones reached
    pub milestones: MilestoneProgress,
}

impl AssessmentResult {
    /// Worst tier across the three dimensions
    #[must_use]
    pub fn worst_tier(&self) -> Tier {
        let tiers = [
            self.dimensions.scope.verdict.tier(),
            self.dimensions.budget.verdict.tier(),
            self.dimensions.timeline.verdict.tier(),
        ];
        if tiers.contains(&Tier::Critical) {
            Tier::Critical
        } else if tiers.contains(&Tier::Warning) {
            Tier::Warning
        } else {
            Tier::Healthy
        }
    }
}

fn render<V: fmt::Display, S: Serializer>(verdict: &V, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(verdict)
}

/// Assess one project across scope, budget and timeline
///
/// The record must satisfy [`ProjectRecord::validate`]; in particular a zero
/// budget total is not handled here.
#[must_use]
pub fn analyze_project(project: &ProjectRecord) -> AssessmentResult {
    let scope = &project.scope;
    let budget = &project.budget;
    let schedule = &project.schedule;
    let health = &project.health;

    #[allow(clippy::cast_precision_loss)]
    let (spent, total) = (budget.spent as f64, budget.total as f64);

    AssessmentResult {
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        overall_status: health.overall_status,
        health_score: health.health_score,
        dimensions: Dimensions {
            scope: ScopeDimension {
                status: health.scope_status,
                variance_percentage: scope.scope_variance_percentage,
                verdict: assess_scope(scope.scope_variance_percentage, scope.scope_changes),
                metrics: ScopeMetrics {
                    total_items: scope.original_scope_items,
                    completed: scope.completed_items,
                    in_progress: scope.in_progress_items,
                    scope_changes: scope.scope_changes,
                },
            },
            budget: BudgetDimension {
                status: health.budget_status,
                variance_percentage: budget.variance_percentage,
                variance_amount: budget.variance,
                verdict: assess_budget(budget.variance_percentage, spent, total),
                metrics: BudgetMetrics {
                    total: budget.total,
                    spent: budget.spent,
                    remaining: budget.remaining,
                    utilization: budget.utilization(),
                },
            },
            timeline: TimelineDimension {
                status: health.schedule_status,
                variance_days: schedule.variance_days,
                verdict: assess_timeline(
                    f64::from(schedule.variance_days),
                    f64::from(schedule.percent_complete),
                ),
                metrics: TimelineMetrics {
                    percent_complete: schedule.percent_complete,
                    planned_duration: schedule.planned_duration_days,
                    actual_duration: schedule.actual_duration_days,
                    milestones: schedule.milestone_completion,
                },
            },
        },
    }
}
