//! Testing utilities for the PPM workspace
//!
//! Shared fixtures: the canonical sample portfolio and a builder for
//! hand-tuned project records.

#![allow(missing_docs)]

use chrono::NaiveDate;
use ppm_model::{
    Budget, HealthStatus, MilestoneProgress, OverallStatus, PortfolioAggregate, Priority,
    ProjectRecord, RagStatus, RiskCounts, Schedule, Scope, Team,
};
use ppm_provider::{aggregate::aggregate, ProjectCatalog};

/// The five canonical sample projects (PRJ001..PRJ005)
pub fn sample_projects() -> Vec<ProjectRecord> {
    ProjectCatalog::sample().unwrap().projects().to_vec()
}

/// Sample projects together with their aggregates
pub fn sample_portfolio() -> (Vec<ProjectRecord>, PortfolioAggregate) {
    let projects = sample_projects();
    let aggregate = aggregate(&projects);
    (projects, aggregate)
}

/// Aggregates computed the way the provider computes them
pub fn aggregate_of(projects: &[ProjectRecord]) -> PortfolioAggregate {
    aggregate(projects)
}

/// Builder for valid project records with neutral defaults
///
/// Defaults: on track, 100 000 budget with 50 000 spent and zero variance,
/// on schedule at 50% complete, no scope growth.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    record: ProjectRecord,
}

impl ProjectBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Self {
            record: ProjectRecord {
                id: id.to_string(),
                name: name.to_string(),
                code: format!("{id}-CODE"),
                manager: "Test Manager".to_string(),
                sponsor: "Test Sponsor".to_string(),
                department: "Testing".to_string(),
                priority: Priority::Medium,
                start_date: date(2024, 1, 1),
                planned_end_date: date(2024, 12, 31),
                current_end_date: date(2024, 12, 31),
                budget: Budget {
                    total: 100_000,
                    spent: 50_000,
                    remaining: 50_000,
                    variance: 0,
                    variance_percentage: 0.0,
                },
                schedule: Schedule {
                    planned_duration_days: 365,
                    actual_duration_days: 365,
                    percent_complete: 50,
                    variance_days: 0,
                    milestone_completion: MilestoneProgress::new(2, 4).unwrap(),
                },
                scope: Scope {
                    original_scope_items: 20,
                    completed_items: 10,
                    in_progress_items: 5,
                    pending_items: 5,
                    scope_changes: 0,
                    scope_variance_percentage: 0.0,
                },
                health: HealthStatus {
                    overall_status: OverallStatus::OnTrack,
                    scope_status: RagStatus::Green,
                    budget_status: RagStatus::Green,
                    schedule_status: RagStatus::Green,
                    health_score: 80,
                },
                risks: RiskCounts {
                    total: 1,
                    critical: 0,
                    high: 0,
                    medium: 0,
                    low: 1,
                },
                team: Team {
                    size: 5,
                    utilization: 75,
                },
            },
        }
    }

    pub fn status(mut self, status: OverallStatus) -> Self {
        self.record.health.overall_status = status;
        self
    }

    /// Budget variance as amount and percentage
    pub fn budget_variance(mut self, amount: i64, pct: f64) -> Self {
        self.record.budget.variance = amount;
        self.record.budget.variance_percentage = pct;
        self
    }

    /// Spend against a total; keeps `remaining` consistent
    pub fn spend(mut self, spent: i64, total: i64) -> Self {
        self.record.budget.spent = spent;
        self.record.budget.total = total;
        self.record.budget.remaining = total - spent;
        self
    }

    pub fn schedule_variance(mut self, days: i32) -> Self {
        self.record.schedule.variance_days = days;
        self
    }

    pub fn percent_complete(mut self, pct: u8) -> Self {
        self.record.schedule.percent_complete = pct;
        self
    }

    pub fn scope_variance(mut self, pct: f64, changes: u32) -> Self {
        self.record.scope.scope_variance_percentage = pct;
        self.record.scope.scope_changes = changes;
        self
    }

    pub fn build(self) -> ProjectRecord {
        self.record
    }
}
