//! Portfolio aggregates
//!
//! Recomputed from the full record set on every call. An empty portfolio
//! yields zero averages and zero utilization.

use ppm_model::{
    BudgetHealth, BudgetTotals, OverallStatus, PortfolioAggregate, PortfolioHealth,
    PortfolioSummary, ProjectRecord, ScheduleHealth, ScopeHealth, StatusDistribution,
};

/// Scope variance above which a project counts toward `projects_with_variance`
pub const SCOPE_VARIANCE_PCT: f64 = 5.0;

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Sum that clamps at the type bounds instead of overflowing
fn clamped_sum<T: Copy + Default>(values: impl Iterator<Item = T>, add: fn(T, T) -> T) -> T {
    values.fold(T::default(), add)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Summary aggregate
#[must_use]
pub fn summarize(projects: &[ProjectRecord]) -> PortfolioSummary {
    let n = projects.len();
    let total = clamped_sum(projects.iter().map(|p| p.budget.total), i64::saturating_add);
    let spent = clamped_sum(projects.iter().map(|p| p.budget.spent), i64::saturating_add);

    #[allow(clippy::cast_precision_loss)]
    let utilization_percentage = if total > 0 {
        spent as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let count = |status: OverallStatus| {
        projects
            .iter()
            .filter(|p| p.overall_status() == status)
            .count()
    };

    PortfolioSummary {
        total_projects: n,
        budget: BudgetTotals {
            total,
            spent,
            remaining: total.saturating_sub(spent),
            utilization_percentage,
        },
        status_distribution: StatusDistribution {
            on_track: count(OverallStatus::OnTrack),
            at_risk: count(OverallStatus::AtRisk),
            critical: count(OverallStatus::Critical),
        },
        average_health_score: round_to(
            mean(projects.iter().map(|p| f64::from(p.health.health_score)), n),
            1,
        ),
        average_completion: round_to(
            mean(
                projects
                    .iter()
                    .map(|p| f64::from(p.schedule.percent_complete)),
                n,
            ),
            1,
        ),
        total_risks: clamped_sum(projects.iter().map(|p| p.risks.total), u32::saturating_add),
        critical_risks: clamped_sum(
            projects.iter().map(|p| p.risks.critical),
            u32::saturating_add,
        ),
    }
}

/// Health aggregate
#[must_use]
pub fn health_metrics(projects: &[ProjectRecord]) -> PortfolioHealth {
    let n = projects.len();

    PortfolioHealth {
        scope: ScopeHealth {
            projects_with_variance: projects
                .iter()
                .filter(|p| p.scope.scope_variance_percentage > SCOPE_VARIANCE_PCT)
                .count(),
            average_variance: round_to(
                mean(projects.iter().map(|p| p.scope.scope_variance_percentage), n),
                2,
            ),
        },
        budget: BudgetHealth {
            projects_over_budget: projects.iter().filter(|p| p.budget.is_over_budget()).count(),
            total_variance: clamped_sum(
                projects.iter().map(|p| p.budget.variance),
                i64::saturating_add,
            ),
            average_variance_percentage: round_to(
                mean(projects.iter().map(|p| p.budget.variance_percentage), n),
                2,
            ),
        },
        schedule: ScheduleHealth {
            projects_behind: projects
                .iter()
                .filter(|p| p.schedule.variance_days < 0)
                .count(),
            average_variance_days: round_to(
                mean(projects.iter().map(|p| f64::from(p.schedule.variance_days)), n),
                1,
            ),
        },
    }
}

/// Both aggregates
#[must_use]
pub fn aggregate(projects: &[ProjectRecord]) -> PortfolioAggregate {
    PortfolioAggregate::new(summarize(projects), health_metrics(projects))
}
