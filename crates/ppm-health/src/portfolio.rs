//! Portfolio dimension analyzer
//!
//! Counts outlier projects per dimension and picks one of two fixed
//! recommendations. The scope outlier threshold here (10%) is deliberately
//! separate from the per-project scope tiers (5% / 15%).

use crate::format::currency;
use ppm_model::{PortfolioAggregate, ProjectRecord};
use serde::Serialize;

/// Scope variance above which a project is a portfolio scope outlier
pub const SCOPE_OUTLIER_PCT: f64 = 10.0;
/// Variance amount below which a project is over budget
pub const BUDGET_OUTLIER_AMOUNT: i64 = 0;
/// Day variance below which a project is significantly behind
pub const SCHEDULE_OUTLIER_DAYS: i32 = -5;
/// Outlier count above which a dimension needs a process change
pub const OUTLIER_CUTOFF: usize = 2;

/// Portfolio scope analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeAnalysis {
    /// One-line summary
    pub summary: String,
    /// Projects above the scope outlier threshold
    pub projects_with_high_variance: usize,
    /// Change requests across all projects
    pub total_scope_changes: u32,
    /// Mean scope variance from the health aggregate
    pub average_variance: f64,
    /// Names of the outliers
    pub projects_with_issues: Vec<String>,
    /// Process recommendation
    pub recommendation: String,
}

/// Portfolio budget analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAnalysis {
    /// One-line summary
    pub summary: String,
    /// Projects over budget
    pub projects_over_budget: usize,
    /// Total variance from the health aggregate
    pub total_variance: i64,
    /// Budget utilization from the summary aggregate
    pub utilization: f64,
    /// Names of the outliers
    pub projects_with_issues: Vec<String>,
    /// Process recommendation
    pub recommendation: String,
}

/// Portfolio timeline analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineAnalysis {
    /// One-line summary
    pub summary: String,
    /// Projects significantly behind
    pub projects_behind: usize,
    /// Mean day variance from the health aggregate
    pub average_variance_days: f64,
    /// Names of the outliers
    pub projects_with_issues: Vec<String>,
    /// Process recommendation
    pub recommendation: String,
}

fn outlier_names<F>(projects: &[ProjectRecord], is_outlier: F) -> Vec<String>
where
    F: Fn(&ProjectRecord) -> bool,
{
    projects
        .iter()
        .filter(|&p| is_outlier(p))
        .map(|p| p.name.clone())
        .collect()
}

fn pick(count: usize, tighten: &str, acceptable: &str) -> String {
    if count > OUTLIER_CUTOFF {
        tighten.to_string()
    } else {
        acceptable.to_string()
    }
}

/// Scope analysis across the portfolio
#[must_use]
pub fn analyze_scope(projects: &[ProjectRecord], aggregate: &PortfolioAggregate) -> ScopeAnalysis {
    let outliers = outlier_names(projects, |p| {
        p.scope.scope_variance_percentage > SCOPE_OUTLIER_PCT
    });
    let count = outliers.len();

    ScopeAnalysis {
        summary: format!("{count} projects with high scope variance (>10%)"),
        projects_with_high_variance: count,
        total_scope_changes: projects
            .iter()
            .map(|p| p.scope.scope_changes)
            .fold(0, u32::saturating_add),
        average_variance: aggregate.health.scope.average_variance,
        projects_with_issues: outliers,
        recommendation: pick(
            count,
            "Implement stricter change control process",
            "Scope management is adequate",
        ),
    }
}

/// Budget analysis across the portfolio
#[must_use]
pub fn analyze_budget(projects: &[ProjectRecord], aggregate: &PortfolioAggregate) -> BudgetAnalysis {
    let outliers = outlier_names(projects, |p| p.budget.variance < BUDGET_OUTLIER_AMOUNT);
    let count = outliers.len();
    let total_variance = aggregate.health.budget.total_variance;

    BudgetAnalysis {
        summary: format!(
            "{count} projects over budget with total variance of {}",
            currency(total_variance)
        ),
        projects_over_budget: count,
        total_variance,
        utilization: aggregate.summary.budget.utilization_percentage,
        projects_with_issues: outliers,
        recommendation: pick(
            count,
            "Immediate cost control measures needed",
            "Budget performance acceptable",
        ),
    }
}

/// Timeline analysis across the portfolio
#[must_use]
pub fn analyze_timeline(
    projects: &[ProjectRecord],
    aggregate: &PortfolioAggregate,
) -> TimelineAnalysis {
    let outliers = outlier_names(projects, |p| {
        p.schedule.variance_days < SCHEDULE_OUTLIER_DAYS
    });
    let count = outliers.len();

    TimelineAnalysis {
        summary: format!("{count} projects significantly behind schedule (>5 days)"),
        projects_behind: count,
        average_variance_days: aggregate.health.schedule.average_variance_days,
        projects_with_issues: outliers,
        recommendation: pick(
            count,
            "Resource reallocation assessment required",
            "Schedule performance acceptable",
        ),
    }
}
