//! Executive summary narrative

use crate::format::currency;
use ppm_model::PortfolioAggregate;

/// Render the executive summary from the portfolio aggregates
///
/// Paragraphs are separated by a blank line.
#[must_use]
pub fn executive_summary(aggregate: &PortfolioAggregate) -> String {
    let ps = &aggregate.summary;
    let ph = &aggregate.health;
    let status = &ps.status_distribution;

    [
        format!(
            "Portfolio consists of {} active projects with a combined budget of {}.",
            ps.total_projects,
            currency(ps.budget.total)
        ),
        format!(
            "Current Status: {} projects on track, {} at risk, and {} in critical status.",
            status.on_track, status.at_risk, status.critical
        ),
        format!(
            "Overall portfolio health score is {:.0}/100 with average project completion at {:.0}%.",
            ps.average_health_score, ps.average_completion
        ),
        format!(
            "Budget: Portfolio has spent {} ({:.1}% utilization) with {} projects currently over budget.",
            currency(ps.budget.spent),
            ps.budget.utilization_percentage,
            ph.budget.projects_over_budget
        ),
        format!(
            "Timeline: Average schedule variance is {:.1} days with {} projects behind schedule.",
            ph.schedule.average_variance_days, ph.schedule.projects_behind
        ),
        format!(
            "Scope: {} projects showing significant scope variance (>5%), averaging {:.1}% variance across portfolio.",
            ph.scope.projects_with_variance, ph.scope.average_variance
        ),
    ]
    .join("\n\n")
}
