//! Portfolio concern identifier
//!
//! Concerns are ranked by [`ConcernKind`]; a concern whose trigger does not
//! hold is left out rather than emitted empty.

use ppm_model::ProjectRecord;
use serde::Serialize;

/// Variance amount below which a project counts as a significant overrun
pub const SIGNIFICANT_OVERRUN_AMOUNT: i64 = -10_000;

/// What a concern is about; declaration order is output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernKind {
    /// Projects in critical status
    CriticalProjects,
    /// Projects at risk
    AtRiskProjects,
    /// Projects with large budget overruns
    BudgetOverruns,
}

/// Concern severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// Executive intervention
    Critical,
    /// Close follow-up
    High,
}

/// One portfolio-level concern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concern {
    /// Sort key
    #[serde(skip)]
    pub kind: ConcernKind,
    /// Severity
    pub severity: Severity,
    /// Short title
    #[serde(rename = "concern")]
    pub title: String,
    /// Affected projects
    pub details: String,
    /// Required action and deadline
    pub action: String,
}

fn names<'a>(projects: impl Iterator<Item = &'a ProjectRecord>) -> String {
    projects.map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
}

/// Identify the portfolio's key concerns, most urgent first
#[must_use]
pub fn identify_concerns(projects: &[ProjectRecord]) -> Vec<Concern> {
    let mut concerns = Vec::new();

    let critical = projects.iter().filter(|p| p.is_critical()).count();
    if critical > 0 {
        concerns.push(Concern {
            kind: ConcernKind::CriticalProjects,
            severity: Severity::Critical,
            title: format!("{critical} Critical Projects Requiring Immediate Attention"),
            details: format!(
                "Projects in critical status: {}",
                names(projects.iter().filter(|p| p.is_critical()))
            ),
            action: "Executive review and intervention required within 48 hours".to_string(),
        });
    }

    let at_risk = projects.iter().filter(|p| p.is_at_risk()).count();
    if at_risk > 0 {
        concerns.push(Concern {
            kind: ConcernKind::AtRiskProjects,
            severity: Severity::High,
            title: format!("{at_risk} Projects At Risk"),
            details: format!(
                "At-risk projects: {}",
                names(projects.iter().filter(|p| p.is_at_risk()))
            ),
            action: "Enhanced monitoring and corrective action plans needed".to_string(),
        });
    }

    let overruns = projects
        .iter()
        .filter(|p| p.budget.variance < SIGNIFICANT_OVERRUN_AMOUNT)
        .count();
    if overruns > 0 {
        concerns.push(Concern {
            kind: ConcernKind::BudgetOverruns,
            severity: Severity::High,
            title: "Significant Budget Overruns".to_string(),
            details: format!("{overruns} projects with budget variance exceeding $10K"),
            action: "Financial review and budget reforecast required".to_string(),
        });
    }

    concerns.sort_by_key(|c| c.kind);
    tracing::debug!("Identified {} portfolio concerns", concerns.len());
    concerns
}
