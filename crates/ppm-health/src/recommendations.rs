//! Recommendation ranker
//!
//! Three independent triggers. Any subset may fire; the output is sorted by
//! priority and absent priorities leave gaps rather than renumbering.

use ppm_model::{PortfolioHealth, ProjectRecord};
use serde::Serialize;

/// At-risk count above which monitoring is stepped up
pub const AT_RISK_MONITORING_CUTOFF: usize = 1;
/// Over-budget count above which the portfolio is reforecast
pub const OVER_BUDGET_REFORECAST_CUTOFF: usize = 2;

/// One prioritized recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// 1 is most urgent
    pub priority: u8,
    /// Title
    pub recommendation: String,
    /// Why it was raised
    pub rationale: String,
    /// Concrete steps
    pub actions: Vec<String>,
    /// Time frame
    pub timeline: String,
}

impl Recommendation {
    fn new(
        priority: u8,
        title: &str,
        rationale: String,
        actions: [&str; 4],
        timeline: &str,
    ) -> Self {
        Self {
            priority,
            recommendation: title.to_string(),
            rationale,
            actions: actions.iter().map(ToString::to_string).collect(),
            timeline: timeline.to_string(),
        }
    }
}

/// Build the prioritized recommendation list
///
/// Priority 3 reads the over-budget count from the health aggregate rather
/// than recounting `projects`.
#[must_use]
pub fn rank_recommendations(
    projects: &[ProjectRecord],
    health: &PortfolioHealth,
) -> Vec<Recommendation> {
    let critical = projects.iter().filter(|p| p.is_critical()).count();
    let at_risk = projects.iter().filter(|p| p.is_at_risk()).count();
    let mut recommendations = Vec::new();

    if critical > 0 {
        recommendations.push(Recommendation::new(
            1,
            "Emergency Portfolio Review",
            format!(
                "{critical} projects in critical status requiring immediate executive intervention"
            ),
            [
                "Schedule emergency steering committee meeting within 48 hours",
                "Develop recovery plans for each critical project",
                "Assess resource reallocation options",
                "Determine go/no-go decisions",
            ],
            "Immediate (Within 48 hours)",
        ));
    }

    if at_risk > AT_RISK_MONITORING_CUTOFF {
        recommendations.push(Recommendation::new(
            2,
            "Enhanced Project Monitoring",
            format!("{at_risk} at-risk projects need closer oversight"),
            [
                "Increase reporting frequency to weekly",
                "Assign executive sponsors to at-risk projects",
                "Implement early warning indicators",
                "Review and update risk mitigation plans",
            ],
            "Within 1 week",
        ));
    }

    if health.budget.projects_over_budget > OVER_BUDGET_REFORECAST_CUTOFF {
        recommendations.push(Recommendation::new(
            3,
            "Portfolio Budget Reforecast",
            "Multiple projects over budget indicating systemic estimation issues".to_string(),
            [
                "Conduct comprehensive budget review",
                "Update forecast-to-complete estimates",
                "Identify potential funding gaps",
                "Implement tighter cost controls",
            ],
            "Within 2 weeks",
        ));
    }

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}
