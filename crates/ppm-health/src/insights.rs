//! Portfolio insights
//!
//! Ties the per-project analyzer and the portfolio-level rules together.

use crate::analyzer::{analyze_project, AssessmentResult};
use crate::concerns::{identify_concerns, Concern};
use crate::portfolio::{
    analyze_budget, analyze_scope, analyze_timeline, BudgetAnalysis, ScopeAnalysis,
    TimelineAnalysis,
};
use crate::recommendations::{rank_recommendations, Recommendation};
use crate::summary::executive_summary;
use ppm_model::{PortfolioAggregate, ProjectRecord};
use serde::Serialize;

/// Everything the engine concludes about a portfolio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioInsights {
    /// Narrative for executives
    pub executive_summary: String,
    /// Concerns, most urgent first
    pub key_concerns: Vec<Concern>,
    /// Scope across the portfolio
    pub scope_analysis: ScopeAnalysis,
    /// Budget across the portfolio
    pub budget_analysis: BudgetAnalysis,
    /// Timeline across the portfolio
    pub timeline_analysis: TimelineAnalysis,
    /// Recommendations by priority
    pub recommendations: Vec<Recommendation>,
    /// One assessment per project, in input order
    pub project_analyses: Vec<AssessmentResult>,
}

/// Assess a portfolio
///
/// `aggregate` must have been computed over `projects`.
#[must_use]
pub fn generate_insights(
    projects: &[ProjectRecord],
    aggregate: &PortfolioAggregate,
) -> PortfolioInsights {
    let project_analyses: Vec<AssessmentResult> = projects
        .iter()
        .map(|project| {
            let analysis = analyze_project(project);
            tracing::debug!(
                project = %project.name,
                status = %project.overall_status(),
                "Analyzed project"
            );
            analysis
        })
        .collect();

    let insights = PortfolioInsights {
        executive_summary: executive_summary(aggregate),
        key_concerns: identify_concerns(projects),
        scope_analysis: analyze_scope(projects, aggregate),
        budget_analysis: analyze_budget(projects, aggregate),
        timeline_analysis: analyze_timeline(projects, aggregate),
        recommendations: rank_recommendations(projects, &aggregate.health),
        project_analyses,
    };

    tracing::info!(
        projects = projects.len(),
        concerns = insights.key_concerns.len(),
        recommendations = insights.recommendations.len(),
        "Portfolio insights generated"
    );
    insights
}
