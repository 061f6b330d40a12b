//! Portfolio aggregates
//!
//! Derived views over the full project collection. They are recomputed by
//! the data provider on every request and never stored on their own.

use serde::{Deserialize, Serialize};

/// Portfolio-wide budget totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// Sum of approved budgets
    pub total: i64,
    /// Sum of spend to date
    pub spent: i64,
    /// `total - spent`
    pub remaining: i64,
    /// `spent / total * 100`
    pub utilization_percentage: f64,
}

/// Count of projects per overall status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    /// "On Track"
    pub on_track: usize,
    /// "At Risk"
    pub at_risk: usize,
    /// "Critical"
    pub critical: usize,
}

/// Summary aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of projects
    pub total_projects: usize,
    /// Budget totals
    pub budget: BudgetTotals,
    /// Status distribution
    pub status_distribution: StatusDistribution,
    /// Mean health score, one decimal
    pub average_health_score: f64,
    /// Mean percent complete, one decimal
    pub average_completion: f64,
    /// Sum of open risks
    pub total_risks: u32,
    /// Sum of critical risks
    pub critical_risks: u32,
}

/// Scope health across the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeHealth {
    /// Projects with scope variance above 5%
    pub projects_with_variance: usize,
    /// Mean scope variance, two decimals
    pub average_variance: f64,
}

/// Budget health across the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetHealth {
    /// Projects with a negative variance amount
    pub projects_over_budget: usize,
    /// Sum of variance amounts
    pub total_variance: i64,
    /// Mean variance percentage, two decimals
    pub average_variance_percentage: f64,
}

/// Schedule health across the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleHealth {
    /// Projects with a negative day variance
    pub projects_behind: usize,
    /// Mean day variance, one decimal
    pub average_variance_days: f64,
}

/// Health aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHealth {
    /// Scope metrics
    pub scope: ScopeHealth,
    /// Budget metrics
    pub budget: BudgetHealth,
    /// Schedule metrics
    pub schedule: ScheduleHealth,
}

/// Both aggregates, as handed to the assessment engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAggregate {
    /// Summary aggregate
    pub summary: PortfolioSummary,
    /// Health aggregate
    pub health: PortfolioHealth,
}

impl PortfolioAggregate {
    /// Combine the two aggregates
    #[inline]
    #[must_use]
    pub fn new(summary: PortfolioSummary, health: PortfolioHealth) -> Self {
        Self { summary, health }
    }
}
