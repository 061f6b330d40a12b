//! Record invariant checks
//!
//! The assessment engine assumes well-formed input (positive budget totals,
//! percentages in range). Callers run [`ProjectRecord::validate`] at the
//! boundary where records enter the system.

use crate::error::ValidationError;
use crate::project::ProjectRecord;

impl ProjectRecord {
    /// Check record invariants, reporting the first violation
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        let budget = &self.budget;
        if budget.total <= 0 {
            return Err(ValidationError::NonPositiveBudget(budget.total));
        }
        if budget.total.checked_sub(budget.spent) != Some(budget.remaining) {
            return Err(ValidationError::BudgetMismatch {
                total: budget.total,
                spent: budget.spent,
                remaining: budget.remaining,
            });
        }

        check_percent("schedule.percent_complete", f64::from(self.schedule.percent_complete))?;
        check_percent("health.health_score", f64::from(self.health.health_score))?;
        check_percent("team.utilization", f64::from(self.team.utilization))?;

        let milestones = self.schedule.milestone_completion;
        if milestones.completed > milestones.total {
            return Err(ValidationError::InvalidMilestones(milestones.to_string()));
        }

        let sum = self.risks.by_severity_sum();
        if sum != u64::from(self.risks.total) {
            return Err(ValidationError::RiskCountMismatch {
                total: self.risks.total,
                sum,
            });
        }

        let tracked = self.scope.tracked_items();
        let allowed = allowed_scope_items(
            self.scope.original_scope_items,
            self.scope.scope_variance_percentage,
        );
        if tracked > u64::from(allowed) {
            return Err(ValidationError::ScopeOverflow { tracked, allowed });
        }

        Ok(())
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::PercentOutOfRange { field, value })
    }
}

/// Baseline grown by the reported (non-negative) scope variance, rounded up
fn allowed_scope_items(original: u32, variance_pct: f64) -> u32 {
    let growth = 1.0 + variance_pct.max(0.0) / 100.0;
    // Truncation is fine: counts are far below f64 precision limits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let allowed = (f64::from(original) * growth).ceil() as u32;
    allowed.max(original)
}
