//! PPM Health - portfolio health assessment engine
//!
//! Turns raw project metrics into:
//! - Per-dimension verdicts (scope, budget, timeline) with narratives
//! - Ranked portfolio concerns
//! - Portfolio-level dimension analyses
//! - Prioritized recommendations
//!
//! Every function is pure: identical input yields identical output and
//! nothing is retained between calls.
//!
//! # Example
//!
//! ```rust
//! use ppm_health::dimension::{assess_scope, DimensionVerdict, Tier};
//!
//! let verdict = assess_scope(17.9, 5);
//! assert_eq!(verdict.tier(), Tier::Critical);
//! assert!(verdict.narrative().starts_with("CRITICAL: Scope has grown 17.9%"));
//! ```

#![warn(unreachable_pub)]

pub mod analyzer;
pub mod concerns;
pub mod dimension;
pub mod format;
pub mod insights;
pub mod portfolio;
pub mod recommendations;
pub mod summary;

// Re-exports for convenience
pub use analyzer::{analyze_project, AssessmentResult};
pub use concerns::{identify_concerns, Concern, ConcernKind, Severity};
pub use dimension::{
    assess_budget, assess_scope, assess_timeline, BudgetVerdict, DimensionVerdict, ScopeVerdict,
    Tier, TimelineVerdict,
};
pub use insights::{generate_insights, PortfolioInsights};
pub use portfolio::{analyze_budget, analyze_scope, analyze_timeline};
pub use recommendations::{rank_recommendations, Recommendation};
pub use summary::executive_summary;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running assessments
    pub use crate::{
        analyze_project, generate_insights, identify_concerns, rank_recommendations,
        AssessmentResult, DimensionVerdict, PortfolioInsights, Tier,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
