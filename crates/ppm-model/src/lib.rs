//! PPM Model
//!
//! Shared vocabulary for the portfolio health workspace:
//! - **ProjectRecord**: one project as reported by the PPM system
//! - **PortfolioSummary / PortfolioHealth**: aggregates derived from all records
//! - **Envelope**: the JSON wrapper used on the wire
//! - **PortfolioSource**: the data provider contract
//!
//! # Example
//!
//! ```rust
//! use ppm_model::MilestoneProgress;
//!
//! let progress: MilestoneProgress = "8/12".parse().unwrap();
//! assert_eq!(progress.completed, 8);
//! assert_eq!(progress.to_string(), "8/12");
//! ```

#![warn(missing_docs)]

pub mod envelope;
pub mod error;
pub mod portfolio;
pub mod project;
pub mod source;
pub mod validation;

// Re-exports
pub use envelope::{Envelope, ServiceStatus};
pub use error::{SourceError, ValidationError};
pub use portfolio::{
    BudgetHealth, BudgetTotals, PortfolioAggregate, PortfolioHealth, PortfolioSummary,
    ScheduleHealth, ScopeHealth, StatusDistribution,
};
pub use project::{
    Budget, HealthStatus, MilestoneProgress, OverallStatus, Priority, ProjectRecord, RagStatus,
    RiskCounts, Schedule, Scope, Team,
};
pub use source::PortfolioSource;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with portfolio data
    pub use crate::{
        OverallStatus, PortfolioAggregate, PortfolioHealth, PortfolioSource, PortfolioSummary,
        ProjectRecord, RagStatus, SourceError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
