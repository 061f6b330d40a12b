//! Data provider contract

use crate::error::SourceError;
use crate::portfolio::{PortfolioAggregate, PortfolioHealth, PortfolioSummary};
use crate::project::ProjectRecord;
use async_trait::async_trait;

/// Read-only access to portfolio data
///
/// Implemented in-process by the project catalog and over HTTP by the
/// provider client. No implementation retries; failures surface at once.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// All projects, in provider order
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, SourceError>;

    /// One project by identifier
    ///
    /// A missing identifier yields [`SourceError::NotFound`].
    async fn get_project(&self, id: &str) -> Result<ProjectRecord, SourceError>;

    /// Summary aggregate
    async fn portfolio_summary(&self) -> Result<PortfolioSummary, SourceError>;

    /// Health aggregate
    async fn portfolio_health(&self) -> Result<PortfolioHealth, SourceError>;

    /// Both aggregates
    async fn aggregate(&self) -> Result<PortfolioAggregate, SourceError> {
        let summary = self.portfolio_summary().await?;
        let health = self.portfolio_health().await?;
        Ok(PortfolioAggregate::new(summary, health))
    }
}
