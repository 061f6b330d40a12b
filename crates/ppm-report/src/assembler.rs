//! Executive report assembler
//!
//! Fetches a consistent snapshot from a [`PortfolioSource`], runs the
//! assessment engine over it and stamps the result with generation metadata.
//! Any provider failure aborts the run; nothing partial is produced.

use chrono::{DateTime, Utc};
use ppm_health::{generate_insights, PortfolioInsights};
use ppm_model::{
    PortfolioAggregate, PortfolioHealth, PortfolioSource, PortfolioSummary, ProjectRecord,
    SourceError,
};
use serde::Serialize;

/// Report title
pub const REPORT_TYPE: &str = "Weekly Executive Portfolio Health Report";
/// Producer recorded in the metadata
pub const GENERATED_BY: &str = "PPM Report Assembler";
/// Upstream system recorded in the metadata
pub const DATA_SOURCE: &str = "Clarity PPM";

/// Everything fetched from the provider for one report
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSnapshot {
    /// Validated records in provider order
    pub projects: Vec<ProjectRecord>,
    /// Provider aggregates
    pub aggregate: PortfolioAggregate,
}

/// Generation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    pub report_type: String,
    /// RFC 3339
    pub generated_at: String,
    pub generated_by: String,
    /// "Week of <Month DD, YYYY>"
    pub reporting_period: String,
    pub data_source: String,
}

impl ReportMetadata {
    /// Metadata for a report generated at `now`
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            report_type: REPORT_TYPE.to_string(),
            generated_at: now.to_rfc3339(),
            generated_by: GENERATED_BY.to_string(),
            reporting_period: format!("Week of {}", now.format("%B %d, %Y")),
            data_source: DATA_SOURCE.to_string(),
        }
    }
}

/// The persisted report document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveReport {
    pub metadata: ReportMetadata,
    pub portfolio_summary: PortfolioSummary,
    pub portfolio_health: PortfolioHealth,
    pub insights: PortfolioInsights,
    pub projects: Vec<ProjectRecord>,
    /// Generation instant, used for file naming
    #[serde(skip)]
    pub generated_at: DateTime<Utc>,
}

/// Builds executive reports from a data source
#[derive(Debug)]
pub struct ReportAssembler<S> {
    source: S,
}

impl<S: PortfolioSource> ReportAssembler<S> {
    /// Create assembler over `source`
    #[inline]
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Underlying data source
    #[inline]
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch projects and both aggregates, validating every record
    ///
    /// # Errors
    /// Propagates the first provider failure; an invalid record yields
    /// [`SourceError::InvalidRecord`].
    pub async fn fetch(&self) -> Result<PortfolioSnapshot, SourceError> {
        tracing::info!("Fetching project data");
        let projects = self.source.list_projects().await?;
        for project in &projects {
            project
                .validate()
                .map_err(|source| SourceError::InvalidRecord {
                    id: project.id.clone(),
                    source,
                })?;
        }
        tracing::info!(projects = projects.len(), "Retrieved projects");

        let aggregate = self.source.aggregate().await?;
        tracing::info!("Retrieved portfolio aggregates");

        Ok(PortfolioSnapshot {
            projects,
            aggregate,
        })
    }

    /// Generate a report stamped with the current time
    ///
    /// # Errors
    /// See [`Self::fetch`].
    pub async fn generate(&self) -> Result<ExecutiveReport, SourceError> {
        self.generate_at(Utc::now()).await
    }

    /// Generate a report stamped with `now`
    ///
    /// # Errors
    /// See [`Self::fetch`].
    pub async fn generate_at(&self, now: DateTime<Utc>) -> Result<ExecutiveReport, SourceError> {
        let snapshot = self.fetch().await?;
        Ok(assemble(snapshot, now))
    }
}

/// Run the engine over a snapshot and wrap the result
#[must_use]
pub fn assemble(snapshot: PortfolioSnapshot, now: DateTime<Utc>) -> ExecutiveReport {
    let PortfolioSnapshot {
        projects,
        aggregate,
    } = snapshot;
    let insights = generate_insights(&projects, &aggregate);

    ExecutiveReport {
        metadata: ReportMetadata::at(now),
        portfolio_summary: aggregate.summary,
        portfolio_health: aggregate.health,
        insights,
        projects,
        generated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn metadata_reporting_period() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 9, 30, 0).unwrap();
        let metadata = ReportMetadata::at(now);
        assert_eq!(metadata.reporting_period, "Week of March 07, 2024");
        assert_eq!(metadata.generated_at, "2024-03-07T09:30:00+00:00");
        assert_eq!(metadata.report_type, REPORT_TYPE);
    }
}
