//! Assembler behaviour against in-process sources.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ppm_model::{
    PortfolioHealth, PortfolioSource, PortfolioSummary, ProjectRecord, SourceError,
};
use ppm_provider::ProjectCatalog;
use ppm_report::{assemble, PortfolioSnapshot, ReportAssembler, ReportError, ReportWriter};
use ppm_test_utils::{aggregate_of, sample_portfolio, ProjectBuilder};
use pretty_assertions::assert_eq;

/// Source serving fixed records with aggregates computed over them
struct FixedSource {
    projects: Vec<ProjectRecord>,
    fail_health: bool,
}

#[async_trait]
impl PortfolioSource for FixedSource {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, SourceError> {
        Ok(self.projects.clone())
    }

    async fn get_project(&self, id: &str) -> Result<ProjectRecord, SourceError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }

    async fn portfolio_summary(&self) -> Result<PortfolioSummary, SourceError> {
        Ok(aggregate_of(&self.projects).summary)
    }

    async fn portfolio_health(&self) -> Result<PortfolioHealth, SourceError> {
        if self.fail_health {
            return Err(SourceError::unavailable("/portfolio/health", "timed out"));
        }
        Ok(aggregate_of(&self.projects).health)
    }
}

#[tokio::test]
async fn catalog_source_produces_deterministic_report() {
    let assembler = ReportAssembler::new(ProjectCatalog::sample().unwrap());
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let first = assembler.generate_at(now).await.unwrap();
    let second = assembler.generate_at(now).await.unwrap();
    assert_eq!(first, second);

    let (projects, aggregate) = sample_portfolio();
    let direct = assemble(
        PortfolioSnapshot {
            projects,
            aggregate,
        },
        now,
    );
    assert_eq!(first, direct);
}

#[tokio::test]
async fn invalid_record_stops_report() {
    let mut broken = ProjectBuilder::new("BAD", "Broken").build();
    broken.budget.remaining = 1;
    let assembler = ReportAssembler::new(FixedSource {
        projects: vec![ProjectBuilder::new("OK", "Fine").build(), broken],
        fail_health: false,
    });

    let err = assembler.generate().await.unwrap_err();
    assert!(matches!(err, SourceError::InvalidRecord { ref id, .. } if id == "BAD"));
}

#[tokio::test]
async fn aggregate_failure_stops_report() {
    let assembler = ReportAssembler::new(FixedSource {
        projects: vec![ProjectBuilder::new("P1", "Alpha").build()],
        fail_health: true,
    });

    let err = ReportError::from(assembler.generate().await.unwrap_err());
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn empty_portfolio_still_reports() {
    let assembler = ReportAssembler::new(FixedSource {
        projects: Vec::new(),
        fail_health: false,
    });
    let report = assembler.generate().await.unwrap();

    assert!(report.projects.is_empty());
    assert!(report.insights.key_concerns.is_empty());
    assert!(report.insights.recommendations.is_empty());
}

#[tokio::test]
async fn writer_refreshes_latest_copy() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path());
    let assembler = ReportAssembler::new(ProjectCatalog::sample().unwrap());

    let early = assembler
        .generate_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .await
        .unwrap();
    let late = assembler
        .generate_at(Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap())
        .await
        .unwrap();

    let first = writer.write(&early).await.unwrap();
    let second = writer.write(&late).await.unwrap();

    assert_ne!(first.timestamped, second.timestamped);
    assert_eq!(first.latest, second.latest);
    assert!(first.timestamped.exists());

    let latest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&second.latest).unwrap()).unwrap();
    assert_eq!(
        latest["metadata"]["reporting_period"],
        "Week of January 08, 2024"
    );
}
