//! Aggregates over the canonical five-project sample portfolio.

use ppm_model::{PortfolioSource, StatusDistribution};
use ppm_provider::{health_metrics, summarize, ProjectCatalog};
use pretty_assertions::assert_eq;
use std::io::Write;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn summary_matches_sample_portfolio() {
    let catalog = ProjectCatalog::sample().unwrap();
    let summary = summarize(catalog.projects());

    assert_eq!(summary.total_projects, 5);
    assert_eq!(summary.budget.total, 2_520_000);
    assert_eq!(summary.budget.spent, 1_905_000);
    assert_eq!(summary.budget.remaining, 615_000);
    assert!(approx(
        summary.budget.utilization_percentage,
        1_905_000.0 / 2_520_000.0 * 100.0
    ));
    assert_eq!(
        summary.status_distribution,
        StatusDistribution {
            on_track: 2,
            at_risk: 2,
            critical: 1,
        }
    );
    assert!(approx(summary.average_health_score, 69.0));
    assert!(approx(summary.average_completion, 68.4));
    assert_eq!(summary.total_risks, 22);
    assert_eq!(summary.critical_risks, 8);
}

#[test]
fn health_matches_sample_portfolio() {
    let catalog = ProjectCatalog::sample().unwrap();
    let health = health_metrics(catalog.projects());

    assert_eq!(health.scope.projects_with_variance, 3);
    assert!(approx(health.scope.average_variance, 8.4));
    assert_eq!(health.budget.projects_over_budget, 3);
    assert_eq!(health.budget.total_variance, -25_000);
    assert!(approx(health.budget.average_variance_percentage, -1.11));
    assert_eq!(health.schedule.projects_behind, 3);
    assert!(approx(health.schedule.average_variance_days, -8.4));
}

#[tokio::test]
async fn source_aggregate_combines_both_views() {
    let catalog = ProjectCatalog::sample().unwrap();
    let aggregate = catalog.aggregate().await.unwrap();

    assert_eq!(aggregate.summary, catalog.summary());
    assert_eq!(aggregate.health, catalog.health());
}

#[tokio::test]
async fn catalog_loads_from_file() {
    let sample = ProjectCatalog::sample().unwrap();
    let subset = &sample.projects()[..2];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(subset).unwrap().as_bytes())
        .unwrap();

    let catalog = ProjectCatalog::from_path(file.path()).await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.projects(), subset);
}

#[tokio::test]
async fn missing_catalog_file_is_read_error() {
    let err = ProjectCatalog::from_path("/definitely/not/here.json")
        .await
        .unwrap_err();
    assert!(!err.is_catalog_error());
}
