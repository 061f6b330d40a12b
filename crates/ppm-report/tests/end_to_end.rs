//! Report generation against a live mock provider.

use chrono::{TimeZone, Utc};
use ppm_model::{PortfolioSource, SourceError};
use ppm_provider::{spawn_local, ProjectCatalog};
use ppm_report::{render_summary, ProviderClient, ReportAssembler, ReportConfig, ReportWriter};
use pretty_assertions::assert_eq;
use std::net::SocketAddr;
use warp::http::StatusCode;
use warp::Filter;

fn client_for(addr: SocketAddr) -> ProviderClient {
    let config = ReportConfig::new()
        .with_api_base(format!("http://{addr}/api"))
        .with_timeout_secs(5);
    ProviderClient::new(&config).unwrap()
}

/// Serve `body` with `status` on every path
fn spawn_stub(status: StatusCode, body: &'static str) -> SocketAddr {
    let route = warp::any().map(move || {
        warp::reply::with_status(
            warp::reply::with_header(body, "content-type", "application/json"),
            status,
        )
    });
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

async fn assert_malformed_everywhere(addr: SocketAddr) {
    let client = client_for(addr);
    let err = client.list_projects().await.unwrap_err();
    assert!(matches!(err, SourceError::Malformed { .. }), "{err}");

    let err = ReportAssembler::new(client).generate().await.unwrap_err();
    assert!(matches!(err, SourceError::Malformed { .. }), "{err}");
}

#[tokio::test]
async fn server_error_is_malformed() {
    assert_malformed_everywhere(spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, "{}")).await;
}

#[tokio::test]
async fn failed_envelope_is_malformed() {
    let addr = spawn_stub(StatusCode::OK, r#"{"success":false,"error":"x"}"#);
    let err = client_for(addr).list_projects().await.unwrap_err();
    assert!(err.to_string().ends_with(": x"), "{err}");
    assert_malformed_everywhere(addr).await;
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    assert_malformed_everywhere(spawn_stub(StatusCode::OK, "<html>maintenance</html>")).await;
}

#[tokio::test]
async fn wrong_base_path_is_malformed_not_missing_project() {
    let (addr, server) = spawn_local(ProjectCatalog::sample().unwrap()).unwrap();
    let config = ReportConfig::new().with_api_base(format!("http://{addr}/wrong"));
    let client = ProviderClient::new(&config).unwrap();

    let err = client.list_projects().await.unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, SourceError::Malformed { .. }), "{err}");

    let err = client.portfolio_summary().await.unwrap_err();
    assert!(!err.is_not_found());

    server.abort();
}

#[tokio::test]
async fn client_reads_every_endpoint() {
    let (addr, server) = spawn_local(ProjectCatalog::sample().unwrap()).unwrap();
    let client = client_for(addr);

    let status = client.ping().await.unwrap();
    assert_eq!(status.status, "ok");

    let projects = client.list_projects().await.unwrap();
    assert_eq!(projects, ProjectCatalog::sample().unwrap().projects());

    let project = client.get_project("PRJ003").await.unwrap();
    assert_eq!(project.name, "Customer Portal Redesign");

    let err = client.get_project("PRJ999").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, SourceError::NotFound(id) if id == "PRJ999"));

    let aggregate = client.aggregate().await.unwrap();
    assert_eq!(aggregate.summary.total_projects, 5);
    assert_eq!(aggregate.health.budget.total_variance, -25_000);

    server.abort();
}

#[tokio::test]
async fn report_from_live_provider() {
    let (addr, server) = spawn_local(ProjectCatalog::sample().unwrap()).unwrap();
    let assembler = ReportAssembler::new(client_for(addr));
    let now = Utc.with_ymd_and_hms(2024, 11, 4, 8, 15, 30).unwrap();

    let report = assembler.generate_at(now).await.unwrap();
    server.abort();

    assert_eq!(report.metadata.reporting_period, "Week of November 04, 2024");
    assert_eq!(report.projects.len(), 5);
    assert_eq!(report.insights.key_concerns.len(), 3);
    assert_eq!(report.insights.recommendations.len(), 3);

    let dir = tempfile::tempdir().unwrap();
    let written = ReportWriter::new(dir.path().join("reports"))
        .write(&report)
        .await
        .unwrap();
    assert_eq!(
        written.timestamped.file_name().unwrap(),
        "executive_report_20241104_081530.json"
    );

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written.timestamped).unwrap()).unwrap();
    let latest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written.latest).unwrap()).unwrap();
    assert_eq!(saved, latest);
    assert_eq!(
        saved["metadata"]["report_type"],
        "Weekly Executive Portfolio Health Report"
    );
    assert_eq!(saved["metadata"]["data_source"], "Clarity PPM");
    assert_eq!(saved["portfolio_summary"]["total_projects"], 5);
    assert_eq!(
        saved["insights"]["key_concerns"][0]["concern"],
        "1 Critical Projects Requiring Immediate Attention"
    );
    assert!(saved.get("generated_at").is_none());
}

#[tokio::test]
async fn unreachable_provider_is_unavailable() {
    // bind then drop to get a port nothing listens on
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let assembler = ReportAssembler::new(client_for(addr));

    let err = assembler.generate().await.unwrap_err();
    assert!(err.is_unavailable(), "{err}");
}

#[tokio::test]
async fn console_summary_lists_concerns_and_top_recommendations() {
    let assembler = ReportAssembler::new(ProjectCatalog::sample().unwrap());
    let report = assembler.generate().await.unwrap();
    let text = render_summary(&report.insights);

    assert!(text.contains("EXECUTIVE SUMMARY"));
    assert!(text.contains("[Critical] 1 Critical Projects Requiring Immediate Attention"));
    assert!(text.contains("  Details: At-risk projects: Digital Transformation Initiative, Mobile App Development"));
    assert!(text.contains("Priority 1: Emergency Portfolio Review"));
    assert!(text.contains("  Timeline: Within 2 weeks"));
}
