//! REST routes for the mock PPM API
//!
//! - `GET /api/health`
//! - `GET /api/projects`
//! - `GET /api/projects/{id}`
//! - `GET /api/portfolio/summary`
//! - `GET /api/portfolio/health`

use crate::catalog::ProjectCatalog;
use chrono::Utc;
use ppm_model::{Envelope, ServiceStatus};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "Clarity PPM Mock API";
/// API version reported by the health check
pub const API_VERSION: &str = "1.0.0";

fn with_catalog(
    catalog: Arc<ProjectCatalog>,
) -> impl Filter<Extract = (Arc<ProjectCatalog>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&catalog))
}

fn failure(message: &str, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(&Envelope::<()>::failure(message)), status)
        .into_response()
}

/// All API routes, with CORS, request tracing and JSON rejections
pub fn routes(
    catalog: Arc<ProjectCatalog>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let health = warp::path!("api" / "health").and(warp::get()).map(|| {
        warp::reply::json(&ServiceStatus {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        })
    });

    let projects = warp::path!("api" / "projects")
        .and(warp::get())
        .and(with_catalog(Arc::clone(&catalog)))
        .map(|catalog: Arc<ProjectCatalog>| {
            warp::reply::json(&Envelope::ok(catalog.projects()).with_total(catalog.len()))
        });

    let project = warp::path!("api" / "projects" / String)
        .and(warp::get())
        .and(with_catalog(Arc::clone(&catalog)))
        .map(|id: String, catalog: Arc<ProjectCatalog>| match catalog.get(&id) {
            Some(record) => warp::reply::json(&Envelope::ok(record)).into_response(),
            None => {
                tracing::debug!(%id, "Project not found");
                failure("Project not found", StatusCode::NOT_FOUND)
            }
        });

    let summary = warp::path!("api" / "portfolio" / "summary")
        .and(warp::get())
        .and(with_catalog(Arc::clone(&catalog)))
        .map(|catalog: Arc<ProjectCatalog>| warp::reply::json(&Envelope::ok(catalog.summary())));

    let portfolio_health = warp::path!("api" / "portfolio" / "health")
        .and(warp::get())
        .and(with_catalog(catalog))
        .map(|catalog: Arc<ProjectCatalog>| warp::reply::json(&Envelope::ok(catalog.health())));

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "OPTIONS"]);

    health
        .or(projects)
        .or(project)
        .or(summary)
        .or(portfolio_health)
        .with(cors)
        .with(warp::trace::request())
        .recover(handle_rejection)
}

async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let response = if err.is_not_found() {
        failure("Not found", StatusCode::NOT_FOUND)
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        failure("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
    } else if err.find::<warp::cors::CorsForbidden>().is_some() {
        failure("CORS request forbidden", StatusCode::FORBIDDEN)
    } else {
        tracing::warn!(?err, "Unhandled rejection");
        failure("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppm_model::{PortfolioHealth, PortfolioSummary, ProjectRecord};

    fn api() -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
        routes(Arc::new(ProjectCatalog::sample().unwrap()))
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let res = warp::test::request().path("/api/health").reply(&api()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let status: ServiceStatus = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, SERVICE_NAME);
    }

    #[tokio::test]
    async fn lists_projects_with_total() {
        let res = warp::test::request().path("/api/projects").reply(&api()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let env: Envelope<Vec<ProjectRecord>> = serde_json::from_slice(res.body()).unwrap();
        assert!(env.success);
        assert_eq!(env.total, Some(5));
        assert!(env.timestamp.is_some());
        assert_eq!(env.data.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn gets_single_project() {
        let res = warp::test::request().path("/api/projects/PRJ002").reply(&api()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let env: Envelope<ProjectRecord> = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(env.data.unwrap().name, "Cloud Migration Project");
    }

    #[tokio::test]
    async fn missing_project_is_404() {
        let res = warp::test::request().path("/api/projects/PRJ999").reply(&api()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Project not found"})
        );
    }

    #[tokio::test]
    async fn portfolio_aggregates() {
        let res = warp::test::request()
            .path("/api/portfolio/summary")
            .reply(&api())
            .await;
        let env: Envelope<PortfolioSummary> = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(env.data.unwrap().total_projects, 5);

        let res = warp::test::request()
            .path("/api/portfolio/health")
            .reply(&api())
            .await;
        let env: Envelope<PortfolioHealth> = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(env.data.unwrap().budget.projects_over_budget, 3);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let res = warp::test::request().path("/api/nope").reply(&api()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn post_is_rejected() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/projects")
            .reply(&api())
            .await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
