use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{BrandProfile, SiteAudit};
use super::import::FindingsCsvImporter;
use super::repository::{BrandKey, RepositoryError, SnapshotRepository};
use super::service::{OutreachService, OutreachServiceError};

/// Router builder exposing snapshot generation and history endpoints.
pub fn outreach_router<R>(service: Arc<OutreachService<R>>) -> Router
where
    R: SnapshotRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/outreach/snapshots",
            post(generate_handler::<R>).get(history_handler::<R>),
        )
        .route(
            "/api/v1/outreach/snapshots/:brand",
            get(snapshot_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateSnapshotRequest {
    pub(crate) brand: BrandProfile,
    #[serde(default)]
    pub(crate) findings: Vec<String>,
    // Wide on purpose: out-of-range metrics clamp instead of failing to parse.
    #[serde(default)]
    pub(crate) mobile_score: Option<u32>,
    #[serde(default)]
    pub(crate) desktop_score: Option<u32>,
    #[serde(default)]
    pub(crate) findings_csv: Option<String>,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryQuery {
    #[serde(default = "default_history_limit")]
    pub(crate) limit: usize,
}

fn default_history_limit() -> usize {
    10
}

pub(crate) async fn generate_handler<R>(
    State(service): State<Arc<OutreachService<R>>>,
    axum::Json(request): axum::Json<GenerateSnapshotRequest>,
) -> Response
where
    R: SnapshotRepository + 'static,
{
    let GenerateSnapshotRequest {
        brand,
        mut findings,
        mut mobile_score,
        mut desktop_score,
        findings_csv,
        today,
    } = request;

    if let Some(csv) = findings_csv {
        match FindingsCsvImporter::from_reader(csv.as_bytes()) {
            Ok(imported) => {
                findings.extend(imported.findings);
                mobile_score = mobile_score.or(imported.mobile_score.map(u32::from));
                desktop_score = desktop_score.or(imported.desktop_score.map(u32::from));
            }
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        }
    }

    let audit = SiteAudit::new(findings, mobile_score, desktop_score);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    match service.generate(brand, audit, today) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(OutreachServiceError::MissingBrandName) => {
            let payload = json!({ "error": "brand name is required" });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn snapshot_handler<R>(
    State(service): State<Arc<OutreachService<R>>>,
    Path(brand): Path<String>,
) -> Response
where
    R: SnapshotRepository + 'static,
{
    let key = BrandKey::from_name(&brand);
    match service.get(&key) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(OutreachServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "brand": key.0,
                "error": "no snapshot generated for this brand yet",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<OutreachService<R>>>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    R: SnapshotRepository + 'static,
{
    match service.history(query.limit) {
        Ok(records) => {
            let summaries: Vec<_> = records
                .iter()
                .map(|record| record.summary_view())
                .collect();
            (StatusCode::OK, axum::Json(summaries)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
