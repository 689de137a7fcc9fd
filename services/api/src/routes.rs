use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use cro_engine::config::OutreachConfig;
use cro_engine::error::AppError;
use cro_engine::workflows::outreach::{
    outreach_router, Alert, CategoryScoreView, Channel, FindingsCsvImporter, OutreachService,
    RankedFindingView, ScoreBand, ScoringEngine, SiteAudit, SnapshotRepository,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
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
    pub(crate) channel: Option<Channel>,
    #[serde(default)]
    pub(crate) include_findings: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) overall: u8,
    pub(crate) band: ScoreBand,
    pub(crate) band_label: &'static str,
    pub(crate) categories: Vec<CategoryScoreView>,
    pub(crate) alerts: Vec<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) findings: Option<Vec<RankedFindingView>>,
    pub(crate) bullets: Vec<String>,
}

pub(crate) fn with_outreach_routes<R>(service: Arc<OutreachService<R>>) -> axum::Router
where
    R: SnapshotRepository + 'static,
{
    outreach_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/outreach/score",
            axum::routing::post(score_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless scoring endpoint: nothing is persisted, making it safe to call
/// from worksheets and preview tooling.
pub(crate) async fn score_endpoint(
    Extension(outreach): Extension<OutreachConfig>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        mut findings,
        mut mobile_score,
        mut desktop_score,
        findings_csv,
        channel,
        include_findings,
    } = payload;

    if let Some(csv) = findings_csv {
        let imported = FindingsCsvImporter::from_reader(csv.as_bytes())?;
        findings.extend(imported.findings);
        mobile_score = mobile_score.or(imported.mobile_score.map(u32::from));
        desktop_score = desktop_score.or(imported.desktop_score.map(u32::from));
    }

    let audit =
        SiteAudit::new(findings, mobile_score, desktop_score).with_derived_speed_findings();
    let channel = channel.unwrap_or(outreach.default_channel);

    let engine = ScoringEngine::new();
    let score = engine.score(&audit);
    let bullets = engine.bullets(&audit, channel);
    let findings = if include_findings {
        Some(
            engine
                .rank(&audit)
                .iter()
                .map(|finding| finding.to_view())
                .collect(),
        )
    } else {
        None
    };

    Ok(Json(ScoreResponse {
        overall: score.overall,
        band: score.band(),
        band_label: score.band().label(),
        categories: score.category_rows(),
        alerts: score.alerts.clone(),
        findings,
        bullets,
    }))
}
