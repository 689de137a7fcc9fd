use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySnapshotRepository};
use crate::routes::with_outreach_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cro_engine::config::AppConfig;
use cro_engine::error::AppError;
use cro_engine::telemetry;
use cro_engine::workflows::outreach::OutreachService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySnapshotRepository::default());
    let outreach_service = Arc::new(OutreachService::new(repository));

    let app = with_outreach_routes(outreach_service)
        .layer(Extension(app_state))
        .layer(Extension(config.outreach))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cro outreach engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
