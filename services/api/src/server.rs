use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySubmissionRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use creative_style::assessment::{AdminAuthenticator, AssessmentService};
use creative_style::config::AppConfig;
use creative_style::error::AppError;
use creative_style::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    if config.admin.password.is_none() {
        warn!("APP_ADMIN_PASSWORD is not set; admin login is disabled");
    }
    let auth = Arc::new(AdminAuthenticator::new(&config.admin));
    let repository = Arc::new(InMemorySubmissionRepository::default());
    let assessment_service = Arc::new(AssessmentService::new(repository));

    let app = with_assessment_routes(assessment_service, auth)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "creative style assessment ready");

    axum::serve(listener, app).await?;
    Ok(())
}
