use crate::cli::ServeArgs;
use crate::infra::{load_roster, AppState};
use crate::routes::with_journal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use coach_journal::config::AppConfig;
use coach_journal::error::AppError;
use coach_journal::journal::{
    InMemoryEvaluationRepository, InMemoryPlayerRepository, InMemoryPracticeLogRepository,
    JournalService,
};
use coach_journal::rubric::RubricStore;
use coach_journal::telemetry;
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
    if let Some(rubric) = args.rubric.take() {
        config.rubric.path = Some(rubric);
    }

    telemetry::init(&config.telemetry)?;

    let rubric_source = config.rubric.source();
    let rubric = RubricStore::load(&rubric_source)?;
    info!(
        source = ?rubric_source,
        categories = rubric.current().categories.len(),
        "rubric ready"
    );

    let players = match args.roster.take() {
        Some(path) => InMemoryPlayerRepository::with_players(load_roster(&path)?),
        None => InMemoryPlayerRepository::default(),
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        rubric: rubric.clone(),
        rubric_source,
    };

    let journal_service = Arc::new(JournalService::new(
        Arc::new(players),
        Arc::new(InMemoryPracticeLogRepository::default()),
        Arc::new(InMemoryEvaluationRepository::default()),
        rubric,
        config.rubric.score_range,
    ));

    let app = with_journal_routes(journal_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "coach journal service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
