use crate::cli::ServeArgs;
use crate::infra::{AppState, CompletionBackend, InMemorySessionStore};
use crate::routes::{with_app_routes, GlueState};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use scholarbot::catalog::{CatalogStore, RestCatalogSource};
use scholarbot::config::AppConfig;
use scholarbot::error::AppError;
use scholarbot::letters::{HttpCompletionClient, LetterArchive, LetterGenerator};
use scholarbot::matching::MatchService;
use scholarbot::session::ProfileSession;
use scholarbot::telemetry;
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

    let catalog = Arc::new(CatalogStore::with_builtin());
    let remote = match (&config.catalog.base_url, &config.catalog.api_key) {
        (Some(base_url), Some(api_key)) => Some(Arc::new(RestCatalogSource::new(
            base_url.clone(),
            api_key.clone(),
        ))),
        _ => None,
    };

    // One sync attempt at startup; a failure just leaves the built-in
    // catalog in place. Later refreshes go through the HTTP endpoint.
    if let Some(source) = &remote {
        catalog
            .refresh(source.as_ref(), Local::now().date_naive())
            .await;
    }

    let store = Arc::new(InMemorySessionStore::default());
    let completion = match &config.completion.endpoint {
        Some(endpoint) => CompletionBackend::Http(HttpCompletionClient::new(
            endpoint.clone(),
            config.completion.model.clone(),
            config.completion.max_tokens,
        )),
        None => CompletionBackend::Disabled,
    };

    let glue_state = GlueState {
        matching: Arc::new(MatchService::new(catalog, store.clone())),
        generator: Arc::new(LetterGenerator::new(Arc::new(completion))),
        archive: Arc::new(LetterArchive::new(store.clone())),
        session: Arc::new(ProfileSession::new(store)),
        remote,
    };

    let app = with_app_routes(glue_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "scholarship matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
