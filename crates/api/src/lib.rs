//! Career Mentor API Server
//!
//! Serves RIASEC profile predictions for questionnaire answers over HTTP.

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use data_validator::AnswerValidator;
use inference_engine::InferenceEngine;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use profile_catalog::ProfileCatalog;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod routes;

pub use crate::config::ApiConfig;
pub use crate::error::{ApiError, ErrorBody};
pub use crate::routes::health::HealthResponse;
pub use crate::routes::predict::PredictRequest;

/// Everything a request handler needs, built once at startup and never mutated
pub struct AppContext {
    /// `None` when artifacts failed to load; `/predict` then answers 503
    pub engine: Option<InferenceEngine>,
    /// Label -> profile table
    pub catalog: ProfileCatalog,
    /// Raw answer checks
    pub validator: AnswerValidator,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
    /// Prometheus handle when the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

/// Shared handle passed to handlers
pub type SharedContext = Arc<AppContext>;

impl AppContext {
    /// Create a context around an (optionally) loaded engine
    pub fn new(engine: Option<InferenceEngine>, validator: AnswerValidator) -> Self {
        Self {
            engine,
            catalog: ProfileCatalog::standard(),
            validator,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Load artifacts per `config`; a load failure leaves the engine unset
    pub fn from_config(config: &ApiConfig) -> Self {
        let engine = match InferenceEngine::load(&config.artifacts) {
            Ok(engine) => Some(engine),
            Err(e) => {
                error!("Model artifacts could not be loaded: {}", e);
                warn!("Serving without a model, /predict will answer 503");
                None
            }
        };
        Self::new(engine, AnswerValidator::new(config.validation_config()))
    }
}

/// CORS policy for the configured origins
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origins = origins
        .iter()
        .map(|o| o.parse::<HeaderValue>().with_context(|| format!("invalid CORS origin {o:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

/// Create the application router
pub fn create_router(ctx: SharedContext, config: &ApiConfig) -> anyhow::Result<Router> {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)));

    Ok(Router::new()
        .route("/predict", post(routes::predict::predict))
        .route("/health", get(routes::health::health))
        .route("/profiles/:code", get(routes::profiles::get_profile))
        .route("/metrics", get(routes::metrics::render))
        .layer(middleware)
        .with_state(ctx))
}

/// Initialize logging
pub fn init_logging(config: &ApiConfig) -> anyhow::Result<()> {
    let level: Level = config
        .log_level
        .parse()
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if config.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())
            .context("failed to set tracing subscriber")?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())
            .context("failed to set tracing subscriber")?;
    }
    Ok(())
}

/// Run the server until Ctrl-C
pub async fn run_server(config: ApiConfig) -> anyhow::Result<()> {
    let mut ctx = AppContext::from_config(&config);
    if config.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("failed to install Prometheus recorder")?;
        ctx = ctx.with_metrics(handle);
    }

    let app = create_router(Arc::new(ctx), &config)?;

    info!("Starting API server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
