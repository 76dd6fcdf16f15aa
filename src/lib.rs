pub mod config;
pub mod modules;
pub mod services;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use config::Config;
use modules::{gas::gas_routes, messages::message_routes, metrics::metrics_routes};
use services::gas::GasEstimator;
use services::metrics::{metrics_middleware, MetricsRegistry};
use services::rate_limit::{create_rate_limiter, RateLimitLayer};
use services::security::security_headers;

pub struct AppState {
    pub gas_estimator: GasEstimator,
    pub metrics: Arc<MetricsRegistry>,
}

pub fn create_app(config: &Config, metrics: Arc<MetricsRegistry>) -> Router {
    let state = Arc::new(AppState {
        gas_estimator: GasEstimator::new(Some(metrics.clone())),
        metrics: metrics.clone(),
    });

    let rate_limiter = create_rate_limiter(config.rate_limit_per_second, config.rate_limit_burst);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/messages", message_routes())
        .nest("/gas", gas_routes())
        .merge(metrics_routes())
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn_with_state(metrics, metrics_middleware))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(RateLimitLayer::new(rate_limiter))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Cosmos Transaction Gas API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
