use axum::{
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use super::MetricsRegistry;

const KNOWN_ENDPOINTS: &[&str] = &[
    "/",
    "/health",
    "/metrics",
    "/messages/classify",
    "/gas/estimate",
    "/gas/estimate/kinds",
];

/// Middleware to collect HTTP request metrics
pub async fn metrics_middleware(
    State(metrics): State<Arc<MetricsRegistry>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    // Nested routers rewrite the URI, label with the one the client sent
    let endpoint = match req.extensions().get::<OriginalUri>() {
        Some(original) => normalize_path(original.path()),
        None => normalize_path(req.uri().path()),
    };

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    metrics
        .http_requests_total
        .with_label_values(&[&method, endpoint, &status])
        .inc();

    metrics
        .http_request_duration_seconds
        .with_label_values(&[&method, endpoint])
        .observe(duration);

    response
}

/// Collapse unknown paths so scanners cannot blow up label cardinality
fn normalize_path(path: &str) -> &'static str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };

    KNOWN_ENDPOINTS
        .iter()
        .copied()
        .find(|endpoint| *endpoint == trimmed)
        .unwrap_or("other")
}
