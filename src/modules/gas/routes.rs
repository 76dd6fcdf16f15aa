use axum::{routing::post, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn gas_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/estimate", post(controller::estimate_gas))
        .route("/estimate/kinds", post(controller::estimate_gas_for_kinds))
}
