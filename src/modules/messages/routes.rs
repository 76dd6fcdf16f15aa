use axum::{routing::post, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn message_routes() -> Router<Arc<AppState>> {
    Router::new().route("/classify", post(controller::classify_messages))
}
