use axum::{extract::State, Json};
use std::sync::Arc;

use super::schema::{ClassifiedMessage, ClassifyRequest, ClassifyResponse};
use crate::services::messages::classify;
use crate::AppState;

// =============================================================================
// POST /messages/classify - Kind of every message, in order
// =============================================================================

pub async fn classify_messages(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let messages = request
        .messages
        .into_iter()
        .enumerate()
        .map(|(index, msg)| {
            let kind = classify(&msg);
            state.metrics.record_classification(kind);
            ClassifiedMessage {
                index,
                type_url: msg.type_url,
                kind,
            }
        })
        .collect();

    Json(ClassifyResponse { messages })
}
