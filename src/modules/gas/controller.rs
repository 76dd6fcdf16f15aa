use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::schema::{EstimateKindsRequest, EstimateKindsResponse, EstimateRequest, GasErrorResponse};
use crate::services::gas::{gas_of_tx_tags, TxGasEstimate};
use crate::AppState;

// =============================================================================
// POST /gas/estimate - Classify messages and estimate transaction gas
// =============================================================================

pub async fn estimate_gas(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<TxGasEstimate>, (StatusCode, Json<GasErrorResponse>)> {
    state
        .gas_estimator
        .estimate_messages(&request.messages)
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(GasErrorResponse::new(e.to_string()))))
}

// =============================================================================
// POST /gas/estimate/kinds - Estimate transaction gas from kind tags
// =============================================================================

pub async fn estimate_gas_for_kinds(
    Json(request): Json<EstimateKindsRequest>,
) -> Result<Json<EstimateKindsResponse>, (StatusCode, Json<GasErrorResponse>)> {
    let total_gas = gas_of_tx_tags(&request.kinds)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(GasErrorResponse::new(e.to_string()))))?;

    Ok(Json(EstimateKindsResponse { total_gas }))
}
