use serde::{Deserialize, Serialize};

use crate::services::messages::EncodeObject;

// Request body for /gas/estimate
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub messages: Vec<EncodeObject>,
}

// Request body for /gas/estimate/kinds, tags as sent by the signing layer
#[derive(Debug, Deserialize)]
pub struct EstimateKindsRequest {
    pub kinds: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateKindsResponse {
    pub total_gas: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GasErrorResponse {
    pub error: String,
}

impl GasErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
