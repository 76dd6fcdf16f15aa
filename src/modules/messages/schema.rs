use serde::{Deserialize, Serialize};

use crate::services::messages::{EncodeObject, MsgKind};

// Request body for /messages/classify
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub messages: Vec<EncodeObject>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedMessage {
    pub index: usize,
    pub type_url: Option<String>,
    /// `null` when the message is not a valid encode object
    pub kind: Option<MsgKind>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub messages: Vec<ClassifiedMessage>,
}
