use serde::{Deserialize, Serialize};

use crate::services::messages::{MessageError, MsgKind};

/// Gas charged once per transaction regardless of message count
pub const TX_FLAT_GAS: u64 = 100_000;

/// Gas charged per message. Every kind currently shares this value.
pub const MSG_GAS: u64 = 100_000;

/// Gas attributed to one message of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgGas {
    pub kind: MsgKind,
    pub gas: u64,
}

/// Gas estimate for a whole transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxGasEstimate {
    /// Per-message breakdown, in transaction order
    pub messages: Vec<MsgGas>,
    /// Flat per-transaction overhead
    pub flat_gas: u64,
    /// Flat overhead plus every message's gas
    pub total_gas: u64,
    /// Timestamp of estimate
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum GasError {
    #[error("Unknown msg kind: {0}")]
    UnknownMsgKind(String),
    #[error(transparent)]
    Message(#[from] MessageError),
}
