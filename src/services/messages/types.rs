use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

pub const MSG_SEND_TYPE_URL: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_DELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgDelegate";
pub const MSG_UNDELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgUndelegate";
pub const MSG_BEGIN_REDELEGATE_TYPE_URL: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
pub const MSG_WITHDRAW_DELEGATOR_REWARD_TYPE_URL: &str =
    "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
pub const MSG_SET_WITHDRAW_ADDRESS_TYPE_URL: &str =
    "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress";

/// Encoded transaction message as produced by the signing layer
/// (`{"typeUrl": "...", "value": {...}}`).
///
/// Both halves are optional so that partially-built or foreign objects can
/// still be inspected; classification never fails on shape alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeObject {
    #[serde(default)]
    pub type_url: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl EncodeObject {
    pub fn new(type_url: impl Into<String>, value: Value) -> Self {
        Self {
            type_url: Some(type_url.into()),
            value: Some(value),
        }
    }
}

/// Message kind tags understood by the gas estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MsgKind {
    Send,
    Delegate,
    Undelegate,
    Redelegate,
    ClaimRewards,
    SetWithdrawAddress,
    /// Structurally valid message that is none of the kinds above
    EncodeObject,
}

impl MsgKind {
    pub const ALL: [MsgKind; 7] = [
        Self::Send,
        Self::Delegate,
        Self::Undelegate,
        Self::Redelegate,
        Self::ClaimRewards,
        Self::SetWithdrawAddress,
        Self::EncodeObject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Delegate => "delegate",
            Self::Undelegate => "undelegate",
            Self::Redelegate => "redelegate",
            Self::ClaimRewards => "claimRewards",
            Self::SetWithdrawAddress => "setWithdrawAddress",
            Self::EncodeObject => "encodeObject",
        }
    }

    /// Protocol type URL reserved for this kind. The generic kind has none.
    pub fn type_url(&self) -> Option<&'static str> {
        match self {
            Self::Send => Some(MSG_SEND_TYPE_URL),
            Self::Delegate => Some(MSG_DELEGATE_TYPE_URL),
            Self::Undelegate => Some(MSG_UNDELEGATE_TYPE_URL),
            Self::Redelegate => Some(MSG_BEGIN_REDELEGATE_TYPE_URL),
            Self::ClaimRewards => Some(MSG_WITHDRAW_DELEGATOR_REWARD_TYPE_URL),
            Self::SetWithdrawAddress => Some(MSG_SET_WITHDRAW_ADDRESS_TYPE_URL),
            Self::EncodeObject => None,
        }
    }
}

impl std::fmt::Display for MsgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MsgKind {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MessageError::UnknownKind(s.to_string()))
    }
}

/// `MsgSend` payload. Coin amounts stay opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Value>,
}

/// Payload shared by `MsgDelegate` and `MsgUndelegate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgDelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgBeginRedelegate {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub amount: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgWithdrawDelegatorReward {
    pub delegator_address: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSetWithdrawAddress {
    pub delegator_address: String,
    pub withdraw_address: String,
}

/// A message decoded once into its kind
#[derive(Debug, Clone, PartialEq)]
pub enum TxMsg {
    Send(MsgSend),
    Delegate(MsgDelegate),
    Undelegate(MsgDelegate),
    Redelegate(MsgBeginRedelegate),
    ClaimRewards(MsgWithdrawDelegatorReward),
    SetWithdrawAddress(MsgSetWithdrawAddress),
    Unknown(EncodeObject),
}

impl TxMsg {
    pub fn kind(&self) -> MsgKind {
        match self {
            Self::Send(_) => MsgKind::Send,
            Self::Delegate(_) => MsgKind::Delegate,
            Self::Undelegate(_) => MsgKind::Undelegate,
            Self::Redelegate(_) => MsgKind::Redelegate,
            Self::ClaimRewards(_) => MsgKind::ClaimRewards,
            Self::SetWithdrawAddress(_) => MsgKind::SetWithdrawAddress,
            Self::Unknown(_) => MsgKind::EncodeObject,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("Unknown msg kind: {0}")]
    UnknownKind(String),
    #[error("Unrecognized message at index {index} (typeUrl: {})", .type_url.as_deref().unwrap_or("<missing>"))]
    Unrecognized {
        index: usize,
        type_url: Option<String>,
    },
}
