use serde_json::{Map, Value};

use super::types::*;

/// How a required payload field is checked
#[derive(Debug, Clone, Copy)]
enum Field {
    /// Any truthy value; the typed decode additionally wants a string
    Address(&'static str),
    /// Non-empty array of coins
    Coins(&'static str),
    /// Any truthy value (single coin object)
    Amount(&'static str),
}

const SEND_FIELDS: &[Field] = &[
    Field::Address("fromAddress"),
    Field::Address("toAddress"),
    Field::Coins("amount"),
];
const DELEGATE_FIELDS: &[Field] = &[
    Field::Address("delegatorAddress"),
    Field::Address("validatorAddress"),
    Field::Amount("amount"),
];
const REDELEGATE_FIELDS: &[Field] = &[
    Field::Address("delegatorAddress"),
    Field::Address("validatorSrcAddress"),
    Field::Address("validatorDstAddress"),
    Field::Amount("amount"),
];
const CLAIM_REWARDS_FIELDS: &[Field] = &[
    Field::Address("delegatorAddress"),
    Field::Address("validatorAddress"),
];
const SET_WITHDRAW_ADDRESS_FIELDS: &[Field] = &[
    Field::Address("delegatorAddress"),
    Field::Address("withdrawAddress"),
];

/// Field truthiness: empty strings and arrays count as absent, objects never do
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(_)) => true,
    }
}

/// Payload presence for the generic check, where `{}` is empty too
fn is_non_empty_payload(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Object(map)) => !map.is_empty(),
        other => is_truthy(other),
    }
}

fn truthy_field<'a>(payload: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|v| is_truthy(Some(*v)))
}

fn address<'a>(payload: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    truthy_field(payload, name).and_then(Value::as_str)
}

fn coins<'a>(payload: &'a Map<String, Value>, name: &str) -> Option<&'a Vec<Value>> {
    payload
        .get(name)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}


impl Field {
    fn is_present(&self, payload: &Map<String, Value>) -> bool {
        match *self {
            Field::Address(name) | Field::Amount(name) => truthy_field(payload, name).is_some(),
            Field::Coins(name) => coins(payload, name).is_some(),
        }
    }
}

/// Payload object of `msg` if its type URL is exactly `type_url`
fn payload_of<'a>(msg: &'a EncodeObject, type_url: &str) -> Option<&'a Map<String, Value>> {
    if msg.type_url.as_deref() != Some(type_url) {
        return None;
    }
    msg.value.as_ref()?.as_object()
}

fn matches_shape(msg: &EncodeObject, type_url: &str, fields: &[Field]) -> bool {
    payload_of(msg, type_url).is_some_and(|payload| fields.iter().all(|f| f.is_present(payload)))
}

pub fn is_tx_msg_send(msg: &EncodeObject) -> bool {
    matches_shape(msg, MSG_SEND_TYPE_URL, SEND_FIELDS)
}

pub fn is_tx_msg_delegate(msg: &EncodeObject) -> bool {
    matches_shape(msg, MSG_DELEGATE_TYPE_URL, DELEGATE_FIELDS)
}

pub fn is_tx_msg_undelegate(msg: &EncodeObject) -> bool {
    matches_shape(msg, MSG_UNDELEGATE_TYPE_URL, DELEGATE_FIELDS)
}

pub fn is_tx_msg_redelegate(msg: &EncodeObject) -> bool {
    matches_shape(msg, MSG_BEGIN_REDELEGATE_TYPE_URL, REDELEGATE_FIELDS)
}

pub fn is_tx_msg_claim_rewards(msg: &EncodeObject) -> bool {
    matches_shape(msg, MSG_WITHDRAW_DELEGATOR_REWARD_TYPE_URL, CLAIM_REWARDS_FIELDS)
}

pub fn is_tx_msg_set_withdraw_address(msg: &EncodeObject) -> bool {
    matches_shape(msg, MSG_SET_WITHDRAW_ADDRESS_TYPE_URL, SET_WITHDRAW_ADDRESS_FIELDS)
}

/// Minimal structural check: non-empty type URL and non-empty payload
pub fn is_encode_object(msg: &EncodeObject) -> bool {
    msg.type_url.as_deref().is_some_and(|url| !url.is_empty())
        && is_non_empty_payload(msg.value.as_ref())
}

/// Well-formed message that none of the specific predicates accept
pub fn is_unknown_encode_object(msg: &EncodeObject) -> bool {
    is_encode_object(msg) && specific_kind(msg).is_none()
}

fn specific_kind(msg: &EncodeObject) -> Option<MsgKind> {
    if is_tx_msg_send(msg) {
        Some(MsgKind::Send)
    } else if is_tx_msg_delegate(msg) {
        Some(MsgKind::Delegate)
    } else if is_tx_msg_undelegate(msg) {
        Some(MsgKind::Undelegate)
    } else if is_tx_msg_redelegate(msg) {
        Some(MsgKind::Redelegate)
    } else if is_tx_msg_claim_rewards(msg) {
        Some(MsgKind::ClaimRewards)
    } else if is_tx_msg_set_withdraw_address(msg) {
        Some(MsgKind::SetWithdrawAddress)
    } else {
        None
    }
}

/// Kind of a single message, or `None` if it is not a valid encoded message
pub fn classify(msg: &EncodeObject) -> Option<MsgKind> {
    if let Some(kind) = specific_kind(msg) {
        return Some(kind);
    }

    if is_encode_object(msg) {
        tracing::debug!(
            type_url = msg.type_url.as_deref().unwrap_or_default(),
            "Message classified as generic encodeObject"
        );
        Some(MsgKind::EncodeObject)
    } else {
        None
    }
}

/// Classify every message of a transaction, keeping order
pub fn classify_all(msgs: &[EncodeObject]) -> Result<Vec<MsgKind>, MessageError> {
    msgs.iter()
        .enumerate()
        .map(|(index, msg)| {
            classify(msg).ok_or_else(|| {
                tracing::warn!(index, type_url = ?msg.type_url, "Unrecognized message in transaction");
                MessageError::Unrecognized {
                    index,
                    type_url: msg.type_url.clone(),
                }
            })
        })
        .collect()
}

impl TxMsg {
    /// Decode an encoded message into its variant.
    ///
    /// Returns `Some` exactly when `classify` does. A message whose address
    /// fields are truthy but not strings matches its `is_tx_msg_*` predicate
    /// yet cannot fill the typed payload, so it decodes as `Unknown`.
    pub fn decode(msg: &EncodeObject) -> Option<TxMsg> {
        let decoded = match msg.type_url.as_deref()? {
            MSG_SEND_TYPE_URL => payload_of(msg, MSG_SEND_TYPE_URL).and_then(decode_send),
            MSG_DELEGATE_TYPE_URL => payload_of(msg, MSG_DELEGATE_TYPE_URL)
                .and_then(decode_delegate)
                .map(TxMsg::Delegate),
            MSG_UNDELEGATE_TYPE_URL => payload_of(msg, MSG_UNDELEGATE_TYPE_URL)
                .and_then(decode_delegate)
                .map(TxMsg::Undelegate),
            MSG_BEGIN_REDELEGATE_TYPE_URL => {
                payload_of(msg, MSG_BEGIN_REDELEGATE_TYPE_URL).and_then(decode_redelegate)
            }
            MSG_WITHDRAW_DELEGATOR_REWARD_TYPE_URL => {
                payload_of(msg, MSG_WITHDRAW_DELEGATOR_REWARD_TYPE_URL).and_then(decode_claim_rewards)
            }
            MSG_SET_WITHDRAW_ADDRESS_TYPE_URL => payload_of(msg, MSG_SET_WITHDRAW_ADDRESS_TYPE_URL)
                .and_then(decode_set_withdraw_address),
            _ => None,
        };

        match decoded {
            Some(tx_msg) => Some(tx_msg),
            None if is_encode_object(msg) => Some(TxMsg::Unknown(msg.clone())),
            None => None,
        }
    }
}

fn decode_send(payload: &Map<String, Value>) -> Option<TxMsg> {
    Some(TxMsg::Send(MsgSend {
        from_address: address(payload, "fromAddress")?.to_owned(),
        to_address: address(payload, "toAddress")?.to_owned(),
        amount: coins(payload, "amount")?.clone(),
    }))
}

fn decode_delegate(payload: &Map<String, Value>) -> Option<MsgDelegate> {
    Some(MsgDelegate {
        delegator_address: address(payload, "delegatorAddress")?.to_owned(),
        validator_address: address(payload, "validatorAddress")?.to_owned(),
        amount: truthy_field(payload, "amount")?.clone(),
    })
}

fn decode_redelegate(payload: &Map<String, Value>) -> Option<TxMsg> {
    Some(TxMsg::Redelegate(MsgBeginRedelegate {
        delegator_address: address(payload, "delegatorAddress")?.to_owned(),
        validator_src_address: address(payload, "validatorSrcAddress")?.to_owned(),
        validator_dst_address: address(payload, "validatorDstAddress")?.to_owned(),
        amount: truthy_field(payload, "amount")?.clone(),
    }))
}

fn decode_claim_rewards(payload: &Map<String, Value>) -> Option<TxMsg> {
    Some(TxMsg::ClaimRewards(MsgWithdrawDelegatorReward {
        delegator_address: address(payload, "delegatorAddress")?.to_owned(),
        validator_address: address(payload, "validatorAddress")?.to_owned(),
    }))
}

fn decode_set_withdraw_address(payload: &Map<String, Value>) -> Option<TxMsg> {
    Some(TxMsg::SetWithdrawAddress(MsgSetWithdrawAddress {
        delegator_address: address(payload, "delegatorAddress")?.to_owned(),
        withdraw_address: address(payload, "withdrawAddress")?.to_owned(),
    }))
}
