//! Gas Estimation Tests
//!
//! Flat per-transaction overhead plus a fixed cost per message kind.

use cosmos_tx_gas::services::gas::{
    gas_of_msg, gas_of_msg_tag, gas_of_tx, gas_of_tx_tags, GasError, GasEstimator,
};
use cosmos_tx_gas::services::messages::{EncodeObject, MessageError, MsgKind};
use cosmos_tx_gas::services::metrics::MetricsRegistry;
use serde_json::json;

use crate::common::valid_messages;

#[test]
fn test_empty_transaction_costs_flat_gas() {
    assert_eq!(gas_of_tx(&[]), 100_000);
}

#[test]
fn test_single_send() {
    assert_eq!(gas_of_tx(&[MsgKind::Send]), 200_000);
    assert_eq!(gas_of_tx_tags(&["send"]).unwrap(), 200_000);
}

#[test]
fn test_mixed_transaction() {
    let kinds = [MsgKind::Send, MsgKind::Delegate, MsgKind::ClaimRewards];
    assert_eq!(gas_of_tx(&kinds), 400_000);
    assert_eq!(
        gas_of_tx_tags(&["send", "delegate", "claimRewards"]).unwrap(),
        400_000
    );
}

#[test]
fn test_order_does_not_matter() {
    let kinds = [
        MsgKind::Redelegate,
        MsgKind::EncodeObject,
        MsgKind::Send,
        MsgKind::SetWithdrawAddress,
    ];
    let expected = gas_of_tx(&kinds);

    let mut permuted = kinds;
    for _ in 0..kinds.len() {
        permuted.rotate_left(1);
        assert_eq!(gas_of_tx(&permuted), expected);
    }

    permuted.reverse();
    assert_eq!(gas_of_tx(&permuted), expected);
}

#[test]
fn test_every_tag_is_priced() {
    for kind in MsgKind::ALL {
        assert_eq!(gas_of_msg_tag(kind.as_str()).unwrap(), gas_of_msg(kind));
    }
}

#[test]
fn test_unknown_tag_is_rejected() {
    for tag in ["", "vote", "Send", "encode_object"] {
        match gas_of_msg_tag(tag) {
            Err(GasError::UnknownMsgKind(t)) => assert_eq!(t, tag),
            other => panic!("Expected unknown kind for {:?}, got {:?}", tag, other),
        }
    }

    assert!(matches!(
        gas_of_tx_tags(&["send", "ibcTransfer"]),
        Err(GasError::UnknownMsgKind(ref t)) if t == "ibcTransfer"
    ));
}

#[test]
fn test_end_to_end_send() {
    let msg: EncodeObject = serde_json::from_value(json!({
        "typeUrl": "/cosmos.bank.v1beta1.MsgSend",
        "value": {"fromAddress": "a", "toAddress": "b", "amount": [{"denom": "utoken", "amount": "5"}]}
    }))
    .unwrap();

    let estimate = GasEstimator::default().estimate_messages(&[msg]).unwrap();
    assert_eq!(estimate.messages.len(), 1);
    assert_eq!(estimate.messages[0].kind, MsgKind::Send);
    assert_eq!(estimate.total_gas, 200_000);
}

#[test]
fn test_estimate_all_known_kinds() {
    let msgs: Vec<EncodeObject> = valid_messages().into_iter().map(|(_, m, _)| m).collect();
    let estimate = GasEstimator::new(None).estimate_messages(&msgs).unwrap();

    assert_eq!(estimate.flat_gas, 100_000);
    assert_eq!(estimate.total_gas, 700_000);
}

#[test]
fn test_estimate_rejects_unrecognized_message() {
    let result = GasEstimator::default().estimate_messages(&[EncodeObject::default()]);

    assert!(matches!(
        result,
        Err(GasError::Message(MessageError::Unrecognized { index: 0, type_url: None }))
    ));
}

#[test]
fn test_estimator_records_metrics() {
    let metrics = MetricsRegistry::new().unwrap();
    let estimator = GasEstimator::new(Some(metrics.clone()));

    estimator.estimate(&[MsgKind::Send, MsgKind::Send]);
    let _ = estimator.estimate_messages(&[EncodeObject::default()]);

    let output = metrics.export().unwrap();
    assert!(output.contains("kind=\"send\"} 2"));
    assert!(output.contains("outcome=\"ok\"} 1"));
    assert!(output.contains("outcome=\"error\"} 1"));
    assert!(output.contains("cosmos_tx_gas_tx_gas_units_sum 300000"));
}
