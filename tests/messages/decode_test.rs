use cosmos_tx_gas::services::messages::{types::*, *};
use serde_json::json;

use crate::common::{coin, valid_messages, with_field};

#[test]
fn test_decode_agrees_with_classify_for_valid_messages() {
    for (kind, msg, _) in valid_messages() {
        let decoded = TxMsg::decode(&msg).expect("valid message should decode");
        assert_eq!(decoded.kind(), kind);
        assert_eq!(Some(decoded.kind()), classify(&msg));
    }
}

#[test]
fn test_decode_send_payload() {
    let msg = EncodeObject::new(
        MSG_SEND_TYPE_URL,
        json!({"fromAddress": "a", "toAddress": "b", "amount": [{"denom": "utoken", "amount": "5"}]}),
    );

    match TxMsg::decode(&msg) {
        Some(TxMsg::Send(send)) => {
            assert_eq!(send.from_address, "a");
            assert_eq!(send.to_address, "b");
            assert_eq!(send.amount, vec![coin()]);
        }
        other => panic!("Expected send, got {:?}", other),
    }
}

#[test]
fn test_decode_redelegate_payload() {
    let (_, msg, _) = valid_messages()
        .into_iter()
        .find(|(kind, _, _)| *kind == MsgKind::Redelegate)
        .unwrap();

    let Some(TxMsg::Redelegate(redelegate)) = TxMsg::decode(&msg) else {
        panic!("Expected redelegate");
    };
    assert_eq!(redelegate.validator_src_address, "cosmosvaloper1src");
    assert_eq!(redelegate.validator_dst_address, "cosmosvaloper1dst");
    assert_eq!(redelegate.amount, coin());
}

#[test]
fn test_undelegate_keeps_its_own_variant() {
    let (_, msg, _) = valid_messages()
        .into_iter()
        .find(|(kind, _, _)| *kind == MsgKind::Undelegate)
        .unwrap();

    assert!(matches!(TxMsg::decode(&msg), Some(TxMsg::Undelegate(_))));
}

#[test]
fn test_partial_message_decodes_as_unknown() {
    let (_, msg, _) = valid_messages().remove(0);
    let partial = with_field(&msg, "toAddress", Some(json!("")));

    assert_eq!(TxMsg::decode(&partial), Some(TxMsg::Unknown(partial.clone())));
}

#[test]
fn test_non_string_address_decodes_as_unknown() {
    let (_, msg, _) = valid_messages()
        .into_iter()
        .find(|(kind, _, _)| *kind == MsgKind::ClaimRewards)
        .unwrap();
    let numeric = with_field(&msg, "delegatorAddress", Some(json!(42)));

    assert_eq!(classify(&numeric), Some(MsgKind::ClaimRewards));
    assert_eq!(TxMsg::decode(&numeric), Some(TxMsg::Unknown(numeric.clone())));
}

#[test]
fn test_invalid_message_does_not_decode() {
    assert_eq!(TxMsg::decode(&EncodeObject::default()), None);
    assert_eq!(
        TxMsg::decode(&EncodeObject::new(MSG_SEND_TYPE_URL, json!({}))),
        None
    );
}
