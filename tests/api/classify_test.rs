use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::setup_test_server;

// =============================================================================
// POST /messages/classify
// =============================================================================

#[tokio::test]
async fn test_classify_mixed_messages() {
    let server = setup_test_server();

    let response = server
        .post("/messages/classify")
        .json(&json!({
            "messages": [
                {
                    "typeUrl": "/cosmos.bank.v1beta1.MsgSend",
                    "value": {"fromAddress": "a", "toAddress": "b", "amount": [{"denom": "utoken", "amount": "5"}]}
                },
                {
                    "typeUrl": "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
                    "value": {"delegatorAddress": "d", "withdrawAddress": "w"}
                },
                {
                    "typeUrl": "/cosmos.gov.v1beta1.MsgVote",
                    "value": {"proposalId": "7", "voter": "v", "option": 1}
                },
                {"typeUrl": "", "value": {"x": 1}}
            ]
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);

    assert_eq!(messages[0]["index"], 0);
    assert_eq!(messages[0]["kind"], "send");
    assert_eq!(messages[1]["kind"], "setWithdrawAddress");
    assert_eq!(messages[2]["kind"], "encodeObject");
    assert_eq!(messages[2]["typeUrl"], "/cosmos.gov.v1beta1.MsgVote");
    assert!(messages[3]["kind"].is_null());
}

#[tokio::test]
async fn test_classify_empty_list() {
    let server = setup_test_server();

    let response = server
        .post("/messages/classify")
        .json(&json!({"messages": []}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["messages"], json!([]));
}

#[tokio::test]
async fn test_classify_rejects_missing_body_field() {
    let server = setup_test_server();

    let response = server
        .post("/messages/classify")
        .json(&json!({"msgs": []}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
