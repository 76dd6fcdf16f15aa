pub mod classifier;
pub mod types;

pub use classifier::{
    classify, classify_all, is_encode_object, is_tx_msg_claim_rewards, is_tx_msg_delegate,
    is_tx_msg_redelegate, is_tx_msg_send, is_tx_msg_set_withdraw_address, is_tx_msg_undelegate,
    is_unknown_encode_object,
};
pub use types::{
    EncodeObject, MessageError, MsgBeginRedelegate, MsgDelegate, MsgKind, MsgSend,
    MsgSetWithdrawAddress, MsgWithdrawDelegatorReward, TxMsg,
};
