pub mod estimator;
pub mod types;

pub use estimator::{gas_of_msg, gas_of_msg_tag, gas_of_tx, gas_of_tx_tags, GasEstimator};
pub use types::{GasError, MsgGas, TxGasEstimate, MSG_GAS, TX_FLAT_GAS};
