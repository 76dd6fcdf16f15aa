use chrono::Utc;
use std::sync::Arc;

use super::types::{GasError, MsgGas, TxGasEstimate, MSG_GAS, TX_FLAT_GAS};
use crate::services::messages::{classify_all, EncodeObject, MsgKind};
use crate::services::metrics::MetricsRegistry;

/// Gas cost of a single message kind
pub fn gas_of_msg(kind: MsgKind) -> u64 {
    match kind {
        MsgKind::Send => MSG_GAS,
        MsgKind::Delegate => MSG_GAS,
        MsgKind::Undelegate => MSG_GAS,
        MsgKind::Redelegate => MSG_GAS,
        MsgKind::ClaimRewards => MSG_GAS,
        MsgKind::SetWithdrawAddress => MSG_GAS,
        MsgKind::EncodeObject => MSG_GAS,
    }
}

/// Gas cost of a message kind given by its tag (`"send"`, `"claimRewards"`, ...)
pub fn gas_of_msg_tag(tag: &str) -> Result<u64, GasError> {
    tag.parse::<MsgKind>().map(gas_of_msg).map_err(|_| {
        tracing::warn!(tag, "Gas requested for unknown msg kind");
        GasError::UnknownMsgKind(tag.to_string())
    })
}

/// Total gas for a transaction made of `kinds`
pub fn gas_of_tx(kinds: &[MsgKind]) -> u64 {
    kinds
        .iter()
        .fold(TX_FLAT_GAS, |acc, kind| acc.saturating_add(gas_of_msg(*kind)))
}

/// Same as [`gas_of_tx`] for wire tags; fails on the first unknown tag
pub fn gas_of_tx_tags<S: AsRef<str>>(tags: &[S]) -> Result<u64, GasError> {
    tags.iter().try_fold(TX_FLAT_GAS, |acc, tag| {
        Ok(acc.saturating_add(gas_of_msg_tag(tag.as_ref())?))
    })
}

/// Transaction gas estimator with optional metrics recording
#[derive(Clone, Default)]
pub struct GasEstimator {
    metrics: Option<Arc<MetricsRegistry>>,
}

impl GasEstimator {
    pub fn new(metrics: Option<Arc<MetricsRegistry>>) -> Self {
        Self { metrics }
    }

    /// Estimate gas for already classified message kinds
    pub fn estimate(&self, kinds: &[MsgKind]) -> TxGasEstimate {
        let messages: Vec<MsgGas> = kinds
            .iter()
            .map(|&kind| MsgGas {
                kind,
                gas: gas_of_msg(kind),
            })
            .collect();
        let total_gas = gas_of_tx(kinds);

        tracing::debug!(
            message_count = messages.len(),
            total_gas,
            "Estimated transaction gas"
        );

        if let Some(metrics) = &self.metrics {
            metrics.record_gas_estimate(kinds, total_gas);
        }

        TxGasEstimate {
            messages,
            flat_gas: TX_FLAT_GAS,
            total_gas,
            timestamp: Utc::now(),
        }
    }

    /// Classify `msgs` and estimate gas for the resulting kinds
    pub fn estimate_messages(&self, msgs: &[EncodeObject]) -> Result<TxGasEstimate, GasError> {
        match classify_all(msgs) {
            Ok(kinds) => Ok(self.estimate(&kinds)),
            Err(e) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_gas_estimate_failure();
                }
                Err(e.into())
            }
        }
    }
}
