use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Histogram, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

use crate::services::messages::MsgKind;

const NAMESPACE: &str = "cosmos_tx_gas";

/// Central metrics registry for the gas service
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Classification Metrics
    pub messages_classified_total: CounterVec,

    // Gas Metrics
    pub gas_estimates_total: CounterVec,
    pub tx_gas_units: Histogram,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, prometheus::Error> {
        let registry = Registry::new();

        // HTTP Metrics
        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests").namespace(NAMESPACE),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .namespace(NAMESPACE)
                .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        // Classification Metrics
        let messages_classified_total = CounterVec::new(
            Opts::new("messages_classified_total", "Messages classified by kind")
                .namespace(NAMESPACE),
            &["kind"],
        )?;
        registry.register(Box::new(messages_classified_total.clone()))?;

        // Gas Metrics
        let gas_estimates_total = CounterVec::new(
            Opts::new("gas_estimates_total", "Transaction gas estimates").namespace(NAMESPACE),
            &["outcome"],
        )?;
        registry.register(Box::new(gas_estimates_total.clone()))?;

        let tx_gas_units = Histogram::with_opts(
            HistogramOpts::new("tx_gas_units", "Estimated gas per transaction")
                .namespace(NAMESPACE)
                .buckets(vec![
                    100_000.0, 200_000.0, 300_000.0, 500_000.0, 1_000_000.0, 2_000_000.0,
                    5_000_000.0,
                ]),
        )?;
        registry.register(Box::new(tx_gas_units.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            messages_classified_total,
            gas_estimates_total,
            tx_gas_units,
        }))
    }

    /// Count one classification result; unrecognized messages are labelled `none`
    pub fn record_classification(&self, kind: Option<MsgKind>) {
        let label = kind.map_or("none", |k| k.as_str());
        self.messages_classified_total
            .with_label_values(&[label])
            .inc();
    }

    pub fn record_gas_estimate(&self, kinds: &[MsgKind], total_gas: u64) {
        for kind in kinds {
            self.record_classification(Some(*kind));
        }
        self.gas_estimates_total.with_label_values(&["ok"]).inc();
        self.tx_gas_units.observe(total_gas as f64);
    }

    pub fn record_gas_estimate_failure(&self) {
        self.gas_estimates_total.with_label_values(&["error"]).inc();
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
