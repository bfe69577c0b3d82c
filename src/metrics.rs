use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    // Business metrics
    pub static ref PREDICTIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("fraud_predictions_total", "Total fraud predictions served"),
        &["verdict"]
    ).expect("metric can be created");

    pub static ref FRAUD_SCORE_DISTRIBUTION: Histogram = Histogram::with_opts(
        HistogramOpts::new("fraud_score_distribution", "Distribution of returned fraud scores")
            .buckets(vec![0.1, 0.2, 0.3, 0.5, 0.7, 0.9, 1.0])
    ).expect("metric can be created");

    pub static ref VALIDATION_FAILURES: IntCounter = IntCounter::new(
        "validation_failures_total",
        "Total requests rejected by request validation"
    ).expect("metric can be created");
}

/// Register all metrics with the given registry
pub fn register_metrics(registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    registry.register(Box::new(PREDICTIONS_TOTAL.clone()))?;
    registry.register(Box::new(FRAUD_SCORE_DISTRIBUTION.clone()))?;
    registry.register(Box::new(VALIDATION_FAILURES.clone()))?;

    Ok(())
}

/// Generate metrics output in Prometheus text format
pub fn metrics_handler() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
