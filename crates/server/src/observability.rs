use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter, Encoder, Histogram, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static QUERIES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "product_catalog_queries_total",
        "Total product read operations"
    )
    .expect("register queries_total")
});

pub static MUTATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "product_catalog_mutations_total",
        "Total product write operations"
    )
    .expect("register mutations_total")
});

pub static STORAGE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "product_catalog_storage_errors_total",
        "Total operations failed by the storage layer"
    )
    .expect("register storage_errors_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "product_catalog_request_duration_seconds",
        "Product operation duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register request_duration")
});

/// Register every metric so `/metrics` lists them before first use.
pub fn init_metrics() {
    Lazy::force(&QUERIES_TOTAL);
    Lazy::force(&MUTATIONS_TOTAL);
    Lazy::force(&STORAGE_ERRORS_TOTAL);
    Lazy::force(&REQUEST_DURATION);
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
