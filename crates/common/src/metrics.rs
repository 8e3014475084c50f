//! Prometheus counters for line operations (default registry).
use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

pub static LINES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("subway_lines_created_total", "Total lines created")
        .expect("register lines_created_total")
});

pub static LINES_UPDATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("subway_lines_updated_total", "Total lines updated")
        .expect("register lines_updated_total")
});

pub static LINES_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("subway_lines_deleted_total", "Total lines deleted")
        .expect("register lines_deleted_total")
});

pub static LINE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "subway_line_errors_total",
        "Total line requests rejected with a client or server error"
    )
    .expect("register line_errors_total")
});

/// Touch every counter so they show up in `/metrics` before first use.
pub fn init() {
    Lazy::force(&LINES_CREATED_TOTAL);
    Lazy::force(&LINES_UPDATED_TOTAL);
    Lazy::force(&LINES_DELETED_TOTAL);
    Lazy::force(&LINE_ERRORS_TOTAL);
}

/// Render the default registry in the Prometheus text format.
pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
