//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): requests by method, route, status
//! - `catalog_request_duration_seconds` (histogram): latency by method, route
//! - `catalog_albums` (gauge): store size, set at startup and after each create
//!
//! Recording without an installed exporter is a no-op, so handlers and tests
//! never need to care whether metrics are enabled.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one completed request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "catalog_requests_total",
        "method" => method.to_owned(),
        "route" => route.to_owned(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "catalog_request_duration_seconds",
        "method" => method.to_owned(),
        "route" => route.to_owned()
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_store_size(len: usize) {
    metrics::gauge!("catalog_albums").set(len as f64);
}
