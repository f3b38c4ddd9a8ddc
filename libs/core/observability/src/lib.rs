//! Observability utilities for the pet catalog.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Domain counters for pet catalog operations
//! - Axum middleware for automatic request metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, PetMetrics};
//!
//! init_metrics()?;
//!
//! PetMetrics::record_created();
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

pub mod middleware;
pub mod pets;

pub use middleware::metrics_middleware;
pub use pets::PetMetrics;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder as the global metrics recorder.
///
/// Call once at startup; later calls return the existing handle. Fails if
/// another global recorder is already installed.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();

        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_gauge, describe_histogram};

    // HTTP metrics
    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    // Pet catalog metrics
    describe_counter!("pets_created_total", "Pets added to the catalog");
    describe_counter!("pets_updated_total", "Pet records replaced");
    describe_counter!("pets_deleted_total", "Pets removed one at a time");
    describe_counter!(
        "pets_bulk_deleted_total",
        "Pets removed by delete-all requests"
    );
    describe_gauge!("pets_listed", "Number of pets returned by the last listing");
}
