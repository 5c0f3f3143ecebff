//! Prometheus metrics collection for the pokedex server

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};

/// Initialize all metric descriptions
pub fn init_metrics() {
    // Counters
    describe_counter!(
        "pokedex_requests_total",
        "Total number of requests reaching the catalog handlers"
    );
    describe_counter!(
        "pokedex_unauthorized_total",
        "Total number of requests rejected by the auth gate"
    );

    // Histograms
    describe_histogram!(
        "pokedex_query_latency_seconds",
        "Catalog query latency in seconds"
    );
    describe_histogram!(
        "pokedex_query_results",
        "Number of entries returned per catalog query"
    );

    // Gauges
    describe_gauge!(
        "pokedex_catalog_entries",
        "Number of entries in the loaded catalog"
    );
}

/// Record a request served by a catalog handler
pub fn record_request(endpoint: &'static str) {
    counter!("pokedex_requests_total", 1, "endpoint" => endpoint);
}

/// Record a catalog query outcome
pub fn record_query(results: usize, latency_seconds: f64) {
    histogram!("pokedex_query_latency_seconds", latency_seconds);
    histogram!("pokedex_query_results", results as f64);
}

/// Record a request rejected by the auth gate
pub fn record_unauthorized() {
    counter!("pokedex_unauthorized_total", 1);
}

/// Record the size of the loaded catalog
pub fn record_catalog_size(entries: usize) {
    gauge!("pokedex_catalog_entries", entries as f64);
}

/// Storage for Prometheus handle
static PROMETHEUS_HANDLE: std::sync::OnceLock<metrics_exporter_prometheus::PrometheusHandle> =
    std::sync::OnceLock::new();

/// Initialize Prometheus exporter and store the handle
pub fn init_prometheus() -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;
    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Prometheus recorder already installed"))?;
    Ok(())
}

/// Get Prometheus metrics string
pub fn get_prometheus_metrics() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Prometheus metrics not initialized\n".to_string())
}
