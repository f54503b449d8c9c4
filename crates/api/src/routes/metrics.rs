//! Prometheus metrics endpoint.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

/// Registers descriptions for the counters the pipeline emits.
pub fn describe() {
    metrics::describe_counter!(
        "pipeline_requests_total",
        "Commands dispatched through a pipeline, by command"
    );
    metrics::describe_counter!(
        "pipeline_validation_failures_total",
        "Commands rejected by the validation stage, by command"
    );
    metrics::describe_counter!("products_created_total", "Products added to the catalog");
}

/// GET /metrics — returns Prometheus-formatted metrics.
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        handle.render(),
    )
}
