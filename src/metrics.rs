// src/metrics.rs
//! Prometheus exposition of the board's render and filter counters.
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use metrics::{describe_counter, describe_gauge, describe_histogram, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Only one per process.
    pub fn init(items: usize) -> Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("prometheus: install recorder")?;

        describe_counter!("board_renders_total", "Full replacements of the display region.");
        describe_counter!(
            "board_filter_activations_total",
            "Filter activations, by control selector; unlisted selectors share one label."
        );
        describe_histogram!("board_fragments_rendered", "Fragments written per render.");
        describe_gauge!("board_store_items", "Items held by the store.");

        gauge!("board_store_items").set(items as f64);

        Ok(Self { handle })
    }

    /// `/metrics` in the Prometheus text format.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/metrics", get(exposition))
            .with_state(self.handle.clone())
    }
}

async fn exposition(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], handle.render())
}
