//! AI News Board — Binary Entrypoint
//! Boots the Axum HTTP server with the item store, filter controls and
//! optional Prometheus route.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ai_news_board::config::dev_logging_enabled;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - NEWS_DEV_LOG=1
fn enable_dev_tracing() {
    if !dev_logging_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ai_news_board=info,warn"));

    // The runtime may already have installed a subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let router = ai_news_board::app().await?;
    Ok(router.into())
}
