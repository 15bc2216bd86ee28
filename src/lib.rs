// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod board;
pub mod config;
pub mod filter;
pub mod item;
pub mod metrics;
pub mod page;
pub mod render;
pub mod site;
pub mod source_class;
pub mod store;
pub mod summary;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::board::{Board, FilterBar, FilterControl};
pub use crate::filter::{filter_items, Selector};
pub use crate::item::NewsItem;
pub use crate::render::{render, DisplayRegion, Fragment, HtmlRegion};
pub use crate::source_class::{classify, SourceClass};
pub use crate::store::ItemStore;

use axum::Router;
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// Build the full application router from environment configuration.
/// `/metrics` is mounted when NEWS_METRICS is on; the recorder is installed
/// once per process.
pub async fn app() -> anyhow::Result<Router> {
    let cfg = AppConfig::from_env();
    let state = AppState::from_config(&cfg)?;
    let items = state.store.len();
    let mut router = api::router(state);

    if cfg.metrics {
        static METRICS: OnceCell<Metrics> = OnceCell::new();
        match METRICS.get_or_try_init(|| Metrics::init(items)) {
            Ok(m) => router = router.merge(m.router()),
            Err(e) => warn!(error = ?e, "metrics disabled"),
        }
    }

    info!(metrics = cfg.metrics, title = %cfg.page_title, "router built");
    Ok(router)
}
