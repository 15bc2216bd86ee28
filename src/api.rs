// src/api.rs
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;

use crate::board::FilterControl;
use crate::config::{filters::load_filters, AppConfig};
use crate::filter::Selector;
use crate::item::NewsItem;
use crate::page::{board_for, board_page, now_display, TabLinks};
use crate::store::ItemStore;
use crate::summary::{summarize, SourceSummary};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
    pub controls: Arc<Vec<FilterControl>>,
    pub page_title: Arc<str>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(store: ItemStore, controls: Vec<FilterControl>, cfg: &AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            controls: Arc::new(controls),
            page_title: Arc::from(cfg.page_title.as_str()),
            static_dir: cfg.static_dir.clone(),
        }
    }

    /// Load store and filter controls as configured.
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let store = ItemStore::load(cfg.data_path.as_deref())?;
        let controls = load_filters(cfg.filters_path.as_deref())?;
        info!(
            items = store.len(),
            filters = controls.len(),
            digest = store.digest(),
            "board state ready"
        );
        Ok(Self::new(store, controls, cfg))
    }
}

pub fn router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(index))
        .route("/fragments", get(fragments))
        .route("/api/data", get(api_data))
        .route("/api/stats", get(api_stats))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Default, serde::Deserialize)]
struct FilterQuery {
    #[serde(default)]
    filter: Option<String>,
}

async fn index(State(state): State<AppState>, Query(q): Query<FilterQuery>) -> Html<String> {
    Html(board_page(
        state.store.clone(),
        &state.controls,
        &state.page_title,
        q.filter.as_deref(),
        TabLinks::Server,
        &now_display(),
    ))
}

async fn fragments(State(state): State<AppState>, Query(q): Query<FilterQuery>) -> Html<String> {
    let board = board_for(state.store.clone(), &state.controls, q.filter.as_deref());
    Html(board.region().inner_html())
}

fn etag_value(digest: &str) -> String {
    format!("\"{digest}\"")
}

async fn api_data(
    State(state): State<AppState>,
    Query(q): Query<FilterQuery>,
    headers: HeaderMap,
) -> Response {
    let etag = etag_value(state.store.digest());
    let selector = Selector::parse(q.filter.as_deref().unwrap_or_default());

    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.split(',').any(|t| t.trim() == etag || t.trim() == "*"));

    let etag_header = HeaderValue::from_str(&etag).ok();
    let mut resp = if not_modified {
        StatusCode::NOT_MODIFIED.into_response()
    } else {
        let items: Vec<&NewsItem> = state.store.filter(&selector);
        Json(items).into_response()
    };
    if let Some(v) = etag_header {
        resp.headers_mut().insert(header::ETAG, v);
    }
    resp
}

#[derive(serde::Serialize)]
struct StatsOut {
    generated_at: String,
    digest: String,
    filters: Vec<FilterControl>,
    #[serde(flatten)]
    summary: SourceSummary,
}

async fn api_stats(State(state): State<AppState>) -> Json<StatsOut> {
    Json(StatsOut {
        generated_at: now_display(),
        digest: state.store.digest().to_string(),
        filters: state.controls.as_ref().clone(),
        summary: summarize(state.store.items()),
    })
}
