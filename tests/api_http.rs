// tests/api_http.rs
//
// HTTP-level tests for the public Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.

use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use ai_news_board::config::AppConfig;
use ai_news_board::{api, AppState, FilterBar, ItemStore, NewsItem};

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

fn fixture_store() -> ItemStore {
    ItemStore::new(vec![
        NewsItem::new("Verge one", "https://v/1", "The Verge AI", "2026-02-04 22:41:03"),
        NewsItem::new("TC one", "https://t/1", "TechCrunch AI", "2026-02-05 00:45:11"),
        NewsItem::new("NYT one", "https://n/1", "NYT AI", "2026-02-05 00:43:08"),
        NewsItem::new("Google clip", "https://y/1", "YouTube - Google", "2026-02-04 20:15:35"),
        NewsItem::new("TC two", "https://t/2", "TechCrunch AI", "2026-02-04 23:28:31"),
        NewsItem::new("Manga app", "https://y/2", "YouTube - Tina Huang", "2026-02-04 14:40:00"),
    ])
}

fn test_router(store: ItemStore) -> Router {
    let cfg = AppConfig::default();
    api::router(AppState::new(store, FilterBar::default_controls(), &cfg))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET");
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    (status, String::from_utf8(bytes).expect("utf8"))
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = get(test_router(fixture_store()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.trim(), "ok");
}

#[tokio::test]
async fn index_renders_everything_with_all_tab_active() {
    let (status, body) = get(test_router(fixture_store()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"news-card\"").count(), 6);
    assert!(body.contains("<a class=\"filter-tab active\" href=\"/\" data-filter=\"all\">All</a>"));
}

#[tokio::test]
async fn index_filter_query_selects_subset() {
    let (_, body) = get(test_router(fixture_store()), "/?filter=techcrunch").await;
    assert_eq!(body.matches("class=\"news-card\"").count(), 2);
    let first = body.find("TC one").expect("TC one shown");
    let second = body.rfind("TC two").expect("TC two shown");
    assert!(first < second, "relative order preserved");
    assert!(body.contains("filter-tab active\" href=\"/?filter=techcrunch\""));
}

#[tokio::test]
async fn fragments_endpoint_returns_only_cards() {
    let (status, body) = get(test_router(fixture_store()), "/fragments?filter=youtube").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<html"));
    assert_eq!(body.matches("class=\"news-card\"").count(), 2);
    assert!(body.contains("YouTube - Tina Huang"));

    let (_, none) = get(test_router(fixture_store()), "/fragments?filter=reddit").await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn empty_store_renders_empty_region() {
    let (status, body) = get(test_router(ItemStore::empty()), "/?filter=nyt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"news-card\"").count(), 0);
    assert!(body.contains("id=\"newsContainer\""));
}

#[tokio::test]
async fn api_data_filters_and_keeps_shape() {
    let (status, body) = get(test_router(fixture_store()), "/api/data?filter=google").await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_str(&body).expect("json");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["来源"], "YouTube - Google");
    assert_eq!(arr[0]["链接"], "https://y/1");
}

#[tokio::test]
async fn api_data_honours_etag() {
    let store = fixture_store();
    let etag = format!("\"{}\"", store.digest());
    let app = test_router(store);

    let resp = app
        .clone()
        .oneshot(Request::get("/api/data").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ETAG).and_then(|v| v.to_str().ok()),
        Some(etag.as_str())
    );

    let resp = app
        .oneshot(
            Request::get("/api/data")
                .header(header::IF_NONE_MATCH, etag.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn api_stats_reports_counts() {
    let (status, body) = get(test_router(fixture_store()), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_str(&body).expect("json");
    assert_eq!(v["total"], 6);
    assert_eq!(v["by_source"][1]["source"], "TechCrunch AI");
    assert_eq!(v["by_source"][1]["count"], 2);
    let yt = v["by_class"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["class"] == "youtube")
        .expect("youtube class");
    assert_eq!(yt["count"], 2);
    assert_eq!(v["filters"][0]["selector"], "all");
    assert!(v["digest"].as_str().is_some_and(|d| d.len() == 16));
}
