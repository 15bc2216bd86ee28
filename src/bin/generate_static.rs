//! Writes the board as a static site: `generate-static [OUTPUT_DIR]`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ai_news_board::config::{filters::load_filters, AppConfig};
use ai_news_board::site::{self, SiteOptions, DEFAULT_OUTPUT_DIR};
use ai_news_board::ItemStore;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let cfg = AppConfig::from_env();
    let store = ItemStore::load(cfg.data_path.as_deref())?;
    let controls = load_filters(cfg.filters_path.as_deref())?;

    let written = site::generate(
        &SiteOptions {
            store: Arc::new(store),
            controls: &controls,
            title: &cfg.page_title,
            static_dir: Some(cfg.static_dir.as_path()),
        },
        &out_dir,
    )?;

    println!("static site written to {}", out_dir.display());
    for p in written {
        println!("  - {}", p.display());
    }
    Ok(())
}
