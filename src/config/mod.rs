// src/config/mod.rs
//! Runtime configuration from the environment (and `.env` in dev).

pub mod filters;

use std::path::PathBuf;

// --- env names & defaults ---
pub const ENV_DATA_PATH: &str = "NEWS_DATA_PATH";
pub const ENV_FILTERS_PATH: &str = "NEWS_FILTERS_PATH";
pub const ENV_STATIC_DIR: &str = "NEWS_STATIC_DIR";
pub const ENV_PAGE_TITLE: &str = "NEWS_PAGE_TITLE";
pub const ENV_METRICS: &str = "NEWS_METRICS";
pub const ENV_DEV_LOG: &str = "NEWS_DEV_LOG";

pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_PAGE_TITLE: &str = "AI News Board";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON item file; `None` means the embedded bundle.
    pub data_path: Option<PathBuf>,
    /// Explicit filter control file; `None` means the fallback chain in
    /// [`filters::load_filters_default`].
    pub filters_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub page_title: String,
    pub metrics: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            filters_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            metrics: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let d = Self::default();
        Self {
            data_path: get(ENV_DATA_PATH).map(PathBuf::from),
            filters_path: get(ENV_FILTERS_PATH).map(PathBuf::from),
            static_dir: get(ENV_STATIC_DIR).map(PathBuf::from).unwrap_or(d.static_dir),
            page_title: get(ENV_PAGE_TITLE).unwrap_or(d.page_title),
            metrics: get(ENV_METRICS).is_some_and(|v| flag(&v)),
        }
    }
}

/// "1" / "true" / "yes" / "on", any case.
pub fn flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Dev logging gate: NEWS_DEV_LOG=1 AND a dev build or SHUTTLE_ENV in {local, development, dev}.
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().is_some_and(|v| flag(&v));
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}
