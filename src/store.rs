// src/store.rs
//! Immutable, insertion-ordered item store.
//!
//! The store is loaded once (from the embedded bundle or a JSON file) and
//! shared read-only; nothing creates, mutates or drops items afterwards.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::filter::{filter_items, Selector};
use crate::item::NewsItem;

/// Data file compiled into the binary; used when no path is configured.
pub const EMBEDDED_NEWS_JSON: &str = include_str!("../data/news.json");

#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Arc<[NewsItem]>,
    digest: String,
}

impl ItemStore {
    pub fn new(items: Vec<NewsItem>) -> Self {
        let digest = digest_items(&items);
        Self {
            items: items.into(),
            digest,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse a JSON array of items. Incomplete items are kept (rendered with
    /// placeholders) and reported once.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let items: Vec<NewsItem> =
            serde_json::from_str(s).context("parsing news items (expected a JSON array)")?;

        let incomplete = items.iter().filter(|it| !it.is_complete()).count();
        if incomplete > 0 {
            warn!(
                target: "store",
                incomplete,
                total = items.len(),
                "items with missing title/url/source will render with placeholders"
            );
        }
        Ok(Self::new(items))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading news items from {}", path.display()))?;
        let store = Self::from_json_str(&content)
            .with_context(|| format!("loading news items from {}", path.display()))?;
        info!(target: "store", path = %path.display(), items = store.len(), "news items loaded");
        Ok(store)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_NEWS_JSON).context("loading embedded news bundle")
    }

    /// Explicit path if given, embedded bundle otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self, selector: &Selector) -> Vec<&NewsItem> {
        filter_items(&self.items, selector)
    }

    /// Short hex digest of the serialized items; changes whenever content
    /// or order changes.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&*self.items).context("serializing news items")
    }
}

fn digest_items(items: &[NewsItem]) -> String {
    let mut hasher = Sha256::new();
    // Serializing plain data cannot fail; an empty buffer still yields a digest.
    let bytes = serde_json::to_vec(items).unwrap_or_default();
    hasher.update(&bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(16);
    for b in digest.iter().take(8) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
