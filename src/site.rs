// src/site.rs
//! Static site output for plain file hosting (GitHub Pages, Cloudflare
//! Pages, ...): one page per filter plus the raw data file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::board::FilterControl;
use crate::filter::Selector;
use crate::page::{board_page, now_display, static_file_name, TabLinks};
use crate::store::ItemStore;

pub const DEFAULT_OUTPUT_DIR: &str = "./static-site";

/// Stylesheet compiled in, so the generator works outside the repo.
pub const EMBEDDED_STYLES: &str = include_str!("../static/styles.css");

pub struct SiteOptions<'a> {
    pub store: Arc<ItemStore>,
    pub controls: &'a [FilterControl],
    pub title: &'a str,
    /// Directory holding `styles.css`; the embedded copy is used when absent.
    pub static_dir: Option<&'a Path>,
}

/// Write the site into `out_dir`, creating it if needed. Returns the written
/// files in write order.
pub fn generate(opts: &SiteOptions<'_>, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;

    let generated_at = now_display();
    let mut written = Vec::new();

    // index.html first, even when no `all` control is configured.
    let mut pages: Vec<Option<&str>> = vec![None];
    pages.extend(
        opts.controls
            .iter()
            .filter(|c| !c.selector.is_all())
            .map(|c| Some(c.selector.as_str())),
    );

    for filter in pages {
        let html = board_page(
            opts.store.clone(),
            opts.controls,
            opts.title,
            filter,
            TabLinks::Static,
            &generated_at,
        );
        let name = static_file_name(&Selector::parse(filter.unwrap_or_default()));
        let path = out_dir.join(name);
        write_file(&path, html.as_bytes())?;
        written.push(path);
    }

    let data = out_dir.join("data.json");
    write_file(&data, opts.store.to_json_pretty()?.as_bytes())?;
    written.push(data);

    let css = load_styles(opts.static_dir)?;
    let css_dir = out_dir.join("static");
    fs::create_dir_all(&css_dir)
        .with_context(|| format!("creating {}", css_dir.display()))?;
    let css_path = css_dir.join("styles.css");
    write_file(&css_path, css.as_bytes())?;
    written.push(css_path);

    info!(
        target: "site",
        out = %out_dir.display(),
        files = written.len(),
        items = opts.store.len(),
        "static site generated"
    );
    Ok(written)
}

fn load_styles(static_dir: Option<&Path>) -> Result<String> {
    match static_dir.map(|d| d.join("styles.css")) {
        Some(p) if p.exists() => {
            fs::read_to_string(&p).with_context(|| format!("reading {}", p.display()))
        }
        _ => Ok(EMBEDDED_STYLES.to_string()),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
