// src/page.rs
//! Full HTML document around the display region: header, summary section,
//! filter tabs.

use std::sync::Arc;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::board::{Board, FilterBar, FilterControl};
use crate::filter::Selector;
use crate::render::HtmlRegion;
use crate::source_class::SourceClass;
use crate::store::ItemStore;
use crate::summary::{summarize, SourceSummary};

/// How filter tabs link to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabLinks {
    /// Served pages: `/?filter=<selector>`.
    Server,
    /// Generated files: `index.html` and `<slug>.html`.
    Static,
}

impl TabLinks {
    pub fn href(self, selector: &Selector) -> String {
        match self {
            TabLinks::Server if selector.is_all() => "/".to_string(),
            TabLinks::Server => format!("/?filter={}", urlencoding::encode(selector.as_str())),
            TabLinks::Static => static_file_name(selector),
        }
    }

    fn stylesheet(self) -> &'static str {
        match self {
            TabLinks::Server => "/static/styles.css",
            TabLinks::Static => "static/styles.css",
        }
    }
}

/// File a static page for `selector` is written to.
pub fn static_file_name(selector: &Selector) -> String {
    if selector.is_all() {
        return "index.html".to_string();
    }
    let slug: String = selector
        .as_str()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    match slug.trim_matches('-') {
        "" => "filter.html".to_string(),
        s => format!("{s}.html"),
    }
}

pub struct PageContext<'a> {
    pub title: &'a str,
    pub bar: &'a FilterBar,
    pub region: &'a HtmlRegion,
    pub summary: &'a SourceSummary,
    pub links: TabLinks,
    pub generated_at: &'a str,
}

fn tab_html(c: &FilterControl, links: TabLinks) -> String {
    let class = if c.is_active() {
        "filter-tab active"
    } else {
        "filter-tab"
    };
    format!(
        "<a class=\"{class}\" href=\"{href}\" data-filter=\"{sel}\">{label}</a>",
        href = attr(&links.href(&c.selector)),
        sel = attr(c.selector.as_str()),
        label = text(&c.label),
    )
}

fn summary_html(summary: &SourceSummary) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"summary-section\">\n");
    out.push_str(&format!(
        "  <div class=\"summary-total\">{} items</div>\n",
        summary.total
    ));
    out.push_str("  <ul class=\"summary-classes\">\n");
    for c in summary.by_class.iter().filter(|c| c.count > 0) {
        let css = match c.class {
            SourceClass::Other => "other",
            k => k.css_class(),
        };
        out.push_str(&format!(
            "    <li class=\"summary-class {css}\"><strong>{name}</strong> {count}",
            name = text(c.class.display_name()),
            count = c.count,
        ));
        if !c.headlines.is_empty() {
            let joined = c
                .headlines
                .iter()
                .map(|h| text(h).into_owned())
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(&format!(" <span class=\"summary-headlines\">{joined}</span>"));
        }
        out.push_str("</li>\n");
    }
    out.push_str("  </ul>\n</section>");
    out
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let tabs = ctx
        .bar
        .controls()
        .iter()
        .map(|c| format!("    {}", tab_html(c, ctx.links)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="{css}">
</head>
<body>
<header class="page-header">
  <h1>{title}</h1>
  <div class="generated-at">{generated}</div>
</header>
{summary}
<nav class="filter-tabs">
{tabs}
</nav>
{region}
</body>
</html>
"#,
        title = text(ctx.title),
        css = ctx.links.stylesheet(),
        generated = text(ctx.generated_at),
        summary = summary_html(ctx.summary),
        tabs = tabs,
        region = ctx.region.to_html(),
    )
}

/// Board after the initial render and, when `filter` is given, one
/// activation of that selector.
pub fn board_for(
    store: Arc<ItemStore>,
    controls: &[FilterControl],
    filter: Option<&str>,
) -> Board<HtmlRegion> {
    let mut board = Board::new(store, FilterBar::new(controls.to_vec()), HtmlRegion::default());
    board.ready();
    if let Some(f) = filter {
        board.activate_selector(f);
    }
    board
}

/// Complete document for one filter state.
pub fn board_page(
    store: Arc<ItemStore>,
    controls: &[FilterControl],
    title: &str,
    filter: Option<&str>,
    links: TabLinks,
    generated_at: &str,
) -> String {
    let summary = summarize(store.items());
    let board = board_for(store, controls, filter);
    render_page(&PageContext {
        title,
        bar: board.bar(),
        region: board.region(),
        summary: &summary,
        links,
        generated_at,
    })
}

/// Local time in the same display format items use.
pub fn now_display() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
