// src/render.rs
//! Projection of items into display fragments and the display region they
//! are written to.
//!
//! A render always replaces the whole region; nothing from a previous call
//! survives.

use metrics::{counter, histogram};
use tracing::debug;

use crate::item::NewsItem;
use crate::source_class::{classify, SourceClass};

/// Default lookup key of the region on the page.
pub const DEFAULT_REGION_ID: &str = "newsContainer";

/// Placeholder href for items without a link.
const MISSING_URL: &str = "#";

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub href: String,
    pub badge: String,
    pub badge_class: SourceClass,
    pub title: String,
    pub timestamp: String,
}

impl Fragment {
    pub fn from_item(item: &NewsItem) -> Self {
        let href = if item.url.trim().is_empty() {
            debug!(target: "render", title = %item.title, "item without url, using placeholder");
            MISSING_URL.to_string()
        } else {
            item.url.clone()
        };

        Self {
            href,
            badge: item.source.clone(),
            badge_class: classify(&item.source),
            // Feed titles arrive with entities (`&#8217;`); decode once so the
            // escaped output shows the intended characters.
            title: html_escape::decode_html_entities(&item.title).into_owned(),
            timestamp: item.published_at.clone(),
        }
    }

    /// Card markup. Opens the link in a separate browsing context.
    pub fn to_html(&self) -> String {
        let class = match self.badge_class.css_class() {
            "" => "card-source".to_string(),
            c => format!("card-source {c}"),
        };
        format!(
            concat!(
                "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"news-card\">\n",
                "  <div class=\"{class}\">{badge}</div>\n",
                "  <div class=\"card-title\">{title}</div>\n",
                "  <div class=\"card-meta\">\u{1F552} {ts}</div>\n",
                "</a>"
            ),
            href = html_escape::encode_double_quoted_attribute(&self.href),
            class = class,
            badge = html_escape::encode_text(&self.badge),
            title = html_escape::encode_text(&self.title),
            ts = html_escape::encode_text(&self.timestamp),
        )
    }
}

/// Presentation surface the render step writes to.
pub trait DisplayRegion {
    /// Drop whatever is displayed and show `fragments` instead, in order.
    fn replace_all(&mut self, fragments: Vec<Fragment>);

    fn fragments(&self) -> &[Fragment];
}

impl DisplayRegion for Vec<Fragment> {
    fn replace_all(&mut self, fragments: Vec<Fragment>) {
        *self = fragments;
    }

    fn fragments(&self) -> &[Fragment] {
        self
    }
}

/// Region backed by an HTML container element.
#[derive(Debug, Clone)]
pub struct HtmlRegion {
    id: String,
    fragments: Vec<Fragment>,
}

impl Default for HtmlRegion {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_ID)
    }
}

impl HtmlRegion {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fragments: Vec::new(),
        }
    }

    /// Cards only, one per line, without the container.
    pub fn inner_html(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"news-grid\" id=\"{}\">\n{}\n</div>",
            html_escape::encode_double_quoted_attribute(&self.id),
            self.inner_html()
        )
    }
}

impl DisplayRegion for HtmlRegion {
    fn replace_all(&mut self, fragments: Vec<Fragment>) {
        self.fragments = fragments;
    }

    fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

/// Replace the region's content with one fragment per item, in input order.
/// Returns the number of fragments written.
pub fn render<'a, I, R>(items: I, region: &mut R) -> usize
where
    I: IntoIterator<Item = &'a NewsItem>,
    R: DisplayRegion + ?Sized,
{
    let fragments: Vec<Fragment> = items.into_iter().map(Fragment::from_item).collect();
    let n = fragments.len();
    region.replace_all(fragments);

    counter!("board_renders_total").increment(1);
    histogram!("board_fragments_rendered").record(n as f64);
    debug!(target: "render", fragments = n, "region replaced");
    n
}
