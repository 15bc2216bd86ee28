// src/item.rs
//! One news or video entry, in the shape the bundled data file uses.
//!
//! Keys follow the aggregator output (`标题`, `链接`, `来源`, ...). English
//! aliases are accepted on input so hand-written fixtures stay readable.
//! Required fields default to empty strings instead of failing the load;
//! the display layer substitutes placeholders for them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(rename = "标题", alias = "title", default)]
    pub title: String,

    /// Free text summary. News items carry it, some videos don't.
    #[serde(
        rename = "内容",
        alias = "body",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<String>,

    /// Display string, never parsed or sorted on.
    #[serde(rename = "日期", alias = "published_at", default)]
    pub published_at: String,

    #[serde(rename = "链接", alias = "url", default)]
    pub url: String,

    /// Publisher label, e.g. "TechCrunch AI" or "YouTube - Google".
    #[serde(rename = "来源", alias = "source", default)]
    pub source: String,

    /// "新闻" (news) or "视频" (video).
    #[serde(
        rename = "板块",
        alias = "section",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub section: Option<String>,

    #[serde(
        rename = "分类",
        alias = "category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    /// Present on video items only.
    #[serde(
        rename = "播放量",
        alias = "view_count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub view_count: Option<u64>,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source: source.into(),
            published_at: published_at.into(),
            ..Self::default()
        }
    }

    /// Names of required fields (`title`, `url`, `source`) that are blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.title.trim().is_empty() {
            out.push("title");
        }
        if self.url.trim().is_empty() {
            out.push("url");
        }
        if self.source.trim().is_empty() {
            out.push("source");
        }
        out
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}
