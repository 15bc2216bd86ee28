// src/summary.rs
//! Per-source statistics and key headlines for the page header and
//! `/api/stats`.

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::Serialize;

use crate::item::NewsItem;
use crate::source_class::{classify, SourceClass};

/// Headlines kept per known class.
pub const HEADLINES_PER_CLASS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub class: SourceClass,
    pub count: usize,
    pub headlines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub total: usize,
    /// Raw source labels in first-appearance order.
    pub by_source: Vec<SourceCount>,
    /// Known classes (in priority order) followed by `Other` when non-empty.
    pub by_class: Vec<ClassSummary>,
}

/// Decode entities and collapse whitespace in a title.
pub fn clean_title(s: &str) -> String {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"));
    let decoded = html_escape::decode_html_entities(s);
    re_ws.replace_all(&decoded, " ").trim().to_string()
}

pub fn summarize(items: &[NewsItem]) -> SourceSummary {
    let mut by_source: Vec<SourceCount> = Vec::new();
    for it in items {
        match by_source.iter_mut().find(|c| c.source == it.source) {
            Some(c) => c.count += 1,
            None => by_source.push(SourceCount {
                source: it.source.clone(),
                count: 1,
            }),
        }
    }

    let mut by_class = Vec::with_capacity(SourceClass::KNOWN.len() + 1);
    for class in SourceClass::KNOWN {
        let members: Vec<&NewsItem> = items
            .iter()
            .filter(|it| classify(&it.source) == class)
            .collect();
        let headlines = members
            .iter()
            .map(|it| clean_title(&it.title))
            .filter(|t| !t.is_empty())
            .take(HEADLINES_PER_CLASS)
            .collect();
        by_class.push(ClassSummary {
            class,
            count: members.len(),
            headlines,
        });
    }

    let other = items
        .iter()
        .filter(|it| classify(&it.source) == SourceClass::Other)
        .count();
    if other > 0 {
        by_class.push(ClassSummary {
            class: SourceClass::Other,
            count: other,
            headlines: Vec::new(),
        });
    }

    SourceSummary {
        total: items.len(),
        by_source,
        by_class,
    }
}
