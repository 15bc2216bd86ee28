// src/filter.rs
//! Source filtering: a selector is either the `all` sentinel or a
//! case-insensitive substring of the item's source label.

use std::fmt;

use serde::Serialize;

use crate::item::NewsItem;

/// Raw value of the "no filter" sentinel as it appears in controls and URLs.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, Serialize)]
#[serde(into = "String")]
pub enum Selector {
    #[default]
    All,
    /// Substring to look for in `source`, compared case-insensitively. Kept
    /// as written so links and control values round-trip.
    Source(String),
}

impl Selector {
    /// Exactly `"all"` or empty input map to `All`. Anything else, spaces
    /// and casing included, is a substring selector.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL {
            Selector::All
        } else {
            Selector::Source(raw.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            Selector::All => true,
            Selector::Source(needle) => item
                .source
                .to_lowercase()
                .contains(needle.to_lowercase().as_str()),
        }
    }

    /// Value as carried by a filter control (`all` or the substring).
    pub fn as_str(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Source(s) => s,
        }
    }
}

/// Two source selectors are the same control when they match the same items.
impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Selector::All, Selector::All) => true,
            (Selector::Source(a), Selector::Source(b)) => a.to_lowercase() == b.to_lowercase(),
            _ => false,
        }
    }
}

impl Eq for Selector {}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Selector> for String {
    fn from(s: Selector) -> Self {
        s.as_str().to_string()
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector::parse(s)
    }
}

/// Stable subsequence of `items` matching `selector`. Never reorders,
/// never copies items, never touches the input.
pub fn filter_items<'a>(items: &'a [NewsItem], selector: &Selector) -> Vec<&'a NewsItem> {
    match selector {
        Selector::All => items.iter().collect(),
        _ => items.iter().filter(|it| selector.matches(it)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, title: &str) -> NewsItem {
        NewsItem::new(title, "https://example.com", source, "2026-02-04 12:00:00")
    }

    #[test]
    fn parse_sentinel_variants() {
        assert_eq!(Selector::parse("all"), Selector::All);
        assert_eq!(Selector::parse(""), Selector::All);
        assert!(!Selector::parse("ALL").is_all());
        assert!(!Selector::parse(" all").is_all());
        assert_eq!(Selector::parse(" TechCrunch ").as_str(), " TechCrunch ");
    }

    #[test]
    fn spaces_are_part_of_the_needle() {
        let items = vec![
            item("OpenAI Blog", "o"),
            item("The Verge AI", "v"),
            item("NYT AI", "n"),
        ];
        let out = filter_items(&items, &Selector::parse(" ai"));
        let titles: Vec<_> = out.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["v", "n"]);
        assert!(filter_items(&items, &Selector::parse("ALL")).is_empty());
    }

    #[test]
    fn source_variant_matches_regardless_of_case() {
        let items = vec![item("NYT AI", "n"), item("The Verge AI", "v")];
        assert_eq!(filter_items(&items, &Selector::Source("NYT".into())).len(), 1);
        assert_eq!(Selector::Source("NYT".into()), Selector::parse("nyt"));
        assert_ne!(Selector::Source("all".into()), Selector::All);
    }

    #[test]
    fn all_returns_everything_in_order() {
        let items = vec![item("NYT AI", "a"), item("The Verge AI", "b")];
        let out = filter_items(&items, &Selector::All);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "a");
        assert_eq!(out[1].title, "b");
    }

    #[test]
    fn substring_is_case_insensitive_and_stable() {
        let items = vec![
            item("TechCrunch AI", "1"),
            item("NYT AI", "2"),
            item("techcrunch ai", "3"),
        ];
        let out = filter_items(&items, &Selector::parse("TECHcrunch"));
        let titles: Vec<_> = out.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["1", "3"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let items = vec![item("NYT AI", "x")];
        assert!(filter_items(&items, &Selector::parse("reddit")).is_empty());
        assert!(filter_items(&[], &Selector::parse("nyt")).is_empty());
    }

    #[test]
    fn display_round_trips_control_value() {
        assert_eq!(Selector::All.to_string(), "all");
        assert_eq!(Selector::parse("YouTube").to_string(), "YouTube");
    }
}
