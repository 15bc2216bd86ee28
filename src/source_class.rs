//! # Source Classes
//!
//! Maps a free-text publisher label (e.g. "The Verge AI", "YouTube - Tina Huang")
//! to one of a small fixed set of style classes used for the card badge.
//!
//! - Case-insensitive substring containment against known publisher fragments.
//! - Fragments are checked in a fixed priority order; first match wins.
//! - Unknown publishers fall back to `SourceClass::Other` (unstyled badge).
//!
//! The class selects a CSS class and nothing else.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceClass {
    Verge,
    TechCrunch,
    Nyt,
    YouTube,
    Other,
}

/// Priority order matters: a label containing both "nyt" and "youtube"
/// is classified as `Nyt`.
const FRAGMENTS: [(&str, SourceClass); 4] = [
    ("verge", SourceClass::Verge),
    ("techcrunch", SourceClass::TechCrunch),
    ("nyt", SourceClass::Nyt),
    ("youtube", SourceClass::YouTube),
];

impl SourceClass {
    /// Known classes in priority order, `Other` excluded.
    pub const KNOWN: [SourceClass; 4] = [
        SourceClass::Verge,
        SourceClass::TechCrunch,
        SourceClass::Nyt,
        SourceClass::YouTube,
    ];

    /// CSS class for the badge. Empty for `Other`.
    pub fn css_class(self) -> &'static str {
        match self {
            SourceClass::Verge => "verge",
            SourceClass::TechCrunch => "techcrunch",
            SourceClass::Nyt => "nyt",
            SourceClass::YouTube => "youtube",
            SourceClass::Other => "",
        }
    }

    /// Human label used by the summary section.
    pub fn display_name(self) -> &'static str {
        match self {
            SourceClass::Verge => "The Verge",
            SourceClass::TechCrunch => "TechCrunch",
            SourceClass::Nyt => "NYT",
            SourceClass::YouTube => "YouTube",
            SourceClass::Other => "Other",
        }
    }
}

impl fmt::Display for SourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classify a source label. Total and deterministic.
pub fn classify(source: &str) -> SourceClass {
    let s = source.to_lowercase();
    FRAGMENTS
        .iter()
        .find(|(frag, _)| s.contains(frag))
        .map(|&(_, class)| class)
        .unwrap_or(SourceClass::Other)
}
