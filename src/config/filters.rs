// src/config/filters.rs
//! Filter control definitions. TOML (`[[filters]]` tables) or JSON
//! (array of `{label, selector}`).
use anyhow::{anyhow, ensure, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::board::{FilterBar, FilterControl};
use crate::filter::Selector;

use super::ENV_FILTERS_PATH;

#[derive(Debug, Deserialize)]
struct FilterDef {
    label: String,
    #[serde(default)]
    selector: String,
}

/// Load controls from an explicit path.
pub fn load_filters_from(path: &Path) -> Result<Vec<FilterControl>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading filters from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_filters(&content, ext.as_str())
}

/// Repo files tried in order when `$NEWS_FILTERS_PATH` is unset.
pub const FILTER_FILE_CANDIDATES: [&str; 2] = ["config/filters.toml", "config/filters.json"];

/// Controls from `$NEWS_FILTERS_PATH` (which must exist), else the first
/// candidate file present, else the built-in tabs.
pub fn load_filters_default() -> Result<Vec<FilterControl>> {
    let configured = std::env::var(ENV_FILTERS_PATH)
        .ok()
        .filter(|v| !v.trim().is_empty());
    if let Some(raw) = configured {
        let path = PathBuf::from(raw);
        ensure!(
            path.exists(),
            "{ENV_FILTERS_PATH} points to missing file {}",
            path.display()
        );
        return load_filters_from(&path);
    }
    match FILTER_FILE_CANDIDATES.iter().map(Path::new).find(|p| p.exists()) {
        Some(path) => load_filters_from(path),
        None => {
            debug!(target: "config", "no filter file found; using built-in tabs");
            Ok(FilterBar::default_controls())
        }
    }
}

/// Explicit path if given, fallback chain otherwise.
pub fn load_filters(path: Option<&Path>) -> Result<Vec<FilterControl>> {
    match path {
        Some(p) => load_filters_from(p),
        None => load_filters_default(),
    }
}

fn parse_filters(s: &str, hint_ext: &str) -> Result<Vec<FilterControl>> {
    let try_toml = hint_ext == "toml" || s.contains("[[filters]]");
    if try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported filters format"))
}

fn parse_toml(s: &str) -> Result<Vec<FilterControl>> {
    #[derive(Deserialize)]
    struct TomlFilters {
        filters: Vec<FilterDef>,
    }
    let v: TomlFilters = toml::from_str(s)?;
    Ok(clean_list(v.filters))
}

fn parse_json(s: &str) -> Result<Vec<FilterControl>> {
    let v: Vec<FilterDef> = serde_json::from_str(s)?;
    Ok(clean_list(v))
}

/// Drop blank labels and duplicate selectors (first wins); make sure an
/// `all` control leads the group.
fn clean_list(defs: Vec<FilterDef>) -> Vec<FilterControl> {
    let mut out: Vec<FilterControl> = Vec::with_capacity(defs.len() + 1);
    for d in defs {
        let label = d.label.trim();
        if label.is_empty() {
            continue;
        }
        let selector = Selector::parse(&d.selector);
        if out.iter().any(|c| c.selector == selector) {
            continue;
        }
        out.push(FilterControl::new(label, selector));
    }
    if !out.iter().any(|c| c.selector.is_all()) {
        out.insert(0, FilterControl::new("All", Selector::All));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    fn selectors(v: &[FilterControl]) -> Vec<String> {
        v.iter().map(|c| c.selector.to_string()).collect()
    }

    #[test]
    fn toml_and_json_formats_work() {
        let toml = r#"
[[filters]]
label = "All"
selector = "all"

[[filters]]
label = " NYT "
selector = "NYT"

[[filters]]
label = ""
selector = "verge"
"#;
        let t = parse_toml(toml).unwrap();
        assert_eq!(selectors(&t), vec!["all", "NYT"]);
        assert_eq!(t[1].label, "NYT");

        let json = r#"[{"label":"YouTube","selector":"youtube"},{"label":"Again","selector":"YouTube"}]"#;
        let j = parse_json(json).unwrap();
        assert_eq!(selectors(&j), vec!["all", "youtube"]);
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(parse_filters("not a list", "txt").is_err());
    }

    /// Run `f` with a fresh temp dir as cwd and the env override cleared.
    fn in_scratch_dir(f: impl FnOnce(&Path)) {
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_FILTERS_PATH);
        f(tmp.path());
        env::remove_var(ENV_FILTERS_PATH);
        env::set_current_dir(&old).unwrap();
    }

    #[serial_test::serial]
    #[test]
    fn built_in_tabs_when_nothing_is_configured() {
        in_scratch_dir(|_| {
            let v = load_filters_default().unwrap();
            assert_eq!(v, FilterBar::default_controls());
        });
    }

    #[serial_test::serial]
    #[test]
    fn toml_candidate_beats_json_candidate() {
        in_scratch_dir(|dir| {
            fs::create_dir(dir.join("config")).unwrap();
            fs::write(
                dir.join("config/filters.json"),
                r#"[{"label":"Papers","selector":"two minute"}]"#,
            )
            .unwrap();
            assert_eq!(selectors(&load_filters_default().unwrap()), vec!["all", "two minute"]);

            fs::write(
                dir.join("config/filters.toml"),
                "[[filters]]\nlabel = \"Tina\"\nselector = \"tina huang\"\n",
            )
            .unwrap();
            assert_eq!(selectors(&load_filters_default().unwrap()), vec!["all", "tina huang"]);
        });
    }

    #[serial_test::serial]
    #[test]
    fn configured_path_overrides_and_must_exist() {
        in_scratch_dir(|dir| {
            let p = dir.join("tabs.json");
            fs::write(&p, r#"[{"label":"Verge","selector":"verge"}]"#).unwrap();
            env::set_var(ENV_FILTERS_PATH, &p);
            assert_eq!(selectors(&load_filters_default().unwrap()), vec!["all", "verge"]);

            env::set_var(ENV_FILTERS_PATH, dir.join("gone.toml"));
            let err = load_filters_default().unwrap_err().to_string();
            assert!(err.contains("gone.toml"), "{err}");
        });
    }
}
