// src/board.rs
//! Event wiring between filter controls, the item store and the display
//! region.
//!
//! A `Board` owns the active selector. Each activation is a full recompute
//! from the store; nothing depends on the previous render.

use std::fmt;
use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use tracing::debug;

use crate::filter::Selector;
use crate::render::{render, DisplayRegion};
use crate::store::ItemStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub label: String,
    pub selector: Selector,
    #[serde(skip)]
    active: bool,
}

impl FilterControl {
    pub fn new(label: impl Into<String>, selector: Selector) -> Self {
        Self {
            label: label.into(),
            selector,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Metric label for activations of a selector no control carries.
pub const UNLISTED_SELECTOR_LABEL: &str = "other";

type Listener = Box<dyn FnMut(&FilterControl) + Send>;

/// Sibling group of filter controls; at most one is active.
#[derive(Default)]
pub struct FilterBar {
    controls: Vec<FilterControl>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for FilterBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBar")
            .field("controls", &self.controls)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Clone for FilterBar {
    /// Controls and their state are cloned; subscriptions are not.
    fn clone(&self) -> Self {
        Self {
            controls: self.controls.clone(),
            listeners: Vec::new(),
        }
    }
}

impl FilterBar {
    pub fn new(controls: Vec<FilterControl>) -> Self {
        Self {
            controls,
            listeners: Vec::new(),
        }
    }

    /// The controls shown when nothing is configured.
    pub fn default_controls() -> Vec<FilterControl> {
        [
            ("All", "all"),
            ("The Verge", "verge"),
            ("TechCrunch", "techcrunch"),
            ("NYT", "nyt"),
            ("YouTube", "youtube"),
        ]
        .into_iter()
        .map(|(label, sel)| FilterControl::new(label, Selector::parse(sel)))
        .collect()
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn active(&self) -> Option<&FilterControl> {
        self.controls.iter().find(|c| c.active)
    }

    pub fn position(&self, selector: &Selector) -> Option<usize> {
        self.controls.iter().position(|c| &c.selector == selector)
    }

    /// Register a callback fired on every activation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FilterControl) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Make `index` the sole active control and notify subscribers.
    /// Returns its selector, or `None` for an out-of-range index (state untouched).
    pub fn activate(&mut self, index: usize) -> Option<Selector> {
        if index >= self.controls.len() {
            return None;
        }
        for (i, c) in self.controls.iter_mut().enumerate() {
            c.active = i == index;
        }
        let control = &self.controls[index];
        for l in self.listeners.iter_mut() {
            l(control);
        }
        Some(control.selector.clone())
    }

    /// Mark the control for `selector` active without notifying anyone.
    /// No control is active when none carries that selector.
    fn mark(&mut self, selector: &Selector) {
        for c in self.controls.iter_mut() {
            c.active = &c.selector == selector;
        }
    }
}

pub struct Board<R: DisplayRegion> {
    store: Arc<ItemStore>,
    bar: FilterBar,
    region: R,
    selector: Selector,
    renders: u64,
}

impl<R: DisplayRegion> Board<R> {
    pub fn new(store: Arc<ItemStore>, bar: FilterBar, region: R) -> Self {
        Self {
            store,
            bar,
            region,
            selector: Selector::All,
            renders: 0,
        }
    }

    /// Initial, unconditional render of every item.
    pub fn ready(&mut self) -> usize {
        self.selector = Selector::All;
        self.bar.mark(&Selector::All);
        self.refresh()
    }

    /// Control activation by position in the bar.
    pub fn activate(&mut self, index: usize) -> Option<usize> {
        let selector = self.bar.activate(index)?;
        counter!("board_filter_activations_total", "selector" => selector.to_string())
            .increment(1);
        self.selector = selector;
        Some(self.refresh())
    }

    /// Activation by selector value (e.g. from a URL). A value no control
    /// carries still filters; the bar is then left with no active control.
    pub fn activate_selector(&mut self, raw: &str) -> usize {
        let selector = Selector::parse(raw);
        if let Some(idx) = self.bar.position(&selector) {
            if let Some(n) = self.activate(idx) {
                return n;
            }
        }
        self.bar.mark(&selector);
        self.selector = selector;
        counter!("board_filter_activations_total", "selector" => UNLISTED_SELECTOR_LABEL)
            .increment(1);
        self.refresh()
    }

    fn refresh(&mut self) -> usize {
        let filtered = self.store.filter(&self.selector);
        let n = render(filtered, &mut self.region);
        self.renders += 1;
        debug!(target: "board", selector = %self.selector, shown = n, renders = self.renders, "board refreshed");
        n
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn bar(&self) -> &FilterBar {
        &self.bar
    }

    pub fn bar_mut(&mut self) -> &mut FilterBar {
        &mut self.bar
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Number of renders performed so far, initial one included.
    pub fn renders(&self) -> u64 {
        self.renders
    }
}
