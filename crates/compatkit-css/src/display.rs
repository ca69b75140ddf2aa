//! Show/hide built on each tag's natural display value.

use std::collections::HashMap;

use compatkit_backend::{DomBackend, NodeId, RenderMode};
use tracing::{debug, trace};

use crate::mutate::StyleMutator;
use crate::resolve::StyleResolver;
use crate::StyleInput;

/// Cache counters, reported through tracing for diagnosis.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayCacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Caches each tag's natural (non-`none`) display keyword and exposes
/// show/hide/toggle built on that cache.
///
/// The cache is owned by the manager and lives for the process lifetime: a
/// tag's natural display is a static property of the tag, independent of
/// document content.
#[derive(Debug)]
pub struct DisplayManager {
    resolver: StyleResolver,
    mutator: StyleMutator,
    cache: HashMap<String, String>,
    stats: DisplayCacheStats,
}

impl DisplayManager {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            resolver: StyleResolver::new(mode),
            mutator: StyleMutator::new(mode),
            cache: HashMap::new(),
            stats: DisplayCacheStats::default(),
        }
    }

    /// Natural display keyword for a tag, e.g. `tr` → `table-row`.
    ///
    /// Filled lazily by probing: a throwaway element of the tag is inserted
    /// into the tree, its computed display read, and the probe removed
    /// again before returning. An empty or `none` reading (a tag hidden by
    /// ancestor context) falls back to `block`, so the result is never
    /// `none`.
    pub fn default_display<B: DomBackend>(&mut self, dom: &mut B, tag: &str) -> String {
        if let Some(display) = self.cache.get(tag) {
            self.stats.hits += 1;
            let shown = display.as_str();
            trace!(tag, display = shown, "default display cache hit");
            return display.clone();
        }
        self.stats.misses += 1;

        let probe = dom.create_element(tag);
        let body = dom.body();
        dom.append_child(body, probe);

        let resolved = self.resolver.resolve(dom, probe, "display");
        let mut display = resolved.as_text().unwrap_or("").to_string();
        if display.is_empty() || display == "none" {
            display = "block".to_string();
        }

        dom.remove(probe);

        let shown = display.as_str();
        debug!(tag, display = shown, "default display probed");
        self.cache.insert(tag.to_string(), display.clone());
        display
    }

    /// Make the element visible: clear any inline `display:none` forcing,
    /// and when a stylesheet rule still hides it, pin the inline display to
    /// the tag's natural value.
    pub fn show<B: DomBackend>(&mut self, dom: &mut B, node: NodeId) {
        let _ = dom.set_inline_style(node, "display", "");

        if self.is_hidden(dom, node) {
            let tag = dom.tag_name(node);
            let display = self.default_display(dom, &tag);
            self.mutator
                .set(dom, node, "display", StyleInput::Text(display));
        }
    }

    pub fn hide<B: DomBackend>(&self, dom: &mut B, node: NodeId) {
        self.mutator.set(dom, node, "display", "none");
    }

    pub fn is_hidden<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> bool {
        self.resolver.resolve(dom, node, "display").as_text() == Some("none")
    }

    pub fn toggle<B: DomBackend>(&mut self, dom: &mut B, node: NodeId) {
        if self.is_hidden(dom, node) {
            self.show(dom, node);
        } else {
            self.hide(dom, node);
        }
    }

    pub fn stats(&self) -> DisplayCacheStats {
        self.stats
    }
}
