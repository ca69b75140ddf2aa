//! # CompatKit Engine
//!
//! Orchestration layer that ties all CompatKit components together behind
//! one entry point.
//!
//! ## Design Goals
//!
//! 1. **Single construction point**: the host resolves its `RenderMode`
//!    once, builds a [`Compat`], and every strategy decision is made there
//! 2. **Unified API**: style reads/writes, visibility, geometry and the
//!    DOM conveniences through one value
//! 3. **Backend-generic**: every call takes the host's `DomBackend`, so a
//!    real engine and the in-memory test double are interchangeable

use tracing::debug;

pub use compatkit_backend::{
    BackendError, BoundingRect, ComputedSnapshot, DomBackend, ElementOps, EngineVersion,
    MetricsOps, NodeId, RenderMode, TreeOps, ViewportOps,
};
pub use compatkit_css::{
    BoxMetrics, DisplayManager, GeometryEngine, Offset, StyleInput, StyleMutator, StyleResolver,
    StyleValue, UnitConverter,
};
/// DOM conveniences (attributes, classes, traversal, element helpers).
pub use compatkit_dom as dom;

/// The unified compatibility layer: one value owning the per-process
/// configuration and all components.
///
/// Methods take `&mut self` only where the default-display cache may fill.
#[derive(Debug)]
pub struct Compat {
    mode: RenderMode,
    resolver: StyleResolver,
    mutator: StyleMutator,
    geometry: GeometryEngine,
    display: DisplayManager,
}

impl Compat {
    pub fn new(mode: RenderMode) -> Self {
        debug!(?mode, "compat layer initialized");
        Self {
            mode,
            resolver: StyleResolver::new(mode),
            mutator: StyleMutator::new(mode),
            geometry: GeometryEngine::new(mode),
            display: DisplayManager::new(mode),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    // ==================== Style ====================

    /// Effective value of a logical style property.
    pub fn style<B: DomBackend>(&self, dom: &mut B, node: NodeId, property: &str) -> StyleValue {
        self.resolver.resolve(dom, node, property)
    }

    /// Numeric view of [`Compat::style`]; parse failures read as 0.
    pub fn style_numeric<B: DomBackend>(&self, dom: &mut B, node: NodeId, property: &str) -> f32 {
        self.resolver.resolve_numeric(dom, node, property)
    }

    /// Write one inline style value; `StyleInput::Clear` removes it.
    pub fn set_style<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        property: &str,
        value: impl Into<StyleInput>,
    ) {
        self.mutator.set(dom, node, property, value);
    }

    /// Apply property → value pairs in order.
    pub fn set_styles<B, I, K>(&self, dom: &mut B, node: NodeId, pairs: I)
    where
        B: DomBackend,
        I: IntoIterator<Item = (K, StyleInput)>,
        K: AsRef<str>,
    {
        self.mutator.set_many(dom, node, pairs);
    }

    /// Remove an inline declaration.
    pub fn remove_style<B: DomBackend>(&self, dom: &mut B, node: NodeId, property: &str) {
        self.mutator.remove_inline(dom, node, property);
    }

    pub fn set_opacity<B: DomBackend>(&self, dom: &mut B, node: NodeId, value: f32) {
        self.mutator
            .set(dom, node, "opacity", StyleInput::Number(value));
    }

    /// Write a style only when the resolved value differs.
    pub fn set_style_if_not<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        property: &str,
        value: &str,
    ) {
        self.geometry.set_css_if_not(dom, node, property, value);
    }

    // ==================== Visibility ====================

    /// Natural display keyword for a tag (cached per process).
    pub fn default_display<B: DomBackend>(&mut self, dom: &mut B, tag: &str) -> String {
        self.display.default_display(dom, tag)
    }

    pub fn show<B: DomBackend>(&mut self, dom: &mut B, node: NodeId) {
        self.display.show(dom, node);
    }

    pub fn hide<B: DomBackend>(&self, dom: &mut B, node: NodeId) {
        self.display.hide(dom, node);
    }

    pub fn is_hidden<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> bool {
        self.display.is_hidden(dom, node)
    }

    pub fn toggle<B: DomBackend>(&mut self, dom: &mut B, node: NodeId) {
        self.display.toggle(dom, node);
    }

    // ==================== Geometry ====================

    pub fn width<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> f32 {
        self.geometry.content_width(dom, node)
    }

    pub fn height<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> f32 {
        self.geometry.content_height(dom, node)
    }

    pub fn size<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> BoxMetrics {
        self.geometry.size(dom, node)
    }

    /// Write the width style; with `relative`, `value` is a delta against
    /// the current measured width.
    pub fn set_width<B: DomBackend>(&self, dom: &mut B, node: NodeId, value: f32, relative: bool) {
        self.geometry.set_width(dom, node, value, relative);
    }

    pub fn set_height<B: DomBackend>(&self, dom: &mut B, node: NodeId, value: f32, relative: bool) {
        self.geometry.set_height(dom, node, value, relative);
    }

    pub fn set_size<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        width: Option<f32>,
        height: Option<f32>,
        relative: bool,
    ) {
        self.geometry.set_size(dom, node, width, height, relative);
    }

    /// Page-relative offset, left/top normalized to ≥ 0.
    pub fn offset<B: DomBackend>(&self, dom: &B, node: NodeId) -> Offset {
        self.geometry.offset(dom, node)
    }

    pub fn set_offset<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        x: Option<f32>,
        y: Option<f32>,
        relative: bool,
    ) {
        self.geometry.set_offset(dom, node, x, y, relative);
    }

    /// Offset relative to `ancestor`, defaulting to the layout offset
    /// parent.
    pub fn position_of<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        ancestor: Option<NodeId>,
    ) -> Offset {
        self.geometry.position_of(dom, node, ancestor)
    }

    /// Center the element in the viewport using absolute positioning.
    pub fn set_center<B: DomBackend>(&self, dom: &mut B, node: NodeId) {
        self.geometry.set_center(dom, node);
    }
}
