//! Box-model measurement and page/ancestor-relative positioning.

use compatkit_backend::{DomBackend, NodeId, RenderMode};

use crate::mutate::StyleMutator;
use crate::resolve::StyleResolver;
use crate::StyleInput;

/// Content-box dimensions in pixels. Degenerate boxes (near-zero outer
/// size with large padding) may measure slightly negative; callers treat
/// that as effectively zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxMetrics {
    pub width: f32,
    pub height: f32,
}

/// Position and outer size of an element. Page-relative offsets normalize
/// `left`/`top` to be non-negative; ancestor-relative positions may carry
/// negative components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Content width of a node's box.
///
/// Quirks-mode legacy engines collapse content and border boxes, so the
/// outer metric is returned unmodified there. Otherwise the inner (client)
/// metric is preferred, reconstructed from the outer metric minus borders
/// when the engine reports zero for it (ancestors rendered in an
/// incompatible document mode), and padding is subtracted on both sides.
pub(crate) fn content_width<B: DomBackend>(
    resolver: &StyleResolver,
    dom: &mut B,
    node: NodeId,
) -> f32 {
    if resolver.mode().quirks_box_model() {
        return dom.outer_width(node);
    }

    let mut value = dom.inner_width(node);
    if value == 0.0 {
        value = dom.outer_width(node)
            - resolver.resolve_numeric(dom, node, "borderLeftWidth")
            - resolver.resolve_numeric(dom, node, "borderRightWidth");
    }

    value
        - resolver.resolve_numeric(dom, node, "paddingLeft")
        - resolver.resolve_numeric(dom, node, "paddingRight")
}

pub(crate) fn content_height<B: DomBackend>(
    resolver: &StyleResolver,
    dom: &mut B,
    node: NodeId,
) -> f32 {
    if resolver.mode().quirks_box_model() {
        return dom.outer_height(node);
    }

    let mut value = dom.inner_height(node);
    if value == 0.0 {
        value = dom.outer_height(node)
            - resolver.resolve_numeric(dom, node, "borderTopWidth")
            - resolver.resolve_numeric(dom, node, "borderBottomWidth");
    }

    value
        - resolver.resolve_numeric(dom, node, "paddingTop")
        - resolver.resolve_numeric(dom, node, "paddingBottom")
}

/// Computes box-model dimensions and page/ancestor-relative offsets, and
/// writes position styles through the mutator.
#[derive(Debug, Clone, Copy)]
pub struct GeometryEngine {
    resolver: StyleResolver,
    mutator: StyleMutator,
}

impl GeometryEngine {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            resolver: StyleResolver::new(mode),
            mutator: StyleMutator::new(mode),
        }
    }

    pub fn content_width<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> f32 {
        content_width(&self.resolver, dom, node)
    }

    pub fn content_height<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> f32 {
        content_height(&self.resolver, dom, node)
    }

    pub fn size<B: DomBackend>(&self, dom: &mut B, node: NodeId) -> BoxMetrics {
        BoxMetrics {
            width: self.content_width(dom, node),
            height: self.content_height(dom, node),
        }
    }

    /// Write the width style. With `relative` set the current measured
    /// width is added first, so `value` acts as a delta.
    pub fn set_width<B: DomBackend>(&self, dom: &mut B, node: NodeId, value: f32, relative: bool) {
        let base = if relative {
            self.content_width(dom, node)
        } else {
            0.0
        };
        self.mutator
            .set(dom, node, "width", StyleInput::Number(value + base));
    }

    pub fn set_height<B: DomBackend>(&self, dom: &mut B, node: NodeId, value: f32, relative: bool) {
        let base = if relative {
            self.content_height(dom, node)
        } else {
            0.0
        };
        self.mutator
            .set(dom, node, "height", StyleInput::Number(value + base));
    }

    pub fn set_size<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        width: Option<f32>,
        height: Option<f32>,
        relative: bool,
    ) {
        if let Some(width) = width {
            self.set_width(dom, node, width, relative);
        }
        if let Some(height) = height {
            self.set_height(dom, node, height, relative);
        }
    }

    /// Page-relative offset: the native bounding rect plus the page scroll,
    /// minus the root element's own border edges. Small negative positions
    /// some engines report for the document root are clamped to zero.
    pub fn offset<B: DomBackend>(&self, dom: &B, node: NodeId) -> Offset {
        let rect = dom.bounding_rect(node);
        let (page_x, page_y) = dom.scroll_offset();
        let (root_x, root_y) = dom.root_scroll();
        let scroll_x = if page_x != 0.0 { page_x } else { root_x };
        let scroll_y = if page_y != 0.0 { page_y } else { root_y };
        let (edge_left, edge_top) = dom.root_client_edges();

        Offset {
            left: (rect.left + scroll_x - edge_left).max(0.0),
            top: (rect.top + scroll_y - edge_top).max(0.0),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Move the element to page coordinates, forcing absolute positioning
    /// first (only when it is not already in that computed state). With
    /// `relative` set, `x`/`y` are deltas against the current offset.
    pub fn set_offset<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        x: Option<f32>,
        y: Option<f32>,
        relative: bool,
    ) {
        let base = if relative {
            self.offset(dom, node)
        } else {
            Offset::default()
        };

        self.set_css_if_not(dom, node, "position", "absolute");

        if let Some(x) = x {
            self.mutator
                .set(dom, node, "left", StyleInput::Number(x + base.left));
        }
        if let Some(y) = y {
            self.mutator
                .set(dom, node, "top", StyleInput::Number(y + base.top));
        }
    }

    /// Offset of `node` relative to `ancestor` (the layout offset parent
    /// when not given): ancestor offset, ancestor border and the element's
    /// own margin are all taken out, so the result is measured from the
    /// ancestor's padding edge to the element's margin edge.
    pub fn position_of<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        ancestor: Option<NodeId>,
    ) -> Offset {
        let ancestor = ancestor
            .or_else(|| dom.offset_parent(node))
            .unwrap_or_else(|| dom.body());

        let mut offset = self.offset(dom, node);
        let anchor = self.offset(dom, ancestor);

        offset.left -= anchor.left
            + self.resolver.resolve_numeric(dom, ancestor, "borderLeftWidth")
            + self.resolver.resolve_numeric(dom, node, "marginLeft");
        offset.top -= anchor.top
            + self.resolver.resolve_numeric(dom, ancestor, "borderTopWidth")
            + self.resolver.resolve_numeric(dom, node, "marginTop");

        offset
    }

    /// Write a style only when the resolved value differs.
    pub fn set_css_if_not<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        property: &str,
        value: &str,
    ) {
        if self.resolver.resolve(dom, node, property).to_string() != value {
            self.mutator
                .set(dom, node, property, StyleInput::text(value));
        }
    }

    /// Center the element in the viewport (absolute positioning), clamped
    /// so it is never pushed past the top-left of its positioning context.
    pub fn set_center<B: DomBackend>(&self, dom: &mut B, node: NodeId) {
        self.set_css_if_not(dom, node, "position", "absolute");

        let (viewport_w, viewport_h) = dom.viewport_size();
        let anchor = dom.offset_parent(node).unwrap_or_else(|| dom.body());
        let anchor_offset = self.offset(dom, anchor);
        let (scroll_x, scroll_y) = dom.scroll_offset();

        let left = ((viewport_w - dom.outer_width(node)) / 2.0).round() - anchor_offset.left
            + scroll_x;
        let top =
            ((viewport_h - dom.outer_height(node)) / 2.0).round() - anchor_offset.top + scroll_y;

        self.mutator.set_many(
            dom,
            node,
            [
                ("left", StyleInput::Number(left.max(0.0))),
                ("top", StyleInput::Number(top.max(0.0))),
            ],
        );
    }
}
