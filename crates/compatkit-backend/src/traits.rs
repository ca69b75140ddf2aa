//! Engine-agnostic capability traits.
//!
//! These traits abstract over the host rendering engine, allowing the
//! compatibility layer to work against any engine (or an in-memory test
//! double) through the same surface.

use crate::{BackendError, BoundingRect, ComputedSnapshot, NodeId};

/// Per-element read/write capabilities: attributes, inline style, computed
/// style capture.
pub trait ElementOps {
    /// Tag name of the element, lowercase.
    fn tag_name(&self, node: NodeId) -> String;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    /// One inline style declaration, by engine accessor name.
    fn inline_style(&self, node: NodeId, property: &str) -> Option<String>;

    /// Write one inline style declaration. Legacy engines may reject values
    /// they cannot parse; callers decide whether that is fatal.
    fn set_inline_style(
        &mut self,
        node: NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), BackendError>;

    /// Drop an inline declaration natively. Only meaningful on engines
    /// whose `RenderMode` reports `supports_inline_style_clear`.
    fn clear_inline_style(&mut self, node: NodeId, property: &str);

    /// The raw inline style text (the `style` attribute serialization).
    fn inline_style_text(&self, node: NodeId) -> String;

    fn set_inline_style_text(&mut self, node: NodeId, text: &str);

    fn inner_html(&self, node: NodeId) -> String;

    fn set_inner_html(&mut self, node: NodeId, html: &str);

    /// Capture the element's effective style. The capture is stale the
    /// moment any style is written afterwards.
    fn computed_styles(&self, node: NodeId) -> ComputedSnapshot;
}

/// Tree structure and lifecycle. CompatKit creates nodes only for the
/// default-display probe and the dynamic-style helper.
pub trait TreeOps {
    fn document_root(&self) -> NodeId;

    fn body(&self) -> NodeId;

    fn head(&self) -> NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId>;

    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;

    fn first_child(&self, node: NodeId) -> Option<NodeId>;

    fn last_child(&self, node: NodeId) -> Option<NodeId>;

    /// Whether the node is an element (as opposed to text or comment).
    fn is_element(&self, node: NodeId) -> bool;

    fn create_element(&mut self, tag: &str) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Detach the node from its parent. No-op for detached nodes.
    fn remove(&mut self, node: NodeId);

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;
}

/// Geometry primitives the engine already maintains for layout.
pub trait MetricsOps {
    /// Native bounding rectangle in viewport coordinates.
    fn bounding_rect(&self, node: NodeId) -> BoundingRect;

    /// Outer (border-box) width, the engine's offset metric.
    fn outer_width(&self, node: NodeId) -> f32;

    fn outer_height(&self, node: NodeId) -> f32;

    /// Inner (padding-box) width, the engine's client metric. May read as
    /// zero on engines hosting the element in an incompatible document
    /// mode.
    fn inner_width(&self, node: NodeId) -> f32;

    fn inner_height(&self, node: NodeId) -> f32;

    /// Nearest positioned ancestor used as the element's layout reference.
    fn offset_parent(&self, node: NodeId) -> Option<NodeId>;

    /// Engine-resolved pixel value of the element's inline `left`. This is
    /// the measurement channel the legacy unit converter borrows.
    fn pixel_left(&self, node: NodeId) -> f32;

    /// Runtime-style override channel (legacy engines). Reads/writes do not
    /// touch the inline style text.
    fn runtime_style(&self, node: NodeId, property: &str) -> Option<String>;

    fn set_runtime_style(&mut self, node: NodeId, property: &str, value: Option<&str>);

    /// Root element's client edges (its border thickness), `(left, top)`.
    fn root_client_edges(&self) -> (f32, f32);

    /// Root element's own scroll position, `(left, top)`. Fallback for
    /// engines that do not report a page scroll offset.
    fn root_scroll(&self) -> (f32, f32);
}

/// Viewport state consumed by centering.
pub trait ViewportOps {
    /// Current viewport `(width, height)`.
    fn viewport_size(&self) -> (f32, f32);

    /// Page scroll `(left, top)`. Zero on engines that only track root
    /// scroll; see [`MetricsOps::root_scroll`].
    fn scroll_offset(&self) -> (f32, f32);
}

/// The full backend surface CompatKit operates against.
pub trait DomBackend: ElementOps + TreeOps + MetricsOps + ViewportOps {}

impl<T: ElementOps + TreeOps + MetricsOps + ViewportOps> DomBackend for T {}
