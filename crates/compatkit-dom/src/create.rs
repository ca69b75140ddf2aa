//! Element creation and removal helpers.

use compatkit_backend::{DomBackend, NodeId};
use tracing::trace;

/// Create a detached element, optionally with a class and HTML content.
pub fn create_element<B: DomBackend>(
    dom: &mut B,
    tag: &str,
    class: Option<&str>,
    html: Option<&str>,
) -> NodeId {
    let node = dom.create_element(tag);
    if let Some(class) = class {
        dom.set_attribute(node, "class", class);
    }
    if let Some(html) = html {
        dom.set_inner_html(node, html);
    }
    node
}

/// Detach a node from its parent. Detached nodes are left alone.
pub fn remove_node<B: DomBackend>(dom: &mut B, node: NodeId) {
    dom.remove(node);
}

pub fn contains<B: DomBackend>(dom: &B, ancestor: NodeId, node: NodeId) -> bool {
    dom.contains(ancestor, node)
}

/// Create a style element carrying `css_text` and append it to the head.
pub fn create_style<B: DomBackend>(dom: &mut B, css_text: &str) -> NodeId {
    let style = dom.create_element("style");
    dom.set_attribute(style, "type", "text/css");
    dom.set_inner_html(style, css_text);
    let head = dom.head();
    dom.append_child(head, style);
    trace!(len = css_text.len(), "dynamic stylesheet attached");
    style
}
