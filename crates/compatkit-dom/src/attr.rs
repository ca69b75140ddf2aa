//! Attribute and property access with engine name fixups.

use compatkit_backend::{DomBackend, NodeId};

/// Property accessor name for a logical name.
fn prop_name(name: &str) -> &str {
    match name {
        "class" => "className",
        "for" => "htmlFor",
        "html" => "innerHTML",
        other => other,
    }
}

/// Attribute name for a property accessor name.
fn attr_name(name: &str) -> &str {
    match name {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    }
}

/// Attribute value by logical name. `style` reads the whole inline style
/// text, which legacy engines do not expose as a plain attribute.
pub fn attr<B: DomBackend>(dom: &B, node: NodeId, name: &str) -> Option<String> {
    if name == "style" {
        return Some(dom.inline_style_text(node));
    }
    dom.attribute(node, attr_name(name))
}

/// Set an attribute; `None` removes it.
pub fn set_attr<B: DomBackend>(dom: &mut B, node: NodeId, name: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            if name == "style" {
                dom.set_inline_style_text(node, value);
            } else {
                dom.set_attribute(node, attr_name(name), value);
            }
        }
        None => remove_attr(dom, node, name),
    }
}

pub fn remove_attr<B: DomBackend>(dom: &mut B, node: NodeId, name: &str) {
    dom.remove_attribute(node, attr_name(name));
}

/// Apply attribute pairs in order.
pub fn set_attrs<'a, B, I>(dom: &mut B, node: NodeId, pairs: I)
where
    B: DomBackend,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (name, value) in pairs {
        set_attr(dom, node, name, Some(value));
    }
}

/// Property value by logical name, routed through the property fixups:
/// `html` reads the inner HTML, everything else falls back to the backing
/// attribute.
pub fn prop<B: DomBackend>(dom: &B, node: NodeId, name: &str) -> Option<String> {
    let name = prop_name(name);
    if name == "innerHTML" {
        return Some(dom.inner_html(node));
    }
    dom.attribute(node, attr_name(name))
}

pub fn set_prop<B: DomBackend>(dom: &mut B, node: NodeId, name: &str, value: &str) {
    let name = prop_name(name);
    if name == "innerHTML" {
        dom.set_inner_html(node, value);
        return;
    }
    dom.set_attribute(node, attr_name(name), value);
}
