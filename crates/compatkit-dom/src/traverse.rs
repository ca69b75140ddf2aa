//! Element-node traversal over the backend's sibling/parent links.

use compatkit_backend::{DomBackend, NodeId};

/// Direction of a walk step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Prev,
    Next,
    Parent,
}

fn step<B: DomBackend>(dom: &B, node: NodeId, direction: Step) -> Option<NodeId> {
    match direction {
        Step::Prev => dom.prev_sibling(node),
        Step::Next => dom.next_sibling(node),
        Step::Parent => dom.parent(node),
    }
}

/// Walk from `start` along `direction`, returning the first element node.
fn walk_one<B: DomBackend>(dom: &B, start: Option<NodeId>, direction: Step) -> Option<NodeId> {
    let mut current = start;
    while let Some(node) = current {
        if dom.is_element(node) {
            return Some(node);
        }
        current = step(dom, node, direction);
    }
    None
}

/// Walk from `start` along `direction`, collecting every element node.
fn walk_all<B: DomBackend>(dom: &B, start: Option<NodeId>, direction: Step) -> Vec<NodeId> {
    let mut list = Vec::new();
    let mut current = start;
    while let Some(node) = current {
        if dom.is_element(node) {
            list.push(node);
        }
        current = step(dom, node, direction);
    }
    list
}

pub fn prev_element<B: DomBackend>(dom: &B, node: NodeId) -> Option<NodeId> {
    walk_one(dom, dom.prev_sibling(node), Step::Prev)
}

/// All element siblings before the node, nearest first.
pub fn prev_elements<B: DomBackend>(dom: &B, node: NodeId) -> Vec<NodeId> {
    walk_all(dom, dom.prev_sibling(node), Step::Prev)
}

pub fn next_element<B: DomBackend>(dom: &B, node: NodeId) -> Option<NodeId> {
    walk_one(dom, dom.next_sibling(node), Step::Next)
}

pub fn next_elements<B: DomBackend>(dom: &B, node: NodeId) -> Vec<NodeId> {
    walk_all(dom, dom.next_sibling(node), Step::Next)
}

pub fn first_element_child<B: DomBackend>(dom: &B, node: NodeId) -> Option<NodeId> {
    walk_one(dom, dom.first_child(node), Step::Next)
}

pub fn last_element_child<B: DomBackend>(dom: &B, node: NodeId) -> Option<NodeId> {
    walk_one(dom, dom.last_child(node), Step::Prev)
}

pub fn parent_element<B: DomBackend>(dom: &B, node: NodeId) -> Option<NodeId> {
    walk_one(dom, dom.parent(node), Step::Parent)
}

/// All ancestor elements, nearest first.
pub fn ancestors<B: DomBackend>(dom: &B, node: NodeId) -> Vec<NodeId> {
    walk_all(dom, dom.parent(node), Step::Parent)
}

/// All element children, in document order.
pub fn element_children<B: DomBackend>(dom: &B, node: NodeId) -> Vec<NodeId> {
    walk_all(dom, dom.first_child(node), Step::Next)
}

/// The node itself or its nearest ancestor with the given tag, searching
/// no further than `body`.
pub fn find_tag<B: DomBackend>(dom: &B, node: NodeId, tag: &str) -> Option<NodeId> {
    let tag = tag.to_ascii_lowercase();
    let mut current = Some(node);
    while let Some(id) = current {
        let name = dom.tag_name(id);
        if name == "body" {
            return None;
        }
        if name == tag {
            return Some(id);
        }
        current = dom.parent(id);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use compatkit_backend::{RenderMode, TreeOps};
    use compatkit_mock::MockDom;

    /// body > [text, a, text, b(c, text, d), text]
    fn fixture() -> (MockDom, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = MockDom::new(RenderMode::modern());
        let body = dom.body();

        let t1 = dom.create_text("one");
        let a = dom.create_element("div");
        let t2 = dom.create_text("two");
        let b = dom.create_element("section");
        let t3 = dom.create_text("three");
        for node in [t1, a, t2, b, t3] {
            dom.append_child(body, node);
        }

        let c = dom.create_element("span");
        let t4 = dom.create_text("four");
        let d = dom.create_element("em");
        for node in [c, t4, d] {
            dom.append_child(b, node);
        }

        (dom, a, b, c, d)
    }

    #[test]
    fn test_sibling_walks_skip_text_nodes() {
        let (dom, a, b, _, _) = fixture();
        assert_eq!(next_element(&dom, a), Some(b));
        assert_eq!(prev_element(&dom, b), Some(a));
        assert_eq!(prev_element(&dom, a), None);
        assert_eq!(next_element(&dom, b), None);
    }

    #[test]
    fn test_child_walks() {
        let (dom, _, b, c, d) = fixture();
        assert_eq!(first_element_child(&dom, b), Some(c));
        assert_eq!(last_element_child(&dom, b), Some(d));
        assert_eq!(element_children(&dom, b), vec![c, d]);
    }

    #[test]
    fn test_sibling_collections_are_nearest_first() {
        let (dom, a, b, _, _) = fixture();
        assert_eq!(prev_elements(&dom, b), vec![a]);
        assert_eq!(next_elements(&dom, a), vec![b]);
    }

    #[test]
    fn test_ancestors() {
        let (dom, _, b, c, _) = fixture();
        let body = dom.body();
        let root = dom.document_root();
        assert_eq!(parent_element(&dom, c), Some(b));
        assert_eq!(ancestors(&dom, c), vec![b, body, root]);
    }

    #[test]
    fn test_find_tag_stops_at_body() {
        let (dom, _, b, c, _) = fixture();
        assert_eq!(find_tag(&dom, c, "SECTION"), Some(b));
        assert_eq!(find_tag(&dom, c, "span"), Some(c));
        assert_eq!(find_tag(&dom, c, "article"), None);
        // The search never reports body or anything above it.
        assert_eq!(find_tag(&dom, c, "html"), None);
    }
}
