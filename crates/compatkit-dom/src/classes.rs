//! Class-list set operations over the `class` attribute.

use compatkit_backend::{DomBackend, NodeId};
use smallvec::SmallVec;

type Tokens<'a> = SmallVec<[&'a str; 8]>;

fn tokens(class: &str) -> Tokens<'_> {
    class.split_ascii_whitespace().collect()
}

fn write_class<B: DomBackend>(dom: &mut B, node: NodeId, list: &[&str]) {
    dom.set_attribute(node, "class", &list.join(" "));
}

pub fn has_class<B: DomBackend>(dom: &B, node: NodeId, name: &str) -> bool {
    let class = dom.attribute(node, "class").unwrap_or_default();
    let found = tokens(&class).contains(&name);
    found
}

/// Add a class name; a no-op when already present.
pub fn add_class<B: DomBackend>(dom: &mut B, node: NodeId, name: &str) {
    let class = dom.attribute(node, "class").unwrap_or_default();
    let mut list = tokens(&class);
    if list.contains(&name) {
        return;
    }
    list.push(name);
    write_class(dom, node, &list);
}

pub fn remove_class<B: DomBackend>(dom: &mut B, node: NodeId, name: &str) {
    let class = dom.attribute(node, "class").unwrap_or_default();
    let list: Tokens = tokens(&class).into_iter().filter(|t| *t != name).collect();
    write_class(dom, node, &list);
}

/// Replace `old` with `new`, appending `new` when `old` was absent but
/// keeping only one occurrence when both were present.
pub fn replace_class<B: DomBackend>(dom: &mut B, node: NodeId, old: &str, new: &str) {
    let class = dom.attribute(node, "class").unwrap_or_default();
    let mut had_new = false;
    let mut list: Tokens = SmallVec::new();
    for token in tokens(&class) {
        if token == old {
            continue;
        }
        if token == new {
            had_new = true;
        }
        list.push(token);
    }
    if !had_new && !new.is_empty() {
        list.push(new);
    }
    write_class(dom, node, &list);
}

pub fn toggle_class<B: DomBackend>(dom: &mut B, node: NodeId, name: &str) {
    if has_class(dom, node, name) {
        remove_class(dom, node, name);
    } else {
        add_class(dom, node, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compatkit_backend::{ElementOps, RenderMode, TreeOps};
    use compatkit_mock::MockDom;

    fn class_of(dom: &MockDom, node: NodeId) -> String {
        dom.attribute(node, "class").unwrap_or_default()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut dom = MockDom::new(RenderMode::modern());
        let node = dom.create_element("div");

        add_class(&mut dom, node, "active");
        add_class(&mut dom, node, "active");
        assert_eq!(class_of(&dom, node), "active");

        add_class(&mut dom, node, "highlight");
        assert_eq!(class_of(&dom, node), "active highlight");
    }

    #[test]
    fn test_remove_cleans_token_list() {
        let mut dom = MockDom::new(RenderMode::modern());
        let node = dom.create_element("div");
        dom.set_attribute(node, "class", "  a   b  c ");

        remove_class(&mut dom, node, "b");
        assert_eq!(class_of(&dom, node), "a c");
        assert!(!has_class(&dom, node, "b"));
        assert!(has_class(&dom, node, "a"));
    }

    #[test]
    fn test_replace_appends_when_old_missing() {
        let mut dom = MockDom::new(RenderMode::modern());
        let node = dom.create_element("div");
        dom.set_attribute(node, "class", "a");

        replace_class(&mut dom, node, "missing", "b");
        assert_eq!(class_of(&dom, node), "a b");

        replace_class(&mut dom, node, "a", "b");
        assert_eq!(class_of(&dom, node), "b");
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut dom = MockDom::new(RenderMode::modern());
        let node = dom.create_element("div");

        toggle_class(&mut dom, node, "open");
        assert!(has_class(&dom, node, "open"));
        toggle_class(&mut dom, node, "open");
        assert!(!has_class(&dom, node, "open"));
    }
}
