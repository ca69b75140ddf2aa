//! Integration coverage for visibility management, inline-style removal
//! and the DOM conveniences through the unified API.

mod support;

use compatkit_engine::{dom, ElementOps, RenderMode, TreeOps};
use support::Page;

#[test]
fn test_show_hide_toggle_round_trip() {
    for mode in [RenderMode::modern(), RenderMode::legacy(7, true)] {
        let mut page = Page::new(mode);

        assert!(!page.compat.is_hidden(&mut page.dom, page.target));

        page.compat.hide(&mut page.dom, page.target);
        assert!(page.compat.is_hidden(&mut page.dom, page.target));
        page.compat.hide(&mut page.dom, page.target);
        assert!(page.compat.is_hidden(&mut page.dom, page.target));

        page.compat.show(&mut page.dom, page.target);
        assert!(!page.compat.is_hidden(&mut page.dom, page.target));
        page.compat.show(&mut page.dom, page.target);
        assert!(!page.compat.is_hidden(&mut page.dom, page.target));

        page.compat.toggle(&mut page.dom, page.target);
        page.compat.toggle(&mut page.dom, page.target);
        assert!(!page.compat.is_hidden(&mut page.dom, page.target));
    }
}

#[test]
fn test_show_pins_default_display_against_stylesheet() {
    let mut page = Page::modern();
    let row = page.dom.create_element("tr");
    let container = page.container;
    page.dom.append_child(container, row);
    page.dom.add_author_style(row, "display", "none");

    page.compat.show(&mut page.dom, row);
    assert!(!page.compat.is_hidden(&mut page.dom, row));
    assert_eq!(
        page.dom.inline_style(row, "display").as_deref(),
        Some("table-row")
    );
}

#[test]
fn test_default_display_probe_leaves_no_trace() {
    let mut page = Page::modern();
    let body = page.dom.body();
    let children_before = dom::element_children(&page.dom, body).len();

    assert_eq!(page.compat.default_display(&mut page.dom, "li"), "list-item");
    assert_eq!(
        dom::element_children(&page.dom, body).len(),
        children_before
    );
}

#[test]
fn test_remove_style_on_both_removal_paths() {
    for mode in [RenderMode::modern(), RenderMode::legacy(7, false)] {
        let mut page = Page::new(mode);
        page.compat
            .set_styles(
                &mut page.dom,
                page.target,
                [
                    ("border-left-width", "2px".into()),
                    ("color", "red".into()),
                ],
            );

        page.compat
            .remove_style(&mut page.dom, page.target, "border-left-width");
        assert_eq!(page.dom.inline_style(page.target, "borderLeftWidth"), None);
        assert_eq!(
            page.dom.inline_style(page.target, "color").as_deref(),
            Some("red"),
            "mode {mode:?} should keep unrelated declarations"
        );
    }
}

#[test]
fn test_attr_and_prop_dispatch() {
    let mut page = Page::modern();
    let node = page.target;

    dom::set_attr(&mut page.dom, node, "title", Some("hello"));
    assert_eq!(dom::attr(&page.dom, node, "title").as_deref(), Some("hello"));

    dom::set_prop(&mut page.dom, node, "class", "panel");
    assert!(dom::has_class(&page.dom, node, "panel"));

    dom::set_attr(&mut page.dom, node, "style", Some("width: 10px"));
    assert_eq!(
        page.dom.inline_style(node, "width").as_deref(),
        Some("10px")
    );
}

#[test]
fn test_class_operations() {
    let mut page = Page::modern();
    let node = page.target;

    dom::add_class(&mut page.dom, node, "a");
    dom::add_class(&mut page.dom, node, "b");
    dom::toggle_class(&mut page.dom, node, "c");
    dom::remove_class(&mut page.dom, node, "a");
    dom::replace_class(&mut page.dom, node, "b", "d");

    assert!(!dom::has_class(&page.dom, node, "a"));
    assert!(!dom::has_class(&page.dom, node, "b"));
    assert!(dom::has_class(&page.dom, node, "c"));
    assert!(dom::has_class(&page.dom, node, "d"));
}

#[test]
fn test_traversal_and_find_tag() {
    let mut page = Page::modern();
    let container = page.container;
    let text = page.dom.create_text("gap");
    page.dom.append_child(container, text);
    let sibling = page.dom.create_element("p");
    page.dom.append_child(container, sibling);

    assert_eq!(dom::next_element(&page.dom, page.target), Some(sibling));
    assert_eq!(dom::prev_element(&page.dom, sibling), Some(page.target));
    assert_eq!(
        dom::element_children(&page.dom, container),
        vec![page.target, sibling]
    );
    assert_eq!(
        dom::find_tag(&page.dom, page.target, "div"),
        Some(page.target)
    );

    let style = dom::create_style(&mut page.dom, "p { margin: 0; }");
    assert_eq!(page.dom.parent(style), Some(page.dom.head()));
}
