//! Integration coverage for style resolution and geometry through the
//! unified API, on both the modern and the legacy engine presentation.

mod support;

use compatkit_engine::{ElementOps, RenderMode, StyleInput};
use compatkit_mock::NodeLayout;
use support::Page;

#[test]
fn test_length_round_trip_modern() {
    let mut page = Page::modern();
    for property in ["left", "right", "top", "bottom"] {
        for value in [0.0, 1.0, 100.0, 9999.0] {
            page.compat
                .set_style(&mut page.dom, page.target, property, value);
            assert_eq!(
                page.compat.style_numeric(&mut page.dom, page.target, property),
                value,
                "{property} should round-trip {value}"
            );
        }
    }
}

#[test]
fn test_length_round_trip_legacy() {
    let mut page = Page::legacy();
    for property in ["width", "height", "left", "top"] {
        for value in [0.0, 1.0, 100.0, 9999.0] {
            page.compat
                .set_style(&mut page.dom, page.target, property, value);
            assert_eq!(
                page.compat.style_numeric(&mut page.dom, page.target, property),
                value,
                "{property} should round-trip {value}"
            );
        }
    }
}

#[test]
fn test_inch_converts_to_ninety_six_pixels() {
    let mut page = Page::legacy();
    page.dom
        .set_inline_style(page.target, "marginLeft", "1in")
        .unwrap();
    let px = page
        .compat
        .style_numeric(&mut page.dom, page.target, "margin-left");
    assert!((px - 96.0).abs() <= 1.0, "1in resolved to {px}");
}

#[test]
fn test_percentage_resolves_against_containing_block_width() {
    let mut page = Page::legacy();
    page.resize_container(200.0, 400.0);
    page.dom
        .set_inline_style(page.target, "marginLeft", "50%")
        .unwrap();
    assert_eq!(
        page.compat
            .style_numeric(&mut page.dom, page.target, "margin-left"),
        100.0
    );
}

#[test]
fn test_percentage_height_resolves_against_parent_width() {
    // Known approximation: every percentage resolves against the parent's
    // content *width*, so a 50% `top` inside a 200x400 container reads as
    // 100, not 200.
    let mut page = Page::legacy();
    page.resize_container(200.0, 400.0);
    page.dom
        .set_inline_style(page.target, "top", "50%")
        .unwrap();
    assert_eq!(
        page.compat.style_numeric(&mut page.dom, page.target, "top"),
        100.0
    );
}

#[test]
fn test_opacity_round_trip_both_modes() {
    for mode in [RenderMode::modern(), RenderMode::legacy(7, false)] {
        let mut page = Page::new(mode);

        page.compat.set_opacity(&mut page.dom, page.target, 0.5);
        let read = page
            .compat
            .style_numeric(&mut page.dom, page.target, "opacity");
        assert!((read - 0.5).abs() <= 0.01, "mode {mode:?} read {read}");

        // Already-percent form behaves identically.
        page.compat.set_opacity(&mut page.dom, page.target, 50.0);
        let read = page
            .compat
            .style_numeric(&mut page.dom, page.target, "opacity");
        assert!((read - 0.5).abs() <= 0.01, "mode {mode:?} read {read}");
    }
}

#[test]
fn test_border_width_keyword_resolution() {
    let mut page = Page::legacy();

    // Unset border: medium keyword with style none reads as zero.
    assert_eq!(
        page.compat
            .style_numeric(&mut page.dom, page.target, "border-left-width"),
        0.0
    );

    page.dom
        .set_inline_style(page.target, "borderLeftStyle", "solid")
        .unwrap();
    assert_eq!(
        page.compat
            .style_numeric(&mut page.dom, page.target, "border-left-width"),
        3.0
    );
}

#[test]
fn test_scenario_percentage_then_bulk_write() {
    let mut page = Page::modern();
    page.dom
        .set_inline_style(page.target, "width", "50%")
        .unwrap();
    assert_eq!(
        page.compat.style_numeric(&mut page.dom, page.target, "width"),
        150.0
    );

    page.compat.set_styles(
        &mut page.dom,
        page.target,
        [
            ("width", StyleInput::Number(120.0)),
            ("opacity", StyleInput::Number(0.25)),
        ],
    );
    assert_eq!(
        page.compat.style_numeric(&mut page.dom, page.target, "width"),
        120.0
    );
    let opacity = page
        .compat
        .style_numeric(&mut page.dom, page.target, "opacity");
    assert!((opacity - 0.25).abs() <= 0.01);
}

#[test]
fn test_offset_never_negative() {
    let mut page = Page::modern();
    page.dom.set_layout(
        page.target,
        NodeLayout {
            x: -3.0,
            y: -8.0,
            outer_width: 40.0,
            outer_height: 40.0,
            ..NodeLayout::default()
        },
    );

    let offset = page.compat.offset(&page.dom, page.target);
    assert_eq!(offset.left, 0.0);
    assert_eq!(offset.top, 0.0);
    assert_eq!(offset.width, 40.0);
}

#[test]
fn test_set_offset_and_relative_move() {
    let mut page = Page::modern();
    page.compat
        .set_offset(&mut page.dom, page.target, Some(50.0), Some(20.0), false);
    assert_eq!(
        page.dom.inline_style(page.target, "position").as_deref(),
        Some("absolute")
    );
    assert_eq!(
        page.dom.inline_style(page.target, "left").as_deref(),
        Some("50px")
    );

    // Deltas add onto the current offset.
    page.dom.set_layout(
        page.target,
        NodeLayout {
            x: 50.0,
            y: 20.0,
            ..NodeLayout::default()
        },
    );
    page.compat
        .set_offset(&mut page.dom, page.target, Some(10.0), Some(-5.0), true);
    assert_eq!(
        page.dom.inline_style(page.target, "left").as_deref(),
        Some("60px")
    );
    assert_eq!(
        page.dom.inline_style(page.target, "top").as_deref(),
        Some("15px")
    );
}

#[test]
fn test_relative_size_accessor() {
    let mut page = Page::modern();
    page.compat.set_width(&mut page.dom, page.target, 100.0, false);
    page.compat.set_width(&mut page.dom, page.target, 25.0, true);
    assert_eq!(page.compat.width(&mut page.dom, page.target), 125.0);

    let metrics = page.compat.size(&mut page.dom, page.target);
    assert_eq!(metrics.width, 125.0);
}

#[test]
fn test_set_center_writes_clamped_coordinates() {
    let mut page = Page::modern();
    page.dom.set_viewport(1000.0, 700.0);
    page.dom.set_layout(
        page.target,
        NodeLayout {
            outer_width: 200.0,
            outer_height: 100.0,
            ..NodeLayout::default()
        },
    );

    page.compat.set_center(&mut page.dom, page.target);
    assert_eq!(
        page.dom.inline_style(page.target, "left").as_deref(),
        Some("400px")
    );
    assert_eq!(
        page.dom.inline_style(page.target, "top").as_deref(),
        Some("300px")
    );
}

#[test]
fn test_quirks_mode_width_uses_outer_metric() {
    let mut page = Page::new(RenderMode::legacy(7, true));
    page.dom.set_layout(
        page.target,
        NodeLayout {
            outer_width: 180.0,
            inner_width: 160.0,
            ..NodeLayout::default()
        },
    );
    assert_eq!(page.compat.width(&mut page.dom, page.target), 180.0);
}
