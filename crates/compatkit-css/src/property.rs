//! Property-name normalization and classification.
//!
//! Logical property names arrive hyphenated (`border-left-width`) or
//! already camel-cased; engines are addressed through their accessor
//! convention (`borderLeftWidth`, `cssFloat`/`styleFloat`).

use compatkit_backend::RenderMode;

/// Convert a hyphenated property name to the engine accessor convention.
/// Already-camel-cased input passes through unchanged.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert an accessor-convention name back to its hyphenated form.
pub fn hyphenate(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Engine accessor name for the `float` property.
pub fn float_alias(mode: &RenderMode) -> &'static str {
    if mode.supports_computed_style_api {
        "cssFloat"
    } else {
        "styleFloat"
    }
}

pub fn is_float(key: &str) -> bool {
    key == "float" || key == "cssFloat" || key == "styleFloat"
}

/// Length-valued properties that get a `px` suffix auto-appended when the
/// caller hands over a bare number.
pub fn requires_px_unit(key: &str) -> bool {
    matches!(key, "width" | "height" | "left" | "right" | "top" | "bottom")
}

/// Accessor-convention test for the border width longhands
/// (`borderLeftWidth` etc.; the `borderWidth` shorthand is not one).
pub fn is_border_width(key: &str) -> bool {
    key.starts_with("border") && key.ends_with("Width") && key.len() > "borderWidth".len()
}

/// The border-style accessor that pairs with a border-width accessor.
pub fn border_style_for(width_key: &str) -> String {
    width_key.replace("Width", "Style")
}
