//! Length-unit conversion for engines without a native computed-pixel API.

use compatkit_backend::{DomBackend, NodeId, RenderMode};
use tracing::trace;

use crate::parse_float_prefix;

/// Unit suffixes the converter can turn into pixels through the engine's
/// own length-resolution machinery.
const MEASURABLE_SUFFIXES: [&str; 13] = [
    "rem", "em", "pt", "mm", "cm", "pc", "in", "ex", "vw", "vh", "vm", "ch", "gr",
];

/// The measurable suffix of a value, if the value is a number followed by
/// one. The numeric-prefix requirement keeps keywords such as `thin` from
/// being mistaken for an `in` length.
pub fn measurable_suffix(value: &str) -> Option<&'static str> {
    for suffix in MEASURABLE_SUFFIXES {
        if let Some(prefix) = value.strip_suffix(suffix) {
            if !prefix.is_empty() && prefix.trim().parse::<f32>().is_ok() {
                return Some(suffix);
            }
        }
    }
    None
}

/// Whether a raw value carries a percentage suffix with a numeric prefix.
pub fn is_percentage(value: &str) -> bool {
    value
        .strip_suffix('%')
        .is_some_and(|prefix| prefix.trim().parse::<f32>().is_ok())
}

/// Converts CSS length notation to pixels for a given element context.
///
/// Engines with a native computed-style API resolve geometric properties to
/// pixels themselves, so the converter reduces to a numeric parse there.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter {
    mode: RenderMode,
}

impl UnitConverter {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn is_convertible(&self, value: &str) -> bool {
        measurable_suffix(value).is_some()
    }

    /// Resolve a raw length value to pixels in the element's context.
    pub fn to_pixels<B: DomBackend>(&self, dom: &mut B, node: NodeId, value: &str) -> f32 {
        if self.mode.supports_computed_style_api {
            return parse_float_prefix(value).unwrap_or(0.0);
        }
        self.measure_with_borrowed_left(dom, node, value)
    }

    /// The borrowed-machinery trick: park the rendered `left` in the
    /// runtime channel so nothing moves on screen, assign the value under
    /// conversion to the inline `left`, read back the engine-resolved
    /// pixels, then restore both channels. Single exit; restoration covers
    /// every path.
    fn measure_with_borrowed_left<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        value: &str,
    ) -> f32 {
        let saved_inline = dom.inline_style(node, "left");
        let saved_runtime = dom.runtime_style(node, "left");

        let computed_left = dom.computed_styles(node).get("left").map(str::to_string);
        dom.set_runtime_style(node, "left", computed_left.as_deref());
        if let Err(error) = dom.set_inline_style(node, "left", value) {
            trace!(%error, value, "engine rejected conversion probe value");
        }

        let px = dom.pixel_left(node);

        let restored = saved_inline.as_deref().unwrap_or("");
        let _ = dom.set_inline_style(node, "left", restored);
        dom.set_runtime_style(node, "left", saved_runtime.as_deref());

        px
    }

    /// Percentage resolution against the containing block's content width:
    /// `parent_content_width * pct / 100`.
    ///
    /// Width-correct only; the same base is applied to every
    /// percentage-valued property, including heights.
    pub fn percent_to_pixels(&self, parent_content_width: f32, value: &str) -> f32 {
        parent_content_width * parse_float_prefix(value).unwrap_or(0.0) / 100.0
    }
}
