//! Effective-style resolution with the cross-engine fixups applied.

use compatkit_backend::{DomBackend, NodeId, RenderMode};

use crate::geometry;
use crate::property::{border_style_for, camel_case, float_alias, is_border_width, is_float};
use crate::units::{is_percentage, UnitConverter};
use crate::{parse_float_prefix, StyleValue};

/// Pixel equivalents for the border-width keywords. Which table applies is
/// a property of the render mode, fixed at strategy construction.
#[derive(Debug, Clone, Copy)]
pub struct BorderWidthTable {
    pub thin: f32,
    pub medium: f32,
    pub thick: f32,
}

impl BorderWidthTable {
    /// Standards-mode modern engines use the narrow table; quirks mode and
    /// older generations render keywords one step wider.
    pub fn for_mode(mode: &RenderMode) -> Self {
        if mode.quirks_mode || mode.engine_version.is_older() {
            Self {
                thin: 2.0,
                medium: 4.0,
                thick: 6.0,
            }
        } else {
            Self {
                thin: 1.0,
                medium: 3.0,
                thick: 5.0,
            }
        }
    }

    pub fn lookup(&self, keyword: &str) -> Option<f32> {
        match keyword {
            "thin" => Some(self.thin),
            "medium" => Some(self.medium),
            "thick" => Some(self.thick),
            _ => None,
        }
    }
}

/// Resolution path for the configured engine, selected once.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// Engine resolves computed values to pixels itself.
    Native,
    /// Engine hands back raw declaration strings; every fixup is ours.
    Legacy { border_widths: BorderWidthTable },
}

/// Returns the effective value of a logical style property, reconciling
/// unit conversion, percentage resolution, border-keyword mapping and the
/// legacy opacity channel into one contract.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver {
    mode: RenderMode,
    converter: UnitConverter,
    strategy: Strategy,
}

impl StyleResolver {
    pub fn new(mode: RenderMode) -> Self {
        let strategy = if mode.supports_computed_style_api {
            Strategy::Native
        } else {
            Strategy::Legacy {
                border_widths: BorderWidthTable::for_mode(&mode),
            }
        };
        Self {
            mode,
            converter: UnitConverter::new(mode),
            strategy,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Effective value of `property`. `width`/`height` report the box
    /// computation, not the declaration.
    pub fn resolve<B: DomBackend>(&self, dom: &mut B, node: NodeId, property: &str) -> StyleValue {
        let key = camel_case(property);
        if key == "width" {
            return StyleValue::Number(geometry::content_width(self, dom, node));
        }
        if key == "height" {
            return StyleValue::Number(geometry::content_height(self, dom, node));
        }
        match self.strategy {
            Strategy::Native => self.resolve_native(dom, node, &key),
            Strategy::Legacy { border_widths } => {
                self.resolve_legacy(dom, node, &key, border_widths)
            }
        }
    }

    /// Numeric view of `resolve`, defaulting to 0.0 wherever the resolved
    /// value does not parse. Downstream arithmetic relies on never seeing
    /// NaN from here.
    pub fn resolve_numeric<B: DomBackend>(&self, dom: &mut B, node: NodeId, property: &str) -> f32 {
        self.resolve(dom, node, property).to_f32()
    }

    fn resolve_native<B: DomBackend>(&self, dom: &B, node: NodeId, key: &str) -> StyleValue {
        let key = if is_float(key) {
            float_alias(&self.mode)
        } else {
            key
        };
        let snapshot = dom.computed_styles(node);
        StyleValue::text(snapshot.get_or_empty(key))
    }

    fn resolve_legacy<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        key: &str,
        border_widths: BorderWidthTable,
    ) -> StyleValue {
        let snapshot = dom.computed_styles(node);

        if key == "opacity" {
            return StyleValue::Number(opacity_from_filter(snapshot.get_or_empty("filter")));
        }
        let key = if is_float(key) {
            float_alias(&self.mode)
        } else {
            key
        };

        let Some(raw) = snapshot.get(key) else {
            return StyleValue::text("");
        };

        if is_border_width(key) {
            let style = snapshot.get_or_empty(&border_style_for(key));
            // A border that does not render has no width.
            if raw == "medium" && style == "none" {
                return StyleValue::Number(0.0);
            }
            if let Some(px) = border_widths.lookup(raw) {
                return StyleValue::Number(px);
            }
        }

        if self.converter.is_convertible(raw) {
            let raw = raw.to_string();
            return StyleValue::Number(self.converter.to_pixels(dom, node, &raw));
        }

        if is_percentage(raw) && key != "fontSize" {
            let raw = raw.to_string();
            let base = match dom.parent(node) {
                Some(parent) => geometry::content_width(self, dom, parent),
                None => 0.0,
            };
            return StyleValue::Number(self.converter.percent_to_pixels(base, &raw));
        }

        StyleValue::text(raw)
    }
}

/// Opacity parsed out of a legacy filter descriptor: the value after
/// `opacity=` inside the filter string, 0–100 scaled down to 0–1. Absent
/// filter means fully opaque.
fn opacity_from_filter(filter: &str) -> f32 {
    let Some(start) = filter.find("opacity=") else {
        return 1.0;
    };
    let rest = &filter[start + "opacity=".len()..];
    let end = rest.find(')').unwrap_or(rest.len());
    parse_float_prefix(&rest[..end]).unwrap_or(0.0) / 100.0
}
