//! Inline-style writing with the cross-engine normalizations applied.

use compatkit_backend::{DomBackend, NodeId, RenderMode};
use tracing::trace;

use crate::property::{camel_case, float_alias, hyphenate, is_float, requires_px_unit};
use crate::{format_number, parse_float_prefix, StyleInput};

/// Writes inline style values: property aliasing, unit auto-append, the
/// opacity dual write-path and inline-removal semantics.
///
/// Writes the engine rejects are swallowed: the property is left
/// unchanged, and callers that need certainty re-read the resolved value.
#[derive(Debug, Clone, Copy)]
pub struct StyleMutator {
    mode: RenderMode,
}

impl StyleMutator {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    /// Write one inline style value. `StyleInput::Clear` removes the
    /// declaration instead.
    pub fn set<B: DomBackend>(
        &self,
        dom: &mut B,
        node: NodeId,
        property: &str,
        value: impl Into<StyleInput>,
    ) {
        let input = value.into();
        if input == StyleInput::Clear {
            self.remove_inline(dom, node, property);
            return;
        }

        let key = camel_case(property);
        if is_float(&key) {
            self.write(dom, node, float_alias(&self.mode), &input.into_text());
            return;
        }
        if key == "opacity" {
            self.set_opacity(dom, node, input);
            return;
        }

        let text = match input {
            StyleInput::Number(n) if requires_px_unit(&key) => format!("{}px", format_number(n)),
            other => other.into_text(),
        };
        self.write(dom, node, &key, &text);
    }

    /// Apply a mapping of property → value pairs in order through the
    /// single-property path.
    pub fn set_many<B, I, K>(&self, dom: &mut B, node: NodeId, pairs: I)
    where
        B: DomBackend,
        I: IntoIterator<Item = (K, StyleInput)>,
        K: AsRef<str>,
    {
        for (property, value) in pairs {
            self.set(dom, node, property.as_ref(), value);
        }
    }

    /// Remove an inline declaration: natively on engines that clear styles
    /// assigned an absent value, otherwise by stripping the matching
    /// declarations out of the raw inline style text.
    pub fn remove_inline<B: DomBackend>(&self, dom: &mut B, node: NodeId, property: &str) {
        let key = camel_case(property);
        let key = if is_float(&key) {
            float_alias(&self.mode).to_string()
        } else {
            key
        };

        if self.mode.supports_inline_style_clear {
            dom.clear_inline_style(node, &key);
            return;
        }

        let text = dom.inline_style_text(node);
        if text.is_empty() {
            return;
        }
        // Match on the serialized (hyphenated) name; a declaration also
        // matches when its name extends the target with further hyphenated
        // segments, so removing `border` takes `border-color` with it.
        let target = hyphenate(&key).to_ascii_lowercase();
        let kept: Vec<String> = text
            .split(';')
            .filter_map(|piece| {
                let declaration = piece.trim();
                let (name, _) = declaration.split_once(':')?;
                let name = name.trim().to_ascii_lowercase();
                if name == target || name.starts_with(&format!("{}-", target)) {
                    None
                } else {
                    Some(declaration.to_string())
                }
            })
            .collect();
        dom.set_inline_style_text(node, &format!("{};", kept.join("; ")));
    }

    /// The opacity dual write-path: fractions ≤ 1 are rescaled to the 0–100
    /// range internally; the native opacity channel gets the 0–1 form, the
    /// legacy filter channel gets an `alpha(opacity=N)` descriptor.
    fn set_opacity<B: DomBackend>(&self, dom: &mut B, node: NodeId, input: StyleInput) {
        let mut value = match input {
            StyleInput::Number(n) => n,
            StyleInput::Text(s) => parse_float_prefix(&s).unwrap_or(0.0),
            StyleInput::Clear => unreachable!("Clear is handled by set"),
        };
        if value <= 1.0 {
            value *= 100.0;
        }

        if self.mode.supports_native_opacity {
            self.write(dom, node, "opacity", &format_number(value / 100.0));
        } else {
            self.write(
                dom,
                node,
                "filter",
                &format!("alpha(opacity={})", format_number(value)),
            );
        }
    }

    fn write<B: DomBackend>(&self, dom: &mut B, node: NodeId, key: &str, value: &str) {
        if let Err(error) = dom.set_inline_style(node, key, value) {
            // Tolerated fault: the engine rejected the value; continue with
            // the property unchanged.
            trace!(%error, key, value, "inline style write rejected");
        }
    }
}

impl StyleInput {
    fn into_text(self) -> String {
        match self {
            StyleInput::Number(n) => format_number(n),
            StyleInput::Text(s) => s,
            StyleInput::Clear => String::new(),
        }
    }
}
