//! # CompatKit Mock
//!
//! In-memory reference backend for headless testing.
//!
//! ## Design Goals
//!
//! 1. **Faithful presentation**: the snapshot a consumer sees depends on
//!    the configured `RenderMode`. Legacy modes expose raw declaration
//!    strings, the filter opacity channel and the `styleFloat` alias, while
//!    modern modes resolve geometric values to pixels
//! 2. **Settable layout**: tests place nodes and size their boxes directly
//!    instead of running a layout pass
//! 3. **No window required**: everything lives in a node arena, perfect for
//!    automated testing and CI environments

use std::collections::HashMap;

use compatkit_backend::{
    BackendError, BoundingRect, ComputedSnapshot, ElementOps, MetricsOps, NodeId, RenderMode,
    TreeOps, ViewportOps,
};
use tracing::trace;

/// Box metrics and placement for one node, in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct NodeLayout {
    /// Viewport x of the border-box origin.
    pub x: f32,
    /// Viewport y of the border-box origin.
    pub y: f32,
    /// Border-box (offset) dimensions.
    pub outer_width: f32,
    pub outer_height: f32,
    /// Padding-box (client) dimensions.
    pub inner_width: f32,
    pub inner_height: f32,
    /// Effective font size, used for em/ex/ch resolution.
    pub font_size: f32,
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            outer_width: 0.0,
            outer_height: 0.0,
            inner_width: 0.0,
            inner_height: 0.0,
            font_size: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum NodeKind {
    Element { tag: String },
    Text(String),
}

#[derive(Debug)]
struct MockNode {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Vec<(String, String)>,
    /// Inline declarations in insertion order, camel-cased keys.
    inline: Vec<(String, String)>,
    /// Runtime-style override channel (wins over inline, like a legacy
    /// engine's runtimeStyle).
    runtime: Vec<(String, String)>,
    /// Declarations applied by author stylesheets, camel-cased keys.
    author: Vec<(String, String)>,
    inner_html: String,
    layout: NodeLayout,
}

impl MockNode {
    fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            inline: Vec::new(),
            runtime: Vec::new(),
            author: Vec::new(),
            inner_html: String::new(),
            layout: NodeLayout::default(),
        }
    }

    fn text(contents: &str) -> Self {
        Self {
            kind: NodeKind::Text(contents.to_string()),
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            inline: Vec::new(),
            runtime: Vec::new(),
            author: Vec::new(),
            inner_html: String::new(),
            layout: NodeLayout::default(),
        }
    }
}

/// Natural display keyword for a tag, mirroring a user-agent stylesheet.
fn display_for_tag(tag: &str) -> &'static str {
    match tag {
        "span" | "a" | "b" | "i" | "em" | "strong" | "code" | "small" | "label" | "img"
        | "input" | "button" | "select" | "textarea" => "inline",
        "li" => "list-item",
        "table" => "table",
        "thead" => "table-header-group",
        "tbody" => "table-row-group",
        "tfoot" => "table-footer-group",
        "tr" => "table-row",
        "td" | "th" => "table-cell",
        "caption" => "table-caption",
        "col" => "table-column",
        "colgroup" => "table-column-group",
        "style" | "script" | "head" | "title" | "meta" | "link" => "none",
        _ => "block",
    }
}

fn camel_to_hyphen(name: &str) -> String {
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

fn hyphen_to_camel(name: &str) -> String {
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

/// An in-memory `DomBackend`: a node arena with settable layout metrics and
/// render-mode-aware computed-style presentation.
pub struct MockDom {
    mode: RenderMode,
    nodes: Vec<MockNode>,
    root: NodeId,
    body: NodeId,
    head: NodeId,
    viewport: (f32, f32),
    scroll: (f32, f32),
    root_scroll: (f32, f32),
    root_client_edges: (f32, f32),
    /// Properties whose inline writes the "engine" rejects (test hook for
    /// the swallow-and-ignore policy).
    rejected_properties: Vec<String>,
}

impl MockDom {
    pub fn new(mode: RenderMode) -> Self {
        let mut dom = Self {
            mode,
            nodes: Vec::new(),
            root: NodeId::new(0),
            body: NodeId::new(0),
            head: NodeId::new(0),
            viewport: (800.0, 600.0),
            scroll: (0.0, 0.0),
            root_scroll: (0.0, 0.0),
            root_client_edges: (0.0, 0.0),
            rejected_properties: Vec::new(),
        };

        let root = dom.push(MockNode::element("html"));
        let head = dom.push(MockNode::element("head"));
        let body = dom.push(MockNode::element("body"));
        dom.root = root;
        dom.head = head;
        dom.body = body;
        dom.attach(root, head);
        dom.attach(root, body);
        dom
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Place and size a node's box.
    pub fn set_layout(&mut self, node: NodeId, layout: NodeLayout) {
        self.node_mut(node).layout = layout;
    }

    pub fn layout_mut(&mut self, node: NodeId) -> &mut NodeLayout {
        &mut self.node_mut(node).layout
    }

    /// Apply a stylesheet declaration to a node (hyphenated or camel-cased
    /// property name).
    pub fn add_author_style(&mut self, node: NodeId, property: &str, value: &str) {
        let key = hyphen_to_camel(property);
        let decls = &mut self.node_mut(node).author;
        if let Some(entry) = decls.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value.to_string();
        } else {
            decls.push((key, value.to_string()));
        }
    }

    pub fn create_text(&mut self, contents: &str) -> NodeId {
        self.push(MockNode::text(contents))
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    pub fn set_scroll(&mut self, left: f32, top: f32) {
        self.scroll = (left, top);
    }

    pub fn set_root_scroll(&mut self, left: f32, top: f32) {
        self.root_scroll = (left, top);
    }

    pub fn set_root_client_edges(&mut self, left: f32, top: f32) {
        self.root_client_edges = (left, top);
    }

    /// Make the engine reject inline writes to `property` from now on.
    pub fn reject_style_property(&mut self, property: &str) {
        self.rejected_properties.push(hyphen_to_camel(property));
    }

    /// Whether the node is currently attached under the document root.
    pub fn in_document(&self, node: NodeId) -> bool {
        self.contains(self.root, node) || node == self.root
    }

    /// Text contents of a text node.
    pub fn text_content(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).kind {
            NodeKind::Text(contents) => Some(contents.as_str()),
            NodeKind::Element { .. } => None,
        }
    }

    fn push(&mut self, node: MockNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(node);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn node(&self, id: NodeId) -> &MockNode {
        &self.nodes[id.raw() as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut MockNode {
        &mut self.nodes[id.raw() as usize]
    }

    /// Effective declaration for a property: runtime > inline > author.
    /// Empty values count as absent (a cleared declaration).
    fn declared(&self, id: NodeId, key: &str) -> Option<&str> {
        let node = self.node(id);
        for decls in [&node.runtime, &node.inline, &node.author] {
            if let Some((_, v)) = decls.iter().find(|(k, _)| k == key) {
                if !v.is_empty() {
                    return Some(v.as_str());
                }
            }
        }
        None
    }

    fn effective_display(&self, id: NodeId) -> String {
        if let Some(value) = self.declared(id, "display") {
            return value.to_string();
        }
        match &self.node(id).kind {
            NodeKind::Element { tag } => display_for_tag(tag).to_string(),
            NodeKind::Text(_) => "inline".to_string(),
        }
    }

    fn effective_position(&self, id: NodeId) -> String {
        self.declared(id, "position").unwrap_or("static").to_string()
    }

    /// Resolve a declared length against the node's context, the way the
    /// engine's own layout machinery would. Unresolvable input yields None.
    fn resolve_length(&self, id: NodeId, value: &str) -> Option<f32> {
        let value = value.trim();
        if let Ok(px) = value.parse::<f32>() {
            return Some(px);
        }
        if let Some(raw) = value.strip_suffix('%') {
            let pct: f32 = raw.parse().ok()?;
            let parent = self.node(id).parent?;
            return Some(self.content_width_of(parent) * pct / 100.0);
        }

        let font_size = self.node(id).layout.font_size;
        let root_font = self.node(self.root).layout.font_size;
        let (vw, vh) = self.viewport;
        let units: [(&str, f32); 12] = [
            ("px", 1.0),
            ("pt", 4.0 / 3.0),
            ("pc", 16.0),
            ("in", 96.0),
            ("cm", 96.0 / 2.54),
            ("mm", 96.0 / 25.4),
            ("em", font_size),
            ("rem", root_font),
            ("ex", font_size * 0.5),
            ("ch", font_size * 0.5),
            ("vw", vw / 100.0),
            ("vh", vh / 100.0),
        ];
        // Longest suffix first so "rem" is not consumed by "em".
        let mut candidates: Vec<&(&str, f32)> = units.iter().collect();
        candidates.sort_by_key(|(suffix, _)| std::cmp::Reverse(suffix.len()));
        for (suffix, scale) in candidates {
            if let Some(raw) = value.strip_suffix(suffix) {
                let n: f32 = raw.trim().parse().ok()?;
                return Some(n * scale);
            }
        }
        if let Some(raw) = value.strip_suffix("vm") {
            let n: f32 = raw.trim().parse().ok()?;
            return Some(n * vw.min(vh) / 100.0);
        }
        None
    }

    /// Declared value resolved to pixels, zero when absent or unresolvable.
    fn decl_px(&self, id: NodeId, key: &str) -> f32 {
        self.declared(id, key)
            .and_then(|v| self.resolve_length(id, v))
            .unwrap_or(0.0)
    }

    fn horizontal_borders(&self, id: NodeId) -> f32 {
        self.decl_px(id, "borderLeftWidth") + self.decl_px(id, "borderRightWidth")
    }

    fn horizontal_paddings(&self, id: NodeId) -> f32 {
        self.decl_px(id, "paddingLeft") + self.decl_px(id, "paddingRight")
    }

    fn vertical_borders(&self, id: NodeId) -> f32 {
        self.decl_px(id, "borderTopWidth") + self.decl_px(id, "borderBottomWidth")
    }

    fn vertical_paddings(&self, id: NodeId) -> f32 {
        self.decl_px(id, "paddingTop") + self.decl_px(id, "paddingBottom")
    }

    /// Content width the engine's layout would produce: a declared width
    /// wins over the test-provided layout metric.
    fn content_width_of(&self, id: NodeId) -> f32 {
        self.inner_width(id) - self.horizontal_paddings(id)
    }

    const GEOMETRIC_KEYS: [&'static str; 22] = [
        "width",
        "height",
        "left",
        "right",
        "top",
        "bottom",
        "paddingLeft",
        "paddingRight",
        "paddingTop",
        "paddingBottom",
        "marginLeft",
        "marginRight",
        "marginTop",
        "marginBottom",
        "borderLeftWidth",
        "borderRightWidth",
        "borderTopWidth",
        "borderBottomWidth",
        "fontSize",
        "textIndent",
        "letterSpacing",
        "wordSpacing",
    ];

    fn border_style_key(width_key: &str) -> String {
        width_key.replace("Width", "Style")
    }

    /// Modern computed-value presentation: geometric values resolved to
    /// pixel strings, border keywords mapped, zero width for unrendered
    /// borders.
    fn present_modern(&self, id: NodeId, key: &str, value: &str) -> String {
        if key.starts_with("border") && key.ends_with("Width") {
            let style = self
                .declared(id, &Self::border_style_key(key))
                .unwrap_or("none");
            if style == "none" {
                return "0px".to_string();
            }
            let mapped = match value {
                "thin" => Some(1.0),
                "medium" => Some(3.0),
                "thick" => Some(5.0),
                _ => None,
            };
            if let Some(px) = mapped {
                return format!("{}px", px);
            }
        }
        if Self::GEOMETRIC_KEYS.contains(&key) {
            if let Some(px) = self.resolve_length(id, value) {
                return format_px(px);
            }
        }
        value.to_string()
    }

    fn snapshot_defaults(&self, id: NodeId) -> HashMap<String, String> {
        let mut map = HashMap::new();
        let legacy = !self.mode.supports_computed_style_api;
        map.insert("display".into(), self.effective_display(id));
        map.insert("position".into(), "static".into());
        map.insert("left".into(), "auto".into());
        map.insert("top".into(), "auto".into());
        for side in ["Left", "Right", "Top", "Bottom"] {
            // Legacy engines report unset border widths as the keyword.
            let width_default = if legacy { "medium" } else { "0px" };
            map.insert(format!("border{}Width", side), width_default.into());
            map.insert(format!("border{}Style", side), "none".into());
            map.insert(format!("padding{}", side), "0px".into());
            map.insert(format!("margin{}", side), "0px".into());
        }
        let float_key = if legacy { "styleFloat" } else { "cssFloat" };
        map.insert(float_key.into(), "none".into());
        if legacy {
            map.insert("filter".into(), String::new());
        } else {
            map.insert("opacity".into(), "1".into());
        }
        map.insert(
            "fontSize".into(),
            format_px(self.node(id).layout.font_size),
        );
        map
    }
}

fn format_px(value: f32) -> String {
    if value == value.trunc() {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}

impl ElementOps for MockDom {
    fn tag_name(&self, node: NodeId) -> String {
        match &self.node(node).kind {
            NodeKind::Element { tag } => tag.clone(),
            NodeKind::Text(_) => "#text".to_string(),
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node)
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attrs = &mut self.node_mut(node).attributes;
        if let Some(entry) = attrs.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            attrs.push((name.to_string(), value.to_string()));
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        self.node_mut(node).attributes.retain(|(k, _)| k != name);
    }

    fn inline_style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node)
            .inline
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.clone())
    }

    fn set_inline_style(
        &mut self,
        node: NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), BackendError> {
        if self.rejected_properties.iter().any(|p| p == property) {
            trace!(property, value, "mock engine rejected style write");
            return Err(BackendError::RejectedStyleValue {
                property: property.to_string(),
                value: value.to_string(),
            });
        }
        let decls = &mut self.node_mut(node).inline;
        if value.is_empty() {
            // Assigning an absent value clears the declaration.
            decls.retain(|(k, _)| k != property);
            return Ok(());
        }
        if let Some(entry) = decls.iter_mut().find(|(k, _)| k == property) {
            entry.1 = value.to_string();
        } else {
            decls.push((property.to_string(), value.to_string()));
        }
        Ok(())
    }

    fn clear_inline_style(&mut self, node: NodeId, property: &str) {
        self.node_mut(node).inline.retain(|(k, _)| k != property);
    }

    fn inline_style_text(&self, node: NodeId) -> String {
        let mut out = String::new();
        for (key, value) in &self.node(node).inline {
            let name = if key == "styleFloat" || key == "cssFloat" {
                "float".to_string()
            } else {
                camel_to_hyphen(key)
            };
            out.push_str(&name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("; ");
        }
        out.trim_end().to_string()
    }

    fn set_inline_style_text(&mut self, node: NodeId, text: &str) {
        let float_key = if self.mode.supports_computed_style_api {
            "cssFloat"
        } else {
            "styleFloat"
        };
        let mut decls = Vec::new();
        for piece in text.split(';') {
            let Some((name, value)) = piece.split_once(':') else {
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            let key = if name == "float" {
                float_key.to_string()
            } else {
                hyphen_to_camel(&name)
            };
            decls.push((key, value.to_string()));
        }
        self.node_mut(node).inline = decls;
    }

    fn inner_html(&self, node: NodeId) -> String {
        self.node(node).inner_html.clone()
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.node_mut(node).inner_html = html.to_string();
    }

    fn computed_styles(&self, node: NodeId) -> ComputedSnapshot {
        let legacy = !self.mode.supports_computed_style_api;
        let float_key = if legacy { "styleFloat" } else { "cssFloat" };
        let mut map = self.snapshot_defaults(node);

        let mock = self.node(node);
        for decls in [&mock.author, &mock.inline, &mock.runtime] {
            for (key, value) in decls {
                if value.is_empty() {
                    continue;
                }
                let key = if key == "cssFloat" || key == "styleFloat" {
                    float_key.to_string()
                } else {
                    key.clone()
                };
                map.insert(key, value.clone());
            }
        }

        if legacy {
            // A legacy engine that never grew an opacity channel keeps the
            // value only inside the filter string.
            map.remove("opacity");
        } else {
            let resolved: Vec<(String, String)> = map
                .iter()
                .map(|(k, v)| (k.clone(), self.present_modern(node, k, v)))
                .collect();
            map.extend(resolved);
            map.remove("filter");
        }
        ComputedSnapshot::from_pairs(map)
    }
}

impl TreeOps for MockDom {
    fn document_root(&self) -> NodeId {
        self.root
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn head(&self) -> NodeId {
        self.head
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node).parent?;
        let siblings = &self.node(parent).children;
        let pos = siblings.iter().position(|&c| c == node)?;
        pos.checked_sub(1).map(|i| siblings[i])
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node).parent?;
        let siblings = &self.node(parent).children;
        let pos = siblings.iter().position(|&c| c == node)?;
        siblings.get(pos + 1).copied()
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).children.first().copied()
    }

    fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).children.last().copied()
    }

    fn is_element(&self, node: NodeId) -> bool {
        matches!(self.node(node).kind, NodeKind::Element { .. })
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(MockNode::element(tag))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.node(child).parent {
            let children = &mut self.node_mut(old_parent).children;
            children.retain(|&c| c != child);
        }
        self.attach(parent, child);
    }

    fn remove(&mut self, node: NodeId) {
        let Some(parent) = self.node(node).parent else {
            return;
        };
        self.node_mut(parent).children.retain(|&c| c != node);
        self.node_mut(node).parent = None;
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }
}

impl MetricsOps for MockDom {
    fn bounding_rect(&self, node: NodeId) -> BoundingRect {
        let (x, y) = {
            let layout = &self.node(node).layout;
            (layout.x, layout.y)
        };
        BoundingRect::new(
            x,
            y,
            x + self.outer_width(node),
            y + self.outer_height(node),
        )
    }

    fn outer_width(&self, node: NodeId) -> f32 {
        if let Some(value) = self.declared(node, "width") {
            if let Some(px) = self.resolve_length(node, value) {
                if self.mode.quirks_box_model() {
                    return px;
                }
                return px + self.horizontal_paddings(node) + self.horizontal_borders(node);
            }
        }
        self.node(node).layout.outer_width
    }

    fn outer_height(&self, node: NodeId) -> f32 {
        if let Some(value) = self.declared(node, "height") {
            if let Some(px) = self.resolve_length(node, value) {
                if self.mode.quirks_box_model() {
                    return px;
                }
                return px + self.vertical_paddings(node) + self.vertical_borders(node);
            }
        }
        self.node(node).layout.outer_height
    }

    fn inner_width(&self, node: NodeId) -> f32 {
        if let Some(value) = self.declared(node, "width") {
            if let Some(px) = self.resolve_length(node, value) {
                if self.mode.quirks_box_model() {
                    return px - self.horizontal_borders(node);
                }
                return px + self.horizontal_paddings(node);
            }
        }
        self.node(node).layout.inner_width
    }

    fn inner_height(&self, node: NodeId) -> f32 {
        if let Some(value) = self.declared(node, "height") {
            if let Some(px) = self.resolve_length(node, value) {
                if self.mode.quirks_box_model() {
                    return px - self.vertical_borders(node);
                }
                return px + self.vertical_paddings(node);
            }
        }
        self.node(node).layout.inner_height
    }

    fn offset_parent(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            if id == self.body {
                return Some(self.body);
            }
            if self.is_element(id) && self.effective_position(id) != "static" {
                return Some(id);
            }
            current = self.node(id).parent;
        }
        None
    }

    fn pixel_left(&self, node: NodeId) -> f32 {
        let Some(value) = self.inline_style(node, "left") else {
            return 0.0;
        };
        self.resolve_length(node, &value).unwrap_or(0.0)
    }

    fn runtime_style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node)
            .runtime
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.clone())
    }

    fn set_runtime_style(&mut self, node: NodeId, property: &str, value: Option<&str>) {
        let decls = &mut self.node_mut(node).runtime;
        match value {
            None => decls.retain(|(k, _)| k != property),
            Some(value) => {
                if let Some(entry) = decls.iter_mut().find(|(k, _)| k == property) {
                    entry.1 = value.to_string();
                } else {
                    decls.push((property.to_string(), value.to_string()));
                }
            }
        }
    }

    fn root_client_edges(&self) -> (f32, f32) {
        self.root_client_edges
    }

    fn root_scroll(&self) -> (f32, f32) {
        self.root_scroll
    }
}

impl ViewportOps for MockDom {
    fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    fn scroll_offset(&self) -> (f32, f32) {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compatkit_backend::RenderMode;

    fn modern() -> MockDom {
        MockDom::new(RenderMode::modern())
    }

    #[test]
    fn test_tree_links() {
        let mut dom = modern();
        let a = dom.create_element("div");
        let b = dom.create_element("span");
        let body = dom.body();
        dom.append_child(body, a);
        dom.append_child(body, b);

        assert_eq!(dom.first_child(body), Some(a));
        assert_eq!(dom.last_child(body), Some(b));
        assert_eq!(dom.next_sibling(a), Some(b));
        assert_eq!(dom.prev_sibling(b), Some(a));
        assert!(dom.contains(dom.document_root(), a));

        dom.remove(a);
        assert_eq!(dom.first_child(body), Some(b));
        assert!(!dom.in_document(a));
    }

    #[test]
    fn test_inline_style_text_round_trip() {
        let mut dom = modern();
        let node = dom.create_element("div");
        dom.set_inline_style(node, "borderLeftWidth", "2px").unwrap();
        dom.set_inline_style(node, "color", "red").unwrap();
        assert_eq!(
            dom.inline_style_text(node),
            "border-left-width: 2px; color: red;"
        );

        dom.set_inline_style_text(node, "width: 10px; float: left");
        assert_eq!(dom.inline_style(node, "width").as_deref(), Some("10px"));
        assert_eq!(dom.inline_style(node, "cssFloat").as_deref(), Some("left"));
    }

    #[test]
    fn test_modern_snapshot_resolves_lengths() {
        let mut dom = modern();
        let node = dom.create_element("div");
        dom.append_child(dom.body(), node);
        dom.set_inline_style(node, "marginLeft", "2em").unwrap();
        let snapshot = dom.computed_styles(node);
        assert_eq!(snapshot.get("marginLeft"), Some("32px"));
        assert_eq!(snapshot.get("display"), Some("block"));
    }

    #[test]
    fn test_legacy_snapshot_keeps_raw_values() {
        let mut dom = MockDom::new(RenderMode::legacy(7, false));
        let node = dom.create_element("div");
        dom.append_child(dom.body(), node);
        dom.set_inline_style(node, "marginLeft", "2em").unwrap();
        let snapshot = dom.computed_styles(node);
        assert_eq!(snapshot.get("marginLeft"), Some("2em"));
        assert_eq!(snapshot.get("borderLeftWidth"), Some("medium"));
        assert_eq!(snapshot.get("opacity"), None);
        assert_eq!(snapshot.get("styleFloat"), Some("none"));
    }

    #[test]
    fn test_pixel_left_uses_element_context() {
        let mut dom = MockDom::new(RenderMode::legacy(8, false));
        let parent = dom.create_element("div");
        let child = dom.create_element("div");
        dom.append_child(dom.body(), parent);
        dom.append_child(parent, child);
        dom.layout_mut(parent).inner_width = 200.0;

        dom.set_inline_style(child, "left", "1in").unwrap();
        assert_eq!(dom.pixel_left(child), 96.0);

        dom.set_inline_style(child, "left", "50%").unwrap();
        assert_eq!(dom.pixel_left(child), 100.0);
    }

    #[test]
    fn test_rejected_write_surfaces_error() {
        let mut dom = MockDom::new(RenderMode::legacy(7, true));
        let node = dom.create_element("div");
        dom.reject_style_property("border");
        assert!(dom.set_inline_style(node, "border", "bogus").is_err());
        assert_eq!(dom.inline_style(node, "border"), None);
    }
}
