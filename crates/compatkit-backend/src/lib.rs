//! # CompatKit Backend
//!
//! Host-engine boundary for the CompatKit compatibility layer.
//!
//! ## Design Goals
//!
//! 1. **Opaque handles**: elements are addressed by `NodeId`; the host
//!    engine owns the render tree, CompatKit never does
//! 2. **Capability traits**: everything the layer needs from an engine is
//!    expressed as a trait method, so any engine (or a test double) can
//!    plug in
//! 3. **One-time configuration**: `RenderMode` is resolved once per process
//!    and injected; no per-call feature detection

use std::collections::HashMap;

use thiserror::Error;

mod mode;
mod traits;

pub use mode::{EngineVersion, RenderMode};
pub use traits::{DomBackend, ElementOps, MetricsOps, TreeOps, ViewportOps};

/// Errors surfaced by a host engine on write operations.
///
/// Read paths never error; per the compatibility contract they degrade to
/// safe defaults instead.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("Engine rejected style value for {property}: {value}")]
    RejectedStyleValue { property: String, value: String },
}

/// Unique identifier for a live node in the host engine's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A native bounding rectangle as reported by the host engine, in viewport
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A read-only capture of an element's effective style.
///
/// Valid only for the instant it is taken: any subsequent style write makes
/// it stale, so callers must re-capture after mutating. Property names use
/// the engine accessor convention (`borderLeftWidth`, `cssFloat`, ...).
#[derive(Debug, Clone, Default)]
pub struct ComputedSnapshot {
    values: HashMap<String, String>,
}

impl ComputedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.values.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.values.get(property).map(String::as_str)
    }

    /// Value of `property`, or the empty string when the engine reports
    /// nothing for it.
    pub fn get_or_empty(&self, property: &str) -> &str {
        self.get(property).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
