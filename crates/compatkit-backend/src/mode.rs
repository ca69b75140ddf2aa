//! Process-wide render-mode configuration.
//!
//! The host resolves its capabilities once at startup and hands the result
//! to CompatKit. The struct is plain data so it can also be loaded from a
//! config file.

use serde::{Deserialize, Serialize};

/// Generation of the host rendering engine.
///
/// `Legacy(n)` carries the legacy document-mode generation number; anything
/// with a native computed-style API is `Modern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineVersion {
    Legacy(u8),
    Modern,
}

impl EngineVersion {
    pub fn is_legacy(&self) -> bool {
        matches!(self, EngineVersion::Legacy(_))
    }

    /// Older-generation legacy engine (generation 7 and below). These use
    /// the wider border-keyword pixel table.
    pub fn is_older(&self) -> bool {
        matches!(self, EngineVersion::Legacy(n) if *n <= 7)
    }
}

/// Immutable capability description of the host engine, resolved once per
/// process. Every CompatKit component receives it at construction; nothing
/// re-detects capabilities per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderMode {
    /// Legacy quirks document mode (non-standard box measurement).
    pub quirks_mode: bool,
    pub engine_version: EngineVersion,
    /// Engine resolves computed styles to pixels natively.
    pub supports_computed_style_api: bool,
    /// Engine clears an inline declaration when assigned an absent value.
    pub supports_inline_style_clear: bool,
    /// Engine has a standard 0..1 opacity channel (vs. the filter string).
    pub supports_native_opacity: bool,
}

impl RenderMode {
    /// A standards-mode engine with the full modern capability set.
    pub fn modern() -> Self {
        Self {
            quirks_mode: false,
            engine_version: EngineVersion::Modern,
            supports_computed_style_api: true,
            supports_inline_style_clear: true,
            supports_native_opacity: true,
        }
    }

    /// A legacy engine of the given generation.
    pub fn legacy(generation: u8, quirks_mode: bool) -> Self {
        Self {
            quirks_mode,
            engine_version: EngineVersion::Legacy(generation),
            supports_computed_style_api: false,
            supports_inline_style_clear: false,
            supports_native_opacity: false,
        }
    }

    /// Quirks-mode box measurement: the engine collapses content and border
    /// boxes, so outer dimensions are reported unmodified.
    pub fn quirks_box_model(&self) -> bool {
        self.quirks_mode && matches!(self.engine_version, EngineVersion::Legacy(n) if n < 10)
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::modern()
    }
}
