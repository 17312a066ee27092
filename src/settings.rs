// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`. Values a
//! user may want to change at runtime are read from `higher-plane.toml`
//! (see `config.rs`); the constants here are their defaults.

// ============================================================================
// INK SETTINGS
// ============================================================================
/// Width of an ink stroke (surface units)
const INK_STROKE_WIDTH: f64 = 3.0;

/// Whether the mouse draws by default (a stylus always does)
const INK_DRAW_WITH_MOUSE: bool = false;

// ============================================================================
// OVERLAY SETTINGS
// ============================================================================
/// The overlay is shrunk by this much on its right and bottom edges so the
/// host's own border stays visible
const OVERLAY_BORDER_INSET: f64 = 1.0;

/// Whether the overlay is shown at startup
const OVERLAY_SHOW_ON_START: bool = true;

// ============================================================================
// DOCUMENT VIEW SETTINGS
// ============================================================================
/// Border around the document view
const DOCUMENT_BORDER: f64 = 1.0;

/// Width reserved for the document view's scrollbar
const DOCUMENT_SCROLLBAR_GUTTER: f64 = 10.0;

/// Padding between the content box and the text
const DOCUMENT_PADDING: f64 = 24.0;

/// Body text size
const DOCUMENT_TEXT_SIZE: f32 = 18.0;

/// Vertical gap between paragraphs
const DOCUMENT_PARAGRAPH_GAP: f64 = 14.0;

// ============================================================================
// SCROLL SETTINGS
// ============================================================================
/// Pixels scrolled per wheel line or arrow key
const SCROLL_LINE_STEP: f64 = 40.0;

/// Fraction of the visible height scrolled by Page Up/Down
const SCROLL_PAGE_FRACTION: f64 = 0.9;

// ============================================================================
// FILE WATCHER SETTINGS
// ============================================================================
/// Quiet period before an external document change triggers a reload
const WATCH_DEBOUNCE_MS: u64 = 1000;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Ink pen defaults
pub mod ink {
    /// Stroke width (surface units)
    pub const STROKE_WIDTH: f64 = super::INK_STROKE_WIDTH;

    /// Mouse drawing enabled by default
    pub const DRAW_WITH_MOUSE: bool = super::INK_DRAW_WITH_MOUSE;
}

/// Overlay geometry and startup state
pub mod overlay {
    /// Inset on the right and bottom edges
    pub const BORDER_INSET: f64 = super::OVERLAY_BORDER_INSET;

    /// Shown at startup
    pub const SHOW_ON_START: bool = super::OVERLAY_SHOW_ON_START;
}

/// Document view layout
pub mod document {
    pub const BORDER: f64 = super::DOCUMENT_BORDER;
    pub const SCROLLBAR_GUTTER: f64 = super::DOCUMENT_SCROLLBAR_GUTTER;
    pub const PADDING: f64 = super::DOCUMENT_PADDING;
    pub const TEXT_SIZE: f32 = super::DOCUMENT_TEXT_SIZE;
    pub const PARAGRAPH_GAP: f64 = super::DOCUMENT_PARAGRAPH_GAP;
}

/// Scrolling steps for wheel and keyboard
pub mod scroll {
    pub const LINE_STEP: f64 = super::SCROLL_LINE_STEP;
    pub const PAGE_FRACTION: f64 = super::SCROLL_PAGE_FRACTION;
}

/// Document file watching
pub mod watch {
    /// Debounce window in milliseconds
    pub const DEBOUNCE_MS: u64 = super::WATCH_DEBOUNCE_MS;
}
