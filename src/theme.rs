// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_I;
const SECONDARY_UI_TEXT: Color = BASE_G;

// ============================================================================
// UI PANELS (Toolbar)
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;
const TOOLBAR_BUTTON_ON: Color = Color::from_rgb8(0x14, 0x64, 0x14);

// ============================================================================
// DOCUMENT VIEW
// ============================================================================
// Paper-like page so ink reads as pen on paper
const DOCUMENT_BACKGROUND: Color = Color::from_rgb8(0xf4, 0xf1, 0xea);
const DOCUMENT_TEXT: Color = Color::from_rgb8(0x2a, 0x2a, 0x2a);
const DOCUMENT_BORDER: Color = BASE_F;
const DOCUMENT_SCROLLBAR_TRACK: Color = Color::from_rgb8(0xdd, 0xd8, 0xcc);
const DOCUMENT_SCROLLBAR_THUMB: Color = BASE_G;
const DOCUMENT_TAP_MARK: Color = Color::from_rgba8(0x57, 0x9a, 0xff, 0x80);

// ============================================================================
// OVERLAY
// ============================================================================
const OVERLAY_BORDER_ARMED: Color = Color::from_rgb8(0xff, 0xaa, 0x33);
const OVERLAY_BORDER_IDLE: Color = Color::from_rgba8(0x57, 0x9a, 0xff, 0x90);
const OVERLAY_TINT: Color = Color::from_rgba8(0x57, 0x9a, 0xff, 0x0c);

// ============================================================================
// INK
// ============================================================================
const INK_COLOR: Color = Color::from_rgb8(0xc8, 0x1e, 0x1e);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
    pub const BRIGHT: Color = super::BASE_L;
}

/// Colors for UI panels (toolbar, status line)
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    /// Background of a toggle button that is switched on
    pub const BUTTON_ON: Color = super::TOOLBAR_BUTTON_ON;
    pub const BUTTON_OUTLINE: Color = super::BASE_A;
}

/// Colors for the document (host) view
pub mod document {
    use super::Color;
    pub const BACKGROUND: Color = super::DOCUMENT_BACKGROUND;
    pub const TEXT: Color = super::DOCUMENT_TEXT;
    pub const BORDER: Color = super::DOCUMENT_BORDER;
    pub const SCROLLBAR_TRACK: Color = super::DOCUMENT_SCROLLBAR_TRACK;
    pub const SCROLLBAR_THUMB: Color = super::DOCUMENT_SCROLLBAR_THUMB;
    /// Marker left where the document last registered a tap
    pub const TAP_MARK: Color = super::DOCUMENT_TAP_MARK;
}

/// Colors for the overlay surface
pub mod overlay {
    use super::Color;
    /// Border while the overlay owns pointer input
    pub const BORDER_ARMED: Color = super::OVERLAY_BORDER_ARMED;
    /// Border while input passes through
    pub const BORDER_IDLE: Color = super::OVERLAY_BORDER_IDLE;
    /// Faint wash over the document while the overlay is shown
    pub const TINT: Color = super::OVERLAY_TINT;
}

/// Ink colors
pub mod ink {
    use super::Color;
    pub const STROKE: Color = super::INK_COLOR;
}

/// Sizes
pub mod size {
    /// Width of the overlay's border
    pub const OVERLAY_BORDER_WIDTH: f64 = 2.0;
    /// Radius of the tap marker
    pub const TAP_MARK_RADIUS: f64 = 6.0;
    /// Toolbar height
    pub const TOOLBAR_HEIGHT: f64 = 44.0;
    /// Corner radius for panels
    pub const PANEL_RADIUS: f64 = 6.0;
}
