// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Input events as the overlay sees them.
//!
//! Native toolkit events are converted into [`InputEvent`] exactly once, where
//! they enter the reader widget. From there on, routing only matches on the
//! variant; nothing downstream inspects toolkit types.

use kurbo::{Point, Vec2};

/// Kind of device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
    Unknown,
}

impl PointerType {
    /// Name as used by DOM-style pointer events
    pub fn as_str(self) -> &'static str {
        match self {
            PointerType::Mouse => "mouse",
            PointerType::Pen => "pen",
            PointerType::Touch => "touch",
            PointerType::Unknown => "",
        }
    }
}

/// Lifecycle phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Stable numeric identity of one pointer (one finger, one pen, the mouse)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerId(pub u64);

/// A pointer event in viewport ("client") coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub phase: PointerPhase,
    pub pointer_id: PointerId,
    pub pointer_type: PointerType,
    /// Position in viewport coordinates
    pub client: Point,
    pub bubbles: bool,
    pub cancelable: bool,
    /// True for events re-dispatched by the overlay controller
    pub synthetic: bool,
}

impl PointerInput {
    /// An event as delivered by the platform
    pub fn native(
        phase: PointerPhase,
        pointer_id: PointerId,
        pointer_type: PointerType,
        client: Point,
    ) -> Self {
        Self {
            phase,
            pointer_id,
            pointer_type,
            client,
            bubbles: true,
            cancelable: true,
            synthetic: false,
        }
    }

    /// Build the synthetic copy used to re-dispatch this event on another
    /// surface.
    ///
    /// Pointer id, pointer type and client coordinates carry over unchanged;
    /// the copy always bubbles and is cancelable.
    pub fn forwarded(&self) -> Self {
        Self {
            phase: self.phase,
            pointer_id: self.pointer_id,
            pointer_type: self.pointer_type,
            client: self.client,
            bubbles: true,
            cancelable: true,
            synthetic: true,
        }
    }

    /// Whether this event should be treated as ink rather than document
    /// interaction
    pub fn is_ink_eligible(&self, draw_with_mouse: bool) -> bool {
        is_ink_eligible(self.pointer_type, draw_with_mouse)
    }
}

/// A stylus always inks; a mouse only when mouse drawing is enabled.
pub fn is_ink_eligible(pointer_type: PointerType, draw_with_mouse: bool) -> bool {
    match pointer_type {
        PointerType::Pen => true,
        PointerType::Mouse => draw_with_mouse,
        PointerType::Touch | PointerType::Unknown => false,
    }
}

/// One input event, tagged by category
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerInput),
    /// Wheel rotation or trackpad pan, in viewport units
    Wheel { delta: Vec2 },
    /// The host's scroll offset changed
    Scroll { scroll_top: f64 },
    Click { client: Point },
    Key,
}

impl InputEvent {
    pub fn as_pointer(&self) -> Option<&PointerInput> {
        match self {
            InputEvent::Pointer(pointer) => Some(pointer),
            _ => None,
        }
    }
}

/// What the controller did with an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The host must not run its own default action for this event
    pub default_prevented: bool,
    /// The drawing surface changed and should be presented
    pub needs_paint: bool,
}

impl EventOutcome {
    pub const IGNORED: Self = Self {
        default_prevented: false,
        needs_paint: false,
    };

    pub(crate) fn painted() -> Self {
        Self {
            default_prevented: false,
            needs_paint: true,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            default_prevented: true,
            needs_paint: true,
        }
    }

    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            default_prevented: self.default_prevented || other.default_prevented,
            needs_paint: self.needs_paint || other.needs_paint,
        }
    }
}
