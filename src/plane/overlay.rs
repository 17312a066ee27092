// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Presentation state of the overlay surface

use kurbo::Rect;

/// How the overlay's border is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMark {
    /// Overlay owns pointer input
    Armed,
    /// Pointer input passes through to the document
    Idle,
}

/// The transparent layer stacked above the host view.
///
/// Holds what a styled element would: whether it is displayed, whether it
/// receives pointer events, how its border is marked, and where it sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySurface {
    displayed: bool,
    pointer_events: bool,
    border: BorderMark,
    bounds: Rect,
}

impl OverlaySurface {
    /// A hidden, idle overlay covering `bounds`
    pub fn new(bounds: Rect) -> Self {
        Self {
            displayed: false,
            pointer_events: false,
            border: BorderMark::Idle,
            bounds,
        }
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// Whether pointer events land on the overlay instead of the host
    pub fn receives_pointer_events(&self) -> bool {
        self.displayed && self.pointer_events
    }

    pub fn border(&self) -> BorderMark {
        self.border
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    pub(crate) fn set_armed(&mut self, armed: bool) {
        self.pointer_events = armed;
        self.border = if armed {
            BorderMark::Armed
        } else {
            BorderMark::Idle
        };
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_overlay_is_hidden_and_idle() {
        let overlay = OverlaySurface::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!overlay.is_displayed());
        assert!(!overlay.receives_pointer_events());
        assert_eq!(overlay.border(), BorderMark::Idle);
    }

    #[test]
    fn hidden_overlay_never_receives_pointer_events() {
        let mut overlay = OverlaySurface::new(Rect::ZERO);
        overlay.set_armed(true);
        assert!(!overlay.receives_pointer_events());
        overlay.set_displayed(true);
        assert!(overlay.receives_pointer_events());
    }
}
