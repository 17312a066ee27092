// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! The document view the overlay is laid over.
//!
//! `DocumentHost` owns the scroll state and the document-side reaction to
//! pointer input: touch panning and tap registration. Text layout lives in the
//! widget; the host only needs the laid-out content height.

use kurbo::{Point, Rect};

use crate::plane::geometry;
use crate::plane::{
    BorderWidths, EventOutcome, HostLayout, HostView, PointerId, PointerInput, PointerPhase,
    PointerType,
};
use crate::settings;

/// Movement (viewport units) after which a press counts as a pan, not a tap
const TAP_SLOP: f64 = 6.0;

#[derive(Debug, Clone, Copy)]
struct Pan {
    pointer_id: PointerId,
    last_y: f64,
    travelled: f64,
}

/// Scrollable document view
#[derive(Debug, Clone)]
pub struct DocumentHost {
    bounds: Rect,
    scroll_top: f64,
    content_height: f64,
    /// Last tap, in content space
    last_tap: Option<Point>,
    tap_count: usize,
    pan: Option<Pan>,
}

impl DocumentHost {
    pub fn new() -> Self {
        Self {
            bounds: Rect::ZERO,
            scroll_top: 0.0,
            content_height: 0.0,
            last_tap: None,
            tap_count: 0,
            pan: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.clamp_scroll();
    }

    pub fn set_content_height(&mut self, height: f64) {
        self.content_height = height.max(0.0);
        self.clamp_scroll();
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Scroll to `top`, clamped to the content. Returns true if the offset changed.
    pub fn scroll_to(&mut self, top: f64) -> bool {
        let max = self.layout().max_scroll();
        let clamped = top.clamp(0.0, max);
        if (clamped - self.scroll_top).abs() < f64::EPSILON {
            return false;
        }
        self.scroll_top = clamped;
        true
    }

    pub fn scroll_by(&mut self, dy: f64) -> bool {
        self.scroll_to(self.scroll_top + dy)
    }

    /// Height of the visible content area
    pub fn page_height(&self) -> f64 {
        self.layout().client_height()
    }

    pub fn last_tap(&self) -> Option<Point> {
        self.last_tap
    }

    pub fn tap_count(&self) -> usize {
        self.tap_count
    }

    /// Thumb of the scrollbar in the gutter, if the content overflows
    pub fn scrollbar_thumb(&self) -> Option<Rect> {
        let layout = self.layout();
        let max = layout.max_scroll();
        if max <= 0.0 {
            return None;
        }
        let track = self.scrollbar_track();
        let visible = layout.client_height() / layout.scroll_height;
        let thumb_height = (track.height() * visible).max(16.0).min(track.height());
        let travel = track.height() - thumb_height;
        let y0 = track.y0 + travel * (self.scroll_top / max);
        Some(Rect::new(track.x0, y0, track.x1, y0 + thumb_height))
    }

    /// The scrollbar gutter along the right edge of the content box
    pub fn scrollbar_track(&self) -> Rect {
        let layout = self.layout();
        let origin = layout.content_origin();
        let x0 = origin.x + layout.client_width;
        Rect::new(
            x0,
            origin.y,
            x0 + layout.scrollbar_gutter(),
            origin.y + layout.client_height(),
        )
    }

    /// Default action for pointer input the overlay did not take.
    ///
    /// Touch drags pan the document; a press released without moving is a
    /// tap. Returns true if the scroll offset changed.
    pub fn handle_native_pointer(&mut self, event: &PointerInput) -> bool {
        match event.phase {
            PointerPhase::Down => {
                if event.pointer_type == PointerType::Touch {
                    self.pan = Some(Pan {
                        pointer_id: event.pointer_id,
                        last_y: event.client.y,
                        travelled: 0.0,
                    });
                } else {
                    self.pan = None;
                }
                false
            }
            PointerPhase::Move => {
                let Some(pan) = &mut self.pan else {
                    return false;
                };
                if pan.pointer_id != event.pointer_id {
                    return false;
                }
                let dy = pan.last_y - event.client.y;
                pan.last_y = event.client.y;
                pan.travelled += dy.abs();
                self.scroll_by(dy)
            }
            PointerPhase::Up => {
                let panned = self
                    .pan
                    .take()
                    .is_some_and(|pan| pan.pointer_id == event.pointer_id && pan.travelled > TAP_SLOP);
                if !panned {
                    self.register_tap(event.client);
                }
                false
            }
            PointerPhase::Cancel => {
                self.pan = None;
                false
            }
        }
    }

    fn register_tap(&mut self, client: Point) {
        let layout = self.layout();
        if !layout.bounds.contains(client) {
            return;
        }
        let surface = geometry::viewport_to_surface(client, layout.content_origin());
        let content = geometry::surface_to_content(surface, self.scroll_top);
        tracing::debug!("Document tap at ({:.1}, {:.1})", content.x, content.y);
        self.last_tap = Some(content);
        self.tap_count += 1;
    }

    fn clamp_scroll(&mut self) {
        let max = self.layout().max_scroll();
        self.scroll_top = self.scroll_top.clamp(0.0, max);
    }
}

impl Default for DocumentHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostView for DocumentHost {
    fn layout(&self) -> HostLayout {
        HostLayout::new(
            self.bounds,
            BorderWidths::uniform(settings::document::BORDER),
        )
        .with_scrollbar_gutter(settings::document::SCROLLBAR_GUTTER)
        .with_scroll(self.scroll_top, self.content_height)
    }

    fn dispatch_pointer(&mut self, event: &PointerInput) -> EventOutcome {
        if event.phase == PointerPhase::Up {
            self.register_tap(event.client);
        }
        EventOutcome::IGNORED
    }
}
