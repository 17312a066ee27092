// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! The overlay controller.
//!
//! `HigherPlane` sits between a host document view and the overlay stacked on
//! top of it. It decides for every pointer event whether it is document
//! interaction (left alone, or handed back to the host) or ink (recorded and
//! painted).
//!
//! Painting has two paths. While a stroke is in progress each new segment is
//! stroked on its own so ink appears immediately. `redraw` replays the whole
//! buffer onto a cleared surface and is the reference rendering; it runs
//! whenever a stroke ends, the host scrolls, or the surface is resized.

use kurbo::Point;

use super::geometry::{self, HostLayout};
use super::host::HostView;
use super::input::{EventOutcome, InputEvent, PointerId, PointerInput, PointerPhase};
use super::overlay::OverlaySurface;
use super::stroke::{PointKind, StrokeBuffer, StrokePoint};
use super::surface::{DrawingSurface, InkStyle};

/// Startup options for [`HigherPlane`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneOptions {
    /// Let the mouse draw, not just a stylus
    pub draw_with_mouse: bool,
    pub style: InkStyle,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            draw_with_mouse: crate::settings::ink::DRAW_WITH_MOUSE,
            style: InkStyle::default(),
        }
    }
}

/// Overlay controller: owns the overlay, the drawing surface and the ink
pub struct HigherPlane<H, S> {
    host: H,
    overlay: OverlaySurface,
    surface: S,
    strokes: StrokeBuffer,

    /// Overlay is shown
    visible: bool,

    /// Overlay owns pointer input. Never true while hidden.
    active: bool,

    draw_with_mouse: bool,
    style: InkStyle,

    /// Viewport position of the drawing surface's origin
    surface_origin: Point,

    /// Pointer whose stroke is currently being captured
    inking: Option<PointerId>,
}

impl<H: HostView, S: DrawingSurface> HigherPlane<H, S> {
    /// Create a hidden, idle overlay covering `host`
    pub fn new(host: H, mut surface: S, options: PlaneOptions) -> Self {
        let layout = host.layout();
        surface.set_raster_size(layout.raster_size());
        Self {
            overlay: OverlaySurface::new(layout.overlay_box()),
            surface_origin: layout.content_origin(),
            host,
            surface,
            strokes: StrokeBuffer::new(),
            visible: false,
            active: false,
            draw_with_mouse: options.draw_with_mouse,
            style: options.style,
            inking: None,
        }
    }

    // ============================================================================
    // ACCESSORS
    // ============================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. Call [`Self::on_scroll`] or [`Self::on_resize`]
    /// after changing the host's scroll offset or layout.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn overlay(&self) -> &OverlaySurface {
        &self.overlay
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn strokes(&self) -> &StrokeBuffer {
        &self.strokes
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn draw_with_mouse(&self) -> bool {
        self.draw_with_mouse
    }

    pub fn set_draw_with_mouse(&mut self, enabled: bool) {
        if self.draw_with_mouse != enabled {
            tracing::info!("Draw with mouse: {}", enabled);
        }
        self.draw_with_mouse = enabled;
    }

    pub fn ink_style(&self) -> InkStyle {
        self.style
    }

    /// Change the pen. Existing ink is repainted with it.
    pub fn set_ink_style(&mut self, style: InkStyle) {
        self.style = style;
        self.redraw();
    }

    // ============================================================================
    // ACTIVATION AND VISIBILITY
    // ============================================================================

    /// Show or hide the overlay.
    ///
    /// Showing re-measures the host and re-provisions the drawing surface.
    /// Hiding also deactivates, so a hidden overlay never holds pointer input.
    pub fn set_visible(&mut self, show: bool) {
        if show {
            self.visible = true;
            self.overlay.set_displayed(true);
            self.update_geometry();
            self.resize_drawing_surface();
        } else {
            self.set_active(false);
            self.inking = None;
            self.visible = false;
            self.overlay.set_displayed(false);
        }
        tracing::info!("Overlay {}", if show { "shown" } else { "hidden" });
    }

    /// Switch between draw mode (overlay takes pointer input, border armed)
    /// and pass-through mode (input reaches the host, border idle).
    pub fn set_active(&mut self, active: bool) {
        if active && !self.visible {
            tracing::debug!("Ignoring activation of hidden overlay");
            return;
        }
        self.active = active;
        self.overlay.set_armed(active);
    }

    /// Re-measure the host after its layout changed. No-op while hidden;
    /// showing the overlay always re-measures.
    pub fn on_resize(&mut self) {
        if !self.visible {
            return;
        }
        self.update_geometry();
        self.resize_drawing_surface();
    }

    /// The host scrolled: repaint so ink stays attached to the content
    pub fn on_scroll(&mut self) -> EventOutcome {
        if !self.visible {
            return EventOutcome::IGNORED;
        }
        self.redraw();
        EventOutcome::painted()
    }

    fn update_geometry(&mut self) {
        let layout = self.host.layout();
        self.overlay.set_bounds(layout.overlay_box());
        self.surface_origin = layout.content_origin();
    }

    // ============================================================================
    // POINTER ROUTING
    // ============================================================================

    /// Deliver an event to whichever surface it lands on.
    ///
    /// Pointer events go to the overlay while it receives pointer events,
    /// otherwise to the host. Everything else belongs to the host.
    pub fn dispatch(&mut self, event: &InputEvent) -> EventOutcome {
        match event {
            InputEvent::Pointer(_) if self.overlay.receives_pointer_events() => {
                self.handle_overlay_event(event)
            }
            _ => self.handle_host_event(event),
        }
    }

    /// Listener on the host view.
    ///
    /// An ink-eligible press on a visible overlay is re-dispatched to the
    /// overlay, which then takes over; the host's default action is
    /// suppressed. A scroll repaints. Everything else passes through.
    pub fn handle_host_event(&mut self, event: &InputEvent) -> EventOutcome {
        match event {
            InputEvent::Pointer(pointer) => {
                if pointer.phase != PointerPhase::Down
                    || !self.visible
                    || !pointer.is_ink_eligible(self.draw_with_mouse)
                {
                    return EventOutcome::IGNORED;
                }

                tracing::debug!(
                    "Host {:?} from {} pointer {:?}, forwarding to overlay",
                    pointer.phase,
                    pointer.pointer_type.as_str(),
                    pointer.pointer_id
                );

                let forwarded = InputEvent::Pointer(pointer.forwarded());
                let outcome = self.handle_overlay_event(&forwarded);
                self.set_active(true);
                EventOutcome::consumed().merge(outcome)
            }
            InputEvent::Scroll { .. } => self.on_scroll(),
            InputEvent::Wheel { .. } | InputEvent::Click { .. } | InputEvent::Key => {
                EventOutcome::IGNORED
            }
        }
    }

    /// Listener on the overlay surface: turns pointer input into ink.
    pub fn handle_overlay_event(&mut self, event: &InputEvent) -> EventOutcome {
        let Some(pointer) = event.as_pointer() else {
            return EventOutcome::IGNORED;
        };
        if !self.visible {
            return EventOutcome::IGNORED;
        }

        match pointer.phase {
            PointerPhase::Down => {
                if !pointer.is_ink_eligible(self.draw_with_mouse) || self.inking.is_some() {
                    return EventOutcome::IGNORED;
                }
                self.inking = Some(pointer.pointer_id);
                self.record_point(pointer, PointKind::Start);
                EventOutcome::consumed()
            }
            PointerPhase::Move => {
                if !self.is_inking(pointer) {
                    return EventOutcome::IGNORED;
                }
                self.record_point(pointer, PointKind::Continue);
                EventOutcome::consumed()
            }
            PointerPhase::Up => {
                if !self.is_inking(pointer) && !pointer.is_ink_eligible(self.draw_with_mouse) {
                    return EventOutcome::IGNORED;
                }
                if self.is_inking(pointer) {
                    self.record_point(pointer, PointKind::End);
                    self.inking = None;
                }
                self.set_active(false);

                tracing::debug!("Stroke finished, forwarding {:?} to host", pointer.phase);
                let host_outcome = self.host.dispatch_pointer(&pointer.forwarded());
                EventOutcome::consumed().merge(host_outcome)
            }
            PointerPhase::Cancel => {
                if !self.is_inking(pointer) {
                    return EventOutcome::IGNORED;
                }
                // The stroke stays unterminated; redraw ends it at its last point
                tracing::debug!("Stroke cancelled by pointer {:?}", pointer.pointer_id);
                self.inking = None;
                self.set_active(false);
                self.redraw();
                EventOutcome::painted()
            }
        }
    }

    fn is_inking(&self, pointer: &PointerInput) -> bool {
        self.inking == Some(pointer.pointer_id)
    }

    // ============================================================================
    // STROKE CAPTURE AND PAINTING
    // ============================================================================

    /// Append a point for `event` and paint it.
    ///
    /// The viewport position is made surface-local and clamped to the raster;
    /// the stored `y` is in content space. `Start` opens a path, `Continue`
    /// strokes the new segment only, `End` strokes the last segment and then
    /// repaints everything.
    pub fn record_point(&mut self, event: &PointerInput, kind: PointKind) {
        let layout = self.host.layout();
        let local = geometry::viewport_to_surface(event.client, self.surface_origin);
        let local = geometry::clamp_to_raster(local, self.surface.raster_size());
        let content = geometry::surface_to_content(local, layout.scroll_top);

        self.strokes.push(StrokePoint::new(content, kind));

        match kind {
            PointKind::Start => self.surface.begin_path(local, self.style),
            PointKind::Continue => {
                self.surface.line_to(local);
                self.surface.stroke();
            }
            PointKind::End => {
                self.surface.line_to(local);
                self.surface.stroke();
                self.redraw();
            }
        }
    }

    /// Repaint the whole buffer onto a cleared surface.
    ///
    /// Points are shifted by the current scroll offset. A path is stroked at
    /// each `End`. A stroke that never got its `End` (cancelled, or cut off
    /// by hiding) is stroked where the next `Start` begins, or at the end of
    /// the buffer.
    pub fn redraw(&mut self) {
        if !self.visible {
            return;
        }

        let scroll_top = self.host.layout().scroll_top;
        self.surface.clear();

        let last = self.strokes.len().saturating_sub(1);
        for (i, point) in self.strokes.points().iter().enumerate() {
            let at = geometry::content_to_surface(point.content_pos(), scroll_top);
            match point.kind {
                PointKind::Start => {
                    // Finish an unterminated stroke before starting the next
                    if self.surface.has_open_path() {
                        self.surface.stroke();
                    }
                    self.surface.begin_path(at, self.style);
                }
                PointKind::Continue => {
                    self.surface.line_to(at);
                    if i == last {
                        self.surface.stroke();
                    }
                }
                PointKind::End => {
                    self.surface.line_to(at);
                    self.surface.stroke();
                }
            }
        }
    }

    /// Drop all ink and repaint
    pub fn clear(&mut self) {
        tracing::info!("Clearing {} ink points", self.strokes.len());
        self.strokes.clear();
        self.inking = None;
        self.surface.clear();
        self.redraw();
    }

    /// Match the raster to the host's visible content area, then repaint.
    /// No-op while hidden.
    pub fn resize_drawing_surface(&mut self) {
        if !self.visible {
            return;
        }
        let layout: HostLayout = self.host.layout();
        let size = layout.raster_size();
        if size != self.surface.raster_size() {
            tracing::debug!("Drawing surface resized to {}x{}", size.width, size.height);
        }
        self.surface.set_raster_size(size);
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::geometry::BorderWidths;
    use crate::plane::input::PointerType;
    use crate::plane::overlay::BorderMark;
    use crate::plane::surface::PathSurface;
    use kurbo::{PathEl, Rect, Size};

    struct TestHost {
        layout: HostLayout,
        received: Vec<PointerInput>,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                layout: HostLayout::new(
                    Rect::new(0.0, 0.0, 400.0, 300.0),
                    BorderWidths::default(),
                )
                .with_scroll(0.0, 2000.0),
                received: Vec::new(),
            }
        }
    }

    impl HostView for TestHost {
        fn layout(&self) -> HostLayout {
            self.layout
        }

        fn dispatch_pointer(&mut self, event: &PointerInput) -> EventOutcome {
            self.received.push(*event);
            EventOutcome::IGNORED
        }
    }

    fn plane() -> HigherPlane<TestHost, PathSurface> {
        HigherPlane::new(TestHost::new(), PathSurface::default(), PlaneOptions::default())
    }

    fn visible_plane() -> HigherPlane<TestHost, PathSurface> {
        let mut plane = plane();
        plane.set_visible(true);
        plane
    }

    fn pointer(phase: PointerPhase, kind: PointerType, x: f64, y: f64) -> InputEvent {
        InputEvent::Pointer(PointerInput::native(
            phase,
            PointerId(1),
            kind,
            Point::new(x, y),
        ))
    }

    fn pen(phase: PointerPhase, x: f64, y: f64) -> InputEvent {
        pointer(phase, PointerType::Pen, x, y)
    }

    fn draw_stroke(plane: &mut HigherPlane<TestHost, PathSurface>, points: &[(f64, f64)]) {
        let (first, rest) = points.split_first().expect("stroke needs points");
        let (last, middle) = rest.split_last().expect("stroke needs two points");
        plane.dispatch(&pen(PointerPhase::Down, first.0, first.1));
        for &(x, y) in middle {
            plane.dispatch(&pen(PointerPhase::Move, x, y));
        }
        plane.dispatch(&pen(PointerPhase::Up, last.0, last.1));
    }

    fn kinds(plane: &HigherPlane<TestHost, PathSurface>) -> Vec<PointKind> {
        plane.strokes().points().iter().map(|p| p.kind).collect()
    }

    fn painted_points(plane: &HigherPlane<TestHost, PathSurface>) -> Vec<Vec<Point>> {
        plane
            .surface()
            .painted()
            .iter()
            .map(|painted| {
                painted
                    .path
                    .elements()
                    .iter()
                    .map(|el| match el {
                        PathEl::MoveTo(p) | PathEl::LineTo(p) => *p,
                        other => panic!("unexpected path element {other:?}"),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn new_plane_is_hidden_and_idle() {
        let plane = plane();
        assert!(!plane.is_visible());
        assert!(!plane.is_active());
        assert!(plane.strokes().is_empty());
        assert_eq!(plane.surface().raster_size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn pen_down_on_host_forwards_to_overlay_and_activates() {
        let mut plane = visible_plane();
        let outcome = plane.dispatch(&pen(PointerPhase::Down, 10.0, 20.0));

        assert!(outcome.default_prevented);
        assert!(plane.is_active());
        assert!(plane.overlay().receives_pointer_events());
        assert_eq!(plane.overlay().border(), BorderMark::Armed);
        assert_eq!(kinds(&plane), vec![PointKind::Start]);
        assert_eq!(plane.strokes().points()[0].content_pos(), Point::new(10.0, 20.0));
    }

    #[test]
    fn full_stroke_records_start_continues_end() {
        let mut plane = visible_plane();
        draw_stroke(
            &mut plane,
            &[(10.0, 10.0), (11.0, 12.0), (13.0, 15.0), (16.0, 19.0), (20.0, 24.0)],
        );

        assert_eq!(
            kinds(&plane),
            vec![
                PointKind::Start,
                PointKind::Continue,
                PointKind::Continue,
                PointKind::Continue,
                PointKind::End,
            ]
        );
        assert!(!plane.is_active());
        assert_eq!(plane.overlay().border(), BorderMark::Idle);
    }

    #[test]
    fn pointer_up_is_forwarded_to_host_unchanged() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(10.0, 10.0), (42.5, 17.25)]);

        let received = &plane.host().received;
        assert_eq!(received.len(), 1);
        let up = received[0];
        assert_eq!(up.phase, PointerPhase::Up);
        assert_eq!(up.pointer_id, PointerId(1));
        assert_eq!(up.pointer_type, PointerType::Pen);
        assert_eq!(up.client, Point::new(42.5, 17.25));
        assert!(up.synthetic);
        assert!(up.bubbles && up.cancelable);
    }

    #[test]
    fn mouse_passes_through_unless_enabled() {
        let mut plane = visible_plane();
        let outcome = plane.dispatch(&pointer(PointerPhase::Down, PointerType::Mouse, 5.0, 5.0));
        assert_eq!(outcome, EventOutcome::IGNORED);
        assert!(!plane.is_active());
        assert!(plane.strokes().is_empty());

        plane.set_draw_with_mouse(true);
        plane.dispatch(&pointer(PointerPhase::Down, PointerType::Mouse, 5.0, 5.0));
        plane.dispatch(&pointer(PointerPhase::Move, PointerType::Mouse, 6.0, 6.0));
        plane.dispatch(&pointer(PointerPhase::Up, PointerType::Mouse, 7.0, 7.0));
        assert_eq!(
            kinds(&plane),
            vec![PointKind::Start, PointKind::Continue, PointKind::End]
        );
    }

    #[test]
    fn touch_never_draws() {
        let mut plane = visible_plane();
        plane.set_draw_with_mouse(true);
        let outcome = plane.dispatch(&pointer(PointerPhase::Down, PointerType::Touch, 5.0, 5.0));
        assert!(!outcome.default_prevented);
        assert!(plane.strokes().is_empty());
    }

    #[test]
    fn hidden_overlay_ignores_pen() {
        let mut plane = plane();
        let outcome = plane.dispatch(&pen(PointerPhase::Down, 5.0, 5.0));
        assert_eq!(outcome, EventOutcome::IGNORED);
        assert!(!plane.is_active());
        assert!(plane.strokes().is_empty());
    }

    #[test]
    fn redraw_paints_one_connected_path() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)]);

        assert_eq!(
            painted_points(&plane),
            vec![vec![
                Point::new(10.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(30.0, 30.0),
            ]]
        );
    }

    #[test]
    fn incremental_painting_shows_segments_mid_stroke() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 10.0));
        plane.dispatch(&pen(PointerPhase::Move, 20.0, 10.0));
        plane.dispatch(&pen(PointerPhase::Move, 30.0, 10.0));

        assert_eq!(
            painted_points(&plane),
            vec![
                vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0)],
                vec![Point::new(20.0, 10.0), Point::new(30.0, 10.0)],
            ]
        );
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(1.0, 1.0), (5.0, 9.0), (8.0, 3.0)]);
        draw_stroke(&mut plane, &[(50.0, 50.0), (60.0, 70.0)]);

        plane.redraw();
        let first = plane.surface().painted().to_vec();
        plane.redraw();
        assert_eq!(plane.surface().painted(), first.as_slice());
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn clear_then_redraw_is_blank() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(1.0, 1.0), (5.0, 9.0), (8.0, 3.0)]);
        assert!(!plane.surface().is_blank());

        plane.clear();
        plane.redraw();
        assert!(plane.strokes().is_empty());
        assert!(plane.surface().is_blank());
    }

    #[test]
    fn scrolling_shifts_rendered_points_up() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(10.0, 100.0), (20.0, 120.0), (30.0, 140.0)]);

        plane.host_mut().layout.scroll_top = 40.0;
        let outcome = plane.dispatch(&InputEvent::Scroll { scroll_top: 40.0 });
        assert!(outcome.needs_paint);

        let stored: Vec<f64> = plane.strokes().points().iter().map(|p| p.y).collect();
        let rendered: Vec<f64> = painted_points(&plane)[0].iter().map(|p| p.y).collect();
        let expected: Vec<f64> = stored.iter().map(|y| y - 40.0).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn capture_stores_content_space_y() {
        let mut plane = visible_plane();
        plane.host_mut().layout.scroll_top = 250.0;
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 30.0));
        assert_eq!(plane.strokes().points()[0].content_pos(), Point::new(10.0, 280.0));
    }

    #[test]
    fn capture_is_relative_to_surface_origin() {
        let mut host = TestHost::new();
        host.layout = HostLayout::new(
            Rect::new(100.0, 50.0, 500.0, 350.0),
            BorderWidths::uniform(2.0),
        );
        let mut plane = HigherPlane::new(host, PathSurface::default(), PlaneOptions::default());
        plane.set_visible(true);
        plane.dispatch(&pen(PointerPhase::Down, 112.0, 72.0));
        assert_eq!(plane.strokes().points()[0].content_pos(), Point::new(10.0, 20.0));
    }

    #[test]
    fn out_of_bounds_points_are_clamped() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 10.0));
        plane.dispatch(&pen(PointerPhase::Move, -30.0, 900.0));
        let clamped = plane.strokes().points()[1];
        assert_eq!((clamped.x, clamped.y), (0.0, 300.0));
    }

    #[test]
    fn set_active_round_trip_restores_state() {
        let mut plane = visible_plane();
        let before = *plane.overlay();
        plane.set_active(true);
        assert!(plane.overlay().receives_pointer_events());
        plane.set_active(false);
        plane.set_active(false);
        assert_eq!(*plane.overlay(), before);
        assert!(!plane.is_active());
    }

    #[test]
    fn hiding_deactivates() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 10.0));
        assert!(plane.is_active());

        plane.set_visible(false);
        assert!(!plane.is_active());
        assert!(!plane.overlay().receives_pointer_events());

        plane.set_active(true);
        assert!(!plane.is_active());
    }

    #[test]
    fn resize_while_hidden_is_noop() {
        let mut plane = plane();
        plane.host_mut().layout = HostLayout::new(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            BorderWidths::default(),
        );
        plane.on_resize();
        assert_eq!(plane.surface().raster_size(), Size::new(400.0, 300.0));

        plane.set_visible(true);
        assert_eq!(plane.surface().raster_size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn resize_keeps_ink() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(10.0, 10.0), (20.0, 20.0)]);

        plane.host_mut().layout = HostLayout::new(
            Rect::new(0.0, 0.0, 600.0, 400.0),
            BorderWidths::default(),
        )
        .with_scrollbar_gutter(15.0);
        plane.on_resize();

        assert_eq!(plane.surface().raster_size(), Size::new(585.0, 400.0));
        assert_eq!(plane.surface().painted().len(), 1);
    }

    #[test]
    fn unterminated_trailing_stroke_still_renders() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(0.0, 0.0), (5.0, 5.0)]);
        plane.dispatch(&pen(PointerPhase::Down, 50.0, 50.0));
        plane.dispatch(&pen(PointerPhase::Move, 60.0, 60.0));

        plane.redraw();
        let painted = painted_points(&plane);
        assert_eq!(painted.len(), 2);
        assert_eq!(painted[1], vec![Point::new(50.0, 50.0), Point::new(60.0, 60.0)]);
    }

    #[test]
    fn cancel_leaves_stroke_unterminated_and_deactivates() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 10.0));
        plane.dispatch(&pen(PointerPhase::Move, 20.0, 20.0));
        let outcome = plane.dispatch(&pen(PointerPhase::Cancel, 20.0, 20.0));

        assert!(outcome.needs_paint);
        assert!(!plane.is_active());
        assert_eq!(kinds(&plane), vec![PointKind::Start, PointKind::Continue]);
        assert_eq!(plane.strokes().stroke_count(), 1);
        assert!(plane.host().received.is_empty());
    }

    #[test]
    fn cancelled_stroke_survives_next_stroke() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 10.0));
        plane.dispatch(&pen(PointerPhase::Move, 20.0, 20.0));
        plane.dispatch(&pen(PointerPhase::Cancel, 20.0, 20.0));

        draw_stroke(&mut plane, &[(100.0, 100.0), (110.0, 110.0), (120.0, 120.0)]);

        assert_eq!(plane.strokes().stroke_count(), 2);
        let painted = painted_points(&plane);
        assert_eq!(painted.len(), 2);
        assert_eq!(painted[0], vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]);
        assert_eq!(
            painted[1],
            vec![
                Point::new(100.0, 100.0),
                Point::new(110.0, 110.0),
                Point::new(120.0, 120.0),
            ]
        );
    }

    #[test]
    fn stroke_cut_off_by_hiding_survives_next_stroke() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 10.0));
        plane.dispatch(&pen(PointerPhase::Move, 20.0, 20.0));
        plane.set_visible(false);
        plane.set_visible(true);

        draw_stroke(&mut plane, &[(100.0, 100.0), (120.0, 120.0)]);

        let painted = painted_points(&plane);
        assert_eq!(painted.len(), 2);
        assert_eq!(painted[0], vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]);
        assert_eq!(painted[1], vec![Point::new(100.0, 100.0), Point::new(120.0, 120.0)]);
    }

    #[test]
    fn cancelled_stroke_survives_scroll_repaint() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 50.0));
        plane.dispatch(&pen(PointerPhase::Move, 20.0, 60.0));
        plane.dispatch(&pen(PointerPhase::Cancel, 20.0, 60.0));
        draw_stroke(&mut plane, &[(100.0, 100.0), (120.0, 120.0)]);

        plane.host_mut().layout.scroll_top = 30.0;
        plane.on_scroll();

        let painted = painted_points(&plane);
        assert_eq!(painted.len(), 2);
        assert_eq!(painted[0], vec![Point::new(10.0, 20.0), Point::new(20.0, 30.0)]);
    }

    #[test]
    fn new_ink_style_repaints_existing_strokes() {
        let mut plane = visible_plane();
        draw_stroke(&mut plane, &[(0.0, 0.0), (5.0, 5.0)]);
        draw_stroke(&mut plane, &[(10.0, 10.0), (15.0, 15.0)]);

        plane.set_ink_style(InkStyle::new(9.0));
        let painted = plane.surface().painted();
        assert_eq!(painted.len(), 2);
        assert!(painted.iter().all(|p| p.style == InkStyle::new(9.0)));
    }

    #[test]
    fn second_pointer_is_ignored_mid_stroke() {
        let mut plane = visible_plane();
        plane.dispatch(&pen(PointerPhase::Down, 10.0, 10.0));

        let other = InputEvent::Pointer(PointerInput::native(
            PointerPhase::Move,
            PointerId(2),
            PointerType::Pen,
            Point::new(90.0, 90.0),
        ));
        let outcome = plane.dispatch(&other);
        assert_eq!(outcome, EventOutcome::IGNORED);
        assert_eq!(plane.strokes().len(), 1);
    }

    #[test]
    fn hover_move_on_armed_overlay_is_not_recorded() {
        let mut plane = visible_plane();
        plane.set_active(true);
        plane.dispatch(&pen(PointerPhase::Move, 10.0, 10.0));
        assert!(plane.strokes().is_empty());
    }

    #[test]
    fn non_pointer_host_events_pass_through() {
        let mut plane = visible_plane();
        assert_eq!(plane.dispatch(&InputEvent::Key), EventOutcome::IGNORED);
        assert_eq!(
            plane.dispatch(&InputEvent::Click {
                client: Point::new(1.0, 1.0)
            }),
            EventOutcome::IGNORED
        );
    }
}
