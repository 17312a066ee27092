// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer and keyboard handlers for ReaderWidget.
//!
//! Native Masonry events are turned into [`InputEvent`]s here and nowhere
//! else.

use super::{ReaderAction, ReaderWidget};
use crate::plane::{HostView, InputEvent, PointerId, PointerInput, PointerPhase, PointerType};
use crate::settings;
use kurbo::Vec2;
use masonry::core::{EventCtx, PointerEvent, PointerInfo, ScrollDelta};

/// Assigns stable numeric ids to platform pointer ids
#[derive(Debug, Default)]
pub(super) struct PointerIds {
    known: Vec<(Option<masonry::core::PointerId>, u64)>,
    next: u64,
}

impl PointerIds {
    fn id_for(&mut self, native: Option<masonry::core::PointerId>) -> PointerId {
        if let Some((_, id)) = self.known.iter().find(|(known, _)| *known == native) {
            return PointerId(*id);
        }
        self.next += 1;
        self.known.push((native, self.next));
        PointerId(self.next)
    }

    fn release(&mut self, native: Option<masonry::core::PointerId>) {
        self.known.retain(|(known, _)| *known != native);
    }
}

fn pointer_type(info: &PointerInfo) -> PointerType {
    match info.pointer_type {
        masonry::core::PointerType::Mouse => PointerType::Mouse,
        masonry::core::PointerType::Pen => PointerType::Pen,
        masonry::core::PointerType::Touch => PointerType::Touch,
        _ => PointerType::Unknown,
    }
}

impl ReaderWidget {
    // ============================================================================
    // EVENT TRANSLATION
    // ============================================================================

    /// Convert a Masonry pointer event into an overlay input event
    fn translate_pointer(
        &mut self,
        ctx: &EventCtx<'_>,
        event: &PointerEvent,
    ) -> Option<InputEvent> {
        let (phase, info, position) = match event {
            PointerEvent::Down(down) => (PointerPhase::Down, &down.pointer, down.state.position),
            PointerEvent::Move(update) => {
                (PointerPhase::Move, &update.pointer, update.current.position)
            }
            PointerEvent::Up(up) => (PointerPhase::Up, &up.pointer, up.state.position),
            PointerEvent::Cancel(info) => {
                let id = self.pointer_ids.id_for(info.pointer_id);
                self.pointer_ids.release(info.pointer_id);
                return Some(InputEvent::Pointer(PointerInput::native(
                    PointerPhase::Cancel,
                    id,
                    pointer_type(info),
                    self.last_pointer_position,
                )));
            }
            PointerEvent::Scroll(scroll) => {
                let delta = match &scroll.delta {
                    ScrollDelta::LineDelta(x, y) => Vec2::new(
                        -(*x as f64) * settings::scroll::LINE_STEP,
                        -(*y as f64) * settings::scroll::LINE_STEP,
                    ),
                    ScrollDelta::PixelDelta(pos) => Vec2::new(-pos.x, -pos.y),
                    ScrollDelta::PageDelta(x, y) => {
                        let page = self.page_step();
                        Vec2::new(-(*x as f64) * page, -(*y as f64) * page)
                    }
                };
                return Some(InputEvent::Wheel { delta });
            }
            _ => return None,
        };

        let client = ctx.local_position(position);
        self.last_pointer_position = client;

        let id = self.pointer_ids.id_for(info.pointer_id);
        if phase == PointerPhase::Up {
            self.pointer_ids.release(info.pointer_id);
        }

        Some(InputEvent::Pointer(PointerInput::native(
            phase,
            id,
            pointer_type(info),
            client,
        )))
    }

    fn page_step(&self) -> f64 {
        self.plane.host().page_height() * settings::scroll::PAGE_FRACTION
    }

    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    pub(super) fn handle_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        let Some(input) = self.translate_pointer(ctx, event) else {
            return;
        };

        match input {
            InputEvent::Pointer(pointer) => self.route_pointer(ctx, &pointer),
            InputEvent::Wheel { delta } => {
                self.plane.dispatch(&input);
                if self.scroll_host_by(ctx, delta.y) {
                    ctx.set_handled();
                }
            }
            _ => {}
        }
    }

    fn route_pointer(&mut self, ctx: &mut EventCtx<'_>, pointer: &PointerInput) {
        let was_active = self.plane.is_active();
        let to_overlay = self.plane.overlay().receives_pointer_events();
        let points_before = self.plane.strokes().len();
        let taps_before = self.plane.host().tap_count();

        let mut outcome = self.plane.dispatch(&InputEvent::Pointer(*pointer));

        if !to_overlay && !outcome.default_prevented {
            // Not ink: the document's own default action applies
            if self.plane.host_mut().handle_native_pointer(pointer) {
                let scroll_top = self.plane.host().scroll_top();
                outcome = outcome.merge(self.plane.dispatch(&InputEvent::Scroll { scroll_top }));
            }
            if self.plane.host().tap_count() != taps_before {
                let click = InputEvent::Click {
                    client: pointer.client,
                };
                outcome = outcome.merge(self.plane.dispatch(&click));
            }
        }

        let is_active = self.plane.is_active();
        if is_active && !was_active {
            ctx.capture_pointer();
        } else if was_active && !is_active {
            ctx.release_pointer();
        }

        if outcome.default_prevented {
            ctx.set_handled();
        }
        if outcome.needs_paint || self.plane.host().tap_count() != taps_before {
            ctx.request_render();
        }

        // Status only changes at stroke boundaries and taps
        let stroke_boundary = pointer.phase != PointerPhase::Move
            && self.plane.strokes().len() != points_before;
        if stroke_boundary || self.plane.host().tap_count() != taps_before {
            self.emit_status(ctx);
        }
    }

    /// Scroll the document and let the overlay follow
    pub(super) fn scroll_host_by(&mut self, ctx: &mut EventCtx<'_>, dy: f64) -> bool {
        if !self.plane.host_mut().scroll_by(dy) {
            return false;
        }
        let scroll_top = self.plane.host().scroll_top();
        self.plane.dispatch(&InputEvent::Scroll { scroll_top });
        tracing::debug!("Document scrolled to {:.0}", scroll_top);
        ctx.request_render();
        true
    }

    // ============================================================================
    // KEYBOARD
    // ============================================================================

    /// Returns true if the key was handled
    pub(super) fn handle_key(
        &mut self,
        ctx: &mut EventCtx<'_>,
        key: &masonry::core::keyboard::Key,
        cmd: bool,
    ) -> bool {
        use masonry::core::keyboard::{Key, NamedKey};

        self.plane.dispatch(&InputEvent::Key);

        match key {
            Key::Named(NamedKey::Escape) if self.plane.is_visible() => {
                ctx.submit_action::<ReaderAction>(ReaderAction::HideOverlay);
                true
            }
            Key::Character(c) if cmd && c.eq_ignore_ascii_case("k") => {
                ctx.submit_action::<ReaderAction>(ReaderAction::ClearInk);
                true
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.scroll_host_by(ctx, settings::scroll::LINE_STEP);
                true
            }
            Key::Named(NamedKey::ArrowUp) => {
                self.scroll_host_by(ctx, -settings::scroll::LINE_STEP);
                true
            }
            Key::Named(NamedKey::PageDown) => {
                let step = self.page_step();
                self.scroll_host_by(ctx, step);
                true
            }
            Key::Character(c) if c.as_str() == " " => {
                let step = self.page_step();
                self.scroll_host_by(ctx, step);
                true
            }
            Key::Named(NamedKey::PageUp) => {
                let step = self.page_step();
                self.scroll_host_by(ctx, -step);
                true
            }
            Key::Named(NamedKey::Home) => {
                let top = self.plane.host().scroll_top();
                self.scroll_host_by(ctx, -top);
                true
            }
            Key::Named(NamedKey::End) => {
                let host = self.plane.host();
                let remaining = host.layout().max_scroll() - host.scroll_top();
                self.scroll_host_by(ctx, remaining);
                true
            }
            _ => false,
        }
    }
}
