// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for ReaderWidget

use super::ReaderWidget;
use crate::plane::geometry;
use crate::plane::surface::DrawingSurface;
use crate::plane::{BorderMark, HostView};
use crate::theme;
use kurbo::{Affine, Circle, Rect, Stroke};
use masonry::core::render_text;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Mix};

impl ReaderWidget {
    // ============================================================================
    // DOCUMENT (HOST VIEW)
    // ============================================================================

    pub(super) fn paint_document(&self, scene: &mut Scene) {
        let host = self.plane.host();
        let layout = host.layout();
        let origin = layout.content_origin();
        let content_box = Rect::from_origin_size(
            origin,
            (layout.client_width, layout.client_height()),
        );

        fill_color(scene, &layout.bounds, theme::document::BACKGROUND);

        // Only paragraphs that intersect the visible area
        let scroll_top = layout.scroll_top;
        let visible_bottom = scroll_top + layout.client_height();
        let text_x = origin.x + crate::settings::document::PADDING;
        let brushes = vec![Brush::Solid(theme::document::TEXT)];

        scene.push_layer(Mix::Normal, 1.0, Affine::IDENTITY, &content_box);
        for paragraph in &self.paragraphs {
            let bottom = paragraph.top + paragraph.layout.height() as f64;
            if bottom < scroll_top || paragraph.top > visible_bottom {
                continue;
            }
            let y = origin.y + paragraph.top - scroll_top;
            render_text(
                scene,
                Affine::translate((text_x, y)),
                &paragraph.layout,
                &brushes,
                false, // No hinting
            );
        }
        scene.pop_layer();

        self.paint_scrollbar(scene);

        let half = crate::settings::document::BORDER / 2.0;
        scene.stroke(
            &Stroke::new(crate::settings::document::BORDER),
            Affine::IDENTITY,
            &Brush::Solid(theme::document::BORDER),
            None,
            &layout.bounds.inset(-half),
        );
    }

    fn paint_scrollbar(&self, scene: &mut Scene) {
        let host = self.plane.host();
        fill_color(scene, &host.scrollbar_track(), theme::document::SCROLLBAR_TRACK);
        if let Some(thumb) = host.scrollbar_thumb() {
            let thumb = thumb.inset(-2.0).to_rounded_rect(3.0);
            fill_color(scene, &thumb, theme::document::SCROLLBAR_THUMB);
        }
    }

    /// Mark where the document last registered a tap
    pub(super) fn paint_tap_mark(&self, scene: &mut Scene) {
        let host = self.plane.host();
        let Some(tap) = host.last_tap() else {
            return;
        };
        let layout = host.layout();
        let surface = geometry::content_to_surface(tap, layout.scroll_top);
        if surface.y < 0.0 || surface.y > layout.client_height() {
            return;
        }
        let center = geometry::surface_to_viewport(surface, layout.content_origin());
        scene.fill(
            peniko::Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(theme::document::TAP_MARK),
            None,
            &Circle::new(center, theme::size::TAP_MARK_RADIUS),
        );
    }

    // ============================================================================
    // OVERLAY AND INK
    // ============================================================================

    pub(super) fn paint_overlay(&self, scene: &mut Scene) {
        let overlay = self.plane.overlay();
        let bounds = overlay.bounds();
        fill_color(scene, &bounds, theme::overlay::TINT);

        let color = match overlay.border() {
            BorderMark::Armed => theme::overlay::BORDER_ARMED,
            BorderMark::Idle => theme::overlay::BORDER_IDLE,
        };
        let width = theme::size::OVERLAY_BORDER_WIDTH;
        scene.stroke(
            &Stroke::new(width),
            Affine::IDENTITY,
            &Brush::Solid(color),
            None,
            &bounds.inset(-width / 2.0),
        );
    }

    /// Present the drawing surface: every painted path, clipped to the raster
    pub(super) fn paint_ink(&self, scene: &mut Scene) {
        let surface = self.plane.surface();
        if surface.is_blank() {
            return;
        }

        let origin = self.plane.host().layout().content_origin();
        let transform = Affine::translate(origin.to_vec2());
        let raster = Rect::from_origin_size(kurbo::Point::ZERO, surface.raster_size());
        let brush = Brush::Solid(theme::ink::STROKE);

        scene.push_layer(Mix::Normal, 1.0, transform, &raster);
        for painted in surface.painted() {
            scene.stroke(&painted.style.to_stroke(), transform, &brush, None, &painted.path);
        }
        scene.pop_layer();
    }
}
