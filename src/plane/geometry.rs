// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Layout measurements and coordinate spaces.
//!
//! Three spaces meet in the overlay:
//!
//! - **viewport**: window coordinates, as carried by native pointer events
//! - **surface**: local to the drawing surface, origin at the host's content box
//! - **content**: surface space with the host's scroll offset added to `y`,
//!   so a point stays attached to the document text it was drawn over
//!
//! Every conversion between them goes through one of the functions below.

use kurbo::{Point, Rect, Size};

use crate::settings;

/// Border widths of the host view, in viewport units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderWidths {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BorderWidths {
    /// The same width on every edge
    pub const fn uniform(width: f64) -> Self {
        Self {
            left: width,
            top: width,
            right: width,
            bottom: width,
        }
    }
}

/// A snapshot of the host view's layout box.
///
/// Mirrors what a scrollable element reports: its border box, borders,
/// the outer ("offset") width including scrollbar, the inner ("client")
/// width excluding it, and the vertical scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostLayout {
    /// Border box in viewport coordinates
    pub bounds: Rect,
    pub border: BorderWidths,
    /// Width including borders and scrollbar gutter
    pub offset_width: f64,
    /// Width of the content area, excluding borders and scrollbar gutter
    pub client_width: f64,
    /// Current vertical scroll offset
    pub scroll_top: f64,
    /// Full height of the scrollable content
    pub scroll_height: f64,
}

impl HostLayout {
    /// Layout for a host with no scrollbar: client width is derived from
    /// the bounds and borders.
    pub fn new(bounds: Rect, border: BorderWidths) -> Self {
        let client_width = (bounds.width() - border.left - border.right).max(0.0);
        Self {
            bounds,
            border,
            offset_width: bounds.width(),
            client_width,
            scroll_top: 0.0,
            scroll_height: (bounds.height() - border.top - border.bottom).max(0.0),
        }
    }

    /// Reserve `gutter` units on the right for a scrollbar
    pub fn with_scrollbar_gutter(mut self, gutter: f64) -> Self {
        self.client_width = (self.client_width - gutter.max(0.0)).max(0.0);
        self
    }

    pub fn with_scroll(mut self, scroll_top: f64, scroll_height: f64) -> Self {
        self.scroll_top = scroll_top;
        self.scroll_height = scroll_height;
        self
    }

    /// Width taken by the vertical scrollbar, if any
    pub fn scrollbar_gutter(&self) -> f64 {
        (self.offset_width - self.client_width - self.border.left - self.border.right).max(0.0)
    }

    /// Height of the visible content area
    pub fn client_height(&self) -> f64 {
        (self.bounds.height() - self.border.top - self.border.bottom).max(0.0)
    }

    /// Top-left of the content box in viewport coordinates
    pub fn content_origin(&self) -> Point {
        Point::new(
            self.bounds.x0 + self.border.left,
            self.bounds.y0 + self.border.top,
        )
    }

    /// Largest scroll offset that still shows content
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height()).max(0.0)
    }

    /// Box the overlay surface occupies: the host box shrunk by the border
    /// inset on its right and bottom edges.
    pub fn overlay_box(&self) -> Rect {
        let inset = settings::overlay::BORDER_INSET;
        let b = self.bounds;
        Rect::new(
            b.x0,
            b.y0,
            (b.x1 - inset).max(b.x0),
            (b.y1 - inset).max(b.y0),
        )
    }

    /// Pixel size of the drawing surface: the visible content area, less
    /// the scrollbar gutter.
    pub fn raster_size(&self) -> Size {
        let width = self.offset_width
            - self.border.left
            - self.border.right
            - self.scrollbar_gutter();
        Size::new(width.max(0.0).floor(), self.client_height().floor())
    }
}

/// Viewport position to drawing-surface position
pub fn viewport_to_surface(viewport: Point, surface_origin: Point) -> Point {
    Point::new(viewport.x - surface_origin.x, viewport.y - surface_origin.y)
}

/// Drawing-surface position to viewport position
pub fn surface_to_viewport(surface: Point, surface_origin: Point) -> Point {
    Point::new(surface.x + surface_origin.x, surface.y + surface_origin.y)
}

/// Drawing-surface position to content position at the given scroll offset
pub fn surface_to_content(surface: Point, scroll_top: f64) -> Point {
    Point::new(surface.x, surface.y + scroll_top)
}

/// Content position to drawing-surface position at the given scroll offset
pub fn content_to_surface(content: Point, scroll_top: f64) -> Point {
    Point::new(content.x, content.y - scroll_top)
}

/// Clamp a surface position onto the raster.
///
/// A zero-sized raster leaves the point at the origin.
pub fn clamp_to_raster(surface: Point, raster: Size) -> Point {
    Point::new(
        surface.x.clamp(0.0, raster.width.max(0.0)),
        surface.y.clamp(0.0, raster.height.max(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostLayout {
        HostLayout::new(
            Rect::new(10.0, 20.0, 410.0, 320.0),
            BorderWidths::uniform(2.0),
        )
    }

    #[test]
    fn client_width_excludes_borders() {
        let layout = host();
        assert_eq!(layout.client_width, 396.0);
        assert_eq!(layout.scrollbar_gutter(), 0.0);
        assert_eq!(layout.client_height(), 296.0);
    }

    #[test]
    fn gutter_is_offset_minus_client_minus_borders() {
        let layout = host().with_scrollbar_gutter(12.0);
        assert_eq!(layout.scrollbar_gutter(), 12.0);
        assert_eq!(layout.raster_size(), Size::new(384.0, 296.0));
    }

    #[test]
    fn raster_size_floors_fractional_widths() {
        let layout = HostLayout::new(
            Rect::new(0.0, 0.0, 100.7, 50.4),
            BorderWidths::default(),
        );
        assert_eq!(layout.raster_size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn overlay_box_is_inset_on_right_and_bottom() {
        let layout = host();
        let inset = settings::overlay::BORDER_INSET;
        let overlay = layout.overlay_box();
        assert_eq!(overlay.x0, 10.0);
        assert_eq!(overlay.y0, 20.0);
        assert_eq!(overlay.x1, 410.0 - inset);
        assert_eq!(overlay.y1, 320.0 - inset);
    }

    #[test]
    fn content_origin_skips_border() {
        assert_eq!(host().content_origin(), Point::new(12.0, 22.0));
    }

    #[test]
    fn max_scroll_never_negative() {
        let short = host().with_scroll(0.0, 100.0);
        assert_eq!(short.max_scroll(), 0.0);
        let tall = host().with_scroll(0.0, 1000.0);
        assert_eq!(tall.max_scroll(), 704.0);
    }

    #[test]
    fn viewport_surface_round_trip() {
        let origin = Point::new(12.0, 22.0);
        let viewport = Point::new(100.0, 50.0);
        let surface = viewport_to_surface(viewport, origin);
        assert_eq!(surface, Point::new(88.0, 28.0));
        assert_eq!(surface_to_viewport(surface, origin), viewport);
    }

    #[test]
    fn content_space_adds_scroll_offset() {
        let surface = Point::new(5.0, 40.0);
        let content = surface_to_content(surface, 250.0);
        assert_eq!(content, Point::new(5.0, 290.0));
        assert_eq!(content_to_surface(content, 250.0), surface);
        // After scrolling further the same content point moves up
        assert_eq!(content_to_surface(content, 300.0), Point::new(5.0, -10.0));
    }

    #[test]
    fn clamp_keeps_points_on_raster() {
        let raster = Size::new(100.0, 50.0);
        assert_eq!(
            clamp_to_raster(Point::new(-4.0, 60.0), raster),
            Point::new(0.0, 50.0)
        );
        assert_eq!(
            clamp_to_raster(Point::new(30.0, 20.0), raster),
            Point::new(30.0, 20.0)
        );
        assert_eq!(clamp_to_raster(Point::new(9.0, 9.0), Size::ZERO), Point::ZERO);
    }
}
