// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing surface abstraction.
//!
//! [`DrawingSurface`] is the small path API the controller paints through:
//! open a path, extend it, stroke what is pending. [`PathSurface`] is the
//! retained implementation used by the reader widget. Its "pixels" are the
//! list of stroked kurbo paths, which the widget replays into its vello scene
//! every frame.

use kurbo::{BezPath, Cap, Join, Point, Size, Stroke};

use crate::settings;

/// Pen used for ink strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkStyle {
    pub width: f64,
}

impl InkStyle {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// kurbo stroke parameters: fixed width, rounded joins and caps
    pub fn to_stroke(self) -> Stroke {
        Stroke::new(self.width)
            .with_join(Join::Round)
            .with_caps(Cap::Round)
    }
}

impl Default for InkStyle {
    fn default() -> Self {
        Self::new(settings::ink::STROKE_WIDTH)
    }
}

/// A raster the overlay can paint ink onto.
///
/// Coordinates are surface-local. `stroke` paints everything added since the
/// path was opened or last stroked; the pen stays where it was, so further
/// `line_to` calls continue the same visual line.
pub trait DrawingSurface {
    /// Current raster size
    fn raster_size(&self) -> Size;

    /// Resize the raster. Any resize discards the painted content.
    fn set_raster_size(&mut self, size: Size);

    /// Erase all painted content
    fn clear(&mut self);

    /// Open a new path at `at`
    fn begin_path(&mut self, at: Point, style: InkStyle);

    /// Extend the open path to `to`
    fn line_to(&mut self, to: Point);

    /// Paint the pending part of the open path
    fn stroke(&mut self);

    /// True while a path is open
    fn has_open_path(&self) -> bool;
}

/// One stroked path as it sits on the surface
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedPath {
    pub path: BezPath,
    pub style: InkStyle,
}

#[derive(Debug, Clone)]
struct OpenPath {
    pending: BezPath,
    segments: usize,
    pen: Point,
    style: InkStyle,
}

/// Retained drawing surface that records every stroked path
#[derive(Debug, Clone, Default)]
pub struct PathSurface {
    size: Size,
    painted: Vec<PaintedPath>,
    open: Option<OpenPath>,
    /// Style of the most recent `begin_path`, kept across clears
    last_style: InkStyle,
}

impl PathSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            painted: Vec::new(),
            open: None,
            last_style: InkStyle::default(),
        }
    }

    /// Everything stroked since the last clear, oldest first
    pub fn painted(&self) -> &[PaintedPath] {
        &self.painted
    }

    /// True when nothing is painted
    pub fn is_blank(&self) -> bool {
        self.painted.is_empty()
    }
}

impl DrawingSurface for PathSurface {
    fn raster_size(&self) -> Size {
        self.size
    }

    fn set_raster_size(&mut self, size: Size) {
        self.size = size;
        self.clear();
    }

    fn clear(&mut self) {
        self.painted.clear();
        self.open = None;
    }

    fn begin_path(&mut self, at: Point, style: InkStyle) {
        let mut pending = BezPath::new();
        pending.move_to(at);
        self.last_style = style;
        self.open = Some(OpenPath {
            pending,
            segments: 0,
            pen: at,
            style,
        });
    }

    fn line_to(&mut self, to: Point) {
        match &mut self.open {
            Some(open) => {
                open.pending.line_to(to);
                open.segments += 1;
                open.pen = to;
            }
            None => {
                // No open path: start one here so later segments connect
                self.begin_path(to, self.last_style);
            }
        }
    }

    fn stroke(&mut self) {
        let Some(open) = &mut self.open else {
            return;
        };
        if open.segments == 0 {
            return;
        }

        let mut restart = BezPath::new();
        restart.move_to(open.pen);
        let path = std::mem::replace(&mut open.pending, restart);
        open.segments = 0;

        self.painted.push(PaintedPath {
            path,
            style: open.style,
        });
    }

    fn has_open_path(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn stroke_without_segments_paints_nothing() {
        let mut surface = PathSurface::new(Size::new(100.0, 100.0));
        surface.begin_path(Point::new(1.0, 1.0), InkStyle::default());
        surface.stroke();
        assert!(surface.is_blank());
        assert!(surface.has_open_path());
    }

    #[test]
    fn incremental_strokes_paint_one_segment_each() {
        let mut surface = PathSurface::new(Size::new(100.0, 100.0));
        surface.begin_path(Point::new(0.0, 0.0), InkStyle::default());
        surface.line_to(Point::new(10.0, 0.0));
        surface.stroke();
        surface.line_to(Point::new(20.0, 0.0));
        surface.stroke();

        let painted = surface.painted();
        assert_eq!(painted.len(), 2);
        assert_eq!(
            painted[1].path.elements(),
            &[
                PathEl::MoveTo(Point::new(10.0, 0.0)),
                PathEl::LineTo(Point::new(20.0, 0.0)),
            ]
        );
    }

    #[test]
    fn resize_discards_content() {
        let mut surface = PathSurface::new(Size::new(100.0, 100.0));
        surface.begin_path(Point::ZERO, InkStyle::default());
        surface.line_to(Point::new(5.0, 5.0));
        surface.stroke();
        assert!(!surface.is_blank());

        surface.set_raster_size(Size::new(50.0, 50.0));
        assert!(surface.is_blank());
        assert!(!surface.has_open_path());
        assert_eq!(surface.raster_size(), Size::new(50.0, 50.0));
    }

    #[test]
    fn line_to_without_open_path_starts_one() {
        let mut surface = PathSurface::new(Size::new(100.0, 100.0));
        surface.line_to(Point::new(3.0, 4.0));
        assert!(surface.has_open_path());
        surface.line_to(Point::new(6.0, 8.0));
        surface.stroke();
        assert_eq!(surface.painted().len(), 1);
    }

    #[test]
    fn line_to_after_clear_keeps_the_last_pen() {
        let mut surface = PathSurface::new(Size::new(100.0, 100.0));
        surface.begin_path(Point::ZERO, InkStyle::new(7.0));
        surface.clear();

        surface.line_to(Point::new(3.0, 4.0));
        surface.line_to(Point::new(6.0, 8.0));
        surface.stroke();
        assert_eq!(surface.painted().len(), 1);
        assert_eq!(surface.painted()[0].style, InkStyle::new(7.0));
    }

    #[test]
    fn ink_style_uses_round_joins() {
        let stroke = InkStyle::new(3.0).to_stroke();
        assert_eq!(stroke.width, 3.0);
        assert_eq!(stroke.join, Join::Round);
    }
}
