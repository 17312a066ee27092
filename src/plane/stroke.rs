// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Recorded ink.
//!
//! Strokes are not stored as objects. The buffer is one flat, append-only
//! sequence of points, and a point's [`PointKind`] alone says where a stroke
//! starts and ends. Points are never reordered.

use kurbo::Point;

/// Role of a point within its stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Start,
    Continue,
    End,
}

/// A single ink sample.
///
/// `x` is surface-local; `y` is in content space (scroll offset at capture
/// time already added).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    pub kind: PointKind,
}

impl StrokePoint {
    pub fn new(content: Point, kind: PointKind) -> Self {
        Self {
            x: content.x,
            y: content.y,
            kind,
        }
    }

    /// Position in content space
    pub fn content_pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered buffer of every point captured since the last clear
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeBuffer {
    points: Vec<StrokePoint>,
}

impl StrokeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: StrokePoint) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&StrokePoint> {
        self.points.last()
    }

    /// Iterate strokes as slices of the buffer.
    ///
    /// A stroke runs from a `Start` through the next `End`. A stroke cut off
    /// without an `End` runs up to the next `Start` or the end of the buffer.
    /// Leading points without a `Start` form a stroke of their own.
    pub fn strokes(&self) -> Strokes<'_> {
        Strokes {
            rest: &self.points,
        }
    }

    /// Number of strokes, including an unterminated trailing one
    pub fn stroke_count(&self) -> usize {
        self.strokes().count()
    }
}

/// Iterator returned by [`StrokeBuffer::strokes`]
pub struct Strokes<'a> {
    rest: &'a [StrokePoint],
}

impl<'a> Iterator for Strokes<'a> {
    type Item = &'a [StrokePoint];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let mut len = self.rest.len();
        for (i, point) in self.rest.iter().enumerate() {
            match point.kind {
                PointKind::End => {
                    len = i + 1;
                    break;
                }
                PointKind::Start if i > 0 => {
                    len = i;
                    break;
                }
                _ => {}
            }
        }

        let (stroke, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64, kind: PointKind) -> StrokePoint {
        StrokePoint::new(Point::new(x, y), kind)
    }

    #[test]
    fn new_buffer_is_empty() {
        let buffer = StrokeBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.stroke_count(), 0);
        assert!(buffer.last().is_none());
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut buffer = StrokeBuffer::new();
        buffer.push(pt(3.0, 3.0, PointKind::Start));
        buffer.push(pt(1.0, 1.0, PointKind::Continue));
        buffer.push(pt(2.0, 2.0, PointKind::End));

        let xs: Vec<f64> = buffer.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn strokes_split_on_end() {
        let mut buffer = StrokeBuffer::new();
        buffer.push(pt(0.0, 0.0, PointKind::Start));
        buffer.push(pt(1.0, 0.0, PointKind::Continue));
        buffer.push(pt(2.0, 0.0, PointKind::End));
        buffer.push(pt(5.0, 5.0, PointKind::Start));
        buffer.push(pt(6.0, 5.0, PointKind::End));

        let strokes: Vec<_> = buffer.strokes().collect();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].len(), 3);
        assert_eq!(strokes[1].len(), 2);
        assert_eq!(strokes[1][0].x, 5.0);
    }

    #[test]
    fn unterminated_stroke_ends_at_next_start() {
        let mut buffer = StrokeBuffer::new();
        buffer.push(pt(0.0, 0.0, PointKind::Start));
        buffer.push(pt(1.0, 0.0, PointKind::Continue));
        buffer.push(pt(9.0, 9.0, PointKind::Start));
        buffer.push(pt(9.0, 8.0, PointKind::Continue));

        let strokes: Vec<_> = buffer.strokes().collect();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].len(), 2);
        assert_eq!(strokes[1].len(), 2);
        assert_eq!(strokes[1][1].kind, PointKind::Continue);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = StrokeBuffer::new();
        buffer.push(pt(0.0, 0.0, PointKind::Start));
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.stroke_count(), 0);
    }

    #[test]
    fn content_pos_round_trips() {
        let p = pt(4.0, 250.0, PointKind::Continue);
        assert_eq!(p.content_pos(), Point::new(4.0, 250.0));
    }
}
