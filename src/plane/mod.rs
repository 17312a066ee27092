// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Ink overlay core: pointer routing, stroke capture and repaint.
//!
//! Nothing in here knows about Masonry or Xilem. The reader widget adapts
//! native events into [`InputEvent`]s and presents the [`PathSurface`].

pub mod controller;
pub mod geometry;
pub mod host;
pub mod input;
pub mod overlay;
pub mod stroke;
pub mod surface;

pub use controller::{HigherPlane, PlaneOptions};
pub use geometry::{BorderWidths, HostLayout};
pub use host::HostView;
pub use input::{EventOutcome, InputEvent, PointerId, PointerInput, PointerPhase, PointerType};
pub use overlay::{BorderMark, OverlaySurface};
pub use stroke::{PointKind, StrokeBuffer, StrokePoint};
pub use surface::{DrawingSurface, InkStyle, PaintedPath, PathSurface};
