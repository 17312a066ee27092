// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for Higher Plane

pub mod plane_toolbar;
pub mod reader_canvas;

// Re-export commonly used widget views and types
pub use plane_toolbar::{ToolbarCommand, ToolbarState, plane_toolbar_view};
pub use reader_canvas::{ReaderAction, ReaderProps, ReaderStatus, reader_view};
