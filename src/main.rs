// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Higher Plane: an ink overlay for reading documents

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    higher_plane::run(EventLoop::with_user_event())
}
