// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! The host content view, as seen from the overlay

use super::geometry::HostLayout;
use super::input::{EventOutcome, PointerInput};

/// A scrollable document view the overlay is laid over.
///
/// The overlay never owns the host. It reads the host's layout and hands
/// re-dispatched pointer events to it.
pub trait HostView {
    /// Current layout box and scroll state
    fn layout(&self) -> HostLayout;

    /// Deliver a pointer event re-dispatched from the overlay.
    ///
    /// Runs the host's own listeners synchronously, as if the input had
    /// originated on the host.
    fn dispatch_pointer(&mut self, event: &PointerInput) -> EventOutcome;
}
