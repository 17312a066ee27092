// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Page toolbar - overlay toggle, mouse drawing, clear and open

use std::sync::Arc;

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{
    CrossAxisAlignment, FlexExt, MainAxisAlignment, button, checkbox, flex_row, label, sized_box,
};

use crate::theme;

/// Commands the toolbar sends to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    /// Show or hide the overlay
    ToggleOverlay,
    /// Set whether the mouse draws
    DrawWithMouse(bool),
    /// Remove all ink
    Clear,
    /// Pick a document to open
    Open,
}

/// What the toolbar displays
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarState {
    pub overlay_visible: bool,
    pub draw_with_mouse: bool,
    /// Status line on the right
    pub status: String,
}

/// Build the page toolbar
pub fn plane_toolbar_view<State: 'static>(
    toolbar: ToolbarState,
    on_command: impl Fn(&mut State, ToolbarCommand) + Send + Sync + 'static,
) -> impl WidgetView<State> {
    let on_command = Arc::new(on_command);

    let overlay_label = if toolbar.overlay_visible {
        "Hide overlay"
    } else {
        "Show overlay"
    };
    let overlay_background = if toolbar.overlay_visible {
        theme::panel::BUTTON_ON
    } else {
        theme::panel::BACKGROUND
    };

    let toggle = {
        let on_command = Arc::clone(&on_command);
        button(
            label(overlay_label).color(theme::text::BRIGHT),
            move |state: &mut State| on_command(state, ToolbarCommand::ToggleOverlay),
        )
        .background_color(overlay_background)
        .border_color(theme::panel::BUTTON_OUTLINE)
        .corner_radius(theme::size::PANEL_RADIUS)
    };

    let mouse = {
        let on_command = Arc::clone(&on_command);
        checkbox(
            "Draw with mouse",
            toolbar.draw_with_mouse,
            move |state: &mut State, checked| {
                on_command(state, ToolbarCommand::DrawWithMouse(checked));
            },
        )
    };

    let clear = {
        let on_command = Arc::clone(&on_command);
        button(
            label("Clear").color(theme::text::PRIMARY),
            move |state: &mut State| on_command(state, ToolbarCommand::Clear),
        )
        .background_color(theme::panel::BACKGROUND)
        .border_color(theme::panel::BUTTON_OUTLINE)
        .corner_radius(theme::size::PANEL_RADIUS)
    };

    let open = {
        let on_command = Arc::clone(&on_command);
        button(
            label("Open…").color(theme::text::PRIMARY),
            move |state: &mut State| on_command(state, ToolbarCommand::Open),
        )
        .background_color(theme::panel::BACKGROUND)
        .border_color(theme::panel::BUTTON_OUTLINE)
        .corner_radius(theme::size::PANEL_RADIUS)
    };

    let status = label(toolbar.status)
        .text_size(13.0)
        .color(theme::text::SECONDARY);

    sized_box(
        flex_row((toggle, mouse, clear, open, status.flex(1.0)))
            .gap(8.px())
            .main_axis_alignment(MainAxisAlignment::Start)
            .cross_axis_alignment(CrossAxisAlignment::Center),
    )
    .expand_width()
    .height(theme::size::TOOLBAR_HEIGHT.px())
    .padding(6.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.0)
}
