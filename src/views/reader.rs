// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Reader page - toolbar above the document with the ink overlay

use xilem::WidgetView;
use xilem::core::fork;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, flex_col, sized_box};

use crate::components::{plane_toolbar_view, reader_view};
use crate::data::AppState;
use crate::file_watcher;
use crate::theme;

/// The whole page, with the file watcher running alongside.
///
/// The watcher task is started once and follows `AppState::watch_target`,
/// so opening another document never remounts the reader (and its ink).
pub fn reader_page(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let target = state.watch_target.clone();
    let page = page_view(state);

    fork(
        page,
        xilem::view::task_raw(
            move |proxy| {
                let target = target.clone();
                async move {
                    file_watcher::watch_document(proxy, target).await;
                }
            },
            |state: &mut AppState, _msg: file_watcher::DocumentChanged| {
                state.reload_document();
            },
        ),
    )
}

/// Toolbar above the reader canvas
fn page_view(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let toolbar = plane_toolbar_view(
        state.toolbar_state(),
        |state: &mut AppState, command| state.handle_toolbar_command(command),
    );
    let reader = reader_view(
        state.document.clone(),
        state.reader_props(),
        |state: &mut AppState, action| state.handle_reader_action(action),
    );

    sized_box(
        flex_col((toolbar, reader.flex(1.0)))
            .cross_axis_alignment(CrossAxisAlignment::Fill),
    )
    .expand()
    .background_color(theme::app::BACKGROUND)
}
