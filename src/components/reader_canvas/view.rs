// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for ReaderWidget

use super::{ReaderAction, ReaderProps, ReaderWidget};
use crate::document::Document;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a reader view over `document`
///
/// The callback receives every action the widget emits: status updates at
/// stroke boundaries and the keyboard shortcuts that change page state.
pub fn reader_view<State, F>(
    document: Arc<Document>,
    props: ReaderProps,
    on_action: F,
) -> ReaderView<State, F>
where
    F: Fn(&mut State, ReaderAction),
{
    ReaderView {
        document,
        props,
        on_action,
        phantom: PhantomData,
    }
}

/// The Xilem View for ReaderWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct ReaderView<State, F> {
    document: Arc<Document>,
    props: ReaderProps,
    on_action: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for ReaderView<State, F> {}

impl<State: 'static, F: Fn(&mut State, ReaderAction) + 'static> View<State, (), ViewCtx>
    for ReaderView<State, F>
{
    type Element = Pod<ReaderWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = ReaderWidget::new(self.document.clone(), self.props);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        let document_changed = !Arc::ptr_eq(&self.document, &prev.document);
        let props_changed = self.props != prev.props;
        if !document_changed && !props_changed {
            return;
        }

        let mut widget = element.downcast::<ReaderWidget>();

        if document_changed {
            tracing::debug!(
                "[ReaderView::rebuild] Document changed to '{}'",
                self.document.title
            );
            widget.widget.set_document(self.document.clone());
            widget.ctx.request_layout();
        }

        if props_changed {
            tracing::debug!(
                "[ReaderView::rebuild] Props {:?} -> {:?}",
                prev.props,
                self.props
            );
            widget.widget.apply_props(self.props);
        }

        widget.ctx.request_render();
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<ReaderAction>() {
            Some(action) => {
                (self.on_action)(app_state, *action);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
