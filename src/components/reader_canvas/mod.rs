// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Reader canvas widget - the document view with the ink overlay on top

mod host;
mod paint;
mod pointer;
mod view;

pub use host::DocumentHost;
pub use view::reader_view;

use crate::document::Document;
use crate::plane::{HigherPlane, HostView, InkStyle, PathSurface, PlaneOptions};
use crate::settings;
use kurbo::{Point, Size};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, BrushIndex, ChildrenIds, EventCtx, LayoutCtx, PaintCtx,
    PointerEvent, PropertiesMut, PropertiesRef, RegisterCtx, StyleProperty, TextEvent, Update,
    UpdateCtx, Widget,
};
use masonry::vello::Scene;
use parley::{FontContext, FontFamily, FontStack, GenericFamily, Layout, LayoutContext};
use pointer::PointerIds;
use std::sync::Arc;

thread_local! {
    static FONT_CX: std::cell::RefCell<FontContext> =
        std::cell::RefCell::new(FontContext::default());
    static LAYOUT_CX: std::cell::RefCell<
        LayoutContext<BrushIndex>,
    > = std::cell::RefCell::new(LayoutContext::new());
}

/// Page-level switches the reader follows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReaderProps {
    /// Overlay shown
    pub visible: bool,
    /// Mouse draws ink
    pub draw_with_mouse: bool,
    /// Bumped by the page to request a clear
    pub clear_generation: u64,
    pub stroke_width: f64,
}

/// Ink and tap summary reported to the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReaderStatus {
    pub strokes: usize,
    pub points: usize,
    /// Last tap the document registered, in content space
    pub last_tap: Option<Point>,
}

/// Actions emitted by the reader widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReaderAction {
    Status(ReaderStatus),
    /// Escape pressed while the overlay is shown
    HideOverlay,
    /// Ctrl/Cmd+K
    ClearInk,
}

/// A paragraph laid out for the current width
struct ParagraphLayout {
    layout: Layout<BrushIndex>,
    /// Top edge in content space
    top: f64,
}

/// The reader widget: owns the document view and the overlay controller
pub struct ReaderWidget {
    plane: HigherPlane<DocumentHost, PathSurface>,
    document: Arc<Document>,
    props: ReaderProps,

    paragraphs: Vec<ParagraphLayout>,
    /// Client width the paragraphs were laid out for
    laid_out_width: Option<f64>,

    pointer_ids: PointerIds,
    /// Last pointer position seen, for events that carry none
    last_pointer_position: Point,
}

impl ReaderWidget {
    pub fn new(document: Arc<Document>, props: ReaderProps) -> Self {
        let options = PlaneOptions {
            draw_with_mouse: props.draw_with_mouse,
            style: InkStyle::new(props.stroke_width),
        };
        let mut plane = HigherPlane::new(DocumentHost::new(), PathSurface::default(), options);
        if props.visible {
            plane.set_visible(true);
        }

        Self {
            plane,
            document,
            props,
            paragraphs: Vec::new(),
            laid_out_width: None,
            pointer_ids: PointerIds::default(),
            last_pointer_position: Point::ZERO,
        }
    }

    /// Follow new page switches
    pub(super) fn apply_props(&mut self, props: ReaderProps) {
        let prev = self.props;
        self.props = props;

        if props.visible != prev.visible {
            self.plane.set_visible(props.visible);
        }
        if props.draw_with_mouse != prev.draw_with_mouse {
            self.plane.set_draw_with_mouse(props.draw_with_mouse);
        }
        if props.stroke_width != prev.stroke_width {
            self.plane.set_ink_style(InkStyle::new(props.stroke_width));
        }
        if props.clear_generation != prev.clear_generation {
            self.plane.clear();
        }
    }

    /// Show a different document. Ink is kept.
    pub(super) fn set_document(&mut self, document: Arc<Document>) {
        self.document = document;
        self.laid_out_width = None;
    }

    pub(super) fn status(&self) -> ReaderStatus {
        ReaderStatus {
            strokes: self.plane.strokes().stroke_count(),
            points: self.plane.strokes().len(),
            last_tap: self.plane.host().last_tap(),
        }
    }

    pub(super) fn emit_status(&self, ctx: &mut EventCtx<'_>) {
        ctx.submit_action::<ReaderAction>(ReaderAction::Status(self.status()));
    }

    /// Lay paragraphs out for `client_width` and report the content height
    fn layout_text(&mut self, client_width: f64) {
        let padding = settings::document::PADDING;
        let max_width = (client_width - padding * 2.0).max(1.0) as f32;

        let mut paragraphs = Vec::with_capacity(self.document.paragraphs.len());
        let mut top = padding;

        FONT_CX.with(|font_cell| {
            LAYOUT_CX.with(|layout_cell| {
                let mut font_cx = font_cell.borrow_mut();
                let mut layout_cx = layout_cell.borrow_mut();

                for text in &self.document.paragraphs {
                    let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
                    builder.push_default(StyleProperty::FontSize(settings::document::TEXT_SIZE));
                    builder.push_default(StyleProperty::FontStack(FontStack::Single(
                        FontFamily::Generic(GenericFamily::Serif),
                    )));
                    builder.push_default(StyleProperty::Brush(BrushIndex(0)));
                    let mut layout = builder.build(text);
                    layout.break_all_lines(Some(max_width));

                    let height = layout.height() as f64;
                    paragraphs.push(ParagraphLayout { layout, top });
                    top += height + settings::document::PARAGRAPH_GAP;
                }
            });
        });

        let content_height = top - settings::document::PARAGRAPH_GAP + padding;
        self.paragraphs = paragraphs;
        self.laid_out_width = Some(client_width);
        self.plane.host_mut().set_content_height(content_height);
        tracing::debug!(
            "Laid out {} paragraphs, content height {:.0}",
            self.paragraphs.len(),
            content_height
        );
    }
}

impl Widget for ReaderWidget {
    type Action = ReaderAction;

    fn accepts_focus(&self) -> bool {
        // Keyboard scrolling and shortcuts
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let size = bc.max();
        self.plane.host_mut().set_bounds(size.to_rect());

        let client_width = self.plane.host().layout().client_width;
        if self.laid_out_width != Some(client_width) {
            self.layout_text(client_width);
        }

        // The host's box or content changed: re-measure the overlay
        self.plane.on_resize();
        size
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_document(scene);
        self.paint_tap_mark(scene);
        if self.plane.is_visible() {
            self.paint_overlay(scene);
            self.paint_ink(scene);
        }
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        if matches!(event, PointerEvent::Down(_)) {
            ctx.request_focus();
        }
        self.handle_pointer_event(ctx, event);
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        use masonry::core::keyboard::KeyState;

        if let TextEvent::Keyboard(key_event) = event {
            if key_event.state != KeyState::Down {
                return;
            }
            let cmd = key_event.modifiers.meta() || key_event.modifiers.ctrl();
            if self.handle_key(ctx, &key_event.key, cmd) {
                ctx.set_handled();
            }
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Document
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "{} ({} ink strokes)",
            self.document.title,
            self.plane.strokes().stroke_count()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
