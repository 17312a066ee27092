// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` is the page controller. It owns the document and the toggles
//! (overlay visibility, mouse drawing), and a clear generation counter that the
//! reader widget follows. Ink itself lives in the widget: the page asks for a
//! clear by bumping the generation.

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use xilem::WindowId;

use crate::components::{ReaderAction, ReaderProps, ReaderStatus, ToolbarCommand, ToolbarState};
use crate::config::Config;
use crate::document::Document;
use crate::file_watcher::WatchTarget;

/// Main application state
pub struct AppState {
    /// The document under the overlay
    pub document: Arc<Document>,

    /// Overlay shown
    pub overlay_visible: bool,

    /// Mouse draws ink
    pub draw_with_mouse: bool,

    /// Ink stroke width
    pub stroke_width: f64,

    /// Bumped to clear the ink
    pub clear_generation: u64,

    /// Last status reported by the reader
    pub status: ReaderStatus,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// Reload the document when it changes on disk
    pub watch_document: bool,

    /// File the watcher task follows
    pub watch_target: WatchTarget,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create the state from configuration, showing the sample document
    pub fn new(config: &Config) -> Self {
        Self {
            document: Arc::new(Document::sample()),
            overlay_visible: config.show_overlay,
            draw_with_mouse: config.draw_with_mouse,
            stroke_width: config.stroke_width,
            clear_generation: 0,
            status: ReaderStatus {
                strokes: 0,
                points: 0,
                last_tap: None,
            },
            error_message: None,
            watch_document: config.watch_document,
            watch_target: WatchTarget::default(),
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Props for the reader widget
    pub fn reader_props(&self) -> ReaderProps {
        ReaderProps {
            visible: self.overlay_visible,
            draw_with_mouse: self.draw_with_mouse,
            clear_generation: self.clear_generation,
            stroke_width: self.stroke_width,
        }
    }

    /// What the toolbar shows
    pub fn toolbar_state(&self) -> ToolbarState {
        ToolbarState {
            overlay_visible: self.overlay_visible,
            draw_with_mouse: self.draw_with_mouse,
            status: self.status_text(),
        }
    }

    /// Path of the document file to watch, if watching is on
    pub fn watched_document(&self) -> Option<PathBuf> {
        if !self.watch_document {
            return None;
        }
        self.document.source.clone()
    }

    // ============================================================================
    // DOCUMENT
    // ============================================================================

    /// Open a file dialog to select a document
    pub fn open_document_dialog(&mut self) {
        self.error_message = None;

        let path = rfd::FileDialog::new()
            .set_title("Open Document")
            .add_filter("Text", &["txt", "md", "text"])
            .add_filter("All files", &["*"])
            .pick_file();

        if let Some(path) = path {
            self.load_document(&path);
        }
    }

    /// Load a document from a path. On failure the current document stays.
    pub fn load_document(&mut self, path: &Path) {
        match read_document(path) {
            Ok(document) => {
                self.document = Arc::new(document);
                self.error_message = None;
                self.watch_target.set(self.watched_document());
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::error!("{}", error);
                self.error_message = Some(error);
            }
        }
    }

    /// Re-read the current document after an external change. Ink is kept.
    pub fn reload_document(&mut self) {
        let Some(path) = self.document.source.clone() else {
            return;
        };
        tracing::info!("Reloading {}", path.display());
        self.load_document(&path);
    }

    // ============================================================================
    // OVERLAY
    // ============================================================================

    pub fn set_overlay_visible(&mut self, visible: bool) {
        if self.overlay_visible != visible {
            tracing::debug!("Page overlay toggle: {}", visible);
        }
        self.overlay_visible = visible;
    }

    pub fn toggle_overlay(&mut self) {
        self.set_overlay_visible(!self.overlay_visible);
    }

    pub fn set_draw_with_mouse(&mut self, enabled: bool) {
        self.draw_with_mouse = enabled;
    }

    /// Ask the reader to clear its ink
    pub fn clear_ink(&mut self) {
        tracing::info!("Clearing ink ({} strokes)", self.status.strokes);
        self.clear_generation += 1;
        self.status.strokes = 0;
        self.status.points = 0;
    }

    // ============================================================================
    // EVENTS FROM THE UI
    // ============================================================================

    pub fn handle_toolbar_command(&mut self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::ToggleOverlay => self.toggle_overlay(),
            ToolbarCommand::DrawWithMouse(enabled) => self.set_draw_with_mouse(enabled),
            ToolbarCommand::Clear => self.clear_ink(),
            ToolbarCommand::Open => self.open_document_dialog(),
        }
    }

    pub fn handle_reader_action(&mut self, action: ReaderAction) {
        match action {
            ReaderAction::Status(status) => self.status = status,
            ReaderAction::HideOverlay => self.set_overlay_visible(false),
            ReaderAction::ClearInk => self.clear_ink(),
        }
    }

    /// One-line summary for the toolbar
    pub fn status_text(&self) -> String {
        if let Some(error) = &self.error_message {
            return error.clone();
        }

        let strokes = match self.status.strokes {
            1 => String::from("1 stroke"),
            n => format!("{} strokes", n),
        };
        let mut text = format!("{}  ·  {}", self.document.title, strokes);
        if let Some(tap) = self.status.last_tap {
            text.push_str(&format!("  ·  tap at ({:.0}, {:.0})", tap.x, tap.y));
        }
        text
    }
}

/// Read a document, with the path in the error context
fn read_document(path: &Path) -> anyhow::Result<Document> {
    Document::load(path).with_context(|| format!("Failed to open {}", path.display()))
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
