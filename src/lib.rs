// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Higher Plane: a transparent ink overlay laid over a scrollable document.
//!
//! Pen input (and mouse input, when enabled) draws on the overlay; everything
//! else reaches the document underneath. Ink is stored in document content
//! space, so it stays with the text as the page scrolls.

use std::path::PathBuf;

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

pub mod components;
pub mod config;
pub mod data;
pub mod document;
pub mod file_watcher;
pub mod plane;
mod settings;
mod theme;
mod views;

use config::Config;
use data::AppState;
use views::reader_page;

/// Entry point for the Higher Plane application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("higher_plane=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let config = Config::load();
    let mut initial_state = AppState::new(&config);

    // The command-line document wins over the configured one
    if let Some(path) = document_arg().or_else(|| config.document.clone()) {
        initial_state.load_document(&path);
    }

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// First positional command-line argument, if any
fn document_arg() -> Option<PathBuf> {
    let path = std::env::args_os().nth(1).map(PathBuf::from)?;
    if !path.exists() {
        tracing::error!("Path does not exist: {}", path.display());
        tracing::error!("Usage: higher-plane [path/to/document.txt]");
        return None;
    }
    tracing::info!("Opening document from: {}", path.display());
    Some(path)
}

/// Build the single-window UI
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(900.0, 760.0);
    let window_view = window(state.main_window_id, "Higher Plane", reader_page(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
