// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration from `higher-plane.toml`.
//!
//! The file is optional. It is looked up at `$HIGHER_PLANE_CONFIG` if set,
//! otherwise in the working directory. A missing file gives the defaults from
//! `settings.rs`; a malformed one is reported and also falls back to them.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::settings;

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "higher-plane.toml";

/// Environment variable overriding the config path
pub const CONFIG_ENV_VAR: &str = "HIGHER_PLANE_CONFIG";

/// Errors while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Let the mouse draw, not only a stylus
    pub draw_with_mouse: bool,

    /// Show the overlay at startup
    pub show_overlay: bool,

    /// Document to open at startup
    pub document: Option<PathBuf>,

    /// Ink stroke width
    pub stroke_width: f64,

    /// Reload the document when it changes on disk
    pub watch_document: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draw_with_mouse: settings::ink::DRAW_WITH_MOUSE,
            show_overlay: settings::overlay::SHOW_ON_START,
            document: None,
            stroke_width: settings::ink::STROKE_WIDTH,
            watch_document: true,
        }
    }
}

impl Config {
    /// Parse config text. `path` is only used in error messages.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Read and parse the config at `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml(&text, path).map(Some)
    }

    /// Load the config from its default location, falling back to defaults
    pub fn load() -> Self {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::error!("{}", e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            tracing::warn!(
                "Invalid stroke_width {}, using {}",
                self.stroke_width,
                settings::ink::STROKE_WIDTH
            );
            self.stroke_width = settings::ink::STROKE_WIDTH;
        }
        self
    }
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
