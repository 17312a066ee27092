// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! The document shown under the overlay.
//!
//! A document is plain text split into paragraphs at blank lines. Lines
//! inside a paragraph are joined with spaces; the reader re-wraps them to
//! the view width.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text")]
    NotUtf8 { path: PathBuf },

    #[error("document has no text")]
    Empty,
}

/// A loaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub paragraphs: Vec<String>,
    /// File the document was read from, if any
    pub source: Option<PathBuf>,
}

impl Document {
    /// Build a document from text
    pub fn from_text(title: impl Into<String>, text: &str) -> Result<Self, DocumentError> {
        let paragraphs = split_paragraphs(text);
        if paragraphs.is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(Self {
            title: title.into(),
            paragraphs,
            source: None,
        })
    }

    /// Read a document from a text file
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8 {
            path: path.to_path_buf(),
        })?;

        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut document = Self::from_text(title, &text)?;
        document.source = Some(path.to_path_buf());
        tracing::info!(
            "Loaded document {} ({} paragraphs)",
            path.display(),
            document.paragraphs.len()
        );
        Ok(document)
    }

    /// Built-in document shown when nothing else is opened
    pub fn sample() -> Self {
        Self {
            title: String::from("Welcome"),
            paragraphs: SAMPLE_TEXT.iter().map(|p| p.to_string()).collect(),
            source: None,
        }
    }
}

/// Split on blank lines and join the lines of each paragraph
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }
    paragraphs
}

const SAMPLE_TEXT: &[&str] = &[
    "Higher Plane lays a transparent sheet over this page. Whatever you write \
     on the sheet stays pinned to the words underneath it, even as the page \
     scrolls.",
    "Use a stylus to draw directly on the text. A pen always draws; the mouse \
     draws only when \"Draw with mouse\" is ticked in the toolbar. Touch and \
     an unticked mouse scroll and click the page as usual.",
    "Hide the sheet with the overlay button to read without ink, or press \
     Escape. Clear removes every stroke. Ctrl+K does the same from the \
     keyboard.",
    "Open any plain text file with the Open button, or pass its path on the \
     command line. Paragraphs are separated by blank lines. If the file \
     changes on disk it is reloaded and your ink is kept.",
    "The rest of this page is filler so there is something to scroll. Margins \
     are for notes: underline a phrase, circle a word, draw an arrow to the \
     next paragraph.",
    "Paper is patient. It takes whatever is written on it, and it keeps the \
     marks of every reader who came before. A sheet laid over the page keeps \
     those marks apart from the text itself.",
    "Scroll down a little, then draw, then scroll back. The stroke moves with \
     the paragraph it was drawn on, because every point is stored relative to \
     the document rather than the window.",
    "Resize the window and the sheet follows the page, keeping its ink.",
];
