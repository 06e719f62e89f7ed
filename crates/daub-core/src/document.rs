//! Canvas document: committed strokes, background layer and file state.

use crate::history::StrokeHistory;
use crate::stroke::Stroke;
use std::path::{Path, PathBuf};

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;

/// Title shown for a document with no backing file.
pub const UNTITLED: &str = "Untitled";

/// Application name, used as the window-title suffix.
const APP_NAME: &str = "Daub";

/// An imported raster image, flattened to canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Background {
    /// Wrap a row-major RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "pixel buffer does not match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// The in-memory drawing.
///
/// Committed strokes in paint order, an optional imported background
/// painted beneath them, the undo ring, and the dirty/title/path state
/// the window reflects.
#[derive(Debug, Clone)]
pub struct Document {
    strokes: Vec<Stroke>,
    background: Option<Background>,
    history: StrokeHistory,
    dirty: bool,
    title: String,
    path: Option<PathBuf>,
}

impl Document {
    /// A clean, empty, untitled document.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
            background: None,
            history: StrokeHistory::new(),
            dirty: false,
            title: UNTITLED.to_owned(),
            path: None,
        }
    }

    /// Commit a stroke: append it, remember its id for undo, mark dirty.
    pub fn append(&mut self, stroke: Stroke) {
        log::debug!("stroke {} committed ({} shapes)", stroke.id(), stroke.len());
        self.history.push(stroke.id());
        self.strokes.push(stroke);
        self.dirty = true;
    }

    /// Undo the most recent undoable stroke.
    ///
    /// Returns `false` (leaving the document untouched) when the undo
    /// ring is empty.
    pub fn undo_last(&mut self) -> bool {
        let Some(id) = self.history.pop_most_recent() else {
            return false;
        };
        log::debug!("stroke {id} undone");
        self.strokes.retain(|stroke| stroke.id() != id);
        self.dirty = true;
        true
    }

    /// Reset to a clean, empty, untitled document.
    ///
    /// Callers confirm with the user first when the document is dirty.
    pub fn clear(&mut self) {
        log::debug!("document cleared");
        self.strokes.clear();
        self.background = None;
        self.history.clear();
        self.title = UNTITLED.to_owned();
        self.path = None;
        self.dirty = false;
    }

    /// Replace the document's visual content with an imported image.
    ///
    /// This is a flatten: prior strokes and their undo ids are discarded
    /// and cannot be recovered individually.
    pub fn load_background(&mut self, background: Background, path: PathBuf) {
        self.strokes.clear();
        self.history.clear();
        self.background = Some(background);
        self.title = file_title(&path);
        self.path = Some(path);
        self.dirty = false;
    }

    /// Record a successful export to `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.title = file_title(&path);
        self.path = Some(path);
        self.dirty = false;
    }

    /// The window-title string, `*`-prefixed while dirty.
    pub fn display_title(&self) -> String {
        if self.dirty {
            format!("*{} - {}", self.title, APP_NAME)
        } else {
            format!("{} - {}", self.title, APP_NAME)
        }
    }

    /// Committed strokes in paint order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Display title for a backing file: the file name without its directory.
fn file_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNTITLED.to_owned())
}
