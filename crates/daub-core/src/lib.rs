//! Daub Core Library
//!
//! Platform-agnostic data model and logic for the Daub paint application:
//! shapes, strokes, the undo ring, the document and the palette/session
//! state machines. Rendering and file I/O live in `daub-render`; the UI
//! shell lives in `daub-app`.

pub mod document;
pub mod history;
pub mod palette;
pub mod session;
pub mod shapes;
pub mod stroke;

pub use document::{Background, CANVAS_HEIGHT, CANVAS_WIDTH, Document};
pub use history::{DEFAULT_UNDO_CAPACITY, StrokeHistory};
pub use palette::{BrushKind, COLORS, PaletteState, THICKNESSES};
pub use session::DrawingSession;
pub use shapes::{Color, Shape, ShapeStyle};
pub use stroke::{Stroke, StrokeId};
