//! Drawing session: turns a pointer drag into a stroke.

use crate::palette::{BrushKind, PaletteState};
use crate::shapes::{Line, Oval, Rectangle, Shape, ShapeStyle};
use crate::stroke::Stroke;
use kurbo::Point;

/// How far an oval may reach past its anchor, per axis.
const OVAL_REACH: f64 = 10.0;

/// State of the in-progress gesture.
#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Idle,
    Active {
        /// Last sampled pointer position; each new shape starts here.
        anchor: Point,
        shapes: Vec<Shape>,
    },
}

/// Converts pointer-drag events into a stroke using the active palette.
///
/// A drag is a chain of many small shapes, one per motion sample, each
/// anchored at the previous sample — not one shape spanning the whole
/// gesture.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    state: SessionState,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `point`.
    pub fn begin(&mut self, point: Point) {
        self.state = SessionState::Active {
            anchor: point,
            shapes: Vec::new(),
        };
    }

    /// Append one shape from the anchor to `point`, then re-anchor at
    /// `point`. Ignored while idle.
    pub fn extend(&mut self, point: Point, palette: &PaletteState) {
        let SessionState::Active { anchor, shapes } = &mut self.state else {
            return;
        };
        let style = ShapeStyle::new(palette.color(), palette.thickness());
        let shape = match palette.brush() {
            BrushKind::Line => Shape::Line(Line::new(*anchor, point, style)),
            BrushKind::Rectangle => {
                Shape::Rectangle(Rectangle::from_corners(*anchor, point, style))
            }
            BrushKind::Oval => {
                // The oval's box is capped at OVAL_REACH past the anchor
                // on each axis.
                let capped = Point::new(
                    (anchor.x + OVAL_REACH).min(point.x),
                    (anchor.y + OVAL_REACH).min(point.y),
                );
                Shape::Oval(Oval::from_corners(*anchor, capped, style))
            }
        };
        shapes.push(shape);
        *anchor = point;
    }

    /// End the gesture. Returns the stroke to commit, or `None` when the
    /// pointer never moved (nothing to record).
    pub fn commit(&mut self) -> Option<Stroke> {
        match std::mem::take(&mut self.state) {
            SessionState::Idle => None,
            SessionState::Active { shapes, .. } => {
                if shapes.is_empty() {
                    None
                } else {
                    Some(Stroke::new(shapes))
                }
            }
        }
    }

    /// Discard the in-progress gesture.
    pub fn cancel(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Shapes drawn so far in the in-progress gesture, for live preview.
    pub fn pending_shapes(&self) -> &[Shape] {
        match &self.state {
            SessionState::Active { shapes, .. } => shapes,
            SessionState::Idle => &[],
        }
    }
}
