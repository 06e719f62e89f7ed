//! Rectangle shape.

use super::ShapeStyle;
use kurbo::{Point, Rect};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    rect: Rect,
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Build from two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point, style: ShapeStyle) -> Self {
        Self {
            rect: Rect::from_points(a, b),
            style,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }
}
