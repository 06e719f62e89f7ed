//! Oval shape.

use super::ShapeStyle;
use kurbo::{Point, Rect};

/// An ellipse inscribed in an axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oval {
    rect: Rect,
    pub style: ShapeStyle,
}

impl Oval {
    /// Build from two opposite corners of the bounding box, in any order.
    pub fn from_corners(a: Point, b: Point, style: ShapeStyle) -> Self {
        Self {
            rect: Rect::from_points(a, b),
            style,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> (f64, f64) {
        (self.rect.width() / 2.0, self.rect.height() / 2.0)
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Color;

    #[test]
    fn test_center_and_radii() {
        let oval = Oval::from_corners(
            Point::new(20.0, 30.0),
            Point::new(80.0, 70.0),
            ShapeStyle::new(Color::black(), 5.0),
        );
        assert!((oval.center().x - 50.0).abs() < f64::EPSILON);
        assert!((oval.center().y - 50.0).abs() < f64::EPSILON);
        let (rx, ry) = oval.radii();
        assert!((rx - 30.0).abs() < f64::EPSILON);
        assert!((ry - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_corners_normalized() {
        let oval = Oval::from_corners(
            Point::new(80.0, 70.0),
            Point::new(20.0, 30.0),
            ShapeStyle::new(Color::black(), 5.0),
        );
        assert!((oval.rect().x0 - 20.0).abs() < f64::EPSILON);
        assert!((oval.rect().y1 - 70.0).abs() < f64::EPSILON);
    }
}
