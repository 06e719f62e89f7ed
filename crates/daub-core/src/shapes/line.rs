//! Line segment shape.

use super::ShapeStyle;
use kurbo::{Point, Rect};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub style: ShapeStyle,
}

impl Line {
    pub fn new(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self { start, end, style }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Color;

    #[test]
    fn test_bounds_normalized() {
        let line = Line::new(
            Point::new(50.0, 10.0),
            Point::new(20.0, 40.0),
            ShapeStyle::new(Color::black(), 5.0),
        );
        let bounds = line.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 40.0).abs() < f64::EPSILON);
    }
}
