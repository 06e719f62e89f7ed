//! Software rasterizer for documents.
//!
//! Shapes are drawn by coverage-testing pixel centers inside a clipped
//! bounding box. Fill and outline share one color, so a shape is painted
//! solid out to the outer edge of its outline.

use daub_core::shapes::{Color, Line, Oval, Polygon, Rectangle};
use daub_core::{Background, CANVAS_HEIGHT, CANVAS_WIDTH, Document, Shape};
use image::{Rgba, RgbaImage};
use kurbo::{Point, Rect, Vec2};

/// Canvas background color.
const CANVAS_CLEAR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterize a document at canvas resolution: white canvas, then the
/// background layer, then every committed stroke in paint order.
pub fn render_document(document: &Document) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_CLEAR);
    if let Some(background) = document.background() {
        blit_background(&mut img, background);
    }
    for stroke in document.strokes() {
        for shape in stroke.shapes() {
            draw_shape(&mut img, shape);
        }
    }
    img
}

/// Draw a single shape into `img`.
pub fn draw_shape(img: &mut RgbaImage, shape: &Shape) {
    match shape {
        Shape::Line(line) => draw_line(img, line),
        Shape::Rectangle(rect) => draw_rectangle(img, rect),
        Shape::Oval(oval) => draw_oval(img, oval),
        Shape::Polygon(polygon) => draw_polygon(img, polygon),
    }
}

fn draw_line(img: &mut RgbaImage, line: &Line) {
    let half = half_width(&line.style);
    let pixel = pixel(line.style.color);
    let Some((x0, y0, x1, y1)) = clip(line.bounds().inflate(half, half), img) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            if segment_distance(pixel_center(x, y), line.start, line.end) <= half {
                img.put_pixel(x, y, pixel);
            }
        }
    }
}

fn draw_rectangle(img: &mut RgbaImage, rect: &Rectangle) {
    let half = half_width(&rect.style);
    let pixel = pixel(rect.style.color);
    let outer = rect.rect().inflate(half, half);
    let Some((x0, y0, x1, y1)) = clip(outer, img) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            if outer.contains(pixel_center(x, y)) {
                img.put_pixel(x, y, pixel);
            }
        }
    }
}

fn draw_oval(img: &mut RgbaImage, oval: &Oval) {
    let half = half_width(&oval.style);
    let pixel = pixel(oval.style.color);
    let outer = oval.rect().inflate(half, half);
    let (rx, ry) = (outer.width() / 2.0, outer.height() / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let center = outer.center();
    let Some((x0, y0, x1, y1)) = clip(outer, img) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let p = pixel_center(x, y);
            let dx = (p.x - center.x) / rx;
            let dy = (p.y - center.y) / ry;
            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x, y, pixel);
            }
        }
    }
}

fn draw_polygon(img: &mut RgbaImage, polygon: &Polygon) {
    let half = half_width(&polygon.style);
    let pixel = pixel(polygon.style.color);
    let points = polygon.points();
    let Some((x0, y0, x1, y1)) = clip(polygon.bounds().inflate(half, half), img) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let p = pixel_center(x, y);
            if polygon_contains(points, p) || edge_distance(points, p) <= half {
                img.put_pixel(x, y, pixel);
            }
        }
    }
}

/// Copy a canvas-sized background layer over the image.
fn blit_background(img: &mut RgbaImage, background: &Background) {
    debug_assert_eq!(background.width(), img.width());
    debug_assert_eq!(background.height(), img.height());
    for (dst, src) in img
        .chunks_exact_mut(4)
        .zip(background.pixels().chunks_exact(4))
    {
        dst.copy_from_slice(src);
    }
}

/// Clamp a shape's bounding box to the image, as half-open pixel ranges.
/// `None` when the box lies entirely outside the canvas.
fn clip(bounds: Rect, img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let x0 = bounds.x0.floor().max(0.0) as u32;
    let y0 = bounds.y0.floor().max(0.0) as u32;
    let x1 = (bounds.x1.ceil().max(0.0) as u32).min(img.width());
    let y1 = (bounds.y1.ceil().max(0.0) as u32).min(img.height());
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

fn half_width(style: &daub_core::ShapeStyle) -> f64 {
    (style.width / 2.0).max(0.5)
}

fn pixel(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Distance from a point to the segment a-b.
fn segment_distance(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    point.distance(proj)
}

/// Minimum distance from a point to the polygon's closed edge loop.
fn edge_distance(points: &[Point], p: Point) -> f64 {
    let mut min = f64::INFINITY;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        min = min.min(segment_distance(p, a, b));
    }
    min
}

/// Even-odd test: does the closed polygon contain `p`?
fn polygon_contains(points: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use daub_core::shapes::ShapeStyle;
    use daub_core::{COLORS, Stroke};

    const RED: Color = COLORS[4];
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn style() -> ShapeStyle {
        ShapeStyle::new(RED, 5.0)
    }

    fn red_pixel() -> Rgba<u8> {
        Rgba([RED.r, RED.g, RED.b, RED.a])
    }

    #[test]
    fn test_empty_document_renders_white() {
        let img = render_document(&Document::new());
        assert_eq!(img.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(400, 300), WHITE);
        assert_eq!(*img.get_pixel(CANVAS_WIDTH - 1, CANVAS_HEIGHT - 1), WHITE);
    }

    #[test]
    fn test_line_covers_its_pixels() {
        let mut doc = Document::new();
        doc.append(Stroke::new(vec![Shape::Line(Line::new(
            Point::new(10.0, 50.0),
            Point::new(90.0, 50.0),
            style(),
        ))]));
        let img = render_document(&doc);

        assert_eq!(*img.get_pixel(50, 50), red_pixel());
        assert_eq!(*img.get_pixel(10, 50), red_pixel());
        // Well off the segment stays white.
        assert_eq!(*img.get_pixel(50, 40), WHITE);
        assert_eq!(*img.get_pixel(50, 60), WHITE);
    }

    #[test]
    fn test_rectangle_fills_its_box() {
        let mut doc = Document::new();
        doc.append(Stroke::new(vec![Shape::Rectangle(Rectangle::from_corners(
            Point::new(10.0, 10.0),
            Point::new(30.0, 30.0),
            style(),
        ))]));
        let img = render_document(&doc);

        assert_eq!(*img.get_pixel(20, 20), red_pixel());
        assert_eq!(*img.get_pixel(11, 11), red_pixel());
        assert_eq!(*img.get_pixel(40, 40), WHITE);
    }

    #[test]
    fn test_oval_covers_center_not_corner() {
        let mut doc = Document::new();
        doc.append(Stroke::new(vec![Shape::Oval(Oval::from_corners(
            Point::new(100.0, 100.0),
            Point::new(160.0, 140.0),
            style(),
        ))]));
        let img = render_document(&doc);

        assert_eq!(*img.get_pixel(130, 120), red_pixel());
        // Bounding-box corner is outside the ellipse.
        assert_eq!(*img.get_pixel(97, 97), WHITE);
    }

    #[test]
    fn test_polygon_covers_interior() {
        let mut doc = Document::new();
        doc.append(Stroke::new(vec![Shape::Polygon(Polygon::new(
            vec![
                Point::new(200.0, 200.0),
                Point::new(260.0, 200.0),
                Point::new(230.0, 260.0),
            ],
            style(),
        ))]));
        let img = render_document(&doc);

        assert_eq!(*img.get_pixel(230, 220), red_pixel());
        assert_eq!(*img.get_pixel(200, 260), WHITE);
    }

    #[test]
    fn test_offscreen_shape_is_culled() {
        let mut doc = Document::new();
        doc.append(Stroke::new(vec![Shape::Line(Line::new(
            Point::new(2000.0, 2000.0),
            Point::new(2100.0, 2100.0),
            style(),
        ))]));
        let img = render_document(&doc);
        assert_eq!(img, render_document(&Document::new()));
    }

    #[test]
    fn test_background_is_painted_beneath_strokes() {
        let blue = Rgba([0, 0, 255, 255]);
        let pixels = vec![0u8, 0, 255, 255]
            .into_iter()
            .cycle()
            .take(CANVAS_WIDTH as usize * CANVAS_HEIGHT as usize * 4)
            .collect();
        let mut doc = Document::new();
        doc.load_background(
            Background::from_rgba8(CANVAS_WIDTH, CANVAS_HEIGHT, pixels),
            std::path::PathBuf::from("/tmp/bg.png"),
        );
        doc.append(Stroke::new(vec![Shape::Line(Line::new(
            Point::new(0.0, 10.0),
            Point::new(100.0, 10.0),
            style(),
        ))]));
        let img = render_document(&doc);

        assert_eq!(*img.get_pixel(400, 300), blue);
        assert_eq!(*img.get_pixel(50, 10), red_pixel());
    }

    #[test]
    fn test_paint_order_is_stroke_order() {
        let mut doc = Document::new();
        doc.append(Stroke::new(vec![Shape::Rectangle(Rectangle::from_corners(
            Point::new(10.0, 10.0),
            Point::new(50.0, 50.0),
            ShapeStyle::new(COLORS[10], 5.0),
        ))]));
        doc.append(Stroke::new(vec![Shape::Rectangle(Rectangle::from_corners(
            Point::new(10.0, 10.0),
            Point::new(50.0, 50.0),
            style(),
        ))]));
        let img = render_document(&doc);
        // The later stroke wins.
        assert_eq!(*img.get_pixel(30, 30), red_pixel());
    }
}
