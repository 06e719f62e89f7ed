//! Canvas panel: pointer wiring and shape painting.

use daub_core::{
    CANVAS_HEIGHT, CANVAS_WIDTH, Color, Document, DrawingSession, PaletteState, Shape,
};
use egui::epaint::EllipseShape;
use egui::{
    Color32, ColorImage, CornerRadius, PointerButton, Pos2, Rect, Sense, Stroke, StrokeKind,
    TextureHandle, TextureOptions, Ui, pos2, vec2,
};
use kurbo::Point;

/// Renders the drawing canvas and feeds pointer events into the session.
pub struct CanvasView {
    /// Cached GPU upload of the document's background layer.
    background_texture: Option<TextureHandle>,
}

impl CanvasView {
    pub fn new() -> Self {
        Self {
            background_texture: None,
        }
    }

    /// Drop the cached background texture; the next frame re-uploads it
    /// from the document.
    pub fn clear_background(&mut self) {
        self.background_texture = None;
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        document: &mut Document,
        palette: &PaletteState,
        session: &mut DrawingSession,
    ) {
        let size = vec2(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - size.x) / 2.0).max(0.0));

            let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
            let painter = painter.with_clip_rect(response.rect);
            let origin = response.rect.min;

            painter.rect_filled(response.rect, CornerRadius::ZERO, Color32::WHITE);

            if let Some(background) = document.background() {
                let texture = self.background_texture.get_or_insert_with(|| {
                    let img = ColorImage::from_rgba_unmultiplied(
                        [background.width() as usize, background.height() as usize],
                        background.pixels(),
                    );
                    ui.ctx()
                        .load_texture("canvas-background", img, TextureOptions::LINEAR)
                });
                painter.image(
                    texture.id(),
                    response.rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }

            // Left drag draws; right click undoes.
            if response.drag_started_by(PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    session.begin(canvas_point(pos, origin));
                }
            } else if response.dragged_by(PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    session.extend(canvas_point(pos, origin), palette);
                }
            }
            if response.drag_stopped_by(PointerButton::Primary) {
                if let Some(stroke) = session.commit() {
                    document.append(stroke);
                }
            }
            if response.secondary_clicked() {
                document.undo_last();
            }

            for stroke in document.strokes() {
                for shape in stroke.shapes() {
                    paint_shape(&painter, origin, shape);
                }
            }
            for shape in session.pending_shapes() {
                paint_shape(&painter, origin, shape);
            }
        });
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new()
    }
}

fn paint_shape(painter: &egui::Painter, origin: Pos2, shape: &Shape) {
    let color = color32(shape.style().color);
    let width = shape.style().width as f32;
    match shape {
        Shape::Line(line) => {
            painter.line_segment(
                [to_screen(origin, line.start), to_screen(origin, line.end)],
                Stroke::new(width, color),
            );
        }
        Shape::Rectangle(rect) => {
            let rect = screen_rect(origin, rect.rect());
            painter.rect_filled(rect, CornerRadius::ZERO, color);
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(width, color),
                StrokeKind::Middle,
            );
        }
        Shape::Oval(oval) => {
            let rect = screen_rect(origin, oval.rect());
            painter.add(egui::Shape::Ellipse(EllipseShape {
                center: rect.center(),
                radius: rect.size() / 2.0,
                fill: color,
                stroke: Stroke::new(width, color),
            }));
        }
        Shape::Polygon(polygon) => {
            let points = polygon
                .points()
                .iter()
                .map(|p| to_screen(origin, *p))
                .collect();
            painter.add(egui::Shape::convex_polygon(
                points,
                color,
                Stroke::new(width, color),
            ));
        }
    }
}

pub(crate) fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn canvas_point(pos: Pos2, origin: Pos2) -> Point {
    Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn screen_rect(origin: Pos2, rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        to_screen(origin, rect.origin()),
        to_screen(origin, Point::new(rect.x1, rect.y1)),
    )
}
