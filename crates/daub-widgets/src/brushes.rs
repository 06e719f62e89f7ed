//! Brush palette glyph buttons.

use egui::epaint::EllipseShape;
use egui::{CornerRadius, CursorIcon, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// Glyphs available in the brush palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushIcon {
    Line,
    Rectangle,
    Oval,
}

/// A clickable brush glyph.
pub struct BrushButton {
    icon: BrushIcon,
    selected: bool,
}

impl BrushButton {
    pub fn new(icon: BrushIcon) -> Self {
        Self {
            icon,
            selected: false,
        }
    }

    /// Set whether this glyph is the active brush.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the glyph; returns true when clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(vec2(sizing::CELL, sizing::CELL), Sense::click());

        if ui.is_rect_visible(rect) {
            let tint = if self.selected {
                theme::SELECTED_GLYPH
            } else {
                theme::INK
            };
            let glyph = rect.shrink(sizing::GLYPH_INSET);
            match self.icon {
                BrushIcon::Line => {
                    ui.painter().line_segment(
                        [glyph.left_top(), glyph.right_bottom()],
                        Stroke::new(2.0, tint),
                    );
                }
                BrushIcon::Rectangle => {
                    ui.painter().rect_filled(glyph, CornerRadius::ZERO, tint);
                }
                BrushIcon::Oval => {
                    ui.painter().add(egui::Shape::Ellipse(EllipseShape {
                        center: glyph.center(),
                        radius: glyph.size() / 2.0,
                        fill: tint,
                        stroke: Stroke::NONE,
                    }));
                }
            }
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
