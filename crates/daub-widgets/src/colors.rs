//! Color palette swatches.

use egui::{Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// A clickable square swatch in the color palette.
pub struct ColorSwatch {
    color: Color32,
    selected: bool,
}

impl ColorSwatch {
    pub fn new(color: Color32) -> Self {
        Self {
            color,
            selected: false,
        }
    }

    /// Set whether this swatch is the active color.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch; returns true when clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(vec2(sizing::SWATCH, sizing::SWATCH), Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, CornerRadius::ZERO, self.color);

            // The white swatch always keeps a thin dark border; the
            // selected swatch gets the thick light outline either way.
            let outline = if self.selected {
                Some(Stroke::new(3.0, theme::SELECTED_OUTLINE))
            } else if self.color == Color32::WHITE {
                Some(Stroke::new(1.0, theme::INK))
            } else {
                None
            };
            if let Some(stroke) = outline {
                ui.painter()
                    .rect_stroke(rect, CornerRadius::ZERO, stroke, StrokeKind::Inside);
            }
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
