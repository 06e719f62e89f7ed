//! Thickness palette dots.

use egui::{CursorIcon, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// A clickable dot representing one stroke thickness.
pub struct ThicknessDot {
    diameter: f32,
    selected: bool,
}

impl ThicknessDot {
    /// `diameter` is the stroke width this dot stands for, in pixels.
    pub fn new(diameter: f32) -> Self {
        Self {
            diameter,
            selected: false,
        }
    }

    /// Set whether this dot is the active thickness.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the dot; returns true when clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(vec2(sizing::CELL, sizing::CELL), Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = self.diameter / 2.0;
            ui.painter().circle_filled(center, radius, theme::INK);
            if self.selected {
                ui.painter()
                    .circle_stroke(center, radius + 2.5, Stroke::new(2.0, theme::SELECTED_RING));
            }
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
