//! Palette selection state: the active color, thickness and brush.

use crate::shapes::Color;

/// The fixed color set, in palette order. Black is the startup default.
pub const COLORS: [Color; 15] = [
    Color::rgb(0x00, 0x00, 0x00), // black
    Color::rgb(0xbe, 0xbe, 0xbe), // gray
    Color::rgb(0x9e, 0x57, 0x00), // umber
    Color::rgb(0xa5, 0x2a, 0x2a), // brown
    Color::rgb(0xff, 0x00, 0x00), // red
    Color::rgb(0xfc, 0xba, 0x03), // amber
    Color::rgb(0xff, 0xff, 0x00), // yellow
    Color::rgb(0x5f, 0xb5, 0x3e), // leaf
    Color::rgb(0x00, 0x80, 0x00), // green
    Color::rgb(0x42, 0x87, 0xf5), // sky
    Color::rgb(0x00, 0x00, 0xff), // blue
    Color::rgb(0x56, 0x32, 0xa8), // violet
    Color::rgb(0xa0, 0x20, 0xf0), // purple
    Color::rgb(0xff, 0xc0, 0xcb), // pink
    Color::rgb(0xff, 0xff, 0xff), // white
];

/// The fixed stroke thickness set, in palette order.
pub const THICKNESSES: [f64; 4] = [5.0, 10.0, 15.0, 20.0];

/// Brush kinds selectable from the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrushKind {
    #[default]
    Line,
    Rectangle,
    Oval,
}

impl BrushKind {
    /// All brush kinds, in palette order.
    pub const ALL: [BrushKind; 3] = [BrushKind::Line, BrushKind::Rectangle, BrushKind::Oval];
}

/// The active palette selection.
///
/// Always exactly one member of each fixed set; there is no "none
/// selected" state and no selection history. The select operations
/// assert membership — the UI only ever offers the fixed sets, so an
/// out-of-set value is a programming error, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteState {
    color: Color,
    thickness: f64,
    brush: BrushKind,
}

impl PaletteState {
    pub fn new() -> Self {
        Self {
            color: COLORS[0],
            thickness: THICKNESSES[0],
            brush: BrushKind::Line,
        }
    }

    pub fn select_color(&mut self, color: Color) {
        assert!(COLORS.contains(&color), "color is not in the palette set");
        self.color = color;
    }

    pub fn select_thickness(&mut self, thickness: f64) {
        assert!(
            THICKNESSES.contains(&thickness),
            "thickness is not in the palette set"
        );
        self.thickness = thickness;
    }

    pub fn select_brush(&mut self, brush: BrushKind) {
        self.brush = brush;
    }

    /// The active (color, thickness, brush) triple.
    pub fn current(&self) -> (Color, f64, BrushKind) {
        (self.color, self.thickness, self.brush)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn brush(&self) -> BrushKind {
        self.brush
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_of_each_set() {
        let palette = PaletteState::new();
        assert_eq!(palette.current(), (COLORS[0], THICKNESSES[0], BrushKind::Line));
    }

    #[test]
    fn test_select_color_leaves_rest_untouched() {
        let mut palette = PaletteState::new();
        palette.select_color(COLORS[4]);
        assert_eq!(palette.color(), COLORS[4]);
        assert!((palette.thickness() - THICKNESSES[0]).abs() < f64::EPSILON);
        assert_eq!(palette.brush(), BrushKind::Line);
    }

    #[test]
    fn test_select_thickness_leaves_rest_untouched() {
        let mut palette = PaletteState::new();
        palette.select_thickness(THICKNESSES[2]);
        assert!((palette.thickness() - 15.0).abs() < f64::EPSILON);
        assert_eq!(palette.color(), COLORS[0]);
        assert_eq!(palette.brush(), BrushKind::Line);
    }

    #[test]
    fn test_select_brush_leaves_rest_untouched() {
        let mut palette = PaletteState::new();
        palette.select_brush(BrushKind::Oval);
        assert_eq!(palette.brush(), BrushKind::Oval);
        assert_eq!(palette.color(), COLORS[0]);
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut palette = PaletteState::new();
        palette.select_color(COLORS[9]);
        palette.select_color(COLORS[9]);
        assert_eq!(palette.color(), COLORS[9]);
        palette.select_brush(BrushKind::Rectangle);
        palette.select_brush(BrushKind::Rectangle);
        assert_eq!(palette.brush(), BrushKind::Rectangle);
    }

    #[test]
    #[should_panic]
    fn test_out_of_set_color_panics() {
        let mut palette = PaletteState::new();
        palette.select_color(Color::rgb(1, 2, 3));
    }

    #[test]
    #[should_panic]
    fn test_out_of_set_thickness_panics() {
        let mut palette = PaletteState::new();
        palette.select_thickness(7.0);
    }
}
