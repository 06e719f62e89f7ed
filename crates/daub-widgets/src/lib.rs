//! Reusable egui widget components for the Daub palettes.
//!
//! - **Colors**: square color swatches with a selected outline
//! - **Thickness**: dots sized to the stroke width they stand for
//! - **Brushes**: glyph buttons for the brush kinds
//!
//! The widgets are app-agnostic: selection state comes in as a flag and
//! clicks go back out as the `show` return value.

pub mod brushes;
pub mod colors;
pub mod thickness;

pub use brushes::{BrushButton, BrushIcon};
pub use colors::ColorSwatch;
pub use thickness::ThicknessDot;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Square color swatch edge.
    pub const SWATCH: f32 = 30.0;
    /// Edge of the hit area around thickness dots and brush glyphs.
    pub const CELL: f32 = 34.0;
    /// Inset from a glyph cell to the glyph itself.
    pub const GLYPH_INSET: f32 = 5.0;
}

/// Shared palette colors.
pub mod theme {
    use egui::Color32;

    /// Outline marking the selected palette entry.
    pub const SELECTED_OUTLINE: Color32 = Color32::from_gray(190);
    /// Ring marking the selected thickness dot.
    pub const SELECTED_RING: Color32 = Color32::from_gray(128);
    /// Glyph tint for the selected brush.
    pub const SELECTED_GLYPH: Color32 = Color32::from_gray(128);
    /// Glyph and dot ink.
    pub const INK: Color32 = Color32::BLACK;
}
