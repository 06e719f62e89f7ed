//! Core application state and lifecycle.

use std::path::PathBuf;

use daub_core::{BrushKind, COLORS, Document, DrawingSession, PaletteState, THICKNESSES};
use daub_widgets::{BrushButton, BrushIcon, ColorSwatch, ThicknessDot};

use crate::canvas::{CanvasView, color32};
use crate::file_ops;

pub const WINDOW_WIDTH: f32 = 912.0;
pub const WINDOW_HEIGHT: f32 = 684.0;

/// Top-level application state.
///
/// The document, the palette selection and the in-flight gesture are
/// distinct members, all owned by the single UI thread.
pub struct DaubApp {
    document: Document,
    palette: PaletteState,
    session: DrawingSession,
    canvas: CanvasView,
    /// Last title pushed to the window, to avoid re-sending each frame.
    last_title: String,
    /// Set once the user has confirmed discarding unsaved changes.
    close_confirmed: bool,
}

impl DaubApp {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            palette: PaletteState::new(),
            session: DrawingSession::new(),
            canvas: CanvasView::new(),
            last_title: String::new(),
            close_confirmed: false,
        }
    }

    fn menu_ui(&mut self, ui: &mut egui::Ui) {
        if ui.button("New").clicked() {
            self.new_document();
        }
        if ui.button("Open").clicked() {
            self.open();
        }
        if ui.button("Save").clicked() {
            self.save();
        }
        if ui.button("Save As").clicked() {
            self.save_as();
        }
        if ui.button("Exit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn color_palette_ui(&mut self, ui: &mut egui::Ui) {
        for color in COLORS {
            let selected = self.palette.color() == color;
            if ColorSwatch::new(color32(color)).selected(selected).show(ui) {
                self.palette.select_color(color);
            }
        }
    }

    fn thickness_palette_ui(&mut self, ui: &mut egui::Ui) {
        for thickness in THICKNESSES {
            let selected = (self.palette.thickness() - thickness).abs() < f64::EPSILON;
            if ThicknessDot::new(thickness as f32).selected(selected).show(ui) {
                self.palette.select_thickness(thickness);
            }
        }
    }

    fn brush_palette_ui(&mut self, ui: &mut egui::Ui) {
        for brush in BrushKind::ALL {
            let icon = match brush {
                BrushKind::Line => BrushIcon::Line,
                BrushKind::Rectangle => BrushIcon::Rectangle,
                BrushKind::Oval => BrushIcon::Oval,
            };
            let selected = self.palette.brush() == brush;
            if BrushButton::new(icon).selected(selected).show(ui) {
                self.palette.select_brush(brush);
            }
        }
    }

    /// New: clear the canvas, asking first when there are unsaved changes.
    fn new_document(&mut self) {
        if self.document.is_dirty() && !file_ops::confirm_clear() {
            return;
        }
        self.session.cancel();
        self.canvas.clear_background();
        self.document.clear();
        log::info!("canvas cleared");
    }

    /// Open: import an image as the new canvas content.
    fn open(&mut self) {
        let Some(path) = file_ops::pick_open_path() else {
            return;
        };
        match daub_render::import_background(&path) {
            Ok(background) => {
                self.session.cancel();
                self.canvas.clear_background();
                self.document.load_background(background, path);
            }
            Err(err) => {
                log::error!("failed to open {}: {err}", path.display());
                file_ops::show_error("Open failed", &err.to_string());
            }
        }
    }

    /// Save to the backing file, or fall through to Save As without one.
    fn save(&mut self) {
        let path = self.document.path().map(|p| p.to_path_buf());
        match path {
            Some(path) => self.export_to(path),
            None => self.save_as(),
        }
    }

    fn save_as(&mut self) {
        let Some(path) = file_ops::pick_save_path(self.document.title()) else {
            return;
        };
        self.export_to(file_ops::with_default_extension(path));
    }

    fn export_to(&mut self, path: PathBuf) {
        match daub_render::export_document(&self.document, &path) {
            Ok(()) => self.document.mark_saved(path),
            Err(err) => {
                log::error!("failed to save {}: {err}", path.display());
                file_ops::show_error("Save failed", &err.to_string());
            }
        }
    }

    /// Intercept window close while the document has unsaved changes.
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if self.close_confirmed || !self.document.is_dirty() {
            return;
        }
        if file_ops::confirm_discard() {
            self.close_confirmed = true;
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.document.display_title();
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

impl Default for DaubApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for DaubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| self.menu_ui(ui));
        });

        egui::TopBottomPanel::top("palettes").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.color_palette_ui(ui);
                ui.separator();
                self.thickness_palette_ui(ui);
                ui.separator();
                self.brush_palette_ui(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas
                .ui(ui, &mut self.document, &self.palette, &mut self.session);
        });

        self.sync_title(ctx);
    }
}
