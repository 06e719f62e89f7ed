//! Main application entry point.

mod app;
mod canvas;
mod file_ops;

use app::DaubApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting daub");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::WINDOW_WIDTH, app::WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("Untitled - Daub"),
        ..Default::default()
    };
    eframe::run_native(
        "daub",
        options,
        Box::new(|_cc| Ok(Box::new(DaubApp::new()))),
    )
}
