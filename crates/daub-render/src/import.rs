//! Image import: decode and flatten to a canvas background.

use crate::error::RenderResult;
use daub_core::{Background, CANVAS_HEIGHT, CANVAS_WIDTH};
use image::imageops::FilterType;
use std::path::Path;

/// Decode an image file and fit it to the canvas as a background layer.
///
/// The image is resampled to exactly canvas size with a Lanczos filter,
/// so imports of any dimension fill the whole canvas.
pub fn import_background(path: &Path) -> RenderResult<Background> {
    let img = image::open(path)?;
    log::info!(
        "imported {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    let resized = img.resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3);
    Ok(Background::from_rgba8(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        resized.to_rgba8().into_raw(),
    ))
}
