//! Document export: rasterize and encode.

use crate::error::RenderResult;
use crate::raster::render_document;
use daub_core::Document;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Rasterize `document` and write it to `path`.
///
/// The codec follows the file extension; an unrecognized or missing
/// extension is written as PNG.
pub fn export_document(document: &Document, path: &Path) -> RenderResult<()> {
    let img = render_document(document);
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    if format == ImageFormat::Jpeg {
        // JPEG carries no alpha channel.
        DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .save_with_format(path, format)?;
    } else {
        img.save_with_format(path, format)?;
    }
    log::info!("exported {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daub_core::shapes::{Line, ShapeStyle};
    use daub_core::{CANVAS_HEIGHT, CANVAS_WIDTH, COLORS, Shape, Stroke};
    use kurbo::Point;
    use tempfile::tempdir;

    fn lined_document() -> Document {
        let mut doc = Document::new();
        doc.append(Stroke::new(vec![Shape::Line(Line::new(
            Point::new(10.0, 50.0),
            Point::new(90.0, 50.0),
            ShapeStyle::new(COLORS[4], 5.0),
        ))]));
        doc
    }

    #[test]
    fn test_export_png_has_canvas_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.png");
        export_document(&lined_document(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        let red = COLORS[4];
        assert_eq!(*decoded.get_pixel(50, 50), image::Rgba([red.r, red.g, red.b, 255]));
    }

    #[test]
    fn test_export_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.jpg");
        export_document(&lined_document(), &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), CANVAS_WIDTH);
        assert_eq!(decoded.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn test_unknown_extension_falls_back_to_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.raw");
        export_document(&lined_document(), &path).unwrap();

        let reader = image::ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Png));
    }

    #[test]
    fn test_unwritable_path_errors() {
        let result = export_document(&lined_document(), Path::new("/no/such/dir/scene.png"));
        assert!(result.is_err());
    }
}
