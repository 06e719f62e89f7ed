//! Rasterization and image I/O for Daub documents.
//!
//! Save renders the document's shape list directly into a pixel buffer
//! and hands it to the `image` codecs; open decodes an external image
//! and flattens it to a canvas-sized background layer.

mod error;
mod export;
mod import;
pub mod raster;

pub use error::{RenderError, RenderResult};
pub use export::export_document;
pub use import::import_background;
pub use raster::render_document;
