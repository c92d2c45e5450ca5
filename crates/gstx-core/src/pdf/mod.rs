//! PDF processing: document loading, text-layer reading, page rasterization.

mod extractor;
mod rasterizer;

pub use extractor::{EmbeddedTextReader, PdfSource};
pub use rasterizer::PdftoppmRasterizer;

use crate::error::{PdfError, RasterError};
use image::DynamicImage;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Reads the embedded (non-image) text of a document.
///
/// Implementations never fail: a document without a text layer, or one
/// whose text layer cannot be parsed, yields an empty string.
pub trait TextLayerReader {
    /// Concatenated embedded text of all pages, or `""`.
    fn read_text(&self, data: &[u8]) -> String;
}

/// Renders one page of a document to a bitmap.
///
/// Unlike text-layer reading, rendering failures propagate: they gate
/// the OCR fallback and the orchestrator decides how to degrade.
pub trait PageRasterizer {
    /// Render the zero-based `page_index` at `dpi` dots per inch.
    ///
    /// The bitmap is RGB; any alpha channel is flattened onto a white
    /// background.
    fn rasterize(
        &self,
        data: &[u8],
        page_index: u32,
        dpi: u32,
    ) -> std::result::Result<DynamicImage, RasterError>;
}
