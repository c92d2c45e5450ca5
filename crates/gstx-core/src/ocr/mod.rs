//! OCR adapters: image preprocessing and the external recognition engine.

mod preprocessing;
mod tesseract;

pub use preprocessing::ImagePreprocessor;
pub use tesseract::TesseractEngine;

use crate::error::OcrError;
use image::DynamicImage;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// An opaque "image → text" capability.
///
/// Implementations receive an already-preprocessed bitmap and return
/// whatever raw text the engine recognized; splitting into lines and
/// cleanup happen downstream.
pub trait OcrEngine {
    /// Recognize text in the bitmap.
    fn recognize(&self, image: &DynamicImage) -> Result<String>;
}
