//! Error types for the gstx-core library.

use thiserror::Error;

/// Main error type for the gstx library.
#[derive(Error, Debug)]
pub enum GstxError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Page rasterization error.
    #[error("rasterization error: {0}")]
    Raster(#[from] RasterError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to opening and reading PDF documents.
///
/// Opening a document is the only step whose failure reaches the caller;
/// everything downstream degrades to "no contribution" instead.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The byte stream is not a parseable PDF.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be decrypted with an empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to rendering a page to a bitmap.
#[derive(Error, Debug)]
pub enum RasterError {
    /// The renderer ran but produced no usable bitmap.
    #[error("failed to render page: {0}")]
    Render(String),

    /// The external rendering tool is not installed.
    #[error("{0} not found in PATH (install poppler-utils)")]
    ToolMissing(String),

    /// Failed to decode the rendered bitmap.
    #[error("failed to decode rendered page: {0}")]
    Decode(#[from] image::ImageError),

    /// I/O error while exchanging files with the renderer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to OCR recognition.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR engine ran but failed to produce text.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The external OCR engine is not installed.
    #[error("{0} not found in PATH (install tesseract-ocr)")]
    EngineMissing(String),

    /// I/O error while exchanging files with the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the gstx library.
pub type Result<T> = std::result::Result<T, GstxError>;
