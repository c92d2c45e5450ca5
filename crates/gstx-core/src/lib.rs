//! Core library for GST invoice field extraction from PDF documents.
//!
//! This crate provides:
//! - PDF processing (text-layer reading and page rasterization)
//! - OCR adapters (image preprocessing, tesseract engine)
//! - OCR-noise-tolerant line and number normalization
//! - GST field extraction (invoice number, GSTIN pair, state codes,
//!   tax amounts)
//! - The pipeline orchestrator assembling a flat invoice record

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;
pub mod text;

pub use error::{GstxError, Result};
pub use extract::{ExtractionMatch, FieldExtractor};
pub use models::config::GstxConfig;
pub use models::record::InvoiceRecord;
pub use ocr::{ImagePreprocessor, OcrEngine, TesseractEngine};
pub use pdf::{
    EmbeddedTextReader, PageRasterizer, PdfSource, PdftoppmRasterizer, TextLayerReader,
};
pub use pipeline::ExtractionPipeline;
pub use text::{normalize_line, LineSet};

#[cfg(test)]
pub(crate) mod test_util;
