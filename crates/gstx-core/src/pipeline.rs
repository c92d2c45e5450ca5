//! The extraction pipeline orchestrator.
//!
//! One call per document: read the text layer, fall back to (or
//! corroborate with) rasterize + OCR, merge the line sources, run the
//! field extractors, and assemble the output record. Collaborators are
//! injected and owned by the caller; the pipeline holds no state across
//! calls, so independent instances can run concurrently.

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::error::{RasterError, Result};
use crate::extract::{
    derive_state, extract_gstin_pair, scan_tax_amounts, FieldExtractor, InvoiceNumberExtractor,
};
use crate::models::config::GstxConfig;
use crate::models::record::InvoiceRecord;
use crate::ocr::{ImagePreprocessor, OcrEngine, TesseractEngine};
use crate::pdf::{
    EmbeddedTextReader, PageRasterizer, PdfSource, PdftoppmRasterizer, TextLayerReader,
};
use crate::text::LineSet;

/// Orchestrates one extraction per document.
pub struct ExtractionPipeline {
    reader: Box<dyn TextLayerReader>,
    rasterizer: Box<dyn PageRasterizer>,
    ocr: Box<dyn OcrEngine>,
    preprocessor: ImagePreprocessor,
    config: GstxConfig,
}

impl ExtractionPipeline {
    /// Create a pipeline with the default collaborators: pdf-extract
    /// text layer, pdftoppm rasterizer, tesseract OCR.
    pub fn new(config: GstxConfig) -> Self {
        let preprocessor = ImagePreprocessor::new().with_binarization(config.ocr.binarize);
        let ocr = TesseractEngine::new().with_language(config.ocr.language.clone());
        Self {
            reader: Box::new(EmbeddedTextReader::new()),
            rasterizer: Box::new(PdftoppmRasterizer::new()),
            ocr: Box::new(ocr),
            preprocessor,
            config,
        }
    }

    /// Replace the text-layer reader.
    pub fn with_reader(mut self, reader: Box<dyn TextLayerReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Replace the page rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: Box<dyn PageRasterizer>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    /// Replace the OCR engine.
    pub fn with_ocr(mut self, ocr: Box<dyn OcrEngine>) -> Self {
        self.ocr = ocr;
        self
    }

    /// Extract an invoice record from PDF bytes.
    ///
    /// The only hard failure is a byte stream that cannot be opened as
    /// a PDF. Everything after that degrades: an absent text layer, a
    /// failing renderer, or a failing OCR engine each cost a source,
    /// and missing fields fall back to their defaults.
    pub fn extract(&self, data: &[u8], source_label: &str) -> Result<InvoiceRecord> {
        let source = PdfSource::open(data)?;
        let mut lines = LineSet::new();

        // Text layer first: its lines are seeded in original order and
        // keep priority over anything OCR adds later.
        let layer_text = self.reader.read_text(source.data());
        if !layer_text.trim().is_empty() {
            lines.extend_from_text(&layer_text);
        }
        let text_missing = layer_text.trim().len() < self.config.pdf.min_text_length;
        debug!(
            "text layer: {} chars, {} lines{}",
            layer_text.len(),
            lines.len(),
            if text_missing { " (below threshold)" } else { "" }
        );

        if self.config.ocr.enabled && (text_missing || self.config.ocr.corroborate) {
            self.run_ocr_branch(&source, &mut lines);
        }

        let record = self.assemble_record(&lines, source_label);
        info!(
            "extracted {} from {} ({} merged lines)",
            if record.invoice_number.is_empty() {
                "no invoice number"
            } else {
                record.invoice_number.as_str()
            },
            source_label,
            lines.len()
        );
        Ok(record)
    }

    /// Rasterize and recognize each page, merging recognized lines into
    /// the set. Failures cost the page's contribution, never the call.
    fn run_ocr_branch(&self, source: &PdfSource, lines: &mut LineSet) {
        let pages = if self.config.pdf.max_pages == 0 {
            source.page_count()
        } else {
            source.page_count().min(self.config.pdf.max_pages as u32)
        };

        for page_index in 0..pages {
            let bitmap = match self.render_with_fallback(source.data(), page_index) {
                Ok(bitmap) => bitmap,
                Err(e) => {
                    warn!("page {}: rasterization failed: {}", page_index, e);
                    continue;
                }
            };

            let prepared = self.preprocessor.prepare(&bitmap);
            match self.ocr.recognize(&prepared) {
                Ok(text) => {
                    let before = lines.len();
                    lines.extend_from_text(&text);
                    debug!("page {}: OCR contributed {} new lines", page_index, lines.len() - before);
                }
                Err(e) => warn!("page {}: OCR failed: {}", page_index, e),
            }
        }
    }

    /// Render at the high-accuracy resolution, retrying once at the
    /// throughput fallback when that fails.
    fn render_with_fallback(
        &self,
        data: &[u8],
        page_index: u32,
    ) -> std::result::Result<DynamicImage, RasterError> {
        match self.rasterizer.rasterize(data, page_index, self.config.ocr.dpi) {
            Ok(bitmap) => Ok(bitmap),
            Err(e) => {
                debug!(
                    "page {}: {} dpi render failed ({}), retrying at {} dpi",
                    page_index, self.config.ocr.dpi, e, self.config.ocr.fallback_dpi
                );
                self.rasterizer
                    .rasterize(data, page_index, self.config.ocr.fallback_dpi)
            }
        }
    }

    /// Run every field extractor over the merged lines.
    fn assemble_record(&self, lines: &LineSet, source_label: &str) -> InvoiceRecord {
        let joined = lines.joined();
        let mut record = InvoiceRecord::new(source_label);

        let invoice_extractor = InvoiceNumberExtractor::new()
            .with_loose_fallback(self.config.extraction.loose_invoice_number);
        if let Some(m) = invoice_extractor.extract(&joined) {
            record.invoice_number = m.value;
        }

        let pair = extract_gstin_pair(&joined);
        let (seller_state, seller_code) = derive_state(&pair.seller);
        let (buyer_state, buyer_code) = derive_state(&pair.buyer);
        record.seller_gst = pair.seller;
        record.buyer_gst = pair.buyer;
        record.seller_state = seller_state;
        record.seller_state_code = seller_code;
        record.buyer_state = buyer_state;
        record.buyer_state_code = buyer_code;

        let taxes = scan_tax_amounts(lines.lines().iter().map(String::as_str));
        record.taxable_value = taxes.taxable_value;
        record.igst = taxes.igst;
        record.cgst = taxes.cgst;
        record.sgst = taxes.sgst;
        record.compute_total();

        record
    }
}
