//! PDF loading and text-layer extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{Result, TextLayerReader};
use crate::error::PdfError;

/// An opened PDF document.
///
/// Opening is the malformed-input gate: a byte stream that cannot be
/// parsed at all is the one failure the pipeline surfaces to its caller.
pub struct PdfSource {
    data: Vec<u8>,
    page_count: u32,
}

impl PdfSource {
    /// Parse the byte stream and validate that it has at least one page.
    pub fn open(data: &[u8]) -> Result<Self> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        Ok(Self { data, page_count })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// The (decrypted) document bytes, as handed to the collaborators.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Text-layer reader backed by pdf-extract.
///
/// Every internal failure is absorbed into an empty result; a scanned
/// document and a broken text layer look the same to the pipeline.
pub struct EmbeddedTextReader;

impl EmbeddedTextReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedTextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayerReader for EmbeddedTextReader {
    fn read_text(&self, data: &[u8]) -> String {
        match pdf_extract::extract_text_from_mem(data) {
            Ok(text) => text,
            Err(e) => {
                debug!("no usable text layer: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::minimal_pdf;

    #[test]
    fn test_open_valid_pdf() {
        let source = PdfSource::open(&minimal_pdf("hello")).unwrap();
        assert_eq!(source.page_count(), 1);
        assert!(!source.data().is_empty());
    }

    #[test]
    fn test_open_garbage_is_parse_error() {
        let result = PdfSource::open(b"this is not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_reader_swallows_garbage() {
        let reader = EmbeddedTextReader::new();
        assert_eq!(reader.read_text(b"this is not a pdf"), "");
    }
}
