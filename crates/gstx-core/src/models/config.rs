//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the gstx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GstxConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// OCR fallback configuration.
    pub ocr: OcrConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum embedded-text length below which the text layer is
    /// treated as absent and OCR kicks in.
    pub min_text_length: usize,

    /// Maximum pages to run through the OCR branch (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            max_pages: 10,
        }
    }
}

/// OCR branch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Enable the OCR branch at all.
    pub enabled: bool,

    /// Rendering resolution for the high-accuracy pass.
    pub dpi: u32,

    /// Resolution retried when the high-accuracy render fails.
    pub fallback_dpi: u32,

    /// Binarize pages with an automatic (Otsu) threshold before
    /// recognition; when off, a median denoise filter is used instead.
    pub binarize: bool,

    /// Tesseract language pack.
    pub language: String,

    /// Run OCR as a corroborating second source even when a usable
    /// text layer exists, merging rather than replacing.
    pub corroborate: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dpi: 600,
            fallback_dpi: 300,
            binarize: true,
            language: "eng".to_string(),
            corroborate: false,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Accept a loose token as the invoice number when no label is
    /// found. Trades precision for recall.
    pub loose_invoice_number: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            loose_invoice_number: true,
        }
    }
}

impl GstxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GstxConfig::default();
        assert_eq!(config.pdf.min_text_length, 50);
        assert_eq!(config.ocr.dpi, 600);
        assert_eq!(config.ocr.fallback_dpi, 300);
        assert!(config.ocr.binarize);
        assert!(!config.ocr.corroborate);
        assert!(config.extraction.loose_invoice_number);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GstxConfig = serde_json::from_str(r#"{"ocr": {"dpi": 300}}"#).unwrap();
        assert_eq!(config.ocr.dpi, 300);
        assert_eq!(config.ocr.fallback_dpi, 300);
        assert_eq!(config.pdf.min_text_length, 50);
    }
}
