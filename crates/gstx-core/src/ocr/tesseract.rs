//! Tesseract OCR engine adapter.
//!
//! Invokes the system tesseract binary on a scratch PNG. Page
//! segmentation mode 6 assumes a single uniform block of text, which
//! fits single-column invoice pages.

use std::process::Command;

use image::DynamicImage;
use tempfile::TempDir;
use tracing::debug;

use super::{OcrEngine, Result};
use crate::error::OcrError;

/// OCR engine backed by the tesseract command-line tool.
pub struct TesseractEngine {
    language: String,
}

impl TesseractEngine {
    /// Create an engine using the English language pack.
    pub fn new() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }

    /// Set the tesseract language pack.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        let dir = TempDir::new()?;
        let image_path = dir.path().join("page.png");
        image
            .save(&image_path)
            .map_err(|e| OcrError::Recognition(format!("failed to write page bitmap: {}", e)))?;

        let output = Command::new("tesseract")
            .arg(&image_path)
            .arg("stdout")
            .args(["--psm", "6", "-l", &self.language])
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let text = String::from_utf8_lossy(&out.stdout).to_string();
                debug!("tesseract recognized {} bytes of text", text.len());
                Ok(text)
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                Err(OcrError::Recognition(format!(
                    "tesseract failed: {}",
                    stderr.trim()
                )))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(OcrError::EngineMissing("tesseract".to_string()))
            }
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}
