//! Image preprocessing ahead of OCR recognition.

use image::DynamicImage;
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::filter::median_filter;
use tracing::debug;

/// Prepares a rendered page for the recognition engine.
///
/// Scanned invoices respond well to hard binarization; the automatic
/// (Otsu) threshold is the default. With binarization off, a median
/// filter knocks out salt-and-pepper noise while keeping gray levels.
pub struct ImagePreprocessor {
    binarize: bool,
}

impl ImagePreprocessor {
    /// Create a preprocessor with the binarization path enabled.
    pub fn new() -> Self {
        Self { binarize: true }
    }

    /// Set whether to binarize instead of median-filtering.
    pub fn with_binarization(mut self, binarize: bool) -> Self {
        self.binarize = binarize;
        self
    }

    /// Grayscale the image, then binarize or denoise it.
    pub fn prepare(&self, image: &DynamicImage) -> DynamicImage {
        let gray = image.to_luma8();

        let processed = if self.binarize {
            let level = otsu_level(&gray);
            debug!("binarizing at Otsu level {}", level);
            threshold(&gray, level, ThresholdType::Binary)
        } else {
            debug!("applying median denoise filter");
            median_filter(&gray, 1, 1)
        };

        DynamicImage::ImageLuma8(processed)
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn two_tone_image() -> DynamicImage {
        let gray = GrayImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Luma([30u8])
            } else {
                Luma([220u8])
            }
        });
        DynamicImage::ImageLuma8(gray)
    }

    #[test]
    fn test_binarization_yields_black_and_white_only() {
        let prepared = ImagePreprocessor::new().prepare(&two_tone_image());
        let gray = prepared.to_luma8();
        assert!(gray.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn test_median_path_preserves_dimensions() {
        let prepared = ImagePreprocessor::new()
            .with_binarization(false)
            .prepare(&two_tone_image());
        assert_eq!(prepared.to_luma8().dimensions(), (8, 8));
    }
}
