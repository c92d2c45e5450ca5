//! Page rasterization via the pdftoppm tool from poppler-utils.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, Rgb, RgbImage};
use tempfile::TempDir;
use tracing::{debug, trace};

use super::PageRasterizer;
use crate::error::RasterError;

/// Rasterizer that shells out to pdftoppm.
pub struct PdftoppmRasterizer;

impl PdftoppmRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdftoppmRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRasterizer for PdftoppmRasterizer {
    fn rasterize(
        &self,
        data: &[u8],
        page_index: u32,
        dpi: u32,
    ) -> Result<DynamicImage, RasterError> {
        let dir = TempDir::new()?;
        let pdf_path = dir.path().join("input.pdf");
        fs::write(&pdf_path, data)?;

        // pdftoppm numbers pages from 1
        let page = page_index + 1;
        let page_str = page.to_string();
        let output_prefix = dir.path().join("page");

        let status = Command::new("pdftoppm")
            .args(["-png", "-r", &dpi.to_string(), "-f", &page_str, "-l", &page_str])
            .arg(&pdf_path)
            .arg(&output_prefix)
            .status();

        match status {
            Ok(s) if s.success() => {}
            Ok(_) => {
                return Err(RasterError::Render(format!(
                    "pdftoppm failed on page {}",
                    page
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RasterError::ToolMissing("pdftoppm".to_string()));
            }
            Err(e) => return Err(RasterError::Io(e)),
        }

        let image_path = find_page_image(dir.path(), page).ok_or_else(|| {
            RasterError::Render(format!("no bitmap produced for page {}", page))
        })?;

        debug!("rendered page {} at {} dpi", page, dpi);
        let rendered = image::open(&image_path)?;
        Ok(flatten_to_rgb(rendered))
    }
}

/// Find the image pdftoppm generated for a page.
///
/// pdftoppm zero-pads the page number to the digit count of the last
/// page, so a single-page document yields page-1.png while a hundred
/// page one yields page-001.png.
fn find_page_image(dir: &Path, page: u32) -> Option<PathBuf> {
    for digits in [1, 2, 3, 4, 5] {
        let filename = format!("page-{:0width$}.png", page, width = digits);
        let path = dir.join(&filename);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Flatten any alpha channel onto a white background and return RGB.
fn flatten_to_rgb(image: DynamicImage) -> DynamicImage {
    if !image.color().has_alpha() {
        return DynamicImage::ImageRgb8(image.to_rgb8());
    }

    trace!("flattening alpha channel onto white");
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as u32;
        let blend = |c: u8| (((c as u32) * alpha + 255 * (255 - alpha)) / 255) as u8;
        rgb.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }

    DynamicImage::ImageRgb8(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_flatten_opaque_image_is_unchanged() {
        let mut rgba = image::RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        rgba.put_pixel(1, 0, Rgba([200, 100, 50, 255]));

        let flat = flatten_to_rgb(DynamicImage::ImageRgba8(rgba));
        let rgb = flat.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(rgb.get_pixel(1, 0).0, [200, 100, 50]);
    }

    #[test]
    fn test_flatten_transparent_pixel_becomes_white() {
        let mut rgba = image::RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, Rgba([0, 0, 0, 0]));

        let flat = flatten_to_rgb(DynamicImage::ImageRgba8(rgba));
        assert_eq!(flat.to_rgb8().get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_find_page_image_probes_padded_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("page-003.png"), b"png").unwrap();

        let found = find_page_image(dir.path(), 3).unwrap();
        assert!(found.ends_with("page-003.png"));
        assert!(find_page_image(dir.path(), 4).is_none());
    }
}
