//! Image decoding for scanned entries

use image::{DynamicImage, GrayImage, ImageReader, RgbImage};
use std::path::Path;

use crate::analysis;
use crate::error::{Result, ScanError};
use crate::types::DecodeMode;

/// Pixel grid of one decoded entry, dropped once the entry is classified
#[derive(Debug)]
pub enum DecodedImage {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl DecodedImage {
    pub fn from_dynamic(image: &DynamicImage, mode: DecodeMode) -> Self {
        match mode {
            DecodeMode::Grayscale => DecodedImage::Gray(image.to_luma8()),
            DecodeMode::Color => DecodedImage::Rgb(image.to_rgb8()),
        }
    }

    pub fn nonzero_count(&self) -> usize {
        match self {
            DecodedImage::Gray(img) => analysis::count_nonzero(img),
            DecodedImage::Rgb(img) => analysis::count_nonzero_rgb(img),
        }
    }
}

/// Opens `path` and decodes it, sniffing the format from content rather than the name.
pub fn load_image(path: &Path, name: &str) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ScanError::Open {
            name: name.to_string(),
            source,
        })?;

    reader.decode().map_err(|source| ScanError::Decode {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn test_dark_color_rounds_to_blank_luma() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 0, 0])));

        let gray = DecodedImage::from_dynamic(&img, DecodeMode::Grayscale);
        assert_eq!(gray.nonzero_count(), 0);

        let rgb = DecodedImage::from_dynamic(&img, DecodeMode::Color);
        assert_eq!(rgb.nonzero_count(), 4);
    }

    #[test]
    fn test_gray_source_in_color_mode() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 5, Luma([7])));
        let decoded = DecodedImage::from_dynamic(&img, DecodeMode::Color);
        assert!(matches!(decoded, DecodedImage::Rgb(_)));
        assert_eq!(decoded.nonzero_count(), 15);
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = load_image(Path::new("/nonexistent/definitely/missing.png"), "missing.png")
            .unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
        assert!(err.is_decode_failure());
    }
}
