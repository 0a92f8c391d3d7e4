use image::{DynamicImage, GrayImage, RgbImage, Rgba, RgbaImage};

use crate::types::{MAX_SHARE_PERCENT, ReferenceColor};

pub fn count_nonzero(image: &GrayImage) -> usize {
    image.as_raw().iter().filter(|&&v| v != 0).count()
}

/// Pixels with at least one non-zero channel
pub fn count_nonzero_rgb(image: &RgbImage) -> usize {
    image
        .as_raw()
        .chunks_exact(3)
        .filter(|px| px.iter().any(|&c| c != 0))
        .count()
}

/// Percentage (0-100) of pixels exactly equal to `color`, alpha included.
pub fn color_share(image: &RgbaImage, color: Rgba<u8>) -> f32 {
    let total = image.width() as u64 * image.height() as u64;
    if total == 0 {
        return 0.0;
    }

    let matching = image.pixels().filter(|&&px| px == color).count();
    (matching as f64 * MAX_SHARE_PERCENT as f64 / total as f64) as f32
}

/// First reference color covering strictly more than `threshold` percent of the image.
///
/// Only fully opaque pixels match. Images without alpha convert as opaque.
pub fn dominant_solid_color(image: &DynamicImage, threshold: f32) -> Option<(ReferenceColor, f32)> {
    let rgba = image.to_rgba8();

    ReferenceColor::ALL.iter().find_map(|&color| {
        let [r, g, b] = color.rgb();
        let share = color_share(&rgba, Rgba([r, g, b, u8::MAX]));
        (share > threshold).then_some((color, share))
    })
}
