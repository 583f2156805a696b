//! Sizing, placement, and pre-processing of the banner canvas.

use image::{imageops, DynamicImage, Rgba, RgbaImage};

/// Banner aspect ratio as width over height.
pub const DEFAULT_ASPECT_RATIO: f32 = 3.0;

const MIN_FONT_SIZE: f32 = 24.0;
const MAX_FONT_SIZE: f32 = 96.0;
const MIN_SECONDARY_FONT_SIZE: f32 = 16.0;

/// Primary font size for a canvas `width` pixels wide.
pub fn primary_font_size(width: u32) -> f32 {
    (width as f32 * 0.06).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Secondary font size, 60% of the primary size.
pub fn secondary_font_size(primary: f32) -> f32 {
    (primary * 0.6).max(MIN_SECONDARY_FONT_SIZE)
}

/// 32-bit rolling hash of a string, `hash * 31 + c` with wrapping arithmetic.
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Horizontal offset of the secondary message within `slack` pixels of free space.
///
/// The same message always lands at the same offset.
pub fn secondary_offset(text: &str, slack: u32) -> u32 {
    if slack == 0 {
        return 0;
    }

    string_hash(text).unsigned_abs() % slack
}

/// Center-crops `image` to `aspect` (width over height).
pub fn crop_to_aspect(image: DynamicImage, aspect: f32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 || aspect <= 0.0 {
        return image;
    }

    let current = width as f32 / height as f32;
    if (current - aspect).abs() < f32::EPSILON {
        return image;
    }

    let (crop_w, crop_h) = if current > aspect {
        (((height as f32) * aspect).round().max(1.0) as u32, height)
    } else {
        (width, ((width as f32) / aspect).round().max(1.0) as u32)
    };

    let x = (width - crop_w.min(width)) / 2;
    let y = (height - crop_h.min(height)) / 2;
    image.crop_imm(x, y, crop_w.min(width), crop_h.min(height))
}

/// Darkens the canvas so overlaid text stays readable.
///
/// A light tint covers the whole frame, then a dark gradient rises from the bottom edge to
/// the middle.
pub fn apply_gradient(canvas: &mut RgbaImage) {
    let height = canvas.height();
    let fade_start = height / 2;

    for (_, y, pixel) in canvas.enumerate_pixels_mut() {
        blend(pixel, 0.2);

        if y >= fade_start && height > fade_start {
            let progress = (y - fade_start) as f32 / (height - fade_start) as f32;
            blend(pixel, 0.7 * progress);
        }
    }
}

/// Blends black over `pixel` with the given opacity.
fn blend(pixel: &mut Rgba<u8>, alpha: f32) {
    for channel in pixel.0.iter_mut().take(3) {
        *channel = (f32::from(*channel) * (1.0 - alpha)).round() as u8;
    }
}

/// Resizes very large uploads so rendering stays bounded.
pub fn limit_width(image: DynamicImage, max_width: u32) -> DynamicImage {
    if image.width() <= max_width {
        return image;
    }

    let height = (image.height() as u64 * max_width as u64 / image.width() as u64).max(1) as u32;
    image.resize_exact(max_width, height, imageops::FilterType::Triangle)
}
