//! Notification banner rendering.
//!
//! Uploaded images are cropped to a banner, darkened with a gradient, and overlaid with the
//! banner message and an optional secondary line before being stored as JPEG.

pub mod layout;
pub mod wrap;

use ab_glyph::{FontArc, PxScale};
use image::{codecs::jpeg::JpegEncoder, DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::server::{
    error::overlay::OverlayError,
    overlay::{
        layout::{
            apply_gradient, crop_to_aspect, limit_width, primary_font_size, secondary_font_size,
            secondary_offset, DEFAULT_ASPECT_RATIO,
        },
        wrap::{wrap_text, MeasureText},
    },
};

pub const JPEG_QUALITY: u8 = 90;

/// Uploads wider than this are scaled down before rendering.
const MAX_WIDTH: u32 = 2400;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SECONDARY_COLOR: Rgba<u8> = Rgba([230, 230, 230, 255]);

/// Renders text onto banner images. Cheap to clone, the font is shared.
#[derive(Clone, Default)]
pub struct OverlayRenderer {
    font: Option<FontArc>,
}

impl OverlayRenderer {
    pub fn new(font: Option<FontArc>) -> Self {
        Self { font }
    }

    /// Parses a TrueType or OpenType font.
    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<Self, OverlayError> {
        let font =
            FontArc::try_from_vec(bytes).map_err(|e| OverlayError::FontUnavailable(e.to_string()))?;

        Ok(Self::new(Some(font)))
    }

    /// Crops `image` to a banner and overlays `message` and `secondary`.
    ///
    /// Blocking, call from `spawn_blocking` in async code.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - JPEG bytes
    /// - `Err(OverlayError::ImageLoad)` - `image` is not a decodable image
    /// - `Err(OverlayError::FontUnavailable)` - No font is loaded
    /// - `Err(OverlayError::Encode)` - JPEG encoding failed
    pub fn render(
        &self,
        image: &[u8],
        message: &str,
        secondary: Option<&str>,
    ) -> Result<Vec<u8>, OverlayError> {
        let decoded = image::load_from_memory(image).map_err(OverlayError::ImageLoad)?;
        let font = self.font.as_ref().ok_or_else(|| {
            OverlayError::FontUnavailable("no overlay font is configured".to_string())
        })?;

        let banner = crop_to_aspect(limit_width(decoded, MAX_WIDTH), DEFAULT_ASPECT_RATIO);
        let mut canvas = banner.to_rgba8();
        apply_gradient(&mut canvas);
        draw_banner_text(&mut canvas, font, message, secondary);

        encode_jpeg(canvas)
    }
}

/// Measures text with a font at a fixed size.
struct FontMeasure<'a> {
    font: &'a FontArc,
    scale: PxScale,
}

impl MeasureText for FontMeasure<'_> {
    fn width(&self, text: &str) -> u32 {
        text_size(self.scale, self.font, text).0
    }
}

fn draw_banner_text(canvas: &mut RgbaImage, font: &FontArc, message: &str, secondary: Option<&str>) {
    let (width, height) = canvas.dimensions();
    let padding = (width as f32 * 0.05).round() as u32;
    let max_width = width.saturating_sub(padding * 2).max(1);

    let primary_size = primary_font_size(width);
    let primary = FontMeasure {
        font,
        scale: PxScale::from(primary_size),
    };
    let primary_lines = wrap_text(&primary, message, max_width);
    let primary_line_height = (primary_size * 1.2).round() as u32;

    let secondary_size = secondary_font_size(primary_size);
    let secondary_measure = FontMeasure {
        font,
        scale: PxScale::from(secondary_size),
    };
    let secondary_lines = secondary
        .map(|text| wrap_text(&secondary_measure, text, max_width))
        .unwrap_or_default();
    let secondary_line_height = (secondary_size * 1.2).round() as u32;

    let block_height = primary_lines.len() as u32 * primary_line_height
        + secondary_lines.len() as u32 * secondary_line_height;
    let mut y = height.saturating_sub(padding + block_height);

    for line in &primary_lines {
        draw_text_mut(
            canvas,
            TEXT_COLOR,
            padding as i32,
            y as i32,
            primary.scale,
            font,
            line,
        );
        y += primary_line_height;
    }

    if let Some(text) = secondary {
        let widest = secondary_lines
            .iter()
            .map(|line| secondary_measure.width(line))
            .max()
            .unwrap_or(0);
        let x = padding + secondary_offset(text, max_width.saturating_sub(widest));

        for line in &secondary_lines {
            draw_text_mut(
                canvas,
                SECONDARY_COLOR,
                x as i32,
                y as i32,
                secondary_measure.scale,
                font,
                line,
            );
            y += secondary_line_height;
        }
    }
}

/// Encodes the canvas as an opaque JPEG.
pub fn encode_jpeg(canvas: RgbaImage) -> Result<Vec<u8>, OverlayError> {
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    let mut out = Vec::new();

    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(OverlayError::Encode)?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::ImageFormat;

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::new_rgba8(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn rejects_undecodable_image() {
        let renderer = OverlayRenderer::default();

        let result = renderer.render(b"not an image", "New single", None);

        assert!(matches!(result, Err(OverlayError::ImageLoad(_))));
    }

    #[test]
    fn requires_font() {
        let renderer = OverlayRenderer::default();

        let result = renderer.render(&png_bytes(60, 20), "New single", Some("Out Friday"));

        assert!(matches!(result, Err(OverlayError::FontUnavailable(_))));
    }

    #[test]
    fn rejects_invalid_font_bytes() {
        let result = OverlayRenderer::from_font_bytes(b"not a font".to_vec());

        assert!(matches!(result, Err(OverlayError::FontUnavailable(_))));
    }

    #[test]
    fn encodes_jpeg() {
        let canvas = RgbaImage::from_pixel(30, 10, Rgba([10, 20, 30, 255]));

        let bytes = encode_jpeg(canvas).unwrap();

        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (30, 10));
    }
}
