use thiserror::Error;

/// Failures of the banner text overlay.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// No font was configured or the configured font could not be parsed.
    #[error("Overlay font unavailable: {0}")]
    FontUnavailable(String),

    /// The source bytes are not a decodable image.
    #[error("Failed to decode image: {0}")]
    ImageLoad(#[source] image::ImageError),

    /// Encoding the composed canvas as JPEG failed.
    #[error("Failed to encode JPEG: {0}")]
    Encode(#[source] image::ImageError),
}
