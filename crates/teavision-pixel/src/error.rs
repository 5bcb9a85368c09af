//! Error types for pixel operations

use thiserror::Error;

/// Errors for pixel-buffer construction and analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PixelError {
    /// Every pixel was fully transparent (or the buffer was empty)
    #[error("No valid pixels found")]
    NoValidPixels,

    /// Byte length does not match width * height * 4
    #[error("Pixel data length mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Operation needs at least one pixel
    #[error("Image has no pixels")]
    EmptyImage,

    /// Encoded bytes could not be decoded
    #[cfg(feature = "decode")]
    #[error("Failed to decode image: {message}")]
    Decode { message: String },
}

/// Result type alias for pixel operations.
pub type PixelResult<T> = Result<T, PixelError>;
