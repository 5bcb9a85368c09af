//! Decoding encoded image bytes into pixel buffers

use crate::buffer::PixelBuffer;
use crate::error::{PixelError, PixelResult};

impl PixelBuffer {
    /// Decode encoded bytes (PNG, JPEG) into an RGBA buffer.
    pub fn decode(bytes: &[u8]) -> PixelResult<PixelBuffer> {
        let decoded = image::load_from_memory(bytes).map_err(|e| PixelError::Decode {
            message: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        PixelBuffer::new(width, height, rgba.into_raw())
    }
}
