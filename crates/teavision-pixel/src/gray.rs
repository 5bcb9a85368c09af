//! 8-bit grayscale planes

use crate::buffer::PixelBuffer;
use serde::{Deserialize, Serialize};

/// An 8-bit luma plane, row-major.
///
/// Input to the texture, edge, and local-binary-pattern features.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrayBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Convert RGBA to luma with the BT.601 weights
    /// (0.299 R + 0.587 G + 0.114 B), rounded to the nearest integer.
    /// Alpha is ignored.
    pub fn from_pixels(buffer: &PixelBuffer) -> GrayBuffer {
        let data = buffer
            .iter_pixels()
            .map(|[r, g, b, _a]| {
                let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                luma.round().clamp(0.0, 255.0) as u8
            })
            .collect();
        GrayBuffer {
            width: buffer.width(),
            height: buffer.height(),
            data,
        }
    }

    /// Build directly from luma bytes. Intended for tests and callers
    /// that already hold a gray plane; length must be `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<GrayBuffer> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(GrayBuffer {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Luma at (x, y). Requires `x < width` and `y < height`.
    pub fn at(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }
}
