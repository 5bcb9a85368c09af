//! Owned RGBA8 pixel buffers

use crate::error::{PixelError, PixelResult};

/// An owned rectangular RGBA8 bitmap.
///
/// Bytes are row-major `[r, g, b, a]` quadruplets, matching canvas
/// `ImageData` layout. Alpha 0 means the pixel carries no color
/// information (circle-cropped images pad their corners this way).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Bytes per pixel.
pub const CHANNELS: usize = 4;

impl PixelBuffer {
    /// Create a buffer from raw RGBA bytes. The byte length must be
    /// exactly `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> PixelResult<PixelBuffer> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(PixelError::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Create a buffer filled with one RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&rgba);
        }
        PixelBuffer {
            width,
            height,
            data,
        }
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

    /// RGBA value at (x, y). Requires `x < width` and `y < height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    /// Iterate pixels in row-major order.
    pub fn iter_pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Resample to `width` x `height` with bilinear interpolation,
    /// pixel-center aligned. All four channels are interpolated.
    pub fn resized(&self, width: u32, height: u32) -> PixelResult<PixelBuffer> {
        if self.is_empty() || width == 0 || height == 0 {
            return Err(PixelError::EmptyImage);
        }
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }

        let scale_x = self.width as f64 / width as f64;
        let scale_y = self.height as f64 / height as f64;
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);

        for dy in 0..height {
            let fy = (dy as f64 + 0.5) * scale_y - 0.5;
            let (y0, y1, ty) = sample_axis(fy, self.height);
            for dx in 0..width {
                let fx = (dx as f64 + 0.5) * scale_x - 0.5;
                let (x0, x1, tx) = sample_axis(fx, self.width);

                let p00 = self.pixel(x0, y0);
                let p01 = self.pixel(x1, y0);
                let p10 = self.pixel(x0, y1);
                let p11 = self.pixel(x1, y1);

                for c in 0..CHANNELS {
                    let top = p00[c] as f64 * (1.0 - tx) + p01[c] as f64 * tx;
                    let bottom = p10[c] as f64 * (1.0 - tx) + p11[c] as f64 * tx;
                    let value = top * (1.0 - ty) + bottom * ty;
                    data.push(value.round().clamp(0.0, 255.0) as u8);
                }
            }
        }

        PixelBuffer::new(width, height, data)
    }
}

/// Map a fractional source coordinate to two source indices and the
/// interpolation weight of the second one, clamping at the edges.
fn sample_axis(f: f64, size: u32) -> (u32, u32, f64) {
    let floor = f.floor();
    let mut i0 = floor as i64;
    let mut t = f - floor;
    if i0 < 0 {
        i0 = 0;
        t = 0.0;
    }
    let last = size as i64 - 1;
    if i0 >= last {
        i0 = last;
        t = 0.0;
    }
    let i1 = (i0 + 1).min(last);
    (i0 as u32, i1 as u32, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
        let err = PixelBuffer::new(2, 2, vec![0; 12]).unwrap_err();
        assert!(matches!(err, PixelError::DimensionMismatch { expected: 16, actual: 12, .. }));
    }

    #[test]
    fn test_filled() {
        let buffer = PixelBuffer::filled(3, 2, [10, 20, 30, 255]);
        assert_eq!(buffer.pixel_count(), 6);
        assert_eq!(buffer.pixel(2, 1), [10, 20, 30, 255]);
    }

    #[test]
    fn test_zero_size_is_constructible() {
        let buffer = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.iter_pixels().count(), 0);
    }

    #[test]
    fn test_iter_pixels_row_major() {
        let data = vec![
            1, 2, 3, 4, //
            5, 6, 7, 8, //
        ];
        let buffer = PixelBuffer::new(2, 1, data).unwrap();
        let pixels: Vec<[u8; 4]> = buffer.iter_pixels().collect();
        assert_eq!(pixels, vec![[1, 2, 3, 4], [5, 6, 7, 8]]);
    }

    #[test]
    fn test_resized_identity() {
        let buffer = PixelBuffer::new(2, 2, (0..16).collect()).unwrap();
        let same = buffer.resized(2, 2).unwrap();
        assert_eq!(same, buffer);
    }

    #[test]
    fn test_resized_downsample_averages() {
        let data = vec![
            0, 0, 0, 255, 100, 100, 100, 255, //
            200, 200, 200, 255, 100, 100, 100, 255, //
        ];
        let buffer = PixelBuffer::new(2, 2, data).unwrap();
        let small = buffer.resized(1, 1).unwrap();
        // center sample averages all four pixels
        assert_eq!(small.pixel(0, 0), [100, 100, 100, 255]);
    }

    #[test]
    fn test_resized_upsample_solid_stays_solid() {
        let buffer = PixelBuffer::filled(2, 2, [40, 80, 120, 255]);
        let big = buffer.resized(5, 5).unwrap();
        for px in big.iter_pixels() {
            assert_eq!(px, [40, 80, 120, 255]);
        }
    }

    #[test]
    fn test_resized_empty_errors() {
        let buffer = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert_eq!(buffer.resized(4, 4).unwrap_err(), PixelError::EmptyImage);
        let solid = PixelBuffer::filled(2, 2, [0, 0, 0, 255]);
        assert_eq!(solid.resized(0, 4).unwrap_err(), PixelError::EmptyImage);
    }
}
