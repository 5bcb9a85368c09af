//! Mean channel values over the visible pixels of a buffer

use crate::buffer::PixelBuffer;
use crate::error::{PixelError, PixelResult};
use serde::{Deserialize, Serialize};

/// Mean red, green, and blue over all non-transparent pixels.
///
/// Values are in [0, 255]. Produced by [`ChannelMeans::of`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelMeans {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ChannelMeans {
    /// Compute mean R/G/B over the pixels with alpha > 0.
    ///
    /// Fully transparent pixels contribute to neither the sums nor the
    /// divisor, so transparent padding (circle-cropped corners) does not
    /// dilute the result. Channel sums accumulate in u64 and stay exact
    /// for any image that fits in memory. Pixel order does not matter.
    ///
    /// Returns [`PixelError::NoValidPixels`] when no pixel qualifies,
    /// including the zero-size buffer.
    pub fn of(buffer: &PixelBuffer) -> PixelResult<ChannelMeans> {
        let mut r_sum: u64 = 0;
        let mut g_sum: u64 = 0;
        let mut b_sum: u64 = 0;
        let mut included: u64 = 0;

        for [r, g, b, a] in buffer.iter_pixels() {
            if a > 0 {
                r_sum += r as u64;
                g_sum += g as u64;
                b_sum += b as u64;
                included += 1;
            }
        }

        if included == 0 {
            return Err(PixelError::NoValidPixels);
        }

        let divisor = included as f64;
        Ok(ChannelMeans {
            r: r_sum as f64 / divisor,
            g: g_sum as f64 / divisor,
            b: b_sum as f64 / divisor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_exact() {
        let buffer = PixelBuffer::filled(3, 3, [200, 100, 50, 255]);
        let means = ChannelMeans::of(&buffer).unwrap();
        assert_eq!(means.r, 200.0);
        assert_eq!(means.g, 100.0);
        assert_eq!(means.b, 50.0);
    }

    #[test]
    fn test_all_transparent_errors() {
        let buffer = PixelBuffer::filled(4, 4, [255, 255, 255, 0]);
        assert_eq!(ChannelMeans::of(&buffer).unwrap_err(), PixelError::NoValidPixels);
    }

    #[test]
    fn test_empty_buffer_errors() {
        let buffer = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert_eq!(ChannelMeans::of(&buffer).unwrap_err(), PixelError::NoValidPixels);
    }

    #[test]
    fn test_transparent_pixels_do_not_dilute() {
        // two opaque (10, 20, 30) pixels plus two transparent white pixels
        let data = vec![
            10, 20, 30, 255, //
            255, 255, 255, 0, //
            10, 20, 30, 128, //
            255, 255, 255, 0, //
        ];
        let buffer = PixelBuffer::new(2, 2, data).unwrap();
        let means = ChannelMeans::of(&buffer).unwrap();
        assert_eq!(means.r, 10.0);
        assert_eq!(means.g, 20.0);
        assert_eq!(means.b, 30.0);
    }

    #[test]
    fn test_translucent_pixels_count_fully() {
        // alpha 1 participates exactly like alpha 255
        let data = vec![
            100, 0, 0, 1, //
            200, 0, 0, 255, //
        ];
        let buffer = PixelBuffer::new(2, 1, data).unwrap();
        let means = ChannelMeans::of(&buffer).unwrap();
        assert_eq!(means.r, 150.0);
        assert_eq!(means.g, 0.0);
        assert_eq!(means.b, 0.0);
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![
            0, 10, 20, 255, //
            30, 40, 50, 255, //
            60, 70, 80, 255, //
            90, 100, 110, 0, //
        ];
        let mut shuffled: Vec<[u8; 4]> = forward
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        shuffled.reverse();
        let shuffled_bytes: Vec<u8> = shuffled.into_iter().flatten().collect();

        let a = ChannelMeans::of(&PixelBuffer::new(2, 2, forward).unwrap()).unwrap();
        let b = ChannelMeans::of(&PixelBuffer::new(2, 2, shuffled_bytes).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_means() {
        let data = vec![
            0, 0, 0, 255, //
            255, 255, 255, 255, //
            0, 0, 0, 255, //
        ];
        let buffer = PixelBuffer::new(3, 1, data).unwrap();
        let means = ChannelMeans::of(&buffer).unwrap();
        assert_eq!(means.r, 255.0 / 3.0);
        assert_eq!(means.g, 255.0 / 3.0);
        assert_eq!(means.b, 255.0 / 3.0);
    }
}
