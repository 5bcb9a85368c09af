//! Sobel edge-strength features

use crate::error::{PixelError, PixelResult};
use crate::gray::GrayBuffer;
use serde::{Deserialize, Serialize};

/// Mean Sobel gradient magnitude over the whole image.
///
/// 3x3 kernels, reflect-101 border handling, magnitude
/// `sqrt(gx^2 + gy^2)` per pixel.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EdgeStats {
    pub magnitude_mean: f64,
}

impl EdgeStats {
    pub fn of(gray: &GrayBuffer) -> PixelResult<EdgeStats> {
        if gray.is_empty() {
            return Err(PixelError::EmptyImage);
        }

        let width = gray.width() as i64;
        let height = gray.height() as i64;
        let sample = |x: i64, y: i64| -> f64 {
            gray.at(reflect_101(x, width) as u32, reflect_101(y, height) as u32) as f64
        };

        let mut magnitude_sum = 0.0;
        for y in 0..height {
            for x in 0..width {
                let mut gx = 0.0;
                let mut gy = 0.0;
                for dy in -1..=1i64 {
                    let row_weight = if dy == 0 { 2.0 } else { 1.0 };
                    gx += row_weight * (sample(x + 1, y + dy) - sample(x - 1, y + dy));
                    gy += row_weight * (sample(x + dy, y + 1) - sample(x + dy, y - 1));
                }
                magnitude_sum += (gx * gx + gy * gy).sqrt();
            }
        }

        Ok(EdgeStats {
            magnitude_mean: magnitude_sum / gray.pixel_count() as f64,
        })
    }
}

/// Reflect an index into [0, size) without repeating the edge pixel
/// (`-1` maps to 1, `size` maps to `size - 2`).
fn reflect_101(mut index: i64, size: i64) -> i64 {
    if size == 1 {
        return 0;
    }
    loop {
        if index < 0 {
            index = -index;
        } else if index >= size {
            index = 2 * size - 2 - index;
        } else {
            return index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, data: Vec<u8>) -> GrayBuffer {
        GrayBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let stats = EdgeStats::of(&gray(4, 4, vec![77; 16])).unwrap();
        assert_eq!(stats.magnitude_mean, 0.0);
    }

    #[test]
    fn test_vertical_step_edge() {
        let row = [0u8, 0, 255, 255];
        let data: Vec<u8> = row.iter().copied().cycle().take(16).collect();
        let stats = EdgeStats::of(&gray(4, 4, data)).unwrap();
        // interior columns see a 255 jump weighted 4, border columns cancel
        assert!((stats.magnitude_mean - 510.0).abs() < 1e-9);
    }

    #[test]
    fn test_horizontal_matches_vertical() {
        let vertical: Vec<u8> = [0u8, 0, 255, 255].iter().copied().cycle().take(16).collect();
        let mut horizontal = vec![0u8; 16];
        for y in 0..4 {
            for x in 0..4 {
                horizontal[y * 4 + x] = vertical[x * 4 + y];
            }
        }
        let v = EdgeStats::of(&gray(4, 4, vertical)).unwrap();
        let h = EdgeStats::of(&gray(4, 4, horizontal)).unwrap();
        assert!((v.magnitude_mean - h.magnitude_mean).abs() < 1e-9);
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(0, 5), 0);
        assert_eq!(reflect_101(4, 5), 4);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(-1, 1), 0);
    }

    #[test]
    fn test_empty_errors() {
        let empty = GrayBuffer::from_raw(0, 0, vec![]).unwrap();
        assert_eq!(EdgeStats::of(&empty).unwrap_err(), PixelError::EmptyImage);
    }
}
