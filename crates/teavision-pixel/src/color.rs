//! HSV conversion and color-channel means over whole images

use crate::buffer::PixelBuffer;
use crate::error::{PixelError, PixelResult};
use serde::{Deserialize, Serialize};

/// Convert one RGB value to 8-bit HSV with OpenCV's ranges:
/// H in [0, 180], S and V in [0, 255]. Hue is halved so it fits a byte.
pub fn hsv_pixel(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (rf, gf, bf) = (r as f64, g as f64, b as f64);
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = v - min;

    let s = if v == 0.0 { 0.0 } else { 255.0 * diff / v };

    let h_degrees = if diff == 0.0 {
        0.0
    } else if v == rf {
        60.0 * (gf - bf) / diff
    } else if v == gf {
        120.0 + 60.0 * (bf - rf) / diff
    } else {
        240.0 + 60.0 * (rf - gf) / diff
    };
    let h_degrees = if h_degrees < 0.0 {
        h_degrees + 360.0
    } else {
        h_degrees
    };

    [
        (h_degrees / 2.0).round().clamp(0.0, 180.0) as u8,
        s.round().clamp(0.0, 255.0) as u8,
        v.round().clamp(0.0, 255.0) as u8,
    ]
}

/// Mean H/S/V over every pixel of a buffer, alpha ignored.
///
/// Each pixel is converted to the 8-bit HSV encoding first, so the means
/// are taken over rounded byte values like the rest of the color block.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HsvMeans {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl HsvMeans {
    pub fn of(buffer: &PixelBuffer) -> PixelResult<HsvMeans> {
        if buffer.is_empty() {
            return Err(PixelError::EmptyImage);
        }
        let mut h_sum: u64 = 0;
        let mut s_sum: u64 = 0;
        let mut v_sum: u64 = 0;
        for [r, g, b, _a] in buffer.iter_pixels() {
            let [h, s, v] = hsv_pixel(r, g, b);
            h_sum += h as u64;
            s_sum += s as u64;
            v_sum += v as u64;
        }
        let divisor = buffer.pixel_count() as f64;
        Ok(HsvMeans {
            h: h_sum as f64 / divisor,
            s: s_sum as f64 / divisor,
            v: v_sum as f64 / divisor,
        })
    }
}

/// Mean R/G/B over every pixel, alpha ignored.
///
/// Unlike [`crate::ChannelMeans::of`], transparent pixels are included;
/// the handcrafted color features run on opaque working images.
pub fn rgb_means(buffer: &PixelBuffer) -> PixelResult<(f64, f64, f64)> {
    if buffer.is_empty() {
        return Err(PixelError::EmptyImage);
    }
    let mut r_sum: u64 = 0;
    let mut g_sum: u64 = 0;
    let mut b_sum: u64 = 0;
    for [r, g, b, _a] in buffer.iter_pixels() {
        r_sum += r as u64;
        g_sum += g as u64;
        b_sum += b as u64;
    }
    let divisor = buffer.pixel_count() as f64;
    Ok((
        r_sum as f64 / divisor,
        g_sum as f64 / divisor,
        b_sum as f64 / divisor,
    ))
}
