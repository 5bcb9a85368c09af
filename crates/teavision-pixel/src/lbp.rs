//! Local-binary-pattern texture histogram

use crate::error::{PixelError, PixelResult};
use crate::gray::GrayBuffer;
use serde::{Deserialize, Serialize};

/// Number of histogram bins (one per 8-bit pattern code).
pub const LBP_BINS: usize = 256;

/// Normalized 256-bin histogram of local-binary-pattern codes.
///
/// Each interior pixel is compared against its eight neighbors; a neighbor
/// strictly brighter than the center sets its bit. Border pixels keep code
/// 0 and are counted in the histogram, so bin 0 always includes the frame.
/// Bins are normalized by `total + 1e-8`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LbpHistogram {
    bins: Vec<f64>,
}

/// Stabilizer added to the normalization divisor.
const HISTOGRAM_EPSILON: f64 = 1e-8;

impl LbpHistogram {
    pub fn of(gray: &GrayBuffer) -> PixelResult<LbpHistogram> {
        if gray.is_empty() {
            return Err(PixelError::EmptyImage);
        }

        let width = gray.width();
        let height = gray.height();
        let mut counts = [0u64; LBP_BINS];

        // border pixels keep code 0
        let border = gray.pixel_count() as u64 - interior_count(width, height);
        counts[0] += border;

        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                let center = gray.at(x, y);
                let mut code = 0u8;
                code |= bit(gray.at(x - 1, y - 1) > center) << 7;
                code |= bit(gray.at(x, y - 1) > center) << 6;
                code |= bit(gray.at(x + 1, y - 1) > center) << 5;
                code |= bit(gray.at(x + 1, y) > center) << 4;
                code |= bit(gray.at(x + 1, y + 1) > center) << 3;
                code |= bit(gray.at(x, y + 1) > center) << 2;
                code |= bit(gray.at(x - 1, y + 1) > center) << 1;
                code |= bit(gray.at(x - 1, y) > center);
                counts[code as usize] += 1;
            }
        }

        let total: u64 = counts.iter().sum();
        let divisor = total as f64 + HISTOGRAM_EPSILON;
        let bins = counts.iter().map(|&c| c as f64 / divisor).collect();
        Ok(LbpHistogram { bins })
    }

    /// All 256 normalized bins in code order.
    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Normalized frequency of one pattern code.
    pub fn bin(&self, code: u8) -> f64 {
        self.bins[code as usize]
    }
}

fn bit(set: bool) -> u8 {
    set as u8
}

fn interior_count(width: u32, height: u32) -> u64 {
    if width < 3 || height < 3 {
        0
    } else {
        (width as u64 - 2) * (height as u64 - 2)
    }
}
