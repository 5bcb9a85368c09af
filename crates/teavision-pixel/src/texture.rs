//! Grayscale moment statistics used as texture features

use crate::error::{PixelError, PixelResult};
use crate::gray::GrayBuffer;
use serde::{Deserialize, Serialize};

/// First four standardized moments of the luma distribution.
///
/// Skewness and kurtosis divide by `std^3 + 1e-8` and `std^4 + 1e-8`
/// respectively, so flat images yield 0 instead of dividing by zero.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TextureStats {
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Stabilizer added to the moment denominators.
const MOMENT_EPSILON: f64 = 1e-8;

impl TextureStats {
    pub fn of(gray: &GrayBuffer) -> PixelResult<TextureStats> {
        if gray.is_empty() {
            return Err(PixelError::EmptyImage);
        }

        let n = gray.pixel_count() as f64;
        let mean = gray.data().iter().map(|&v| v as f64).sum::<f64>() / n;

        let mut m2 = 0.0;
        let mut m3 = 0.0;
        let mut m4 = 0.0;
        for &value in gray.data() {
            let d = value as f64 - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }
        m2 /= n;
        m3 /= n;
        m4 /= n;

        let std_dev = m2.sqrt();
        Ok(TextureStats {
            mean,
            std_dev,
            skewness: m3 / (std_dev.powi(3) + MOMENT_EPSILON),
            kurtosis: m4 / (std_dev.powi(4) + MOMENT_EPSILON),
        })
    }
}
