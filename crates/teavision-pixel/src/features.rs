//! Handcrafted feature vector for the classical classifiers

use crate::buffer::PixelBuffer;
use crate::color::{rgb_means, HsvMeans};
use crate::edge::EdgeStats;
use crate::error::PixelResult;
use crate::gray::GrayBuffer;
use crate::lbp::{LbpHistogram, LBP_BINS};
use crate::texture::TextureStats;
use serde::{Deserialize, Serialize};

/// Side length of the square working image features are computed on.
pub const WORKING_SIZE: u32 = 224;

/// Total feature count: 6 color + 4 texture + 1 edge + 256 LBP.
pub const FEATURE_LEN: usize = 267;

const SCALAR_COLUMNS: [&str; 11] = [
    "R_mean",
    "G_mean",
    "B_mean",
    "H_mean",
    "S_mean",
    "V_mean",
    "Texture_mean",
    "Texture_std",
    "Texture_skew",
    "Texture_kurtosis",
    "Edge_mean",
];

/// The 267-value handcrafted feature vector, in canonical column order:
/// RGB means, HSV means, texture moments, edge mean, then the 256 LBP bins.
///
/// This is the row shape the classical models (SVM, random forest, KNN,
/// logistic regression) were trained on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Extract all feature blocks from an image.
    ///
    /// The buffer is first resampled to the 224x224 working size; every
    /// block then runs on that working image (color blocks on the pixels,
    /// the rest on the luma plane). Alpha does not participate here.
    pub fn extract(buffer: &PixelBuffer) -> PixelResult<FeatureVector> {
        let working = buffer.resized(WORKING_SIZE, WORKING_SIZE)?;
        let gray = GrayBuffer::from_pixels(&working);

        let (r_mean, g_mean, b_mean) = rgb_means(&working)?;
        let hsv = HsvMeans::of(&working)?;
        let texture = TextureStats::of(&gray)?;
        let edge = EdgeStats::of(&gray)?;
        let lbp = LbpHistogram::of(&gray)?;

        let mut values = Vec::with_capacity(FEATURE_LEN);
        values.extend([r_mean, g_mean, b_mean, hsv.h, hsv.s, hsv.v]);
        values.extend([
            texture.mean,
            texture.std_dev,
            texture.skewness,
            texture.kurtosis,
        ]);
        values.push(edge.magnitude_mean);
        values.extend_from_slice(lbp.bins());

        Ok(FeatureVector { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Column names aligned with [`FeatureVector::values`].
    pub fn column_names() -> Vec<String> {
        let mut names: Vec<String> = SCALAR_COLUMNS.iter().map(|s| s.to_string()).collect();
        names.extend((0..LBP_BINS).map(|i| format!("LBP_{i}")));
        names
    }

    /// (column, value) pairs in canonical order.
    pub fn named_values(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        Self::column_names().into_iter().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PixelError;

    #[test]
    fn test_column_names_shape() {
        let names = FeatureVector::column_names();
        assert_eq!(names.len(), FEATURE_LEN);
        assert_eq!(names[0], "R_mean");
        assert_eq!(names[10], "Edge_mean");
        assert_eq!(names[11], "LBP_0");
        assert_eq!(names[266], "LBP_255");
    }

    #[test]
    fn test_extract_solid_color() {
        let buffer = PixelBuffer::filled(10, 10, [120, 80, 40, 255]);
        let features = FeatureVector::extract(&buffer).unwrap();
        let values = features.values();
        assert_eq!(values.len(), FEATURE_LEN);

        // color block: RGB means then 8-bit HSV means
        assert_eq!(&values[0..3], &[120.0, 80.0, 40.0]);
        assert_eq!(&values[3..6], &[15.0, 170.0, 120.0]);

        // flat image: luma 87, no spread, no edges
        assert_eq!(values[6], 87.0);
        assert_eq!(values[7], 0.0);
        assert_eq!(values[8], 0.0);
        assert_eq!(values[9], 0.0);
        assert_eq!(values[10], 0.0);

        // every LBP code is 0
        assert!((values[11] - 1.0).abs() < 1e-8);
        assert!(values[12..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_extract_empty_errors() {
        let empty = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert_eq!(
            FeatureVector::extract(&empty).unwrap_err(),
            PixelError::EmptyImage
        );
    }

    #[test]
    fn test_named_values_aligned() {
        let buffer = PixelBuffer::filled(4, 4, [200, 100, 50, 255]);
        let features = FeatureVector::extract(&buffer).unwrap();
        let named: Vec<(String, f64)> = features.named_values().collect();
        assert_eq!(named.len(), FEATURE_LEN);
        assert_eq!(named[0], ("R_mean".to_string(), 200.0));
        assert_eq!(named[1], ("G_mean".to_string(), 100.0));
        assert_eq!(named[2], ("B_mean".to_string(), 50.0));
    }
}
