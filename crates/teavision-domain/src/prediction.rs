//! Classifier prediction results

use crate::{ImageKind, ModelKind, ProbabilityMap, TeaRegion};
use serde::{Deserialize, Serialize};

/// Origin and tasting notes the backend attaches to region predictions.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RegionInfo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub flavor_notes: Vec<String>,
}

/// A completed prediction for one uploaded image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionOutcome {
    /// Predicted class label, e.g. "Nuwara Eliya Region".
    pub prediction: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
    pub probabilities: ProbabilityMap,
    pub model: ModelKind,
    pub image_kind: ImageKind,
    /// Data URL of the backend-cropped image, when cropping ran.
    #[serde(default)]
    pub cropped_image: Option<String>,
    #[serde(default)]
    pub info: Option<RegionInfo>,
}

impl PredictionOutcome {
    pub fn new(
        prediction: impl Into<String>,
        confidence: f64,
        probabilities: ProbabilityMap,
        model: ModelKind,
        image_kind: ImageKind,
    ) -> Self {
        Self {
            prediction: prediction.into(),
            confidence,
            probabilities,
            model,
            image_kind,
            cropped_image: None,
            info: None,
        }
    }

    /// Builder method to attach the cropped-image data URL.
    pub fn with_cropped_image(mut self, data_url: impl Into<String>) -> Self {
        self.cropped_image = Some(data_url.into());
        self
    }

    /// Builder method to attach region info.
    pub fn with_info(mut self, info: RegionInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// The predicted region, when the label names one.
    pub fn region(&self) -> Option<TeaRegion> {
        TeaRegion::from_label(&self.prediction)
    }
}
