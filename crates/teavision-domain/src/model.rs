//! Selectable classifier models and image input variants

use serde::{Deserialize, Serialize};

/// A classifier model the prediction backend can run.
///
/// Deep models consume the uploaded image directly; classical models run on
/// the handcrafted feature vector extracted from it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Resnet18TeaRegion,
    MobileNetV2TeaRegion,
    EfficientNetB0TeaRegion,
    Svm,
    RandomForest,
    Knn,
    LogisticRegression,
}

impl ModelKind {
    /// All selectable models.
    pub const ALL: [ModelKind; 7] = [
        ModelKind::Resnet18TeaRegion,
        ModelKind::MobileNetV2TeaRegion,
        ModelKind::EfficientNetB0TeaRegion,
        ModelKind::Svm,
        ModelKind::RandomForest,
        ModelKind::Knn,
        ModelKind::LogisticRegression,
    ];

    /// Identifier used on the wire (query parameter / `X-Model-Name` header).
    pub fn api_name(&self) -> &'static str {
        match self {
            ModelKind::Resnet18TeaRegion => "resnet18_tea_region",
            ModelKind::MobileNetV2TeaRegion => "mobilenetv2_tea_region",
            ModelKind::EfficientNetB0TeaRegion => "efficientnetb0_tea_region",
            ModelKind::Svm => "svm",
            ModelKind::RandomForest => "randomforest",
            ModelKind::Knn => "knn",
            ModelKind::LogisticRegression => "logisticregression",
        }
    }

    /// Human-readable name for pickers and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::Resnet18TeaRegion => "ResNet18",
            ModelKind::MobileNetV2TeaRegion => "MobileNetV2",
            ModelKind::EfficientNetB0TeaRegion => "EfficientNet-B0",
            ModelKind::Svm => "SVM",
            ModelKind::RandomForest => "Random Forest",
            ModelKind::Knn => "KNN",
            ModelKind::LogisticRegression => "Logistic Regression",
        }
    }

    /// Parse a wire identifier (case-insensitive).
    pub fn from_api_name(name: &str) -> Option<ModelKind> {
        let lowered = name.trim().to_ascii_lowercase();
        ModelKind::ALL.iter().copied().find(|m| m.api_name() == lowered)
    }

    /// Whether this model runs on the handcrafted feature vector rather
    /// than on raw pixels.
    pub fn uses_handcrafted_features(&self) -> bool {
        matches!(
            self,
            ModelKind::Svm | ModelKind::RandomForest | ModelKind::Knn | ModelKind::LogisticRegression
        )
    }
}

impl Default for ModelKind {
    /// The backend's default when no model is named.
    fn default() -> Self {
        ModelKind::Svm
    }
}

/// Which variant of the uploaded image the backend should classify.
///
/// `Preprocessed` means the reflection crop already ran client-side, so the
/// backend skips its own cropping step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Raw,
    Preprocessed,
}

impl ImageKind {
    /// Identifier used in the `type` query parameter.
    pub fn api_name(&self) -> &'static str {
        match self {
            ImageKind::Raw => "raw",
            ImageKind::Preprocessed => "preprocessed",
        }
    }

    /// Parse a wire identifier (case-insensitive).
    pub fn from_api_name(name: &str) -> Option<ImageKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "raw" => Some(ImageKind::Raw),
            "preprocessed" => Some(ImageKind::Preprocessed),
            _ => None,
        }
    }
}

impl Default for ImageKind {
    fn default() -> Self {
        ImageKind::Raw
    }
}
