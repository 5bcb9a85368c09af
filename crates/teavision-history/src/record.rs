//! Stored prediction records

use chrono::Utc;
use serde::{Deserialize, Serialize};
use teavision_domain::{Account, ImageKind, ModelKind, PredictionOutcome, ProbabilityMap};

/// One prediction as the history store keeps it.
///
/// Model and image kind are stored as their wire names so rows written by
/// older builds with models this build does not know still load.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub id: String,
    pub account_id: i64,
    pub account_email: String,
    pub prediction: String,
    pub confidence: f64,
    pub probabilities: ProbabilityMap,
    pub model_name: String,
    pub image_type: String,
    pub cropped_image: Option<String>,
    /// RFC 3339, UTC.
    pub created_at: String,
}

impl HistoryRecord {
    /// Record a completed prediction for an account.
    pub fn new(account: &Account, outcome: &PredictionOutcome) -> HistoryRecord {
        HistoryRecord {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: account.id,
            account_email: account.email.clone(),
            prediction: outcome.prediction.clone(),
            confidence: outcome.confidence,
            probabilities: outcome.probabilities.clone(),
            model_name: outcome.model.api_name().to_string(),
            image_type: outcome.image_kind.api_name().to_string(),
            cropped_image: outcome.cropped_image.clone(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// The stored model, when this build knows its wire name.
    pub fn model_kind(&self) -> Option<ModelKind> {
        ModelKind::from_api_name(&self.model_name)
    }

    pub fn image_kind(&self) -> Option<ImageKind> {
        ImageKind::from_api_name(&self.image_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> PredictionOutcome {
        let probabilities: ProbabilityMap = [
            ("Uva Region".to_string(), 0.8),
            ("Kandy Region".to_string(), 0.2),
        ]
        .into_iter()
        .collect();
        PredictionOutcome::new(
            "Uva Region",
            0.8,
            probabilities,
            ModelKind::RandomForest,
            ImageKind::Preprocessed,
        )
    }

    #[test]
    fn test_new_from_outcome() {
        let account = Account::new(5, "user@example.com", false);
        let record = HistoryRecord::new(&account, &outcome());
        assert_eq!(record.account_id, 5);
        assert_eq!(record.account_email, "user@example.com");
        assert_eq!(record.prediction, "Uva Region");
        assert_eq!(record.model_name, "randomforest");
        assert_eq!(record.image_type, "preprocessed");
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_kind_accessors() {
        let account = Account::new(1, "a@b.c", false);
        let mut record = HistoryRecord::new(&account, &outcome());
        assert_eq!(record.model_kind(), Some(ModelKind::RandomForest));
        assert_eq!(record.image_kind(), Some(ImageKind::Preprocessed));

        record.model_name = "future_model".to_string();
        assert_eq!(record.model_kind(), None);
    }
}
