//! Wire formats for backend requests and replies

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use teavision_domain::{
    Account, ImageKind, ModelKind, PredictionOutcome, ProbabilityMap, RegionInfo,
};

use crate::error::{ClientError, ClientResult};

/// `/health` reply.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HealthReply {
    pub status: String,
    pub timestamp: String,
    pub message: String,
    pub model_loaded: bool,
}

/// Application-level failure body, `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ApiFailure {
    error: String,
}

/// `/predict` reply. Field names follow the backend's JSON, which mixes
/// snake_case and camelCase.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PredictionReply {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub probabilities: Option<ProbabilityMap>,
    #[serde(default)]
    pub info: Option<RegionInfoReply>,
    #[serde(default, rename = "croppedImage")]
    pub cropped_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegionInfoReply {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default, rename = "flavorNotes")]
    pub flavor_notes: Vec<String>,
}

impl PredictionReply {
    /// Convert to a domain outcome. Absent fields fall back to the
    /// placeholders the rest of the pipeline expects: "Unknown", zero
    /// confidence, empty probabilities.
    pub fn into_outcome(self, model: ModelKind, image_kind: ImageKind) -> PredictionOutcome {
        let mut outcome = PredictionOutcome::new(
            self.prediction.unwrap_or_else(|| "Unknown".to_string()),
            self.confidence.unwrap_or(0.0),
            self.probabilities.unwrap_or_default(),
            model,
            image_kind,
        );
        if let Some(image) = self.cropped_image {
            outcome = outcome.with_cropped_image(image);
        }
        if let Some(info) = self.info {
            outcome = outcome.with_info(RegionInfo {
                description: info.description,
                origin: info.origin,
                flavor_notes: info.flavor_notes,
            });
        }
        outcome
    }
}

/// `/analyze_rgb` reply.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RgbAnalysisReply {
    pub r_mean: f64,
    pub g_mean: f64,
    pub b_mean: f64,
    #[serde(default)]
    pub cropped_image: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct RegionGroupRequest<'a> {
    pub rows: &'a [BTreeMap<String, f64>],
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegionGroupReply {
    pub results: Vec<RegionGroupResult>,
}

/// One row of a `/predict_region_group` reply: the input features echoed
/// back with the two predicted labels added.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegionGroupResult {
    pub predicted_region: String,
    pub predicted_group: String,
    #[serde(flatten)]
    pub features: BTreeMap<String, f64>,
}

#[derive(Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatReply {
    pub response: String,
}

/// `/api/admin/stats` reply.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UsageSummary {
    pub total_users: i64,
    pub admin_users: i64,
    pub regular_users: i64,
    pub users_today: i64,
    pub users_week: i64,
    pub users_month: i64,
    pub recent_users: Vec<RecentUser>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecentUser {
    pub email: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub(crate) struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthReply {
    #[allow(dead_code)]
    pub message: String,
    pub user: AccountReply,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountReply {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl AccountReply {
    pub fn into_account(self) -> Account {
        let account = Account::new(self.id, &self.email, self.is_admin);
        match self.profile_picture_url {
            Some(url) => account.with_profile_picture(url),
            None => account,
        }
    }
}

/// One measured sample for `/predict_polyphenol_region`. The backend
/// expects capitalized keys.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PolyphenolSample {
    #[serde(rename = "Absorbance")]
    pub absorbance: f64,
    #[serde(rename = "Concentration")]
    pub concentration: f64,
}

#[derive(Serialize)]
pub(crate) struct PolyphenolRequest<'a> {
    pub data: &'a [PolyphenolSample],
}

/// One entry of a `/predict_polyphenol_region` reply.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PolyphenolPrediction {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Decode a 2xx reply body, surfacing `{"error": ...}` bodies as
/// [`ClientError::Backend`].
pub(crate) fn decode_reply<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    if let Ok(failure) = serde_json::from_str::<ApiFailure>(body) {
        return Err(ClientError::Backend {
            message: failure.error,
        });
    }
    serde_json::from_str(body).map_err(|e| ClientError::Parse {
        message: e.to_string(),
    })
}

/// Best-effort message for a non-success reply body.
pub(crate) fn failure_message(body: &str) -> String {
    match serde_json::from_str::<ApiFailure>(body) {
        Ok(failure) => failure.error,
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty reply".to_string()
            } else {
                trimmed.chars().take(120).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_reply_full() {
        let json = r#"{
            "prediction": "Uva Region",
            "confidence": 0.93,
            "probabilities": {"Uva Region": 0.93, "Kandy Region": 0.07},
            "info": {
                "description": "High-grown estates",
                "origin": "Uva province",
                "flavorNotes": ["woody", "mellow"]
            },
            "croppedImage": "data:image/png;base64,AAAA"
        }"#;
        let reply: PredictionReply = decode_reply(json).unwrap();
        let outcome = reply.into_outcome(ModelKind::Resnet18TeaRegion, ImageKind::Raw);

        assert_eq!(outcome.prediction, "Uva Region");
        assert_eq!(outcome.confidence, 0.93);
        assert_eq!(outcome.probabilities.get("Kandy Region"), 0.07);
        assert_eq!(
            outcome.cropped_image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        let info = outcome.info.unwrap();
        assert_eq!(info.origin, "Uva province");
        assert_eq!(info.flavor_notes, vec!["woody", "mellow"]);
    }

    #[test]
    fn test_prediction_reply_defaults() {
        let reply: PredictionReply = decode_reply("{}").unwrap();
        let outcome = reply.into_outcome(ModelKind::Svm, ImageKind::Preprocessed);
        assert_eq!(outcome.prediction, "Unknown");
        assert_eq!(outcome.confidence, 0.0);
        assert!(outcome.probabilities.is_empty());
        assert!(outcome.cropped_image.is_none());
        assert!(outcome.info.is_none());
    }

    #[test]
    fn test_error_body_decodes_as_backend_error() {
        let err = decode_reply::<PredictionReply>(r#"{"error": "Model not loaded"}"#).unwrap_err();
        match err {
            ClientError::Backend { message } => assert_eq!(message, "Model not loaded"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rgb_analysis_reply() {
        let json = r#"{"r_mean": 182.4, "g_mean": 120.0, "b_mean": 64.25, "cropped_image": null}"#;
        let reply: RgbAnalysisReply = decode_reply(json).unwrap();
        assert_eq!(reply.r_mean, 182.4);
        assert_eq!(reply.b_mean, 64.25);
        assert!(reply.cropped_image.is_none());
    }

    #[test]
    fn test_region_group_result_flattens_features() {
        let json = r#"{"results": [
            {"R_mean": 120.0, "G_mean": 80.0, "predicted_region": "Dimbula", "predicted_group": "High"}
        ]}"#;
        let reply: RegionGroupReply = decode_reply(json).unwrap();
        assert_eq!(reply.results.len(), 1);
        let row = &reply.results[0];
        assert_eq!(row.predicted_region, "Dimbula");
        assert_eq!(row.predicted_group, "High");
        assert_eq!(row.features.get("R_mean"), Some(&120.0));
    }

    #[test]
    fn test_polyphenol_reply_array() {
        let json = r#"[
            {"prediction": "Ruhuna Region", "confidence": 0.88},
            {}
        ]"#;
        let replies: Vec<PolyphenolPrediction> = decode_reply(json).unwrap();
        assert_eq!(replies[0].prediction.as_deref(), Some("Ruhuna Region"));
        assert_eq!(replies[0].confidence, Some(0.88));
        assert!(replies[1].prediction.is_none());
    }

    #[test]
    fn test_polyphenol_request_uses_capitalized_keys() {
        let samples = [PolyphenolSample {
            absorbance: 0.42,
            concentration: 3.1,
        }];
        let request = PolyphenolRequest { data: &samples };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"data":[{"Absorbance":0.42,"Concentration":3.1}]}"#);
    }

    #[test]
    fn test_usage_summary() {
        let json = r#"{
            "total_users": 12,
            "admin_users": 2,
            "regular_users": 10,
            "users_today": 1,
            "users_week": 4,
            "users_month": 9,
            "recent_users": [{"email": "a@b.com", "created_at": "2025-08-22T08:00:00"}]
        }"#;
        let summary: UsageSummary = decode_reply(json).unwrap();
        assert_eq!(summary.total_users, 12);
        assert_eq!(summary.recent_users[0].email, "a@b.com");
    }

    #[test]
    fn test_auth_reply_into_account() {
        let json = r#"{
            "message": "Login successful",
            "user": {"id": 3, "email": "User@Example.com", "is_admin": true, "profile_picture_url": null}
        }"#;
        let reply: AuthReply = decode_reply(json).unwrap();
        let account = reply.user.into_account();
        assert_eq!(account.id, 3);
        assert_eq!(account.email, "user@example.com");
        assert!(account.is_admin);
        assert!(account.profile_picture_url.is_none());
    }

    #[test]
    fn test_health_reply() {
        let json = r#"{
            "status": "healthy",
            "timestamp": "2025-08-22 10:30:00",
            "message": "Backend is running fine",
            "model_loaded": true
        }"#;
        let reply: HealthReply = decode_reply(json).unwrap();
        assert_eq!(reply.status, "healthy");
        assert!(reply.model_loaded);
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(failure_message(r#"{"error": "Admin access required"}"#), "Admin access required");
        assert_eq!(failure_message("   "), "empty reply");
        assert_eq!(failure_message("<html>502</html>"), "<html>502</html>");
    }
}
