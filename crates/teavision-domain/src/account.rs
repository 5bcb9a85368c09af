//! Signed-in user accounts as the backend reports them

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A user account.
///
/// Emails are stored lowercased; the backend treats them case-insensitively
/// and uses them as identity headers on authenticated requests.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Account {
    pub fn new(id: i64, email: &str, is_admin: bool) -> Self {
        Self {
            id,
            email: email.trim().to_lowercase(),
            is_admin,
            profile_picture_url: None,
            created_at: Some(Utc::now().to_rfc3339()),
        }
    }

    /// Builder method to add a profile picture URL.
    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture_url = Some(url.into());
        self
    }
}
