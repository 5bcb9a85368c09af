//! The signed-in session value

use crate::guard::{GuardError, RouteGuard};
use crate::roles::RoleFlags;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use teavision_domain::Account;
use url::Url;

/// A signed-in session.
///
/// Created by [`SessionContext::sign_in`] once the backend has accepted
/// credentials, carried by value (or reference) to everything that needs
/// identity, and consumed by [`SessionContext::sign_out`]. Serializable
/// so hosts can persist sessions across launches.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionContext {
    /// Unique session identifier.
    pub id: String,
    pub account: Account,
    pub roles: RoleFlags,
    /// Preferred backend base URL, when the user overrode the default.
    backend_url: Option<String>,
    /// RFC 3339 timestamp of sign-in.
    pub signed_in_at: String,
}

impl SessionContext {
    /// Start a session for an authenticated account. Roles derive from
    /// the account tier.
    pub fn sign_in(account: Account) -> SessionContext {
        let roles = RoleFlags::for_account(account.is_admin);
        SessionContext {
            id: uuid::Uuid::new_v4().to_string(),
            account,
            roles,
            backend_url: None,
            signed_in_at: Utc::now().to_rfc3339(),
        }
    }

    /// End the session, returning the account. Nothing of the session
    /// survives the call.
    pub fn sign_out(self) -> Account {
        self.account
    }

    /// Builder method to record a preferred backend base URL.
    pub fn with_backend_url(mut self, url: Url) -> Self {
        self.backend_url = Some(url.to_string());
        self
    }

    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url.as_deref()
    }

    /// Check whether this session may enter a protected area.
    pub fn authorize(&self, guard: RouteGuard) -> Result<(), GuardError> {
        if self.roles.contains(guard.required_roles()) {
            Ok(())
        } else {
            Err(GuardError::MissingRole { area: guard.name() })
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.can_manage_users()
    }

    /// Email sent as the identity header on authenticated requests.
    pub fn identity_email(&self) -> &str {
        &self.account.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> SessionContext {
        SessionContext::sign_in(Account::new(1, "user@example.com", false))
    }

    fn admin() -> SessionContext {
        SessionContext::sign_in(Account::new(2, "admin@example.com", true))
    }

    #[test]
    fn test_sign_in_derives_roles() {
        assert_eq!(member().roles, RoleFlags::MEMBER);
        assert_eq!(admin().roles, RoleFlags::ADMINISTRATOR);
    }

    #[test]
    fn test_sign_in_assigns_unique_ids() {
        assert_ne!(member().id, member().id);
    }

    #[test]
    fn test_authorize_matrix() {
        let member = member();
        assert!(member.authorize(RouteGuard::Dashboard).is_ok());
        assert!(member.authorize(RouteGuard::Predictions).is_ok());
        assert!(member.authorize(RouteGuard::History).is_ok());
        assert!(member.authorize(RouteGuard::AdminHistory).is_err());
        assert!(member.authorize(RouteGuard::AdminPanel).is_err());

        let admin = admin();
        assert!(admin.authorize(RouteGuard::AdminHistory).is_ok());
        assert!(admin.authorize(RouteGuard::AdminPanel).is_ok());
    }

    #[test]
    fn test_sign_out_returns_account() {
        let session = member();
        let account = session.sign_out();
        assert_eq!(account.email, "user@example.com");
    }

    #[test]
    fn test_backend_url_override() {
        let url = Url::parse("http://192.168.1.20:5000/").unwrap();
        let session = member().with_backend_url(url);
        assert_eq!(session.backend_url(), Some("http://192.168.1.20:5000/"));
        assert!(admin().backend_url().is_none());
    }

    #[test]
    fn test_is_admin() {
        assert!(!member().is_admin());
        assert!(admin().is_admin());
    }

    #[test]
    fn test_serde_round_trip() {
        let session = admin().with_backend_url(Url::parse("http://localhost:5000").unwrap());
        let json = serde_json::to_string(&session).unwrap();
        let back: SessionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_identity_email() {
        assert_eq!(member().identity_email(), "user@example.com");
    }
}
