//! Client configuration

use std::time::Duration;

use url::Url;

/// Connection settings for [`TeaVisionClient`](crate::TeaVisionClient).
///
/// `identity_email` is forwarded as the `X-User-Email` header so the backend
/// can attribute predictions to the signed-in account.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Url,
    pub identity_email: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            identity_email: None,
            user_agent: "teavision/1.0".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_identity_email(mut self, email: impl Into<String>) -> Self {
        self.identity_email = Some(email.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(Url::parse("http://localhost:5000").unwrap());
        assert!(config.identity_email.is_none());
        assert_eq!(config.user_agent, "teavision/1.0");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new(Url::parse("http://localhost:5000").unwrap())
            .with_identity_email("user@example.com")
            .with_user_agent("teavision-tests/0.1")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.identity_email.as_deref(), Some("user@example.com"));
        assert_eq!(config.user_agent, "teavision-tests/0.1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
