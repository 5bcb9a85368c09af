//! Error types and validation helpers for domain values

use thiserror::Error;

/// Errors for domain-value validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Email does not look like an address
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    /// Confidence outside [0, 1] or not finite
    #[error("Confidence out of range: {value}")]
    InvalidConfidence { value: f64 },
}

/// Result type alias for domain validation.
pub type DomainResult<T> = Result<T, DomainError>;

/// Validation utilities applied at deserialization boundaries
pub mod validation {
    use super::*;

    /// Validate the shape of an email address: exactly one '@' with
    /// non-empty local part and domain.
    pub fn validate_email(email: &str) -> DomainResult<()> {
        let trimmed = email.trim();
        let mut parts = trimmed.splitn(2, '@');
        match (parts.next(), parts.next()) {
            (Some(local), Some(domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(DomainError::InvalidEmail {
                email: trimmed.to_string(),
            }),
        }
    }

    /// Validate a confidence value: finite and within [0, 1].
    pub fn validate_confidence(value: f64) -> DomainResult<()> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(DomainError::InvalidConfidence { value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validation::validate_email("alice@example.com").is_ok());
        assert!(validation::validate_email(" bob@lab.ac.lk ").is_ok());
        assert!(validation::validate_email("no-at-sign").is_err());
        assert!(validation::validate_email("@example.com").is_err());
        assert!(validation::validate_email("alice@").is_err());
        assert!(validation::validate_email("a@b@c").is_err());
    }

    #[test]
    fn test_validate_confidence() {
        assert!(validation::validate_confidence(0.0).is_ok());
        assert!(validation::validate_confidence(0.73).is_ok());
        assert!(validation::validate_confidence(1.0).is_ok());
        assert!(validation::validate_confidence(1.01).is_err());
        assert!(validation::validate_confidence(-0.1).is_err());
        assert!(validation::validate_confidence(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidEmail {
            email: "bad".to_string(),
        };
        assert!(err.to_string().contains("bad"));
    }
}
