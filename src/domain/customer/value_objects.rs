use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

// Local-part @ domain with at least one dot-separated label
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .unwrap()
});

/// Customer email address, validated on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn parse(email: impl Into<String>) -> Result<Self, CustomerError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(CustomerError::EmptyEmail);
        }
        if !EMAIL_RE.is_match(&email) {
            return Err(CustomerError::InvalidEmail(email));
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Reject blank customer names; returns the name unchanged when acceptable.
pub fn validate_name(name: String) -> Result<String, CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::EmptyName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        let email = Email::parse("ana@example.com").unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
    }

    #[test]
    fn test_accepts_plus_tag_and_subdomain() {
        assert!(Email::parse("ana.souza+tag@mail.example.com.br").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Email::parse(""),
            Err(CustomerError::EmptyEmail)
        ));
        assert!(matches!(
            Email::parse("   "),
            Err(CustomerError::EmptyEmail)
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["not-an-email", "ana@", "@example.com", "ana@example", "a b@example.com"] {
            assert!(
                matches!(Email::parse(bad), Err(CustomerError::InvalidEmail(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Ana".to_string()).unwrap(), "Ana");
        assert!(matches!(
            validate_name("  ".to_string()),
            Err(CustomerError::EmptyName)
        ));
    }
}
