//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

/// `local@domain.tld`: exactly one `@`, and a `.` inside the domain part.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern compiles"));

/// A syntactically plausible email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Parse an address, rejecting anything not shaped like `local@domain.tld`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        if !EMAIL_PATTERN.is_match(raw) {
            return Err(AppError::validation("Invalid email format."));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_address() {
        let email = Email::parse("jane@x.com").unwrap();
        assert_eq!(email.as_str(), "jane@x.com");
    }

    #[test]
    fn test_accepts_subdomains() {
        assert!(Email::parse("ops.lead@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_rejects_missing_at() {
        let err = Email::parse("jane.x.com").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format.");
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(Email::parse("jane@localhost").is_err());
    }

    #[test]
    fn test_rejects_second_at() {
        assert!(Email::parse("jane@x@y.com").is_err());
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!(Email::parse("@x.com").is_err());
        assert!(Email::parse("jane@.com").is_err());
        assert!(Email::parse("jane@x.").is_err());
    }
}
