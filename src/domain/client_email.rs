//! src/domain/client_email.rs

use crate::domain::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

/// One `@`, a dot somewhere in the domain part and no whitespace anywhere.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEmail(String);

impl ClientEmail {
    pub fn parse(s: String) -> Result<ClientEmail, ValidationError> {
        if email_pattern().is_match(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail(s))
        }
    }
}

impl AsRef<str> for ClientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // We just forward to the Display implementation of
        // the wrapped String.
        self.0.fmt(f)
    }
}
