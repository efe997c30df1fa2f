use std::fmt::Display;

use crate::domain::Identity;

/// Represents a validated subscriber email.
///
/// The accepted shape is the same one the landing page checks before
/// submitting a form: a single `@` with a non-empty local part, no
/// whitespace anywhere, and a domain containing an interior dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid subscriber email."))
        }
    }

    /// Check a candidate email against the pattern `^[^@\s]+@[^@\s]+\.[^@\s]+$`.
    pub fn is_valid(s: &str) -> bool {
        if s.chars().any(char::is_whitespace) {
            return false;
        }

        let mut parts = s.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            // Zero or more than one `@`.
            return false;
        };

        if local.is_empty() {
            return false;
        }

        // The domain needs a dot with at least one character on each side.
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }

    /// The email lowercased, as compared and stored.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// The storage-safe identity derived from this email.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
