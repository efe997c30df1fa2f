use std::fmt::Display;

/// Normalized, storage-safe key derived from an email.
///
/// The email is lowercased and then percent-encoded, so the value is safe
/// to use as a database key or a path segment. Derivation is deterministic:
/// two spellings of the same address always map to the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn of(email: &str) -> Self {
        Self(urlencoding::encode(&email.to_lowercase()).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
