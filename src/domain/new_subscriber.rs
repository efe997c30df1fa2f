use crate::domain::{SubscriberEmail, SubscriberName};

/// A subscriber as submitted through the API, before anything is stored.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
    pub name: Option<SubscriberName>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseSubscriberError {
    #[error("{0}")]
    InvalidEmail(String),
    #[error("{0}")]
    InvalidName(String),
}

impl NewSubscriber {
    /// Build a subscriber from raw form input. A blank name is treated as
    /// absent, the way empty form fields arrive from the landing page.
    pub fn parse(email: String, name: Option<String>) -> Result<Self, ParseSubscriberError> {
        let email = SubscriberEmail::parse(email).map_err(ParseSubscriberError::InvalidEmail)?;
        let name = match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => {
                Some(SubscriberName::parse(name).map_err(ParseSubscriberError::InvalidName)?)
            }
            None => None,
        };

        Ok(Self { email, name })
    }

    /// How the subscriber is referred to in outgoing text: the name when
    /// one was given, the email otherwise.
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .map(AsRef::as_ref)
            .unwrap_or_else(|| self.email.as_ref())
    }
}
