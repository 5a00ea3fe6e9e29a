//! UserProfile domain model.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::entity::Entity;
use crate::error::{ConferenceError, Result};

/// What a signed-in user is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    /// Browses the schedule, speakers and events
    #[default]
    Attendee,
    /// Additionally manages sessions, speakers, events and notifications
    Organizer,
}

impl UserRole {
    pub fn can_manage(&self) -> bool {
        matches!(self, UserRole::Organizer)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Attendee => f.write_str("Attendee"),
            UserRole::Organizer => f.write_str("Organizer"),
        }
    }
}

/// An account holder. The email is the login key and unique across users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub onboarding_complete: bool,
}

impl UserProfile {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            email: normalize_email(&email.into()),
            name: name.into(),
            role,
            phone: None,
            organization: None,
            photo_url: None,
            onboarding_complete: false,
        }
    }
}

/// Canonical form of an email used for storage and comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Entity for UserProfile {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    // Users are listed in registration order.
    fn display_order(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }

    fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ConferenceError::validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ConferenceError::validation("user name must not be empty"));
        }
        Ok(())
    }
}
