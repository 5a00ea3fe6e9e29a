//! Speaker domain model.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::error::{ConferenceError, Result};

/// A person presenting one or more sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    /// Unique identifier
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    /// Job title, e.g. "Youth Director"
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Platform name to profile URL or handle
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
    #[serde(default)]
    pub expertise: Vec<String>,
}

impl Speaker {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bio: String::new(),
            title: String::new(),
            organization: String::new(),
            email: String::new(),
            profile_image_url: None,
            social_links: BTreeMap::new(),
            expertise: Vec::new(),
        }
    }
}

impl Entity for Speaker {
    const KIND: &'static str = "Speaker";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConferenceError::validation(format!(
                "speaker '{}' needs a name",
                self.id
            )));
        }
        Ok(())
    }
}
