//! Session domain model.
//!
//! A session is one scheduled slot of a conference: a talk, a workshop or a
//! ceremony, held at a location by zero or more speakers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::entity::Entity;
use crate::error::{ConferenceError, Result};

/// A scheduled conference session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    /// Event this session belongs to, if any
    #[serde(default)]
    pub event_id: Option<String>,
    /// Ids of the presenting speakers; resolved by the consumer
    #[serde(default)]
    pub speaker_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Seat limit; `None` means unlimited
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub registered_count: u32,
    #[serde(default)]
    pub is_workshop: bool,
    #[serde(default)]
    pub requires_registration: bool,
}

impl Session {
    /// Creates a session with empty optional fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            start_time,
            end_time,
            location: location.into(),
            event_id: None,
            speaker_ids: Vec::new(),
            tags: Vec::new(),
            capacity: None,
            registered_count: 0,
            is_workshop: false,
            requires_registration: false,
        }
    }

    /// Whether `speaker_id` presents this session.
    pub fn has_speaker(&self, speaker_id: &str) -> bool {
        self.speaker_ids.iter().any(|id| id == speaker_id)
    }

    /// Remaining seats, or `None` when capacity is unlimited.
    pub fn seats_left(&self) -> Option<u32> {
        self.capacity
            .map(|capacity| capacity.saturating_sub(self.registered_count))
    }
}

impl Entity for Session {
    const KIND: &'static str = "Session";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.start_time.cmp(&other.start_time)
    }

    fn validate(&self) -> Result<()> {
        if self.end_time <= self.start_time {
            return Err(ConferenceError::validation(format!(
                "session '{}' must end after it starts",
                self.id
            )));
        }
        if let Some(capacity) = self.capacity
            && self.registered_count > capacity
        {
            return Err(ConferenceError::validation(format!(
                "session '{}' has {} registrations for {} seats",
                self.id, self.registered_count, capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 20, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_orders_by_start_time() {
        let early = Session::new("a", "Early", at(8, 0), at(8, 30), "Hall");
        let late = Session::new("b", "Late", at(9, 0), at(10, 0), "Hall");
        assert_eq!(early.display_order(&late), Ordering::Less);
    }

    #[test]
    fn test_rejects_end_before_start() {
        let session = Session::new("a", "Backwards", at(10, 0), at(9, 0), "Hall");
        assert!(session.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_rejects_overbooking() {
        let mut session = Session::new("a", "Full", at(9, 0), at(10, 0), "Hall");
        session.capacity = Some(10);
        session.registered_count = 11;
        assert!(session.validate().is_err());

        session.registered_count = 10;
        assert!(session.validate().is_ok());
        assert_eq!(session.seats_left(), Some(0));
    }

    #[test]
    fn test_serializes_camel_case() {
        let session = Session::new("a", "Opening", at(9, 0), at(10, 0), "Main");
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("startTime").is_some());
        assert!(json.get("speakerIds").is_some());
    }
}
