//! Conference event domain model.
//!
//! An event is the umbrella gathering (a conference, a retreat) that
//! sessions are scheduled into. Dates are kept as the `YYYY-MM-DD` strings
//! organizers type in; they sort lexicographically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::entity::Entity;
use crate::error::{ConferenceError, Result};

/// Publication state of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventStatus {
    /// Being prepared, not visible to attendees
    #[default]
    Draft,
    /// Open for registration
    Active,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Draft,
        EventStatus::Active,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Active => "Active",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = ConferenceError;

    fn from_str(s: &str) -> Result<Self> {
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConferenceError::validation(format!("unknown event status '{}'", s)))
    }
}

/// A conference, retreat or other gathering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceEvent {
    /// Unique identifier
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub max_capacity: u32,
    #[serde(default)]
    pub registered_attendees: u32,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub organizer_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub registration_deadline: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ConferenceEvent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        location: impl Into<String>,
        max_capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            location: location.into(),
            max_capacity,
            registered_attendees: 0,
            status: EventStatus::Draft,
            organizer_id: None,
            image_url: None,
            registration_deadline: None,
            tags: Vec::new(),
        }
    }

    /// Registration fill ratio in `0.0..=1.0` (0 when capacity is zero).
    pub fn occupancy(&self) -> f64 {
        if self.max_capacity == 0 {
            return 0.0;
        }
        (self.registered_attendees as f64 / self.max_capacity as f64).min(1.0)
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

impl Entity for ConferenceEvent {
    const KIND: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.start_date.cmp(&other.start_date)
    }

    fn validate(&self) -> Result<()> {
        if self.registered_attendees > self.max_capacity {
            return Err(ConferenceError::validation(format!(
                "event '{}' has {} attendees for {} places",
                self.id, self.registered_attendees, self.max_capacity
            )));
        }
        // Free-form dates are accepted; only well-formed ones are compared.
        if let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date))
            && end < start
        {
            return Err(ConferenceError::validation(format!(
                "event '{}' ends before it starts",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in EventStatus::ALL {
            assert_eq!(status.to_string().parse::<EventStatus>().unwrap(), status);
        }
        assert_eq!("active".parse::<EventStatus>().unwrap(), EventStatus::Active);
        assert!("archived".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_single_day_event_is_valid() {
        let event = ConferenceEvent::new("e", "Party", "2024-12-21", "2024-12-21", "Hall", 200);
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_rejects_reversed_dates() {
        let event = ConferenceEvent::new("e", "Oops", "2024-12-21", "2024-12-20", "Hall", 200);
        assert!(event.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_unparseable_dates_are_not_compared() {
        let event = ConferenceEvent::new("e", "TBD", "next spring", "soon", "Hall", 10);
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_rejects_overbooking() {
        let mut event = ConferenceEvent::new("e", "Retreat", "2024-08-15", "2024-08-17", "Camp", 150);
        event.registered_attendees = 151;
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_occupancy() {
        let mut event = ConferenceEvent::new("e", "Summit", "2024-10-12", "2024-10-13", "Center", 100);
        event.registered_attendees = 25;
        assert!((event.occupancy() - 0.25).abs() < f64::EPSILON);
    }
}
