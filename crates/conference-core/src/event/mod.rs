//! Conference event domain module.

mod model;
mod repository;

pub use model::{ConferenceEvent, EventStatus};
pub use repository::EventRepository;
