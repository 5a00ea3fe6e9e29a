//! Speaker domain module.

mod model;
mod repository;

pub use model::Speaker;
pub use repository::SpeakerRepository;
