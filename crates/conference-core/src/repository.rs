//! Repository trait re-exports.
//!
//! Centralized access to every repository contract, for composition roots
//! that wire all of them at once.

pub use crate::event::EventRepository;
pub use crate::media::ImageStorage;
pub use crate::session::SessionRepository;
pub use crate::speaker::SpeakerRepository;
pub use crate::user::UserRepository;
