//! Domain layer of the conference management core.
//!
//! Holds the entity records, the repository contracts the rest of the
//! workspace is written against, and the replayable snapshot stream those
//! repositories publish through.

pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod media;
pub mod observable;
pub mod repository;
pub mod session;
pub mod speaker;
pub mod user;

// Re-export common types
pub use entity::Entity;
pub use error::{ConferenceError, Result};
pub use observable::{ListStream, Snapshot, SnapshotPublisher};
