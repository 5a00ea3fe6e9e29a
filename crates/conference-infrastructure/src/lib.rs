pub mod config_service;
pub mod image_storage;
pub mod in_memory_event_repository;
pub mod in_memory_session_repository;
pub mod in_memory_speaker_repository;
pub mod in_memory_store;
pub mod in_memory_user_repository;
pub mod password_hasher;
pub mod paths;
pub mod sample_data;

pub use crate::config_service::ConfigService;
pub use crate::image_storage::SimulatedImageStorage;
pub use crate::in_memory_event_repository::InMemoryEventRepository;
pub use crate::in_memory_session_repository::InMemorySessionRepository;
pub use crate::in_memory_speaker_repository::InMemorySpeakerRepository;
pub use crate::in_memory_store::{InMemoryStore, StoreSettings};
pub use crate::in_memory_user_repository::InMemoryUserRepository;
pub use crate::password_hasher::Argon2PasswordHasher;
pub use crate::paths::ConferencePaths;
