//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: `UserProfile` and `UserRole`
//! - `repository`: User collection and authentication trait
//! - `credentials`: Password hashing seam used by repositories

mod credentials;
mod model;
mod repository;

pub use credentials::PasswordHasher;
pub use model::{UserProfile, UserRole, normalize_email};
pub use repository::UserRepository;
