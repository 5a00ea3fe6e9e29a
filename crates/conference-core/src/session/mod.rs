//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: The `Session` record
//! - `repository`: Repository trait for the session collection

mod model;
mod repository;

pub use model::Session;
pub use repository::SessionRepository;
