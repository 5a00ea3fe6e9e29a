//! Session repository trait.

use super::model::Session;
use crate::error::Result;
use crate::observable::ListStream;

/// An abstract repository owning the authoritative session collection.
///
/// Implementations publish the whole collection, sorted by start time, after
/// every successful mutation. Mutations on one repository are serialized.
#[async_trait::async_trait]
pub trait SessionRepository: Send + Sync {
    /// Subscribes to the session list. The stream replays the latest
    /// snapshot first and never ends while the repository is alive.
    fn list(&self) -> ListStream<Session>;

    async fn get_by_id(&self, id: &str) -> Option<Session>;

    /// Adds a session and returns its id.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a session with the same id is already stored
    /// - `Validation` if the session breaks its invariants
    async fn create(&self, session: Session) -> Result<String>;

    /// Replaces the stored session with the same id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no session has this id
    async fn update(&self, session: Session) -> Result<()>;

    /// Removes every session with this id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no session has this id
    async fn delete(&self, id: &str) -> Result<()>;

    /// Sessions belonging to one event, in schedule order.
    async fn list_by_event(&self, event_id: &str) -> Vec<Session>;

    /// Sessions presented by one speaker, in schedule order.
    async fn list_by_speaker(&self, speaker_id: &str) -> Vec<Session>;
}
