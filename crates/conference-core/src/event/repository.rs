//! Event repository trait.

use super::model::ConferenceEvent;
use crate::error::Result;
use crate::observable::ListStream;

/// An abstract repository owning the event collection, sorted by start date.
#[async_trait::async_trait]
pub trait EventRepository: Send + Sync {
    fn list(&self) -> ListStream<ConferenceEvent>;

    async fn get_by_id(&self, id: &str) -> Option<ConferenceEvent>;

    /// Adds an event and returns its id. Fails with `Conflict` on a
    /// duplicate id.
    async fn create(&self, event: ConferenceEvent) -> Result<String>;

    /// Replaces the stored event with the same id, or fails with `NotFound`.
    async fn update(&self, event: ConferenceEvent) -> Result<()>;

    /// Removes every event with this id, or fails with `NotFound`.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Uploads a cover image and returns its public URL.
    async fn upload_image(&self, event_id: &str, image_data: &[u8]) -> Result<String>;
}
