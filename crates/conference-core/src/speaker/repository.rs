//! Speaker repository trait.

use super::model::Speaker;
use crate::error::Result;
use crate::observable::ListStream;

/// An abstract repository owning the speaker collection, sorted by name.
#[async_trait::async_trait]
pub trait SpeakerRepository: Send + Sync {
    fn list(&self) -> ListStream<Speaker>;

    async fn get_by_id(&self, id: &str) -> Option<Speaker>;

    /// Adds a speaker and returns its id. Fails with `Conflict` on a
    /// duplicate id.
    async fn create(&self, speaker: Speaker) -> Result<String>;

    /// Replaces the stored speaker with the same id, or fails with `NotFound`.
    async fn update(&self, speaker: Speaker) -> Result<()>;

    /// Removes every speaker with this id, or fails with `NotFound`.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Uploads a profile picture and returns its public URL.
    ///
    /// The speaker record itself is not modified.
    async fn upload_image(&self, speaker_id: &str, image_data: &[u8]) -> Result<String>;
}
