//! In-memory speaker repository.

use async_trait::async_trait;
use std::sync::Arc;

use conference_core::error::Result;
use conference_core::media::{ImageCollection, ImageStorage};
use conference_core::observable::ListStream;
use conference_core::speaker::{Speaker, SpeakerRepository};

use crate::image_storage::SimulatedImageStorage;
use crate::in_memory_store::{InMemoryStore, StoreSettings};
use crate::sample_data::sample_speakers;

pub struct InMemorySpeakerRepository {
    store: InMemoryStore<Speaker>,
    images: Arc<dyn ImageStorage>,
}

impl InMemorySpeakerRepository {
    pub fn new(
        speakers: Vec<Speaker>,
        settings: StoreSettings,
        images: Arc<dyn ImageStorage>,
    ) -> Self {
        Self {
            store: InMemoryStore::new(speakers, settings),
            images,
        }
    }

    /// Creates a repository seeded with the bundled speakers and a
    /// simulated image store.
    pub fn with_sample_data(settings: StoreSettings) -> Self {
        Self::new(
            sample_speakers(),
            settings,
            Arc::new(SimulatedImageStorage::default()),
        )
    }
}

#[async_trait]
impl SpeakerRepository for InMemorySpeakerRepository {
    fn list(&self) -> ListStream<Speaker> {
        self.store.subscribe()
    }

    async fn get_by_id(&self, id: &str) -> Option<Speaker> {
        self.store.find(id)
    }

    async fn create(&self, speaker: Speaker) -> Result<String> {
        tracing::debug!("[InMemorySpeakerRepository] create: {}", speaker.id);
        self.store.insert(speaker).await
    }

    async fn update(&self, speaker: Speaker) -> Result<()> {
        tracing::debug!("[InMemorySpeakerRepository] update: {}", speaker.id);
        self.store.replace(speaker).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::debug!("[InMemorySpeakerRepository] delete: {}", id);
        self.store.remove(id).await
    }

    async fn upload_image(&self, speaker_id: &str, image_data: &[u8]) -> Result<String> {
        self.images
            .upload(ImageCollection::Speakers, speaker_id, image_data)
            .await
    }
}
