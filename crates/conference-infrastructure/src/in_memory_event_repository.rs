//! In-memory conference event repository.

use async_trait::async_trait;
use std::sync::Arc;

use conference_core::error::Result;
use conference_core::event::{ConferenceEvent, EventRepository};
use conference_core::media::{ImageCollection, ImageStorage};
use conference_core::observable::ListStream;

use crate::image_storage::SimulatedImageStorage;
use crate::in_memory_store::{InMemoryStore, StoreSettings};
use crate::sample_data::sample_events;

pub struct InMemoryEventRepository {
    store: InMemoryStore<ConferenceEvent>,
    images: Arc<dyn ImageStorage>,
}

impl InMemoryEventRepository {
    pub fn new(
        events: Vec<ConferenceEvent>,
        settings: StoreSettings,
        images: Arc<dyn ImageStorage>,
    ) -> Self {
        Self {
            store: InMemoryStore::new(events, settings),
            images,
        }
    }

    pub fn with_sample_data(settings: StoreSettings) -> Self {
        Self::new(
            sample_events(),
            settings,
            Arc::new(SimulatedImageStorage::default()),
        )
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    fn list(&self) -> ListStream<ConferenceEvent> {
        self.store.subscribe()
    }

    async fn get_by_id(&self, id: &str) -> Option<ConferenceEvent> {
        self.store.find(id)
    }

    async fn create(&self, event: ConferenceEvent) -> Result<String> {
        tracing::debug!("[InMemoryEventRepository] create: {}", event.id);
        self.store.insert(event).await
    }

    async fn update(&self, event: ConferenceEvent) -> Result<()> {
        tracing::debug!("[InMemoryEventRepository] update: {}", event.id);
        self.store.replace(event).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::debug!("[InMemoryEventRepository] delete: {}", id);
        self.store.remove(id).await
    }

    async fn upload_image(&self, event_id: &str, image_data: &[u8]) -> Result<String> {
        self.images
            .upload(ImageCollection::Events, event_id, image_data)
            .await
    }
}
