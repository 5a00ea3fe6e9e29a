//! Simulated image storage.
//!
//! No bytes are kept; an upload waits for the configured latency and hands
//! back the URL a real bucket would serve the image from.

use async_trait::async_trait;
use std::time::Duration;

use conference_core::config::{ConferenceConfig, Operation};
use conference_core::error::{ConferenceError, Result};
use conference_core::media::{ImageCollection, ImageStorage};

#[derive(Debug, Clone)]
pub struct SimulatedImageStorage {
    base_url: String,
    latency: Duration,
}

impl SimulatedImageStorage {
    pub fn new(base_url: impl Into<String>, latency: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            latency,
        }
    }

    pub fn from_config(config: &ConferenceConfig) -> Self {
        Self::new(
            config.storage.image_base_url.clone(),
            config.latency.delay_for(Operation::UploadImage),
        )
    }

    /// URL an image for `owner_id` is published under.
    pub fn url_for(&self, collection: ImageCollection, owner_id: &str) -> String {
        format!("{}/{}/{}.jpg", self.base_url, collection, owner_id)
    }
}

impl Default for SimulatedImageStorage {
    fn default() -> Self {
        Self::from_config(&ConferenceConfig::default())
    }
}

#[async_trait]
impl ImageStorage for SimulatedImageStorage {
    async fn upload(
        &self,
        collection: ImageCollection,
        owner_id: &str,
        data: &[u8],
    ) -> Result<String> {
        if data.is_empty() {
            return Err(ConferenceError::validation("image data is empty"));
        }
        if owner_id.trim().is_empty() {
            return Err(ConferenceError::validation("image owner id is empty"));
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let url = self.url_for(collection, owner_id);
        tracing::debug!(
            %collection,
            owner_id,
            bytes = data.len(),
            "[SimulatedImageStorage] stored image at {}",
            url
        );
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_returns_collection_scoped_url() {
        let storage = SimulatedImageStorage::new("https://cdn.example.org/", Duration::ZERO);
        let url = storage
            .upload(ImageCollection::Speakers, "speaker_1", &[0xFF, 0xD8])
            .await
            .unwrap();
        assert_eq!(url, "https://cdn.example.org/speakers/speaker_1.jpg");
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_payload() {
        let storage = SimulatedImageStorage::default();
        let err = storage
            .upload(ImageCollection::Events, "event_1", &[])
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_default_base_url() {
        let storage = SimulatedImageStorage::default();
        assert_eq!(
            storage.url_for(ImageCollection::Events, "event_2"),
            "https://storage.googleapis.com/lyg-conference/events/event_2.jpg"
        );
    }
}
