//! Image storage seam.
//!
//! Repositories delegate uploads to an [`ImageStorage`] so a real object
//! store can replace the simulated one without touching them.

use crate::error::Result;
use std::fmt;

/// Folder an uploaded image is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCollection {
    Speakers,
    Events,
}

impl ImageCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCollection::Speakers => "speakers",
            ImageCollection::Events => "events",
        }
    }
}

impl fmt::Display for ImageCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait::async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores `data` as the image of `owner_id` and returns its public URL.
    async fn upload(
        &self,
        collection: ImageCollection,
        owner_id: &str,
        data: &[u8],
    ) -> Result<String>;
}
