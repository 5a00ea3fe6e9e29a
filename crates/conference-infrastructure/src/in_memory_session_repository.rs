//! In-memory session repository.

use async_trait::async_trait;

use conference_core::error::Result;
use conference_core::observable::ListStream;
use conference_core::session::{Session, SessionRepository};

use crate::in_memory_store::{InMemoryStore, StoreSettings};
use crate::sample_data::sample_sessions;

/// Session repository holding its collection for the process lifetime.
pub struct InMemorySessionRepository {
    store: InMemoryStore<Session>,
}

impl InMemorySessionRepository {
    pub fn new(sessions: Vec<Session>, settings: StoreSettings) -> Self {
        Self {
            store: InMemoryStore::new(sessions, settings),
        }
    }

    pub fn empty(settings: StoreSettings) -> Self {
        Self::new(Vec::new(), settings)
    }

    /// Creates a repository seeded with the bundled conference schedule.
    pub fn with_sample_data(settings: StoreSettings) -> Self {
        Self::new(sample_sessions(), settings)
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    fn list(&self) -> ListStream<Session> {
        self.store.subscribe()
    }

    async fn get_by_id(&self, id: &str) -> Option<Session> {
        self.store.find(id)
    }

    async fn create(&self, session: Session) -> Result<String> {
        tracing::debug!("[InMemorySessionRepository] create: {}", session.id);
        self.store.insert(session).await
    }

    async fn update(&self, session: Session) -> Result<()> {
        tracing::debug!("[InMemorySessionRepository] update: {}", session.id);
        self.store.replace(session).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::debug!("[InMemorySessionRepository] delete: {}", id);
        self.store.remove(id).await
    }

    async fn list_by_event(&self, event_id: &str) -> Vec<Session> {
        self.store
            .filter(|session| session.event_id.as_deref() == Some(event_id))
    }

    async fn list_by_speaker(&self, speaker_id: &str) -> Vec<Session> {
        self.store.filter(|session| session.has_speaker(speaker_id))
    }
}
