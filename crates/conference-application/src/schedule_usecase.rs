//! Read-only schedule queries.

use std::sync::Arc;

use conference_core::observable::ListStream;
use conference_core::session::{Session, SessionRepository};

/// Thin query layer over the session repository used by the attendee
/// schedule view.
#[derive(Clone)]
pub struct GetScheduleUseCase {
    session_repository: Arc<dyn SessionRepository>,
}

impl GetScheduleUseCase {
    pub fn new(session_repository: Arc<dyn SessionRepository>) -> Self {
        Self { session_repository }
    }

    /// Live schedule of every session.
    pub fn all_sessions(&self) -> ListStream<Session> {
        self.session_repository.list()
    }

    pub async fn sessions_by_event(&self, event_id: &str) -> Vec<Session> {
        self.session_repository.list_by_event(event_id).await
    }

    pub async fn sessions_by_speaker(&self, speaker_id: &str) -> Vec<Session> {
        self.session_repository.list_by_speaker(speaker_id).await
    }
}
