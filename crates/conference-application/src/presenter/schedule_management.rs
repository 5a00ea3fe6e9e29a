//! Presenter for the organizer's session management screen.

use std::sync::Arc;
use tokio::sync::watch;

use conference_core::observable::Snapshot;
use conference_core::session::{Session, SessionRepository};

use super::list::ListState;
use super::state::OperationState;

pub struct ScheduleManagementPresenter {
    repository: Arc<dyn SessionRepository>,
    sessions: ListState<Session>,
    state: OperationState,
}

impl ScheduleManagementPresenter {
    /// Creates the presenter and starts observing the session list.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        let state = OperationState::new("ScheduleManagementPresenter");
        let sessions = ListState::new();
        sessions.subscribe(repository.list(), &state, "Failed to load sessions");
        Self {
            repository,
            sessions,
            state,
        }
    }

    pub fn sessions(&self) -> Arc<Vec<Session>> {
        self.sessions.items()
    }

    pub fn watch_sessions(&self) -> watch::Receiver<Snapshot<Session>> {
        self.sessions.watch()
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub async fn create_session(&self, session: Session) -> Option<String> {
        let repository = Arc::clone(&self.repository);
        self.state
            .run(
                "Session created successfully",
                "Failed to create session",
                async move { repository.create(session).await },
            )
            .await
    }

    pub async fn update_session(&self, session: Session) -> bool {
        let repository = Arc::clone(&self.repository);
        self.state
            .run(
                "Session updated successfully",
                "Failed to update session",
                async move { repository.update(session).await },
            )
            .await
            .is_some()
    }

    pub async fn delete_session(&self, session_id: &str) -> bool {
        let repository = Arc::clone(&self.repository);
        let session_id = session_id.to_string();
        self.state
            .run(
                "Session deleted successfully",
                "Failed to delete session",
                async move { repository.delete(&session_id).await },
            )
            .await
            .is_some()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub fn clear_operation_result(&self) {
        self.state.clear_operation_result();
    }
}
