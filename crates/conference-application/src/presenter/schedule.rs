//! Presenter for the attendee's read-only schedule.

use std::sync::Arc;
use tokio::sync::watch;

use conference_core::observable::Snapshot;
use conference_core::session::Session;

use super::list::ListState;
use super::state::OperationState;
use crate::schedule_usecase::GetScheduleUseCase;

pub struct SchedulePresenter {
    use_case: GetScheduleUseCase,
    sessions: ListState<Session>,
    state: OperationState,
}

impl SchedulePresenter {
    /// Creates an idle presenter; call [`load_schedule`](Self::load_schedule)
    /// to start observing.
    pub fn new(use_case: GetScheduleUseCase) -> Self {
        Self {
            use_case,
            sessions: ListState::new(),
            state: OperationState::new("SchedulePresenter"),
        }
    }

    /// Starts, or restarts, observing the full schedule.
    ///
    /// Also serves as the retry action after a load failure.
    pub fn load_schedule(&self) {
        self.sessions.subscribe(
            self.use_case.all_sessions(),
            &self.state,
            "Failed to load schedule",
        );
    }

    pub fn sessions(&self) -> Arc<Vec<Session>> {
        self.sessions.items()
    }

    pub fn watch_sessions(&self) -> watch::Receiver<Snapshot<Session>> {
        self.sessions.watch()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }
}
