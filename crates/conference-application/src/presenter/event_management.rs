//! Presenter for the event management screen.

use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use conference_core::event::{ConferenceEvent, EventRepository, EventStatus};
use conference_core::id::new_entity_id;
use conference_core::observable::Snapshot;

use super::list::ListState;
use super::state::OperationState;
use super::upload::report_upload_steps;

/// Form input for a new event; the presenter assigns the id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub max_capacity: u32,
    pub registration_deadline: Option<String>,
    pub tags: Vec<String>,
    pub status: EventStatus,
}

impl EventDraft {
    fn into_event(self, id: String) -> ConferenceEvent {
        ConferenceEvent {
            description: self.description,
            registration_deadline: self.registration_deadline,
            tags: self.tags,
            status: self.status,
            ..ConferenceEvent::new(
                id,
                self.name,
                self.start_date,
                self.end_date,
                self.location,
                self.max_capacity,
            )
        }
    }
}

pub struct EventManagementPresenter {
    repository: Arc<dyn EventRepository>,
    events: ListState<ConferenceEvent>,
    state: OperationState,
    progress_step: Duration,
}

impl EventManagementPresenter {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        let state = OperationState::new("EventManagementPresenter");
        let events = ListState::new();
        events.subscribe(repository.list(), &state, "Failed to load events");
        Self {
            repository,
            events,
            state,
            progress_step: Duration::ZERO,
        }
    }

    pub fn with_progress_step(mut self, step: Duration) -> Self {
        self.progress_step = step;
        self
    }

    pub fn events(&self) -> Arc<Vec<ConferenceEvent>> {
        self.events.items()
    }

    pub fn watch_events(&self) -> watch::Receiver<Snapshot<ConferenceEvent>> {
        self.events.watch()
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    /// Creates an event from form input and returns the generated id.
    pub async fn create_event(&self, draft: EventDraft) -> Option<String> {
        let repository = Arc::clone(&self.repository);
        let event = draft.into_event(new_entity_id("event"));
        self.state
            .run(
                "Event created successfully",
                "Failed to create event",
                async move { repository.create(event).await },
            )
            .await
    }

    pub async fn update_event(&self, event: ConferenceEvent) -> bool {
        update_record(&self.state, Arc::clone(&self.repository), event).await
    }

    pub async fn delete_event(&self, event_id: &str) -> bool {
        let repository = Arc::clone(&self.repository);
        let event_id = event_id.to_string();
        self.state
            .run(
                "Event deleted successfully",
                "Failed to delete event",
                async move { repository.delete(&event_id).await },
            )
            .await
            .is_some()
    }

    /// Uploads a banner image and stores its URL on the event.
    pub async fn upload_event_image(&self, event_id: &str, image_data: &[u8]) -> bool {
        let state = self.state.clone();
        let repository = Arc::clone(&self.repository);
        let step = self.progress_step;
        let event_id = event_id.to_string();
        let image_data = image_data.to_vec();

        self.state
            .detach(async move {
                let progress = state.begin_upload();
                report_upload_steps(&progress, step).await;

                let url = match repository.upload_image(&event_id, &image_data).await {
                    Ok(url) => url,
                    Err(e) => {
                        state.fail(format!("Failed to upload image: {}", e));
                        return false;
                    }
                };

                if let Some(mut event) = repository.get_by_id(&event_id).await {
                    event.image_url = Some(url);
                    if !update_record(&state, repository, event).await {
                        return false;
                    }
                }

                state.succeed("Event image uploaded successfully");
                true
            })
            .await
            .unwrap_or(false)
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub fn clear_operation_result(&self) {
        self.state.clear_operation_result();
    }
}

async fn update_record(
    state: &OperationState,
    repository: Arc<dyn EventRepository>,
    event: ConferenceEvent,
) -> bool {
    state
        .run(
            "Event updated successfully",
            "Failed to update event",
            async move { repository.update(event).await },
        )
        .await
        .is_some()
}
