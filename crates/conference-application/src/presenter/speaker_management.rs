//! Presenter for the speaker management screen.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use conference_core::observable::Snapshot;
use conference_core::speaker::{Speaker, SpeakerRepository};

use super::list::ListState;
use super::state::OperationState;
use super::upload::report_upload_steps;

pub struct SpeakerManagementPresenter {
    repository: Arc<dyn SpeakerRepository>,
    speakers: ListState<Speaker>,
    state: OperationState,
    progress_step: Duration,
}

impl SpeakerManagementPresenter {
    /// Creates the presenter and starts observing the speaker list.
    pub fn new(repository: Arc<dyn SpeakerRepository>) -> Self {
        let state = OperationState::new("SpeakerManagementPresenter");
        let speakers = ListState::new();
        speakers.subscribe(repository.list(), &state, "Failed to load speakers");
        Self {
            repository,
            speakers,
            state,
            progress_step: Duration::ZERO,
        }
    }

    /// Sets the pause between upload progress increments.
    pub fn with_progress_step(mut self, step: Duration) -> Self {
        self.progress_step = step;
        self
    }

    pub fn speakers(&self) -> Arc<Vec<Speaker>> {
        self.speakers.items()
    }

    pub fn watch_speakers(&self) -> watch::Receiver<Snapshot<Speaker>> {
        self.speakers.watch()
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub async fn create_speaker(&self, speaker: Speaker) -> Option<String> {
        let repository = Arc::clone(&self.repository);
        self.state
            .run(
                "Speaker created successfully",
                "Failed to create speaker",
                async move { repository.create(speaker).await },
            )
            .await
    }

    pub async fn update_speaker(&self, speaker: Speaker) -> bool {
        update_record(&self.state, Arc::clone(&self.repository), speaker).await
    }

    pub async fn delete_speaker(&self, speaker_id: &str) -> bool {
        let repository = Arc::clone(&self.repository);
        let speaker_id = speaker_id.to_string();
        self.state
            .run(
                "Speaker deleted successfully",
                "Failed to delete speaker",
                async move { repository.delete(&speaker_id).await },
            )
            .await
            .is_some()
    }

    /// Uploads a profile picture and stores its URL on the speaker.
    ///
    /// Progress is reported in ten steps before the upload is sent and is
    /// reset to absent once the upload finishes, whether or not the caller
    /// is still waiting for it.
    pub async fn upload_speaker_image(&self, speaker_id: &str, image_data: &[u8]) -> bool {
        let state = self.state.clone();
        let repository = Arc::clone(&self.repository);
        let step = self.progress_step;
        let speaker_id = speaker_id.to_string();
        let image_data = image_data.to_vec();

        self.state
            .detach(async move {
                let progress = state.begin_upload();
                report_upload_steps(&progress, step).await;

                let url = match repository.upload_image(&speaker_id, &image_data).await {
                    Ok(url) => url,
                    Err(e) => {
                        state.fail(format!("Failed to upload image: {}", e));
                        return false;
                    }
                };

                match repository.get_by_id(&speaker_id).await {
                    Some(mut speaker) => {
                        speaker.profile_image_url = Some(url);
                        if !update_record(&state, repository, speaker).await {
                            return false;
                        }
                    }
                    None => {
                        tracing::debug!(
                            "[SpeakerManagementPresenter] {} not stored, image URL discarded",
                            speaker_id
                        );
                    }
                }

                state.succeed("Speaker image uploaded successfully");
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
    repository: Arc<dyn SpeakerRepository>,
    speaker: Speaker,
) -> bool {
    state
        .run(
            "Speaker updated successfully",
            "Failed to update speaker",
            async move { repository.update(speaker).await },
        )
        .await
        .is_some()
}
