use std::sync::Arc;

use conference_application::GetScheduleUseCase;
use conference_core::config::ConferenceConfig;
use conference_core::repository::{
    EventRepository, SessionRepository, SpeakerRepository, UserRepository,
};
use conference_infrastructure::ConfigService;

/// Process-wide repositories and services shared by every command.
pub struct AppState {
    pub config: ConferenceConfig,
    pub config_service: Arc<ConfigService>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub speaker_repository: Arc<dyn SpeakerRepository>,
    pub event_repository: Arc<dyn EventRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub schedule_use_case: GetScheduleUseCase,
}
