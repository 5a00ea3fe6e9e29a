use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use conference_application::GetScheduleUseCase;
use conference_core::config::{ConferenceConfig, LatencySettings};
use conference_core::media::ImageStorage;
use conference_infrastructure::{
    ConfigService, InMemoryEventRepository, InMemorySessionRepository, InMemorySpeakerRepository,
    InMemoryUserRepository, SimulatedImageStorage, StoreSettings,
    sample_data::{sample_events, sample_sessions, sample_speakers},
};

use crate::app::AppState;

/// Options taken from the command line that shape the composition root.
#[derive(Debug, Default)]
pub struct BootstrapOptions {
    pub config_path: Option<PathBuf>,
    pub simulate_latency: bool,
}

pub struct AppBootstrap {
    pub app_state: AppState,
}

impl AppBootstrap {
    /// Loads configuration without constructing any repository.
    pub fn load_config(
        options: &BootstrapOptions,
    ) -> Result<(Arc<ConfigService>, ConferenceConfig)> {
        let config_service = Arc::new(match &options.config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(),
        });

        // An explicitly named file must parse; the default location falls
        // back to defaults.
        let mut config = if options.config_path.is_some() {
            config_service.load().with_context(|| {
                format!(
                    "Failed to load config from {}",
                    config_service
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                )
            })?
        } else {
            config_service.get_config()
        };

        if options.simulate_latency {
            config.latency = LatencySettings::simulated();
        }
        Ok((config_service, config))
    }

    /// Builds every repository once for the lifetime of the process.
    pub fn initialize(config_service: Arc<ConfigService>, config: ConferenceConfig) -> Self {
        let settings = StoreSettings::from_config(&config);
        let seeded = config.seed.sample_data;

        tracing::info!(
            "[Bootstrap] sample data: {}, validation: {}, create latency: {}ms",
            seeded,
            settings.validate,
            config.latency.create_ms
        );

        let images: Arc<dyn ImageStorage> = Arc::new(SimulatedImageStorage::from_config(&config));

        let session_repository = Arc::new(InMemorySessionRepository::new(
            if seeded { sample_sessions() } else { Vec::new() },
            settings.clone(),
        ));
        let speaker_repository = Arc::new(InMemorySpeakerRepository::new(
            if seeded { sample_speakers() } else { Vec::new() },
            settings.clone(),
            Arc::clone(&images),
        ));
        let event_repository = Arc::new(InMemoryEventRepository::new(
            if seeded { sample_events() } else { Vec::new() },
            settings.clone(),
            images,
        ));
        let user_repository = Arc::new(InMemoryUserRepository::with_argon2(settings));

        let schedule_use_case = GetScheduleUseCase::new(session_repository.clone());

        tracing::info!("[Bootstrap] repositories ready");

        Self {
            app_state: AppState {
                config,
                config_service,
                session_repository,
                speaker_repository,
                event_repository,
                user_repository,
                schedule_use_case,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_core::config::SeedSettings;

    #[tokio::test]
    async fn test_initialize_seeds_sample_data() {
        let bootstrap =
            AppBootstrap::initialize(Arc::new(ConfigService::new()), ConferenceConfig::default());
        let state = &bootstrap.app_state;

        assert_eq!(state.session_repository.list().current().len(), 4);
        assert_eq!(state.speaker_repository.list().current().len(), 5);
        assert_eq!(state.event_repository.list().current().len(), 5);
        assert!(state.user_repository.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_initialize_without_seed() {
        let config = ConferenceConfig {
            seed: SeedSettings { sample_data: false },
            ..ConferenceConfig::default()
        };
        let bootstrap = AppBootstrap::initialize(Arc::new(ConfigService::new()), config);
        assert!(bootstrap.app_state.session_repository.list().current().is_empty());
    }

    #[test]
    fn test_simulate_latency_overrides_config() {
        let options = BootstrapOptions {
            config_path: None,
            simulate_latency: true,
        };
        let (_, config) = AppBootstrap::load_config(&options).unwrap();
        assert_eq!(config.latency, LatencySettings::simulated());
    }

    #[test]
    fn test_explicit_missing_config_uses_defaults() {
        let options = BootstrapOptions {
            config_path: Some(std::env::temp_dir().join("lyg-conference-missing.toml")),
            simulate_latency: false,
        };
        let (_, config) = AppBootstrap::load_config(&options).unwrap();
        assert!(config.validation.enabled);
    }
}
