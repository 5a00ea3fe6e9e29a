use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

use conference_application::presenter::UPLOAD_PROGRESS_STEPS;
use conference_application::{
    AccountPresenter, EventDraft, EventManagementPresenter, GetScheduleUseCase, OperationResult,
    OperationState, ScheduleManagementPresenter, SchedulePresenter, SpeakerManagementPresenter,
};
use conference_core::config::LatencySettings;
use conference_core::event::{EventRepository, EventStatus};
use conference_core::session::{Session, SessionRepository};
use conference_core::speaker::{Speaker, SpeakerRepository};
use conference_core::user::UserRole;
use conference_infrastructure::{
    InMemoryEventRepository, InMemorySessionRepository, InMemorySpeakerRepository,
    InMemoryUserRepository, SimulatedImageStorage, StoreSettings,
};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 20, hour, minute, 0).unwrap()
}

fn settings_with(latency: LatencySettings) -> StoreSettings {
    StoreSettings {
        latency,
        ..StoreSettings::default()
    }
}

async fn loaded(state: &OperationState) {
    state.watch_loading().wait_for(|l| !l).await.unwrap();
}

fn session_repo(latency: LatencySettings) -> Arc<InMemorySessionRepository> {
    Arc::new(InMemorySessionRepository::new(
        vec![
            Session::new("S1", "Opening", at(9, 0), at(10, 0), "Main"),
            Session::new("S2", "Workshop", at(10, 30), at(12, 0), "Room A"),
        ],
        settings_with(latency),
    ))
}

#[tokio::test(start_paused = true)]
async fn create_session_walks_through_loading_and_result() {
    let latency = LatencySettings {
        create_ms: 1000,
        ..LatencySettings::none()
    };
    let presenter = Arc::new(ScheduleManagementPresenter::new(session_repo(latency)));
    loaded(presenter.state()).await;
    assert_eq!(presenter.sessions().len(), 2);

    let pending = {
        let presenter = Arc::clone(&presenter);
        tokio::spawn(async move {
            presenter
                .create_session(Session::new("S3", "Breakfast", at(8, 0), at(8, 30), "Lobby"))
                .await
        })
    };

    presenter
        .state()
        .watch_loading()
        .wait_for(|l| *l)
        .await
        .unwrap();
    assert!(presenter.state().is_loading());
    assert_eq!(presenter.state().error(), None);
    assert_eq!(presenter.state().operation_result(), None);

    let started = tokio::time::Instant::now();
    assert_eq!(pending.await.unwrap().as_deref(), Some("S3"));
    assert!(started.elapsed() >= Duration::from_millis(900));

    assert!(!presenter.state().is_loading());
    assert_eq!(
        presenter.state().operation_result(),
        Some(OperationResult::Success(
            "Session created successfully".to_string()
        ))
    );

    let mut sessions = presenter.watch_sessions();
    let snapshot = sessions
        .wait_for(|s| s.len() == 3)
        .await
        .unwrap()
        .clone();
    let ids: Vec<&str> = snapshot.items.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["S3", "S1", "S2"]);

    presenter.clear_operation_result();
    assert_eq!(presenter.state().operation_result(), None);
    assert!(!presenter.state().is_loading());
    assert_eq!(presenter.state().error(), None);
}

#[tokio::test(start_paused = true)]
async fn abandoned_create_still_lands() {
    let latency = LatencySettings {
        create_ms: 1000,
        ..LatencySettings::none()
    };
    let repo = session_repo(latency);
    let presenter = ScheduleManagementPresenter::new(repo.clone());
    loaded(presenter.state()).await;

    let abandoned = tokio::time::timeout(
        Duration::from_millis(200),
        presenter.create_session(Session::new("S3", "Breakfast", at(8, 0), at(8, 30), "Lobby")),
    )
    .await;
    assert!(abandoned.is_err());
    assert!(presenter.state().is_loading());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(repo.get_by_id("S3").await.is_some());
    assert!(!presenter.state().is_loading());
    assert_eq!(
        presenter.state().operation_result(),
        Some(OperationResult::Success(
            "Session created successfully".to_string()
        ))
    );
}

#[tokio::test(start_paused = true)]
async fn abandoned_upload_still_updates_record() {
    let repo = Arc::new(InMemorySpeakerRepository::new(
        vec![Speaker::new("speaker_1", "Sarah Johnson")],
        StoreSettings::default(),
        Arc::new(SimulatedImageStorage::new(
            "https://img.test",
            Duration::from_millis(500),
        )),
    ));
    let presenter = SpeakerManagementPresenter::new(repo.clone())
        .with_progress_step(Duration::from_millis(100));
    loaded(presenter.state()).await;

    let abandoned = tokio::time::timeout(
        Duration::from_millis(250),
        presenter.upload_speaker_image("speaker_1", b"jpeg"),
    )
    .await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(presenter.state().image_upload_progress(), None);
    assert_eq!(
        repo.get_by_id("speaker_1")
            .await
            .unwrap()
            .profile_image_url
            .as_deref(),
        Some("https://img.test/speakers/speaker_1.jpg")
    );
}

#[tokio::test]
async fn failed_update_sets_error_and_keeps_last_result() {
    let presenter = ScheduleManagementPresenter::new(session_repo(LatencySettings::none()));
    loaded(presenter.state()).await;

    assert!(presenter.delete_session("S2").await);
    assert!(
        !presenter
            .update_session(Session::new("S9", "Ghost", at(9, 0), at(10, 0), "Nowhere"))
            .await
    );

    assert_eq!(
        presenter.state().error().as_deref(),
        Some("Failed to update session: Session not found: S9")
    );
    assert_eq!(
        presenter.state().operation_result(),
        Some(OperationResult::Success(
            "Session deleted successfully".to_string()
        ))
    );

    presenter.clear_error();
    assert_eq!(presenter.state().error(), None);
}

#[tokio::test]
async fn two_presenters_share_one_repository() {
    let repo = session_repo(LatencySettings::none());
    let editor = ScheduleManagementPresenter::new(repo.clone());
    let viewer = SchedulePresenter::new(GetScheduleUseCase::new(repo.clone()));
    viewer.load_schedule();
    loaded(editor.state()).await;
    loaded(viewer.state()).await;

    editor
        .create_session(Session::new("S3", "Lunch", at(12, 0), at(13, 0), "Hall"))
        .await
        .unwrap();

    for mut rx in [editor.watch_sessions(), viewer.watch_sessions()] {
        rx.wait_for(|s| s.len() == 3).await.unwrap();
    }
    assert_eq!(editor.sessions(), viewer.sessions());
}

#[tokio::test]
async fn schedule_presenter_is_idle_until_loaded_and_reloads() {
    let repo = session_repo(LatencySettings::none());
    let presenter = SchedulePresenter::new(GetScheduleUseCase::new(repo.clone()));
    assert!(presenter.sessions().is_empty());
    assert!(!presenter.is_loading());

    presenter.load_schedule();
    loaded(presenter.state()).await;
    assert_eq!(presenter.sessions().len(), 2);
    assert_eq!(presenter.error(), None);

    repo.delete("S1").await.unwrap();
    presenter.load_schedule();
    let mut rx = presenter.watch_sessions();
    rx.wait_for(|s| s.len() == 1).await.unwrap();
    assert_eq!(presenter.sessions()[0].id, "S2");
}

#[tokio::test]
async fn schedule_use_case_filters() {
    let repo: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::with_sample_data(
        StoreSettings::default(),
    ));
    let use_case = GetScheduleUseCase::new(repo);

    assert_eq!(use_case.sessions_by_event("event_1").await.len(), 4);
    assert!(use_case.sessions_by_event("event_404").await.is_empty());
    assert_eq!(use_case.sessions_by_speaker("speaker_1").await.len(), 1);
    assert_eq!(use_case.all_sessions().current().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn speaker_image_upload_reports_progress_then_updates_record() {
    let repo = Arc::new(InMemorySpeakerRepository::new(
        vec![Speaker::new("speaker_1", "Sarah Johnson")],
        StoreSettings::default(),
        Arc::new(SimulatedImageStorage::new(
            "https://img.test",
            Duration::from_millis(500),
        )),
    ));
    let presenter = Arc::new(
        SpeakerManagementPresenter::new(repo.clone())
            .with_progress_step(Duration::from_millis(100)),
    );
    loaded(presenter.state()).await;

    let mut progress = presenter.state().watch_image_upload_progress();
    let observer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while progress.changed().await.is_ok() {
            let value = *progress.borrow_and_update();
            seen.push(value);
            if value.is_none() {
                break;
            }
        }
        seen
    });

    let started = tokio::time::Instant::now();
    assert!(presenter.upload_speaker_image("speaker_1", b"jpeg").await);
    assert!(started.elapsed() >= Duration::from_millis(1500));

    let seen = observer.await.unwrap();
    let expected: Vec<Option<f32>> = (1..=UPLOAD_PROGRESS_STEPS)
        .map(|i| Some(i as f32 / UPLOAD_PROGRESS_STEPS as f32))
        .chain(std::iter::once(None))
        .collect();
    assert_eq!(seen, expected);

    assert_eq!(presenter.state().image_upload_progress(), None);
    assert_eq!(
        presenter.state().operation_result().unwrap().message(),
        "Speaker image uploaded successfully"
    );
    let stored = repo.get_by_id("speaker_1").await.unwrap();
    assert_eq!(
        stored.profile_image_url.as_deref(),
        Some("https://img.test/speakers/speaker_1.jpg")
    );
}

#[tokio::test]
async fn empty_upload_fails_and_resets_progress() {
    let repo = Arc::new(InMemorySpeakerRepository::with_sample_data(
        StoreSettings::default(),
    ));
    let presenter = SpeakerManagementPresenter::new(repo);
    loaded(presenter.state()).await;

    assert!(!presenter.upload_speaker_image("speaker_1", &[]).await);
    assert!(
        presenter
            .state()
            .error()
            .unwrap()
            .starts_with("Failed to upload image: ")
    );
    assert_eq!(presenter.state().image_upload_progress(), None);
    assert_eq!(presenter.state().operation_result(), None);
}

#[tokio::test]
async fn create_event_assigns_id_and_validates() {
    let repo = Arc::new(InMemoryEventRepository::with_sample_data(
        StoreSettings::default(),
    ));
    let presenter = EventManagementPresenter::new(repo.clone());
    loaded(presenter.state()).await;

    let id = presenter
        .create_event(EventDraft {
            name: "Harvest Gathering".to_string(),
            start_date: "2024-11-01".to_string(),
            end_date: "2024-11-02".to_string(),
            location: "Fellowship Hall".to_string(),
            max_capacity: 80,
            status: EventStatus::Active,
            ..EventDraft::default()
        })
        .await
        .unwrap();
    assert!(id.starts_with("event_"));
    let stored = repo.get_by_id(&id).await.unwrap();
    assert_eq!(stored.status, EventStatus::Active);
    assert_eq!(
        presenter.state().operation_result().unwrap().message(),
        "Event created successfully"
    );

    let rejected = presenter
        .create_event(EventDraft {
            name: "Backwards".to_string(),
            start_date: "2024-11-02".to_string(),
            end_date: "2024-11-01".to_string(),
            location: "Nowhere".to_string(),
            max_capacity: 10,
            ..EventDraft::default()
        })
        .await;
    assert_eq!(rejected, None);
    assert!(
        presenter
            .state()
            .error()
            .unwrap()
            .starts_with("Failed to create event: Validation failed")
    );
}

#[tokio::test]
async fn event_image_upload_sets_image_url() {
    let repo = Arc::new(InMemoryEventRepository::with_sample_data(
        StoreSettings::default(),
    ));
    let presenter = EventManagementPresenter::new(repo.clone());
    loaded(presenter.state()).await;

    assert!(presenter.upload_event_image("event_2", b"png").await);
    let event = repo.get_by_id("event_2").await.unwrap();
    assert!(
        event
            .image_url
            .unwrap()
            .ends_with("/events/event_2.jpg")
    );
    assert_eq!(
        presenter.state().operation_result().unwrap().message(),
        "Event image uploaded successfully"
    );
}

#[tokio::test]
async fn account_sign_up_sign_in_and_profile() {
    let repo = Arc::new(InMemoryUserRepository::with_argon2(StoreSettings::default()));
    let presenter = AccountPresenter::new(repo.clone()).await;
    assert!(!presenter.is_signed_in());

    let id = presenter
        .sign_up("grace@lyg.org", "hunter2", "Grace", UserRole::Organizer)
        .await
        .unwrap();
    assert_eq!(presenter.current_user().unwrap().id, id);

    assert!(
        presenter
            .sign_up("Grace@LYG.org", "other", "Copy", UserRole::Attendee)
            .await
            .is_none()
    );
    assert_eq!(
        presenter.state().error().as_deref(),
        Some("Failed to create account: User already exists: grace@lyg.org")
    );

    assert!(presenter.sign_out().await);
    assert!(!presenter.is_signed_in());

    assert!(!presenter.sign_in("grace@lyg.org", "wrong").await);
    assert!(
        presenter
            .state()
            .error()
            .unwrap()
            .starts_with("Failed to sign in: Unauthorized")
    );

    assert!(presenter.sign_in("grace@lyg.org", "hunter2").await);
    let mut profile = presenter.current_user().unwrap();
    profile.organization = Some("LYG".to_string());
    assert!(presenter.update_profile(profile).await);
    assert_eq!(
        presenter.current_user().unwrap().organization.as_deref(),
        Some("LYG")
    );
    assert_eq!(
        presenter.state().operation_result().unwrap().message(),
        "Profile updated successfully"
    );
}

#[tokio::test]
async fn account_presenters_follow_shared_sign_out() {
    let repo = Arc::new(InMemoryUserRepository::with_argon2(StoreSettings::default()));
    let header = AccountPresenter::new(repo.clone()).await;
    let settings = AccountPresenter::new(repo.clone()).await;

    header
        .sign_up("ruth@lyg.org", "psalm23", "Ruth", UserRole::Attendee)
        .await
        .unwrap();
    settings.refresh().await;
    assert_eq!(settings.current_user(), header.current_user());

    assert!(settings.sign_out().await);
    assert!(!settings.is_signed_in());
    assert!(header.is_signed_in());

    header.refresh().await;
    assert!(!header.is_signed_in());

    assert!(settings.sign_in("ruth@lyg.org", "psalm23").await);
    assert!(!header.sign_in("ruth@lyg.org", "wrong").await);
    assert_eq!(header.current_user().unwrap().email, "ruth@lyg.org");
}
