//! Scripted walk through every presenter against the live repositories.

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use tokio::task::JoinHandle;

use conference_application::{
    AccountPresenter, EventDraft, EventManagementPresenter, OperationResult, OperationState,
    ScheduleManagementPresenter, SchedulePresenter, SpeakerManagementPresenter,
};
use conference_core::event::EventStatus;
use conference_core::id::new_entity_id;
use conference_core::session::Session;
use conference_core::speaker::Speaker;
use conference_core::user::UserRole;

use crate::app::AppState;
use crate::commands::sessions::summary_line;

pub async fn run(state: &AppState) -> Result<()> {
    let step = state.config.latency.upload_progress_step();

    println!("== Schedule management");
    let schedule = ScheduleManagementPresenter::new(state.session_repository.clone());
    wait_until_idle(schedule.state()).await;
    let printer = spawn_state_printer("sessions", schedule.state());

    let start = Utc
        .with_ymd_and_hms(2024, 7, 20, 19, 0, 0)
        .single()
        .context("invalid demo start time")?;
    let mut evening = Session::new(
        new_entity_id("session"),
        "Evening Prayer",
        start,
        start + chrono::Duration::hours(1),
        "Chapel",
    );
    evening.event_id = Some("event_1".to_string());
    evening.speaker_ids = vec!["speaker_3".to_string()];

    if let Some(id) = schedule.create_session(evening.clone()).await {
        evening.location = "Main Auditorium".to_string();
        schedule.update_session(evening).await;
        settle().await;
        for session in schedule.sessions().iter() {
            println!("    {}", summary_line(session));
        }
        schedule.delete_session(&id).await;
        // Second delete is expected to fail with not found.
        schedule.delete_session(&id).await;
        settle().await;
        schedule.clear_error();
    }
    schedule.clear_operation_result();
    printer.abort();

    println!("== Speaker management");
    let speakers =
        SpeakerManagementPresenter::new(state.speaker_repository.clone()).with_progress_step(step);
    wait_until_idle(speakers.state()).await;
    let printer = spawn_state_printer("speakers", speakers.state());

    let mut guest = Speaker::new(new_entity_id("speaker"), "Ruth Martinez");
    guest.title = "Missionary".to_string();
    guest.organization = "Harvest Outreach".to_string();
    if let Some(id) = speakers.create_speaker(guest).await {
        speakers.upload_speaker_image(&id, b"demo-jpeg").await;
        settle().await;
        if let Some(stored) = state.speaker_repository.get_by_id(&id).await {
            println!(
                "    {} photo: {}",
                stored.name,
                stored.profile_image_url.as_deref().unwrap_or("-")
            );
        }
    }
    printer.abort();

    println!("== Event management");
    let events =
        EventManagementPresenter::new(state.event_repository.clone()).with_progress_step(step);
    wait_until_idle(events.state()).await;
    let printer = spawn_state_printer("events", events.state());

    let draft = EventDraft {
        name: "Winter Youth Retreat".to_string(),
        description: "Three days of worship and fellowship in the mountains.".to_string(),
        start_date: "2025-01-10".to_string(),
        end_date: "2025-01-12".to_string(),
        location: "Pine Ridge Camp".to_string(),
        max_capacity: 120,
        tags: vec!["retreat".to_string(), "youth".to_string()],
        status: EventStatus::Draft,
        ..EventDraft::default()
    };
    if let Some(id) = events.create_event(draft).await {
        events.upload_event_image(&id, b"demo-png").await;
        events.delete_event(&id).await;
    }
    settle().await;
    printer.abort();

    println!("== Account");
    let account = AccountPresenter::new(state.user_repository.clone()).await;
    let printer = spawn_state_printer("account", account.state());

    account
        .sign_up("organizer@lyg.org", "shepherd", "Grace Kim", UserRole::Organizer)
        .await;
    account.sign_out().await;
    account.sign_in("organizer@lyg.org", "wrong password").await;
    account.sign_in("organizer@lyg.org", "shepherd").await;
    if let Some(mut profile) = account.current_user() {
        profile.organization = Some("LYG Ministries".to_string());
        profile.onboarding_complete = true;
        account.update_profile(profile).await;
    }
    settle().await;
    if let Some(user) = account.current_user() {
        println!("    signed in as {} <{}> ({})", user.name, user.email, user.role);
    }
    printer.abort();

    println!("== Attendee schedule");
    let attendee = SchedulePresenter::new(state.schedule_use_case.clone());
    attendee.load_schedule();
    wait_until_idle(attendee.state()).await;
    for session in attendee.sessions().iter() {
        println!("    {}", summary_line(session));
    }

    Ok(())
}

async fn wait_until_idle(state: &OperationState) {
    // Errors only once the presenter has been dropped.
    let _ = state.watch_loading().wait_for(|loading| !loading).await;
}

/// Lets printer tasks catch up before the next heading is written.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

fn spawn_state_printer(label: &'static str, state: &OperationState) -> JoinHandle<()> {
    let mut loading = state.watch_loading();
    let mut error = state.watch_error();
    let mut result = state.watch_operation_result();
    let mut progress = state.watch_image_upload_progress();

    tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = loading.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    println!("  [{}] loading: {}", label, *loading.borrow_and_update());
                }
                changed = error.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    if let Some(message) = error.borrow_and_update().as_deref() {
                        println!("  [{}] error: {}", label, message);
                    }
                }
                changed = result.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    match &*result.borrow_and_update() {
                        Some(OperationResult::Success(message)) => {
                            println!("  [{}] ok: {}", label, message)
                        }
                        Some(OperationResult::Error(message)) => {
                            println!("  [{}] failed: {}", label, message)
                        }
                        None => {}
                    }
                }
                changed = progress.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    if let Some(fraction) = *progress.borrow_and_update() {
                        println!("  [{}] upload {:>3.0}%", label, fraction * 100.0);
                    }
                }
            }
        }
    })
}
