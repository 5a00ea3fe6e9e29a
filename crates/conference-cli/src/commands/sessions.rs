use anyhow::{Result, bail};
use clap::Subcommand;

use conference_core::session::Session;

use crate::app::AppState;
use crate::commands::output::{emit, or_dash};

#[derive(Subcommand)]
pub enum SessionsAction {
    /// List sessions in schedule order
    List {
        /// Only sessions of this event
        #[arg(long)]
        event: Option<String>,
        /// Only sessions presented by this speaker
        #[arg(long)]
        speaker: Option<String>,
    },
    /// Show one session
    Show { id: String },
}

pub async fn run(state: &AppState, action: SessionsAction, json: bool) -> Result<()> {
    match action {
        SessionsAction::List { event, speaker } => {
            let sessions = list(state, event.as_deref(), speaker.as_deref()).await;
            emit(json, &sessions, || sessions.iter().map(summary_line).collect())
        }
        SessionsAction::Show { id } => {
            let Some(session) = state.session_repository.get_by_id(&id).await else {
                bail!("Session not found: {}", id);
            };
            emit(json, &session, || detail_lines(&session))
        }
    }
}

async fn list(state: &AppState, event: Option<&str>, speaker: Option<&str>) -> Vec<Session> {
    let use_case = &state.schedule_use_case;
    match (event, speaker) {
        (Some(event), Some(speaker)) => use_case
            .sessions_by_event(event)
            .await
            .into_iter()
            .filter(|s| s.has_speaker(speaker))
            .collect(),
        (Some(event), None) => use_case.sessions_by_event(event).await,
        (None, Some(speaker)) => use_case.sessions_by_speaker(speaker).await,
        (None, None) => use_case.all_sessions().current().items.as_ref().clone(),
    }
}

pub fn summary_line(session: &Session) -> String {
    format!(
        "{:<12} {} {}-{}  {}  @ {}",
        session.id,
        session.start_time.format("%Y-%m-%d"),
        session.start_time.format("%H:%M"),
        session.end_time.format("%H:%M"),
        session.title,
        session.location
    )
}

fn detail_lines(session: &Session) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", session.title, session.id),
        format!(
            "  when:     {} - {}",
            session.start_time.format("%Y-%m-%d %H:%M"),
            session.end_time.format("%H:%M")
        ),
        format!("  where:    {}", session.location),
        format!("  event:    {}", session.event_id.as_deref().unwrap_or("-")),
        format!("  speakers: {}", or_dash(&session.speaker_ids.join(", "))),
    ];
    if let Some(capacity) = session.capacity {
        lines.push(format!(
            "  seats:    {}/{} registered",
            session.registered_count, capacity
        ));
    }
    if !session.tags.is_empty() {
        lines.push(format!("  tags:     {}", session.tags.join(", ")));
    }
    if !session.description.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", session.description));
    }
    lines
}
