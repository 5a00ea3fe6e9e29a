use anyhow::{Result, bail};
use clap::Subcommand;

use conference_core::event::{ConferenceEvent, EventStatus};

use crate::app::AppState;
use crate::commands::output::{emit, or_dash};

#[derive(Subcommand)]
pub enum EventsAction {
    /// List events by start date
    List {
        /// Only events in this status (draft, active, completed, cancelled)
        #[arg(long)]
        status: Option<EventStatus>,
    },
    /// Show one event
    Show { id: String },
}

pub async fn run(state: &AppState, action: EventsAction, json: bool) -> Result<()> {
    match action {
        EventsAction::List { status } => {
            let events: Vec<ConferenceEvent> = state
                .event_repository
                .list()
                .current()
                .items
                .iter()
                .filter(|e| status.is_none_or(|s| e.status == s))
                .cloned()
                .collect();
            emit(json, &events, || events.iter().map(summary_line).collect())
        }
        EventsAction::Show { id } => {
            let Some(event) = state.event_repository.get_by_id(&id).await else {
                bail!("Event not found: {}", id);
            };
            let sessions = state.schedule_use_case.sessions_by_event(&id).await;
            emit(json, &event, || {
                let mut lines = vec![
                    format!("{} ({})", event.name, event.id),
                    format!("  status:   {}", event.status),
                    format!("  dates:    {} .. {}", event.start_date, event.end_date),
                    format!("  where:    {}", event.location),
                    format!(
                        "  capacity: {}/{} ({:.0}%)",
                        event.registered_attendees,
                        event.max_capacity,
                        event.occupancy() * 100.0
                    ),
                ];
                if let Some(deadline) = &event.registration_deadline {
                    lines.push(format!("  register by: {}", deadline));
                }
                if !event.tags.is_empty() {
                    lines.push(format!("  tags:     {}", event.tags.join(", ")));
                }
                if !event.description.is_empty() {
                    lines.push(format!("  {}", event.description));
                }
                if !sessions.is_empty() {
                    lines.push("  sessions:".to_string());
                    lines.extend(
                        sessions
                            .iter()
                            .map(|s| format!("    {}", crate::commands::sessions::summary_line(s))),
                    );
                }
                lines
            })
        }
    }
}

fn summary_line(event: &ConferenceEvent) -> String {
    format!(
        "{:<10} {} .. {}  {:<10} {}  @ {}",
        event.id,
        event.start_date,
        event.end_date,
        event.status.to_string(),
        event.name,
        or_dash(&event.location)
    )
}
