use anyhow::{Result, bail};
use clap::Subcommand;

use conference_core::speaker::Speaker;

use crate::app::AppState;
use crate::commands::output::{emit, or_dash};

#[derive(Subcommand)]
pub enum SpeakersAction {
    /// List speakers by name
    List,
    /// Show one speaker and the sessions they present
    Show { id: String },
}

pub async fn run(state: &AppState, action: SpeakersAction, json: bool) -> Result<()> {
    match action {
        SpeakersAction::List => {
            let speakers = state.speaker_repository.list().current();
            emit(json, speakers.items.as_ref(), || {
                speakers.items.iter().map(summary_line).collect()
            })
        }
        SpeakersAction::Show { id } => {
            let Some(speaker) = state.speaker_repository.get_by_id(&id).await else {
                bail!("Speaker not found: {}", id);
            };
            let sessions = state.schedule_use_case.sessions_by_speaker(&id).await;
            emit(json, &speaker, || {
                let mut lines = vec![
                    format!("{} ({})", speaker.name, speaker.id),
                    format!("  title:        {}", or_dash(&speaker.title)),
                    format!("  organization: {}", or_dash(&speaker.organization)),
                    format!("  email:        {}", or_dash(&speaker.email)),
                    format!("  expertise:    {}", or_dash(&speaker.expertise.join(", "))),
                ];
                if let Some(url) = &speaker.profile_image_url {
                    lines.push(format!("  photo:        {}", url));
                }
                for (network, handle) in &speaker.social_links {
                    lines.push(format!("  {:<13} {}", format!("{}:", network), handle));
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

fn summary_line(speaker: &Speaker) -> String {
    format!(
        "{:<12} {:<22} {}",
        speaker.id,
        speaker.name,
        or_dash(&speaker.organization)
    )
}
