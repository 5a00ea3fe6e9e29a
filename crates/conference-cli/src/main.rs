use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

use app::AppBootstrap;
use app::bootstrap::BootstrapOptions;
use commands::config::ConfigAction;
use commands::events::EventsAction;
use commands::sessions::SessionsAction;
use commands::speakers::SpeakersAction;

#[derive(Parser)]
#[command(name = "lyg-conference")]
#[command(about = "LYG Conference - schedule, speakers and events from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the mock backend's network timings instead of the configured ones
    #[arg(long, global = true)]
    simulate_latency: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the session schedule
    Sessions {
        #[command(subcommand)]
        action: SessionsAction,
    },
    /// Browse speakers
    Speakers {
        #[command(subcommand)]
        action: SpeakersAction,
    },
    /// Browse conference events
    Events {
        #[command(subcommand)]
        action: EventsAction,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Run a scripted session exercising every presenter
    Demo,
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = BootstrapOptions {
        config_path: cli.config,
        simulate_latency: cli.simulate_latency,
    };

    let (config_service, config) = AppBootstrap::load_config(&options)?;
    init_logging(&config.logging.level);

    let bootstrap = AppBootstrap::initialize(config_service, config);
    let state = &bootstrap.app_state;

    match cli.command {
        Commands::Sessions { action } => commands::sessions::run(state, action, cli.json).await?,
        Commands::Speakers { action } => commands::speakers::run(state, action, cli.json).await?,
        Commands::Events { action } => commands::events::run(state, action, cli.json).await?,
        Commands::Config { action } => commands::config::run(
            &state.config,
            state.config_service.path(),
            action,
            cli.json,
        )?,
        Commands::Demo => commands::demo::run(state).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use conference_core::event::EventStatus;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "lyg-conference",
            "events",
            "list",
            "--status",
            "Active",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Events {
                action: EventsAction::List { status },
            } => assert_eq!(status, Some(EventStatus::Active)),
            _ => panic!("expected events list"),
        }
    }
}
