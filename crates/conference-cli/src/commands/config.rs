use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use conference_core::config::ConferenceConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the default configuration as a starting config.toml
    Default,
}

pub fn run(
    config: &ConferenceConfig,
    path: Option<&Path>,
    action: ConfigAction,
    json: bool,
) -> Result<()> {
    let (config, source) = match action {
        ConfigAction::Show => (config.clone(), path),
        ConfigAction::Default => (ConferenceConfig::default(), None),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if let Some(source) = source {
        println!("# {}", source.display());
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
