//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section has a
//! default, so an empty (or missing) file yields a working configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConferenceConfig {
    pub latency: LatencySettings,
    pub storage: StorageSettings,
    pub validation: ValidationSettings,
    pub seed: SeedSettings,
    pub logging: LoggingSettings,
}

/// Repository operations that may carry simulated backend latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    UploadImage,
    Authenticate,
}

/// Simulated backend latency, in milliseconds per operation.
///
/// All zero by default; [`LatencySettings::simulated`] reproduces the timings
/// of a slow mobile network.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LatencySettings {
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub upload_ms: u64,
    pub auth_ms: u64,
    /// Delay between the ten upload progress ticks a presenter reports.
    pub upload_progress_step_ms: u64,
}

impl LatencySettings {
    /// No artificial delay anywhere.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn simulated() -> Self {
        Self {
            create_ms: 1000,
            update_ms: 800,
            delete_ms: 500,
            upload_ms: 2000,
            auth_ms: 500,
            upload_progress_step_ms: 100,
        }
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        let ms = match operation {
            Operation::Create => self.create_ms,
            Operation::Update => self.update_ms,
            Operation::Delete => self.delete_ms,
            Operation::UploadImage => self.upload_ms,
            Operation::Authenticate => self.auth_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn upload_progress_step(&self) -> Duration {
        Duration::from_millis(self.upload_progress_step_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSettings {
    /// Prefix of the URLs handed out by image uploads.
    pub image_base_url: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            image_base_url: "https://storage.googleapis.com/lyg-conference".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationSettings {
    /// When false, records are stored without checking their invariants.
    pub enabled: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SeedSettings {
    /// Populate repositories with the bundled sample conference at startup.
    pub sample_data: bool,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self { sample_data: true }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
