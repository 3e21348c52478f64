//! Input loading from disk and environment.
//!
//! Everything is read and parsed before conversion starts; the core never
//! performs I/O.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::Settings;
use crate::config::validation::ValidationError;
use crate::listener::ListenerSpec;
use crate::subscription::SubscriptionProfile;

/// Error type for configuration and input loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot parse settings file {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("cannot parse {what}: {source}")]
    Json {
        what: String,
        source: serde_json::Error,
    },

    #[error("invalid settings: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load settings from a TOML file. Validation happens after CLI overrides are applied.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = read(path)?;
    toml::from_str(&content).map_err(|source| ConfigError::Toml {
        path: path.display().to_string(),
        source,
    })
}

/// Load the subscription document: a JSON array of profile records.
pub fn load_subscription(path: &Path) -> Result<Vec<SubscriptionProfile>, ConfigError> {
    let content = read(path)?;
    let profiles: Vec<SubscriptionProfile> =
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            what: format!("subscription file {}", path.display()),
            source,
        })?;

    tracing::info!(path = %path.display(), profiles = profiles.len(), "Subscription loaded");
    Ok(profiles)
}

/// Parse the listener spec array.
pub fn parse_listener_specs(json: &str) -> Result<Vec<ListenerSpec>, ConfigError> {
    serde_json::from_str(json).map_err(|source| ConfigError::Json {
        what: "inbounds JSON".to_string(),
        source,
    })
}
