//! Configuration schema definitions.
//!
//! Fixed values that shape the generated document but are not part of the
//! subscription or listener inputs. All fields have defaults, so an empty
//! settings file (or none at all) is valid.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Subscription document (JSON array of profiles).
    pub subscription_file: PathBuf,

    /// Where the generated Xray configuration is written.
    pub output_file: PathBuf,

    /// Listener specs as a JSON array.
    pub inbounds_json: String,

    /// Log block of the generated document.
    pub log: LogSettings,

    /// Control-plane (API) inbound.
    pub api: ApiSettings,

    /// Routing for listeners that end up without an upstream.
    pub unrouted: UnroutedPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            subscription_file: PathBuf::from("/opt/xraymulti/config/subscription.json"),
            output_file: PathBuf::from("/etc/xray/config.json"),
            inbounds_json: "[]".to_string(),
            log: LogSettings::default(),
            api: ApiSettings::default(),
            unrouted: UnroutedPolicy::default(),
        }
    }
}

/// Log block written into the generated document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Xray log level (debug, info, warning, error, none).
    pub level: String,

    pub error_path: String,

    pub access_path: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warning".to_string(),
            error_path: "/var/log/xraymulti/error.log".to_string(),
            access_path: "/var/log/xraymulti/access.log".to_string(),
        }
    }
}

/// Control-plane inbound address.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    pub listen: String,
    pub port: u16,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// How listeners without an extracted upstream are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnroutedPolicy {
    /// No rule; the listener falls through to Xray's default outbound handling.
    #[default]
    Fallthrough,
    /// Emit an explicit rule to the `reject` outbound.
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            output_file = "/tmp/xray.json"
            unrouted = "reject"

            [api]
            port = 10085
            "#,
        )
        .unwrap();

        assert_eq!(settings.output_file, PathBuf::from("/tmp/xray.json"));
        assert_eq!(settings.unrouted, UnroutedPolicy::Reject);
        assert_eq!(settings.api.port, 10085);
        assert_eq!(settings.api.listen, "127.0.0.1");
        assert_eq!(settings.log, LogSettings::default());
        assert_eq!(settings.inbounds_json, "[]");
    }
}
