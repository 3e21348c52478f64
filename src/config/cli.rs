//! Command-line and environment overrides.
//!
//! Precedence: flag, then environment variable, then settings file, then
//! built-in default. Flags are optional so that an unset flag leaves the
//! settings-file value in place.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::{Settings, UnroutedPolicy};

#[derive(Debug, Parser)]
#[command(name = "xray-multi")]
#[command(about = "Build one Xray configuration that fans local listeners out to subscription profiles", long_about = None)]
pub struct Cli {
    /// TOML settings file with defaults for the options below
    #[arg(long, env = "XRAY_MULTI_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Subscription file (JSON array of profiles)
    #[arg(long, env = "SUBSCRIPTION_FILE", value_name = "FILE")]
    pub subscription: Option<PathBuf>,

    /// Output path for the generated Xray configuration
    #[arg(long, env = "XRAY_CONFIG_FILE", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Xray log level written into the generated configuration
    #[arg(long, env = "XRAY_LOG_LEVEL")]
    pub loglevel: Option<String>,

    /// Listener specs as a JSON array of {protocol, port, tag, name}
    #[arg(long, env = "INBOUNDS_JSON", value_name = "JSON")]
    pub inbounds: Option<String>,

    /// Listen address of the API inbound
    #[arg(long, env = "API_LISTEN")]
    pub api_listen: Option<String>,

    /// Port of the API inbound
    #[arg(long, env = "API_PORT")]
    pub api_port: Option<u16>,

    /// Xray error log path
    #[arg(long, env = "XRAY_ERROR_LOG", value_name = "FILE")]
    pub error_log: Option<String>,

    /// Xray access log path
    #[arg(long, env = "XRAY_ACCESS_LOG", value_name = "FILE")]
    pub access_log: Option<String>,

    /// Routing for listeners whose profile yields no upstream
    #[arg(long, env = "UNROUTED_POLICY", value_enum)]
    pub unrouted: Option<UnroutedPolicy>,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Apply every flag or environment value that was given on top of `base`.
    pub fn apply(&self, mut base: Settings) -> Settings {
        if let Some(path) = &self.subscription {
            base.subscription_file = path.clone();
        }
        if let Some(path) = &self.config {
            base.output_file = path.clone();
        }
        if let Some(level) = &self.loglevel {
            base.log.level = level.clone();
        }
        if let Some(json) = &self.inbounds {
            base.inbounds_json = json.clone();
        }
        if let Some(listen) = &self.api_listen {
            base.api.listen = listen.clone();
        }
        if let Some(port) = self.api_port {
            base.api.port = port;
        }
        if let Some(path) = &self.error_log {
            base.log.error_path = path.clone();
        }
        if let Some(path) = &self.access_log {
            base.log.access_path = path.clone();
        }
        if let Some(policy) = self.unrouted {
            base.unrouted = policy;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_base() {
        let cli = Cli::try_parse_from([
            "xray-multi",
            "--config",
            "/tmp/out.json",
            "--api-port",
            "10085",
            "--unrouted",
            "reject",
        ])
        .unwrap();

        let settings = cli.apply(Settings::default());

        assert_eq!(settings.output_file, PathBuf::from("/tmp/out.json"));
        assert_eq!(settings.api.port, 10085);
        assert_eq!(settings.unrouted, UnroutedPolicy::Reject);
        assert_eq!(settings.log.level, "warning");
    }

    #[test]
    fn test_unset_flags_keep_base() {
        let cli = Cli::try_parse_from(["xray-multi", "--dry-run"]).unwrap();
        let mut base = Settings::default();
        base.log.level = "debug".into();

        let settings = cli.apply(base.clone());

        assert!(cli.dry_run);
        assert_eq!(settings.log.level, base.log.level);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["xray-multi", "--api-port", "eighty"]).is_err());
    }
}
