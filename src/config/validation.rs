//! Configuration validation.
//!
//! # Responsibilities
//! - Check individual listener specs (non-fatal, caller drops the spec)
//! - Check fixed-value settings (fatal, all problems reported at once)
//!
//! # Design Decisions
//! - Returns all settings errors, not just the first
//! - Validation is a pure function over already-parsed values

use thiserror::Error;

use crate::config::schema::Settings;
use crate::listener::ListenerSpec;

/// Why a listener spec was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerIssue {
    #[error("missing protocol")]
    MissingProtocol,
    #[error("port {0} is not in 1..=65535")]
    InvalidPort(i64),
    #[error("missing tag")]
    MissingTag,
}

/// A single problem in the fixed-value settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check that a listener spec can become an inbound, returning its bind port.
pub fn validate_listener(spec: &ListenerSpec) -> Result<u16, ListenerIssue> {
    if spec.protocol.is_empty() {
        return Err(ListenerIssue::MissingProtocol);
    }
    let port = match u16::try_from(spec.port) {
        Ok(port) if port > 0 => port,
        _ => return Err(ListenerIssue::InvalidPort(spec.port)),
    };
    if spec.tag.is_empty() {
        return Err(ListenerIssue::MissingTag);
    }
    Ok(port)
}

/// Check the resolved settings before any input file is read.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.subscription_file.as_os_str().is_empty() {
        errors.push(ValidationError::new("subscription_file", "must not be empty"));
    }
    if settings.output_file.as_os_str().is_empty() {
        errors.push(ValidationError::new("output_file", "must not be empty"));
    }
    if settings.log.level.trim().is_empty() {
        errors.push(ValidationError::new("log.level", "must not be empty"));
    }
    if settings.api.listen.trim().is_empty() {
        errors.push(ValidationError::new("api.listen", "must not be empty"));
    }
    if settings.api.port == 0 {
        errors.push(ValidationError::new("api.port", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_checks_in_order() {
        assert_eq!(
            validate_listener(&ListenerSpec::new("", 0, "", "")),
            Err(ListenerIssue::MissingProtocol)
        );
        assert_eq!(
            validate_listener(&ListenerSpec::new("socks", -5, "in", "")),
            Err(ListenerIssue::InvalidPort(-5))
        );
        assert_eq!(
            validate_listener(&ListenerSpec::new("socks", 70_000, "in", "")),
            Err(ListenerIssue::InvalidPort(70_000))
        );
        assert_eq!(
            validate_listener(&ListenerSpec::new("socks", 1080, "", "")),
            Err(ListenerIssue::MissingTag)
        );
        assert_eq!(validate_listener(&ListenerSpec::new("socks", 65535, "in", "")), Ok(65535));
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(validate_settings(&Settings::default()), Ok(()));
    }

    #[test]
    fn test_settings_report_every_error() {
        let mut settings = Settings::default();
        settings.log.level = " ".into();
        settings.api.port = 0;

        let errors = validate_settings(&settings).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["log.level", "api.port"]);
    }
}
