//! Listener → profile resolution.
//!
//! # Responsibilities
//! - Drop invalid listener specs (one diagnostic each)
//! - Reject tags that collide with the control plane or with each other
//! - Resolve each listener's profile label through the [`ProfileIndex`]
//!
//! Unresolved listeners are kept: they still get an inbound.

use std::collections::HashSet;

use crate::config::validation::validate_listener;
use crate::document::CONTROL_PLANE_TAG;
use crate::listener::ListenerSpec;
use crate::pipeline::{ConvertError, Diagnostic, Diagnostics};
use crate::subscription::{ProfileIndex, SubscriptionProfile};

/// A valid listener paired with the profile it names, if any.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedBinding<'a> {
    pub listener: &'a ListenerSpec,
    /// Bind port, range-checked during validation.
    pub port: u16,
    pub profile: Option<&'a SubscriptionProfile>,
}

impl<'a> ResolvedBinding<'a> {
    pub fn listener_tag(&self) -> &'a str {
        &self.listener.tag
    }
}

/// Resolve listeners in input order.
pub fn resolve_listeners<'a>(
    specs: &'a [ListenerSpec],
    index: &ProfileIndex<'a>,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ResolvedBinding<'a>>, ConvertError> {
    let mut bindings = Vec::with_capacity(specs.len());
    let mut seen_tags = HashSet::new();

    for (position, spec) in specs.iter().enumerate() {
        let port = match validate_listener(spec) {
            Ok(port) => port,
            Err(issue) => {
                diagnostics.record(Diagnostic::InvalidListener {
                    position,
                    tag: spec.tag.clone(),
                    issue,
                });
                continue;
            }
        };

        if spec.tag == CONTROL_PLANE_TAG {
            return Err(ConvertError::ReservedTag(spec.tag.clone()));
        }
        if !seen_tags.insert(spec.tag.as_str()) {
            return Err(ConvertError::DuplicateListenerTag(spec.tag.clone()));
        }

        let profile = if spec.profile_label.is_empty() {
            tracing::info!(listener = %spec.tag, "Listener names no profile");
            None
        } else {
            match index.lookup(&spec.profile_label) {
                Some(profile) => {
                    tracing::info!(
                        listener = %spec.tag,
                        protocol = %spec.protocol,
                        port,
                        profile = %spec.profile_label,
                        "Listener resolved"
                    );
                    Some(profile)
                }
                None => {
                    diagnostics.record(Diagnostic::UnknownProfile {
                        listener: spec.tag.clone(),
                        label: spec.profile_label.clone(),
                    });
                    None
                }
            }
        };

        bindings.push(ResolvedBinding {
            listener: spec,
            port,
            profile,
        });
    }

    if bindings.is_empty() {
        return Err(ConvertError::NoValidListeners);
    }

    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ListenerIssue;
    use crate::outbound::UpstreamDefinition;

    fn profiles() -> Vec<SubscriptionProfile> {
        vec![SubscriptionProfile::new(
            "US",
            vec![UpstreamDefinition::terminal("proxy", "vless")],
        )]
    }

    #[test]
    fn test_resolves_known_label() {
        let profiles = profiles();
        let index = ProfileIndex::build(&profiles).unwrap();
        let specs = vec![ListenerSpec::new("socks", 1080, "in-1", "US")];
        let mut diagnostics = Diagnostics::default();

        let bindings = resolve_listeners(&specs, &index, &mut diagnostics).unwrap();

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].listener_tag(), "in-1");
        assert_eq!(bindings[0].profile.unwrap().label, "US");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_and_empty_labels_keep_listener() {
        let profiles = profiles();
        let index = ProfileIndex::build(&profiles).unwrap();
        let specs = vec![
            ListenerSpec::new("socks", 1080, "in-1", "DE"),
            ListenerSpec::new("http", 8118, "in-2", ""),
        ];
        let mut diagnostics = Diagnostics::default();

        let bindings = resolve_listeners(&specs, &index, &mut diagnostics).unwrap();

        assert_eq!(bindings.len(), 2);
        assert!(bindings.iter().all(|b| b.profile.is_none()));
        // Only the unknown label is diagnosed.
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics.entries()[0],
            Diagnostic::UnknownProfile { listener, label } if listener == "in-1" && label == "DE"
        ));
    }

    #[test]
    fn test_invalid_specs_dropped() {
        let profiles = profiles();
        let index = ProfileIndex::build(&profiles).unwrap();
        let specs = vec![
            ListenerSpec::new("", 1080, "no-protocol", "US"),
            ListenerSpec::new("socks", 0, "no-port", "US"),
            ListenerSpec::new("socks", 1081, "", "US"),
            ListenerSpec::new("socks", 1082, "ok", "US"),
        ];
        let mut diagnostics = Diagnostics::default();

        let bindings = resolve_listeners(&specs, &index, &mut diagnostics).unwrap();

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].listener_tag(), "ok");
        assert_eq!(diagnostics.len(), 3);
        assert!(matches!(
            &diagnostics.entries()[1],
            Diagnostic::InvalidListener { position: 1, issue: ListenerIssue::InvalidPort(0), .. }
        ));
    }

    #[test]
    fn test_no_valid_listeners_is_fatal() {
        let profiles = profiles();
        let index = ProfileIndex::build(&profiles).unwrap();
        let specs = vec![ListenerSpec::new("socks", -1, "in-1", "US")];
        let mut diagnostics = Diagnostics::default();

        let err = resolve_listeners(&specs, &index, &mut diagnostics).unwrap_err();
        assert!(matches!(err, ConvertError::NoValidListeners));

        let err = resolve_listeners(&[], &index, &mut diagnostics).unwrap_err();
        assert!(matches!(err, ConvertError::NoValidListeners));
    }

    #[test]
    fn test_tag_collisions_are_fatal() {
        let profiles = profiles();
        let index = ProfileIndex::build(&profiles).unwrap();
        let mut diagnostics = Diagnostics::default();

        let reserved = vec![ListenerSpec::new("socks", 1080, CONTROL_PLANE_TAG, "US")];
        let err = resolve_listeners(&reserved, &index, &mut diagnostics).unwrap_err();
        assert!(matches!(err, ConvertError::ReservedTag(tag) if tag == "api"));

        let duplicated = vec![
            ListenerSpec::new("socks", 1080, "in-1", "US"),
            ListenerSpec::new("http", 8118, "in-1", "US"),
        ];
        let err = resolve_listeners(&duplicated, &index, &mut diagnostics).unwrap_err();
        assert!(matches!(err, ConvertError::DuplicateListenerTag(tag) if tag == "in-1"));
    }
}
