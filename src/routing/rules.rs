//! Routing rule synthesis.
//!
//! # Responsibilities
//! - Put the control-plane rule first, always
//! - Bind each listener to the upstream extracted for it, in extraction order
//! - Optionally send unrouted listeners to `reject`, after all upstream rules

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::UnroutedPolicy;
use crate::document::{CONTROL_PLANE_OUTBOUND_TAG, CONTROL_PLANE_TAG, REJECT_TAG};
use crate::listener::ResolvedBinding;
use crate::outbound::ExtractedUpstream;

/// Xray rule type for inbound-tag matching.
pub const FIELD_RULE: &str = "field";

/// One `field` rule routing a single inbound tag to an outbound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoutingRule {
    #[serde(rename = "type")]
    pub match_type: String,
    #[serde(rename = "inboundTag")]
    pub inbound_tags: Vec<String>,
    #[serde(rename = "outboundTag")]
    pub outbound_tag: String,
}

impl RoutingRule {
    pub fn field(inbound_tag: impl Into<String>, outbound_tag: impl Into<String>) -> Self {
        Self {
            match_type: FIELD_RULE.to_string(),
            inbound_tags: vec![inbound_tag.into()],
            outbound_tag: outbound_tag.into(),
        }
    }
}

/// Build the ordered rule list.
pub fn synthesize_rules(
    bindings: &[ResolvedBinding<'_>],
    upstreams: &[ExtractedUpstream<'_>],
    unrouted: UnroutedPolicy,
) -> Vec<RoutingRule> {
    let mut rules = Vec::with_capacity(bindings.len() + 1);
    rules.push(RoutingRule::field(CONTROL_PLANE_TAG, CONTROL_PLANE_OUTBOUND_TAG));
    tracing::debug!(inbound = CONTROL_PLANE_TAG, outbound = CONTROL_PLANE_OUTBOUND_TAG, "Routing rule");

    for upstream in upstreams {
        tracing::debug!(inbound = upstream.listener_tag, outbound = %upstream.assigned_id, "Routing rule");
        rules.push(RoutingRule::field(upstream.listener_tag, upstream.assigned_id.as_str()));
    }

    let routed: HashSet<&str> = upstreams.iter().map(|u| u.listener_tag).collect();
    for binding in bindings.iter().filter(|b| !routed.contains(b.listener_tag())) {
        match unrouted {
            UnroutedPolicy::Fallthrough => {
                tracing::warn!(listener = %binding.listener_tag(), "Listener has no upstream and no routing rule");
            }
            UnroutedPolicy::Reject => {
                tracing::warn!(listener = %binding.listener_tag(), outbound = REJECT_TAG, "Listener has no upstream, routing to reject");
                rules.push(RoutingRule::field(binding.listener_tag(), REJECT_TAG));
            }
        }
    }

    rules
}
