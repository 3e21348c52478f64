//! Subscription profile records.

use serde::{Deserialize, Serialize};

use crate::config::de::null_as_default;
use crate::outbound::UpstreamDefinition;

/// One named bundle of proxy fragments from the subscription source.
///
/// Only `remarks` and `outbounds` are read; inbound, routing and DNS fragments
/// that subscriptions usually carry are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubscriptionProfile {
    /// Human-readable label used for lookup. Empty labels are not indexed.
    #[serde(rename = "remarks", default, deserialize_with = "null_as_default")]
    pub label: String,

    /// Outbound definitions in subscription order.
    #[serde(rename = "outbounds", default, deserialize_with = "null_as_default")]
    pub upstreams: Vec<UpstreamDefinition>,
}

impl SubscriptionProfile {
    pub fn new(label: impl Into<String>, upstreams: Vec<UpstreamDefinition>) -> Self {
        Self {
            label: label.into(),
            upstreams,
        }
    }
}
