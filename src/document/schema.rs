//! Xray configuration document.
//!
//! Field names and key order match what Xray reads; do not rename.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::outbound::UpstreamDefinition;
use crate::routing::RoutingRule;

/// Complete generated configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct XrayConfig {
    pub log: LogBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyBlock>,
    pub inbounds: Vec<Inbound>,
    pub outbounds: Vec<UpstreamDefinition>,
    pub routing: RoutingBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogBlock {
    pub error: String,
    pub access: String,
    pub loglevel: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiBlock {
    pub tag: String,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PolicyBlock {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub levels: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub system: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Inbound {
    pub tag: String,
    pub port: u16,
    pub protocol: String,
    pub listen: String,
    pub settings: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoutingBlock {
    #[serde(rename = "domainStrategy")]
    pub domain_strategy: String,
    pub rules: Vec<RoutingRule>,
}

impl XrayConfig {
    pub fn inbound_tags(&self) -> impl Iterator<Item = &str> {
        self.inbounds.iter().map(|inbound| inbound.tag.as_str())
    }

    pub fn outbound_tags(&self) -> impl Iterator<Item = Option<&str>> {
        self.outbounds.iter().map(UpstreamDefinition::tag)
    }
}
