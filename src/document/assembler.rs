//! Document assembly.
//!
//! Pure composition: fixed blocks, one inbound per accepted listener,
//! extracted upstreams followed by the terminals, and the rule list as given.

use serde_json::{json, Map, Value};

use crate::config::{LogSettings, Settings};
use crate::document::schema::{
    ApiBlock, Inbound, LogBlock, PolicyBlock, RoutingBlock, XrayConfig,
};
use crate::document::{
    CONTROL_PLANE_OUTBOUND_TAG, CONTROL_PLANE_TAG, DIRECT_TAG, DOMAIN_STRATEGY, REJECT_TAG,
};
use crate::listener::ResolvedBinding;
use crate::outbound::{ExtractedUpstream, UpstreamDefinition};
use crate::routing::RoutingRule;

const CONTROL_PLANE_PROTOCOL: &str = "dokodemo-door";
const CONTROL_PLANE_TARGET: &str = "127.0.0.1";
const LISTENER_ADDRESS: &str = "0.0.0.0";
const API_SERVICES: [&str; 3] = ["HandlerService", "LoggerService", "StatsService"];

/// Fixed values the assembler needs from settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyOptions {
    pub api_listen: String,
    pub api_port: u16,
    pub log: LogSettings,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for AssemblyOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            api_listen: settings.api.listen.clone(),
            api_port: settings.api.port,
            log: settings.log.clone(),
        }
    }
}

/// Compose the final document.
pub fn assemble(
    options: &AssemblyOptions,
    bindings: &[ResolvedBinding<'_>],
    upstreams: Vec<ExtractedUpstream<'_>>,
    rules: Vec<RoutingRule>,
) -> XrayConfig {
    let mut inbounds = Vec::with_capacity(bindings.len() + 1);
    inbounds.push(control_plane_inbound(options));
    inbounds.extend(bindings.iter().map(listener_inbound));

    let mut outbounds: Vec<UpstreamDefinition> =
        upstreams.into_iter().map(|upstream| upstream.definition).collect();
    outbounds.push(UpstreamDefinition::terminal(DIRECT_TAG, "freedom"));
    outbounds.push(UpstreamDefinition::terminal(REJECT_TAG, "blackhole"));

    XrayConfig {
        log: LogBlock {
            error: options.log.error_path.clone(),
            access: options.log.access_path.clone(),
            loglevel: options.log.level.clone(),
        },
        api: Some(ApiBlock {
            tag: CONTROL_PLANE_OUTBOUND_TAG.to_string(),
            services: API_SERVICES.iter().map(ToString::to_string).collect(),
        }),
        stats: Some(Map::new()),
        policy: Some(stats_policy()),
        inbounds,
        outbounds,
        routing: RoutingBlock {
            domain_strategy: DOMAIN_STRATEGY.to_string(),
            rules,
        },
    }
}

fn control_plane_inbound(options: &AssemblyOptions) -> Inbound {
    let mut settings = Map::new();
    settings.insert("address".to_string(), Value::from(CONTROL_PLANE_TARGET));

    Inbound {
        tag: CONTROL_PLANE_TAG.to_string(),
        port: options.api_port,
        protocol: CONTROL_PLANE_PROTOCOL.to_string(),
        listen: options.api_listen.clone(),
        settings,
    }
}

fn listener_inbound(binding: &ResolvedBinding<'_>) -> Inbound {
    let spec = binding.listener;
    let mut settings = spec.settings.clone().unwrap_or_default();
    if spec.protocol == "socks" {
        settings.insert("auth".to_string(), Value::from("noauth"));
        settings.insert("udp".to_string(), Value::from(true));
    }

    Inbound {
        tag: spec.tag.clone(),
        port: binding.port,
        protocol: spec.protocol.clone(),
        listen: LISTENER_ADDRESS.to_string(),
        settings,
    }
}

/// Per-user and per-inbound/outbound traffic counters for the stats service.
fn stats_policy() -> PolicyBlock {
    let levels = json!({
        "0": {
            "statsUserUplink": true,
            "statsUserDownlink": true
        }
    });
    let system = json!({
        "statsInboundUplink": true,
        "statsInboundDownlink": true,
        "statsOutboundUplink": true,
        "statsOutboundDownlink": true
    });

    PolicyBlock {
        levels: into_map(levels),
        system: into_map(system),
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
