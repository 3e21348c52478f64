//! Requested listener records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::de::null_as_default;

/// A local listener requested by the operator.
///
/// Missing or `null` fields default to empty/zero so that incomplete records
/// are dropped by validation instead of failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,

    /// Label of the profile this listener forwards to. Empty means unrouted.
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub profile_label: String,

    /// Protocol settings passed through to the inbound unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
}

impl ListenerSpec {
    pub fn new(
        protocol: impl Into<String>,
        port: i64,
        tag: impl Into<String>,
        profile_label: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            port,
            tag: tag.into(),
            profile_label: profile_label.into(),
            settings: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_maps_to_profile_label() {
        let spec: ListenerSpec = serde_json::from_value(json!({
            "protocol": "socks", "port": 1080, "tag": "in-1", "name": "US"
        }))
        .unwrap();
        assert_eq!(spec, ListenerSpec::new("socks", 1080, "in-1", "US"));
    }

    #[test]
    fn test_incomplete_record_parses() {
        let spec: ListenerSpec = serde_json::from_value(json!({"tag": "in-1"})).unwrap();
        assert_eq!(spec.port, 0);
        assert!(spec.protocol.is_empty());
        assert!(spec.profile_label.is_empty());
    }

    #[test]
    fn test_null_fields_parse_as_empty() {
        let spec: ListenerSpec = serde_json::from_value(json!({
            "protocol": null, "port": null, "tag": null, "name": null
        }))
        .unwrap();
        assert_eq!(spec, ListenerSpec::default());
    }
}
