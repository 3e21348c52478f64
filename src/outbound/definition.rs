//! Opaque upstream definitions.
//!
//! The converter never interprets protocol settings. The only key it reads or
//! writes is `tag`; everything else is carried through in source key order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding an outbound's tag.
pub const TAG_KEY: &str = "tag";

/// An outbound definition copied verbatim from a subscription profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UpstreamDefinition(Map<String, Value>);

impl UpstreamDefinition {
    /// Build a fixed outbound from a tag and protocol.
    pub fn terminal(tag: &str, protocol: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(TAG_KEY.to_string(), Value::String(tag.to_string()));
        fields.insert("protocol".to_string(), Value::String(protocol.to_string()));
        Self(fields)
    }

    /// The `tag` field, if present and a string.
    pub fn tag(&self) -> Option<&str> {
        self.0.get(TAG_KEY).and_then(Value::as_str)
    }

    /// Shallow copy with `tag` replaced. Key position is kept when the tag already exists.
    pub fn with_tag(&self, tag: impl Into<String>) -> Self {
        let mut copy = self.0.clone();
        copy.insert(TAG_KEY.to_string(), Value::String(tag.into()));
        Self(copy)
    }

    /// Borrow the underlying fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
