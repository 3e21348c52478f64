//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{json, Value};
use xray_multi::listener::ListenerSpec;
use xray_multi::subscription::SubscriptionProfile;

/// A profile shaped like a real subscription entry: a `proxy` outbound plus the
/// usual `direct`/`block` companions.
pub fn profile(label: &str, address: &str) -> SubscriptionProfile {
    serde_json::from_value(profile_json(label, address)).unwrap()
}

pub fn profile_json(label: &str, address: &str) -> Value {
    json!({
        "remarks": label,
        "inbounds": [{"port": 10808, "protocol": "socks", "listen": "127.0.0.1"}],
        "outbounds": [
            {
                "tag": "proxy",
                "protocol": "vless",
                "settings": {
                    "vnext": [{"address": address, "port": 443, "users": [{"id": "00000000-0000-0000-0000-000000000000"}]}]
                },
                "streamSettings": {"network": "tcp", "security": "reality"}
            },
            {"tag": "direct", "protocol": "freedom"},
            {"tag": "block", "protocol": "blackhole"}
        ],
        "routing": {"domainStrategy": "IPIfNonMatch", "rules": []}
    })
}

pub fn socks(port: i64, tag: &str, label: &str) -> ListenerSpec {
    ListenerSpec::new("socks", port, tag, label)
}

/// Fresh scratch directory under the OS temp dir, unique per test.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("xray-multi-{}-{}", test, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
