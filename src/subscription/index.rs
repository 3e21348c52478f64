//! Label lookup over subscription profiles.

use std::collections::HashMap;

use crate::pipeline::ConvertError;
use crate::subscription::SubscriptionProfile;

/// Immutable label → profile lookup.
///
/// Built once per run. When two profiles share a label the later one wins;
/// unlabelled profiles are counted but never reachable.
#[derive(Debug)]
pub struct ProfileIndex<'a> {
    profiles: &'a [SubscriptionProfile],
    by_label: HashMap<&'a str, &'a SubscriptionProfile>,
}

impl<'a> ProfileIndex<'a> {
    /// Index every labelled profile.
    pub fn build(profiles: &'a [SubscriptionProfile]) -> Result<Self, ConvertError> {
        if profiles.is_empty() {
            return Err(ConvertError::NoProfiles);
        }

        let mut by_label = HashMap::with_capacity(profiles.len());
        for (position, profile) in profiles.iter().enumerate() {
            if profile.label.is_empty() {
                tracing::debug!(position, "Profile has no label, not indexed");
                continue;
            }
            if by_label.insert(profile.label.as_str(), profile).is_some() {
                tracing::debug!(label = %profile.label, position, "Duplicate label, later profile replaces earlier one");
            }
            tracing::info!(
                position,
                label = %profile.label,
                outbounds = profile.upstreams.len(),
                "Indexed profile"
            );
        }

        Ok(Self { profiles, by_label })
    }

    pub fn lookup(&self, label: &str) -> Option<&'a SubscriptionProfile> {
        self.by_label.get(label).copied()
    }

    /// Number of profiles read, labelled or not.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Number of distinct labels reachable by lookup.
    pub fn label_count(&self) -> usize {
        self.by_label.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::UpstreamDefinition;

    fn profile(label: &str, upstream_tag: &str) -> SubscriptionProfile {
        SubscriptionProfile::new(label, vec![UpstreamDefinition::terminal(upstream_tag, "vless")])
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = ProfileIndex::build(&[]).unwrap_err();
        assert!(matches!(err, ConvertError::NoProfiles));
    }

    #[test]
    fn test_lookup_by_label() {
        let profiles = vec![profile("US", "proxy"), profile("JP", "proxy")];
        let index = ProfileIndex::build(&profiles).unwrap();

        assert_eq!(index.lookup("JP").unwrap().label, "JP");
        assert!(index.lookup("DE").is_none());
        assert_eq!(index.label_count(), 2);
    }

    #[test]
    fn test_last_label_wins() {
        let profiles = vec![profile("US", "first"), profile("US", "second")];
        let index = ProfileIndex::build(&profiles).unwrap();

        let resolved = index.lookup("US").unwrap();
        assert_eq!(resolved.upstreams[0].tag(), Some("second"));
        assert_eq!(index.label_count(), 1);
        assert_eq!(index.profile_count(), 2);
    }

    #[test]
    fn test_unlabelled_profiles_are_counted_not_indexed() {
        let profiles = vec![profile("", "proxy"), profile("US", "proxy")];
        let index = ProfileIndex::build(&profiles).unwrap();

        assert!(index.lookup("").is_none());
        assert_eq!(index.profile_count(), 2);
        assert_eq!(index.label_count(), 1);
    }
}
