//! Primary-upstream extraction.
//!
//! # Responsibilities
//! - Pick the first `proxy`-tagged outbound of each resolved profile
//! - Retag the copy with a run-unique `outbound_<n>` identifier
//! - Keep extraction order equal to binding order
//!
//! Identifiers come from an [`OutboundIdAllocator`] owned by the caller, so
//! numbering restarts with every run and never repeats within one.

use crate::listener::ResolvedBinding;
use crate::outbound::UpstreamDefinition;
use crate::pipeline::{ConvertError, Diagnostic, Diagnostics};

/// Tag marking a profile's primary upstream.
pub const PRIMARY_UPSTREAM_TAG: &str = "proxy";

/// Prefix of assigned outbound identifiers.
pub const ASSIGNED_ID_PREFIX: &str = "outbound_";

/// Monotonic identifier source for one run.
#[derive(Debug, Default)]
pub struct OutboundIdAllocator {
    next: usize,
}

impl OutboundIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next identifier. Never returns the same value twice.
    pub fn allocate(&mut self) -> String {
        let id = format!("{ASSIGNED_ID_PREFIX}{}", self.next);
        self.next += 1;
        id
    }
}

/// A retagged copy of a profile's primary upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedUpstream<'a> {
    pub assigned_id: String,
    pub source_label: &'a str,
    /// Listener whose binding produced this upstream.
    pub listener_tag: &'a str,
    pub definition: UpstreamDefinition,
}

/// Extract one upstream per binding whose profile has a primary upstream.
pub fn extract_upstreams<'a>(
    bindings: &[ResolvedBinding<'a>],
    ids: &mut OutboundIdAllocator,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<ExtractedUpstream<'a>>, ConvertError> {
    let mut extracted = Vec::with_capacity(bindings.len());

    for binding in bindings {
        let Some(profile) = binding.profile else {
            continue;
        };

        let primary = profile
            .upstreams
            .iter()
            .find(|upstream| upstream.tag() == Some(PRIMARY_UPSTREAM_TAG));

        let Some(primary) = primary else {
            diagnostics.record(Diagnostic::MissingPrimaryUpstream {
                listener: binding.listener_tag().to_string(),
                label: profile.label.clone(),
            });
            continue;
        };

        let assigned_id = ids.allocate();
        tracing::info!(
            listener = %binding.listener_tag(),
            profile = %profile.label,
            outbound = %assigned_id,
            "Extracted upstream"
        );

        extracted.push(ExtractedUpstream {
            definition: primary.with_tag(assigned_id.as_str()),
            assigned_id,
            source_label: &profile.label,
            listener_tag: binding.listener_tag(),
        });
    }

    if extracted.is_empty() {
        return Err(ConvertError::NoUpstreamsExtracted);
    }

    Ok(extracted)
}
