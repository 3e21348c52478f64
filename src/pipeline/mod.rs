//! Conversion pipeline.
//!
//! # Data Flow
//! ```text
//! SubscriptionProfile[]      ListenerSpec[]
//!     → ProfileIndex              │
//!            └──────→ resolve_listeners → ResolvedBinding[]
//!                         → extract_upstreams (fresh id allocator)
//!                         → synthesize_rules
//!                         → assemble → XrayConfig
//! ```
//!
//! # Design Decisions
//! - No I/O; all inputs are in memory before the run starts
//! - Every stage walks its input once, in order
//! - Fatal errors abort before anything is written
//! - Identical inputs give identical documents

pub mod diagnostics;
pub mod error;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::ConvertError;

use crate::config::UnroutedPolicy;
use crate::document::{assemble, AssemblyOptions, XrayConfig};
use crate::listener::{resolve_listeners, ListenerSpec};
use crate::outbound::{extract_upstreams, OutboundIdAllocator};
use crate::routing::synthesize_rules;
use crate::subscription::{ProfileIndex, SubscriptionProfile};

/// Options for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    pub assembly: AssemblyOptions,
    pub unrouted: UnroutedPolicy,
}

impl From<&crate::config::Settings> for ConvertOptions {
    fn from(settings: &crate::config::Settings) -> Self {
        Self {
            assembly: AssemblyOptions::from(settings),
            unrouted: settings.unrouted,
        }
    }
}

/// Counts and skipped elements of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub profiles: usize,
    pub labels: usize,
    pub listeners: usize,
    pub upstreams: usize,
    pub diagnostics: Diagnostics,
}

/// A generated document and what went into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: XrayConfig,
    pub report: ConversionReport,
}

/// Run every stage on in-memory inputs.
pub fn convert(
    profiles: &[SubscriptionProfile],
    listeners: &[ListenerSpec],
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let mut diagnostics = Diagnostics::default();

    let index = ProfileIndex::build(profiles)?;
    tracing::info!(profiles = index.profile_count(), labels = index.label_count(), "Profiles indexed");

    let bindings = resolve_listeners(listeners, &index, &mut diagnostics)?;

    let mut ids = OutboundIdAllocator::new();
    let upstreams = extract_upstreams(&bindings, &mut ids, &mut diagnostics)?;

    let rules = synthesize_rules(&bindings, &upstreams, options.unrouted);

    let report = ConversionReport {
        profiles: index.profile_count(),
        labels: index.label_count(),
        listeners: bindings.len(),
        upstreams: upstreams.len(),
        diagnostics,
    };
    let document = assemble(&options.assembly, &bindings, upstreams, rules);

    Ok(Conversion { document, report })
}
