//! Outbound subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedBinding[] (binding order)
//!     → extractor.rs (first "proxy" outbound of each profile)
//!     → definition.rs (copy, retag as outbound_<n>)
//!     → ExtractedUpstream[] (extraction order == id order)
//! ```

pub mod definition;
pub mod extractor;

pub use definition::UpstreamDefinition;
pub use extractor::{extract_upstreams, ExtractedUpstream, OutboundIdAllocator, PRIMARY_UPSTREAM_TAG};
