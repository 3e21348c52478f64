//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedBinding[] + ExtractedUpstream[]
//!     → rules.rs
//!     → [api → api, listener → outbound_<n>..., (listener → reject...)]
//! ```
//!
//! # Design Decisions
//! - Control-plane rule is always present and always first
//! - Upstream rules follow extraction order exactly; no re-sorting
//! - Every rule target exists in the outbound list or is the API tag

pub mod rules;

pub use rules::{synthesize_rules, RoutingRule};
