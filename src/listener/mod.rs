//! Listener subsystem.
//!
//! # Data Flow
//! ```text
//! INBOUNDS_JSON
//!     → spec.rs (protocol, port, tag, name)
//!     → config::validation (drop incomplete specs)
//!     → resolver.rs (name → profile via ProfileIndex)
//!     → ResolvedBinding[] in input order
//! ```

pub mod resolver;
pub mod spec;

pub use resolver::{resolve_listeners, ResolvedBinding};
pub use spec::ListenerSpec;
