//! Output document subsystem.
//!
//! # Data Flow
//! ```text
//! AssemblyOptions + bindings + upstreams + rules
//!     → assembler.rs (pure composition)
//!     → XrayConfig
//!     → writer.rs (pretty JSON, temp file + rename)
//! ```

pub mod assembler;
pub mod schema;
pub mod writer;

pub use assembler::{assemble, AssemblyOptions};
pub use schema::{Inbound, XrayConfig};
pub use writer::{render, write_document, WriteError};

/// Tag of the control-plane inbound. Reserved: no listener may use it.
pub const CONTROL_PLANE_TAG: &str = "api";

/// Tag of the Xray API, the control-plane rule's target.
pub const CONTROL_PLANE_OUTBOUND_TAG: &str = "api";

/// Pass-through terminal outbound.
pub const DIRECT_TAG: &str = "direct";

/// Drop terminal outbound.
pub const REJECT_TAG: &str = "reject";

pub const DOMAIN_STRATEGY: &str = "AsIs";
