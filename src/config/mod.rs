//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → cli.rs (flag / env overrides)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!
//! subscription file + INBOUNDS_JSON
//!     → loader.rs
//!     → SubscriptionProfile[] + ListenerSpec[]
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Listener specs are validated one by one later, because a bad spec is not fatal

pub mod cli;
pub(crate) mod de;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::{load_settings, load_subscription, parse_listener_specs, ConfigError};
pub use schema::{ApiSettings, LogSettings, Settings, UnroutedPolicy};
