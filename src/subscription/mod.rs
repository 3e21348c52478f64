//! Subscription profiles and label lookup.
//!
//! # Data Flow
//! ```text
//! subscription.json (array of profile records)
//!     → profile.rs (remarks + outbounds, everything else ignored)
//!     → index.rs (label → profile, last write wins)
//!     → listener resolver
//! ```

pub mod index;
pub mod profile;

pub use index::ProfileIndex;
pub use profile::SubscriptionProfile;
