//! Xray multi-profile configuration builder.
//!
//! Turns a subscription (a list of named Xray profiles) and a list of local
//! listeners into one Xray configuration where each listener forwards to the
//! `proxy` outbound of the profile it names.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod listener;
pub mod observability;
pub mod outbound;
pub mod pipeline;
pub mod routing;
pub mod subscription;

pub use config::Settings;
pub use document::XrayConfig;
pub use error::{Error, Result};
pub use pipeline::{convert, Conversion, ConvertError, ConvertOptions};
