//! Observability subsystem.
//!
//! The library only emits `tracing` events; the binary installs the
//! subscriber through [`logging::init_logging`].

pub mod logging;

pub use logging::init_logging;
