//! xray-multi
//!
//! Builds a single Xray configuration that fans local listeners out to the
//! profiles of a subscription.
//!
//! ```text
//!   subscription.json ──▶ ProfileIndex ──┐
//!                                        ▼
//!   INBOUNDS_JSON ──────────────▶ resolve_listeners ──▶ extract_upstreams
//!                                                            │
//!                                                            ▼
//!   /etc/xray/config.json ◀── write ◀── assemble ◀── synthesize_rules
//! ```

use std::process::ExitCode;

use clap::Parser;

use xray_multi::app::{self, Output};
use xray_multi::config::{load_settings, Cli, Settings};
use xray_multi::observability::init_logging;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    tracing::info!("xray-multi v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Printed directly so it survives RUST_LOG=off.
            eprintln!("xray-multi: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> xray_multi::Result<()> {
    let base = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    let settings = cli.apply(base);
    let api = format!("{}:{}", settings.api.listen, settings.api.port);

    tracing::info!(
        subscription = %settings.subscription_file.display(),
        output = %settings.output_file.display(),
        api = %api,
        unrouted = ?settings.unrouted,
        "Settings loaded"
    );

    let output = if cli.dry_run { Output::Stdout } else { Output::File };
    app::run(&settings, output)?;
    Ok(())
}
