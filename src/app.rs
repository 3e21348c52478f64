//! One conversion run, from settings to written document.

use crate::config::validation::validate_settings;
use crate::config::{load_subscription, parse_listener_specs, ConfigError, Settings};
use crate::document::{render, write_document};
use crate::error::Result;
use crate::pipeline::{convert, Conversion, ConvertOptions};

/// Where the rendered document goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Write to `Settings::output_file`.
    File,
    /// Print to stdout, leave the output file alone.
    Stdout,
}

/// Load inputs, convert, and emit the document.
///
/// Nothing is written unless every earlier step succeeded.
pub fn run(settings: &Settings, output: Output) -> Result<Conversion> {
    validate_settings(settings).map_err(ConfigError::Validation)?;

    let profiles = load_subscription(&settings.subscription_file)?;
    let listeners = parse_listener_specs(&settings.inbounds_json)?;
    tracing::info!(profiles = profiles.len(), listeners = listeners.len(), "Inputs loaded");

    let conversion = convert(&profiles, &listeners, &ConvertOptions::from(settings))?;

    match output {
        Output::File => write_document(&settings.output_file, &conversion.document)?,
        Output::Stdout => print!("{}", render(&conversion.document)?),
    }

    let report = &conversion.report;
    tracing::info!(
        inbounds = conversion.document.inbounds.len(),
        outbounds = report.upstreams,
        skipped = report.diagnostics.len(),
        "Conversion complete"
    );

    Ok(conversion)
}
