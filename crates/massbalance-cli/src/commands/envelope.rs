//! Envelope command handler.

use anyhow::{Context, Result};

use massbalance_cli::output::{render_envelope, OutputFormat};
use massbalance_lib::AircraftCatalog;

/// Print the envelope polygon and chart ranges for one aircraft.
pub fn handle_envelope(
    catalog: &AircraftCatalog,
    registration: &str,
    format: OutputFormat,
) -> Result<()> {
    let profile = catalog.require(registration)?;
    render_envelope(profile, format).context("failed to write envelope")
}
