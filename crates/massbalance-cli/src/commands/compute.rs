//! Compute command handler: one load sheet for one aircraft.

use anyhow::{Context, Result};
use tracing::info;

use massbalance_cli::output::{render_load_sheet, OutputFormat};
use massbalance_cli::terminal::ColorPalette;
use massbalance_lib::{AircraftCatalog, LoadInputs, LoadSheet};

/// Raw load entries as typed on the command line.
#[derive(Debug, Clone)]
pub struct ComputeRequest<'a> {
    pub registration: &'a str,
    pub pilot_passenger: &'a str,
    pub baggage: &'a str,
    pub fuel: &'a str,
}

/// Handle the compute subcommand.
///
/// Entries are normalized (non-numeric or negative values read as zero)
/// before the balance is computed and checked against the envelope.
pub fn handle_compute(
    catalog: &AircraftCatalog,
    request: &ComputeRequest<'_>,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let profile = catalog.require(request.registration)?;
    let inputs = LoadInputs::from_entries(request.pilot_passenger, request.baggage, request.fuel);

    let sheet = LoadSheet::build(profile, &inputs)
        .with_context(|| format!("failed to compute balance for {}", profile.registration))?;
    info!(
        registration = %sheet.registration,
        within_limits = sheet.within_limits(),
        "load sheet computed"
    );

    render_load_sheet(&sheet, format, palette).context("failed to write load sheet")
}
