//! Aircraft command handler for listing available profiles.

use anyhow::{Context, Result};

use massbalance_cli::output::{render_catalog, OutputFormat};
use massbalance_lib::AircraftCatalog;

/// Handle the aircraft subcommand.
pub fn handle_list_aircraft(catalog: &AircraftCatalog, format: OutputFormat) -> Result<()> {
    render_catalog(catalog, format).context("failed to write aircraft listing")
}
