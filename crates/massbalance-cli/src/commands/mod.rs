// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// resolves the aircraft catalog and dispatches to these handlers.

pub mod aircraft;
pub mod compute;
pub mod envelope;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use massbalance_lib::AircraftCatalog;

/// Environment variable naming a JSON aircraft catalog.
pub const CATALOG_ENV: &str = "MASSBALANCE_CATALOG";

/// Load the aircraft catalog.
///
/// Resolution order:
/// 1. The `--catalog` flag
/// 2. The `MASSBALANCE_CATALOG` environment variable
/// 3. The built-in fleet
pub fn load_catalog(flag: Option<&Path>) -> Result<AircraftCatalog> {
    let path = flag
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CATALOG_ENV).map(PathBuf::from));

    match path {
        Some(path) => AircraftCatalog::from_path(&path)
            .with_context(|| format!("failed to load aircraft catalog from {}", path.display())),
        None => {
            debug!("no catalog configured; using built-in aircraft");
            Ok(AircraftCatalog::builtin())
        }
    }
}
