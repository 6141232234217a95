//! Aircraft data types and catalog management.
//!
//! - [`profile`] - Per-aircraft configuration (empty weight, arms, envelope, axes)
//! - [`loads`] - User-entered variable loads and their normalization
//! - [`catalog`] - Built-in and JSON-loaded aircraft catalogs
//! - [`constants`] - Fuel density and chart defaults
//!
//! # Example
//!
//! ```
//! use massbalance_lib::aircraft::{AircraftCatalog, LoadInputs};
//! use massbalance_lib::compute;
//!
//! let catalog = AircraftCatalog::builtin();
//! let profile = catalog.get("F-HDLV").unwrap();
//! let result = compute(profile, &LoadInputs::new(70.0, 10.0, 50.0)).unwrap();
//! assert!((result.total_weight_kg - 461.9).abs() < 1e-9);
//! ```

pub mod catalog;
pub mod constants;
pub mod loads;
pub mod profile;

pub use catalog::AircraftCatalog;
pub use constants::{
    CG_AXIS_DEFAULT_BOUNDS, DEFAULT_FUEL_DENSITY_KG_PER_L, MOMENT_AXIS_DEFAULT_BOUNDS,
    WEIGHT_AXIS_BOUNDS,
};
pub use loads::{normalize_quantity, parse_entry, LoadInputs};
pub use profile::{AircraftProfile, ArmCoefficients, AxisBounds, AxisMode, ChartAxes};
