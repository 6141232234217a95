//! Aircraft-related constants shared by balance calculations and chart hints.

use super::profile::AxisBounds;

/// Density of aviation gasoline in kilograms per liter.
///
/// Profiles may override it; this is the value used when a catalog omits
/// `fuel_density_kg_per_l`.
pub const DEFAULT_FUEL_DENSITY_KG_PER_L: f64 = 0.72;

/// Default horizontal chart range when plotting against the CG arm (meters).
pub const CG_AXIS_DEFAULT_BOUNDS: AxisBounds = AxisBounds {
    min: 0.24,
    max: 0.44,
};

/// Default horizontal chart range when plotting against the moment (kg·m).
pub const MOMENT_AXIS_DEFAULT_BOUNDS: AxisBounds = AxisBounds {
    min: 70.0,
    max: 130.0,
};

/// Vertical chart range for total weight (kg).
pub const WEIGHT_AXIS_BOUNDS: AxisBounds = AxisBounds {
    min: 340.0,
    max: 620.0,
};
