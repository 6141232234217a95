//! Variable load entries for a single weight-and-balance computation.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Snapshot of the editable load fields.
///
/// Every constructor normalizes its values: negative, non-finite or
/// unparseable entries become zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadInputs {
    pub pilot_passenger_kg: f64,
    pub baggage_kg: f64,
    pub fuel_liters: f64,
}

impl LoadInputs {
    pub fn new(pilot_passenger_kg: f64, baggage_kg: f64, fuel_liters: f64) -> Self {
        Self {
            pilot_passenger_kg: normalize_quantity("pilot_passenger_kg", pilot_passenger_kg),
            baggage_kg: normalize_quantity("baggage_kg", baggage_kg),
            fuel_liters: normalize_quantity("fuel_liters", fuel_liters),
        }
    }

    /// Build inputs from raw text entries as typed by a user.
    pub fn from_entries(pilot_passenger: &str, baggage: &str, fuel: &str) -> Self {
        Self {
            pilot_passenger_kg: parse_entry("pilot_passenger_kg", pilot_passenger),
            baggage_kg: parse_entry("baggage_kg", baggage),
            fuel_liters: parse_entry("fuel_liters", fuel),
        }
    }

    pub fn with_pilot_passenger_kg(mut self, kg: f64) -> Self {
        self.pilot_passenger_kg = normalize_quantity("pilot_passenger_kg", kg);
        self
    }

    pub fn with_baggage_kg(mut self, kg: f64) -> Self {
        self.baggage_kg = normalize_quantity("baggage_kg", kg);
        self
    }

    pub fn with_fuel_liters(mut self, liters: f64) -> Self {
        self.fuel_liters = normalize_quantity("fuel_liters", liters);
        self
    }

    /// Re-apply normalization, for values assembled through the public fields.
    pub fn normalized(self) -> Self {
        Self::new(self.pilot_passenger_kg, self.baggage_kg, self.fuel_liters)
    }
}

/// Clamp a load quantity to a finite, non-negative value.
pub fn normalize_quantity(field: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(field, value, "load entry is negative or not finite; using 0");
        0.0
    }
}

/// Parse a user-entered load quantity. Blank entries read as zero.
pub fn parse_entry(field: &str, raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) => normalize_quantity(field, value),
        Err(_) => {
            warn!(field, entry = trimmed, "load entry is not a number; using 0");
            0.0
        }
    }
}
