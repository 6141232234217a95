//! Aircraft profile configuration.
//!
//! A profile describes one airframe: its empty weight, the moment arm of each
//! load station, the certified envelope and how that envelope is plotted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::{Error, Result};

use super::constants::{
    CG_AXIS_DEFAULT_BOUNDS, DEFAULT_FUEL_DENSITY_KG_PER_L, MOMENT_AXIS_DEFAULT_BOUNDS,
    WEIGHT_AXIS_BOUNDS,
};

/// Moment arm (meters from the reference datum) of each load station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmCoefficients {
    pub empty: f64,
    pub pilot_passenger: f64,
    pub baggage: f64,
    pub fuel: f64,
}

impl ArmCoefficients {
    pub fn new(empty: f64, pilot_passenger: f64, baggage: f64, fuel: f64) -> Self {
        Self {
            empty,
            pilot_passenger,
            baggage,
            fuel,
        }
    }

    fn named(&self) -> [(f64, &'static str); 4] {
        [
            (self.empty, "arms.empty"),
            (self.pilot_passenger, "arms.pilot_passenger"),
            (self.baggage, "arms.baggage"),
            (self.fuel, "arms.fuel"),
        ]
    }

    /// Smallest arm across all stations.
    pub fn min(&self) -> f64 {
        self.named()
            .iter()
            .map(|(arm, _)| *arm)
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest arm across all stations.
    pub fn max(&self) -> f64 {
        self.named()
            .iter()
            .map(|(arm, _)| *arm)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Quantity plotted on the horizontal axis of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    /// CG arm in meters.
    #[default]
    Cg,
    /// Moment (CG arm × total weight) in kg·m.
    Moment,
}

impl AxisMode {
    /// Human-readable axis title.
    pub fn label(self) -> &'static str {
        match self {
            AxisMode::Cg => "CG arm (m)",
            AxisMode::Moment => "Moment (kg·m)",
        }
    }

    /// Chart range used when a profile does not override it.
    pub fn default_bounds(self) -> AxisBounds {
        match self {
            AxisMode::Cg => CG_AXIS_DEFAULT_BOUNDS,
            AxisMode::Moment => MOMENT_AXIS_DEFAULT_BOUNDS,
        }
    }
}

impl fmt::Display for AxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisMode::Cg => f.pad("cg"),
            AxisMode::Moment => f.pad("moment"),
        }
    }
}

/// Closed numeric range used for chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(Error::ProfileValidation {
                message: format!(
                    "x_axis_bounds must be finite with min < max, got {}..{}",
                    self.min, self.max
                ),
            });
        }
        Ok(())
    }
}

/// Axis ranges and titles a renderer needs to draw the envelope chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAxes {
    pub x: AxisBounds,
    pub x_label: &'static str,
    pub y: AxisBounds,
    pub y_label: &'static str,
}

fn default_fuel_density() -> f64 {
    DEFAULT_FUEL_DENSITY_KG_PER_L
}

/// Static weight-and-balance configuration for one aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub registration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub empty_weight_kg: f64,
    pub arms: ArmCoefficients,
    pub envelope: Envelope,
    #[serde(default)]
    pub axis_mode: AxisMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_bounds: Option<AxisBounds>,
    #[serde(default = "default_fuel_density")]
    pub fuel_density_kg_per_l: f64,
    /// Path or URL of the flight manual section this profile was taken from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_manual: Option<String>,
}

impl AircraftProfile {
    /// Create a CG-axis profile with the default fuel density.
    pub fn new(
        registration: impl Into<String>,
        empty_weight_kg: f64,
        arms: ArmCoefficients,
        envelope: Envelope,
    ) -> Self {
        Self {
            registration: registration.into(),
            title: None,
            empty_weight_kg,
            arms,
            envelope,
            axis_mode: AxisMode::Cg,
            x_axis_bounds: None,
            fuel_density_kg_per_l: DEFAULT_FUEL_DENSITY_KG_PER_L,
            flight_manual: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_mode(mut self, axis_mode: AxisMode) -> Self {
        self.axis_mode = axis_mode;
        self
    }

    pub fn with_x_axis_bounds(mut self, bounds: AxisBounds) -> Self {
        self.x_axis_bounds = Some(bounds);
        self
    }

    pub fn with_fuel_density(mut self, kg_per_l: f64) -> Self {
        self.fuel_density_kg_per_l = kg_per_l;
        self
    }

    pub fn with_flight_manual(mut self, reference: impl Into<String>) -> Self {
        self.flight_manual = Some(reference.into());
        self
    }

    /// Title if one is configured, otherwise the registration.
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.registration)
    }

    /// Validate profile data for correctness.
    ///
    /// Envelope problems are reported as [`Error::MalformedEnvelope`] so that
    /// they surface when the catalog is loaded rather than on evaluation.
    pub fn validate(&self) -> Result<()> {
        if self.registration.trim().is_empty() {
            return Err(Error::ProfileValidation {
                message: "registration must not be empty".to_string(),
            });
        }

        let mut fields = vec![
            (self.empty_weight_kg, "empty_weight_kg"),
            (self.fuel_density_kg_per_l, "fuel_density_kg_per_l"),
        ];
        fields.extend(self.arms.named());

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ProfileValidation {
                    message: format!(
                        "{field} must be a finite positive number for {}",
                        self.registration
                    ),
                });
            }
        }

        if let Some(bounds) = &self.x_axis_bounds {
            bounds.validate()?;
        }

        self.envelope
            .validate()
            .map_err(|message| Error::MalformedEnvelope {
                registration: self.registration.clone(),
                message,
            })
    }

    /// Chart ranges for this profile, honoring any custom horizontal range.
    pub fn chart_axes(&self) -> ChartAxes {
        ChartAxes {
            x: self
                .x_axis_bounds
                .unwrap_or_else(|| self.axis_mode.default_bounds()),
            x_label: self.axis_mode.label(),
            y: WEIGHT_AXIS_BOUNDS,
            y_label: "Total weight (kg)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Point;

    fn triangle() -> Envelope {
        Envelope::new(vec![
            Point::new(0.2, 300.0),
            Point::new(0.4, 300.0),
            Point::new(0.3, 600.0),
        ])
    }

    fn profile() -> AircraftProfile {
        AircraftProfile::new(
            "F-TEST",
            350.0,
            ArmCoefficients::new(0.26, 0.55, 1.08, 0.68),
            triangle(),
        )
    }

    #[test]
    fn arm_extremes() {
        let arms = ArmCoefficients::new(0.26, 0.55, 1.08, 0.68);
        assert_eq!(arms.min(), 0.26);
        assert_eq!(arms.max(), 1.08);
    }

    #[test]
    fn rejects_zero_arm() {
        let mut p = profile();
        p.arms.baggage = 0.0;
        match p.validate().expect_err("zero arm rejected") {
            Error::ProfileValidation { message } => assert!(message.contains("arms.baggage")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_inverted_axis_bounds() {
        let p = profile().with_x_axis_bounds(AxisBounds::new(260.0, 70.0));
        assert!(matches!(p.validate(), Err(Error::ProfileValidation { .. })));
    }

    #[test]
    fn chart_axes_follow_axis_mode_and_override() {
        let cg = profile().chart_axes();
        assert_eq!(cg.x, CG_AXIS_DEFAULT_BOUNDS);
        assert_eq!(cg.x_label, "CG arm (m)");

        let moment = profile().with_axis_mode(AxisMode::Moment).chart_axes();
        assert_eq!(moment.x, MOMENT_AXIS_DEFAULT_BOUNDS);

        let custom = profile()
            .with_axis_mode(AxisMode::Moment)
            .with_x_axis_bounds(AxisBounds::new(70.0, 260.0))
            .chart_axes();
        assert_eq!(custom.x, AxisBounds::new(70.0, 260.0));
        assert_eq!(custom.y, WEIGHT_AXIS_BOUNDS);
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "registration": "F-TEST",
            "empty_weight_kg": 350.0,
            "arms": {"empty": 0.26, "pilot_passenger": 0.55, "baggage": 1.08, "fuel": 0.68},
            "envelope": [{"x": 0.2, "y": 300.0}, {"x": 0.4, "y": 300.0}, {"x": 0.3, "y": 600.0}]
        }"#;
        let p: AircraftProfile = serde_json::from_str(json).expect("valid profile json");
        assert_eq!(p.axis_mode, AxisMode::Cg);
        assert_eq!(p.fuel_density_kg_per_l, DEFAULT_FUEL_DENSITY_KG_PER_L);
        assert_eq!(p.display_name(), "F-TEST");
        p.validate().expect("profile valid");
    }
}
