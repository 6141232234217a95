//! Weight and balance computation.
//!
//! Converts a profile and a snapshot of load entries into total weight, CG arm
//! and moment. Values are never rounded here; rounding belongs to whatever
//! displays them.

use serde::Serialize;
use tracing::debug;

use crate::aircraft::{AircraftProfile, AxisMode, LoadInputs};
use crate::envelope::Point;
use crate::error::{Error, Result};

/// Derived weight-and-balance figures for one set of load entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceResult {
    pub fuel_weight_kg: f64,
    pub total_weight_kg: f64,
    pub cg_arm_m: f64,
    pub moment_kg_m: f64,
    pub axis_mode: AxisMode,
    /// (CG arm or moment, total weight), depending on `axis_mode`.
    pub evaluation_point: Point,
}

/// Compute total weight, CG arm and moment for `inputs` loaded into `profile`.
///
/// Formula: cg = Σ(weight_i × arm_i) / total_weight, moment = cg × total_weight.
///
/// # Errors
/// Returns [`Error::DegenerateWeight`] when the total weight is not a positive
/// finite number, since the CG arm is undefined in that case, and
/// [`Error::ProfileValidation`] when the arms of an unvalidated profile make
/// the CG arm or moment non-finite.
pub fn compute(profile: &AircraftProfile, inputs: &LoadInputs) -> Result<BalanceResult> {
    let inputs = inputs.normalized();
    let arms = &profile.arms;

    let fuel_weight_kg = inputs.fuel_liters * profile.fuel_density_kg_per_l;
    let stations = [
        (profile.empty_weight_kg, arms.empty),
        (inputs.pilot_passenger_kg, arms.pilot_passenger),
        (inputs.baggage_kg, arms.baggage),
        (fuel_weight_kg, arms.fuel),
    ];

    let total_weight_kg: f64 = stations.iter().map(|(weight, _)| weight).sum();
    if !total_weight_kg.is_finite() || total_weight_kg <= 0.0 {
        return Err(Error::DegenerateWeight { total_weight_kg });
    }

    let total_moment: f64 = stations.iter().map(|(weight, arm)| weight * arm).sum();
    let cg_arm_m = total_moment / total_weight_kg;
    let moment_kg_m = cg_arm_m * total_weight_kg;
    if !cg_arm_m.is_finite() || !moment_kg_m.is_finite() {
        return Err(Error::ProfileValidation {
            message: format!(
                "{}: balance is not finite, check the arm coefficients",
                profile.registration
            ),
        });
    }

    let x = match profile.axis_mode {
        AxisMode::Cg => cg_arm_m,
        AxisMode::Moment => moment_kg_m,
    };

    debug!(
        registration = %profile.registration,
        total_weight_kg,
        cg_arm_m,
        moment_kg_m,
        "computed balance"
    );

    Ok(BalanceResult {
        fuel_weight_kg,
        total_weight_kg,
        cg_arm_m,
        moment_kg_m,
        axis_mode: profile.axis_mode,
        evaluation_point: Point::new(x, total_weight_kg),
    })
}
