use std::fmt::Write;

use serde::Serialize;

use crate::aircraft::{AircraftProfile, AxisMode, ChartAxes, LoadInputs};
use crate::balance::{compute, BalanceResult};
use crate::envelope::{evaluate, EnvelopeVerdict, Point};
use crate::error::Result;

/// Presentation style for turning a [`LoadSheet`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    Json,
}

/// Structured summary of one weight-and-balance computation that
/// higher-level consumers can serialise or render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSheet {
    pub registration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub empty_weight_kg: f64,
    pub inputs: LoadInputs,
    pub result: BalanceResult,
    pub verdict: EnvelopeVerdict,
    pub chart: ChartAxes,
    pub envelope: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_manual: Option<String>,
}

impl LoadSheet {
    /// Compute the balance for `inputs` and check it against the profile envelope.
    pub fn build(profile: &AircraftProfile, inputs: &LoadInputs) -> Result<Self> {
        let inputs = inputs.normalized();
        let result = compute(profile, &inputs)?;
        let verdict = evaluate(&result, &profile.envelope);

        Ok(Self {
            registration: profile.registration.clone(),
            title: profile.title.clone(),
            empty_weight_kg: profile.empty_weight_kg,
            inputs,
            result,
            verdict,
            chart: profile.chart_axes(),
            envelope: profile.envelope.vertices().to_vec(),
            flight_manual: profile.flight_manual.clone(),
        })
    }

    pub fn within_limits(&self) -> bool {
        self.verdict.within_limits
    }

    /// Short status line describing the verdict.
    pub fn status_label(&self) -> &'static str {
        if self.within_limits() {
            "WITHIN LIMITS"
        } else {
            "OUT OF LIMITS: load point lies outside the certified envelope"
        }
    }

    /// Value shown for the axis the envelope is plotted against.
    pub fn axis_reading(&self) -> String {
        match self.result.axis_mode {
            AxisMode::Cg => format!("CG: {:.3} m", self.result.cg_arm_m),
            AxisMode::Moment => format!("Moment: {:.1} kg·m", self.result.moment_kg_m),
        }
    }

    /// Render the sheet using the requested mode.
    pub fn render(&self, mode: RenderMode) -> Result<String> {
        match mode {
            RenderMode::PlainText => Ok(self.render_plain()),
            RenderMode::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Load sheet: {}",
            self.title.as_deref().unwrap_or(&self.registration)
        );
        for (label, value) in self.rows() {
            let _ = writeln!(buffer, "  {:<20} {}", label, value);
        }
        let _ = writeln!(
            buffer,
            "{} | Total weight: {:.1} kg",
            self.axis_reading(),
            self.result.total_weight_kg
        );
        let _ = writeln!(buffer, "Status: {}", self.status_label());
        buffer
    }

    /// Labelled, display-rounded figures in sheet order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Empty weight", format!("{:.1} kg", self.empty_weight_kg)),
            (
                "Pilot & passengers",
                format!("{:.1} kg", self.inputs.pilot_passenger_kg),
            ),
            ("Baggage", format!("{:.1} kg", self.inputs.baggage_kg)),
            (
                "Fuel",
                format!(
                    "{:.1} L ({:.1} kg)",
                    self.inputs.fuel_liters, self.result.fuel_weight_kg
                ),
            ),
            ("Total weight", format!("{:.1} kg", self.result.total_weight_kg)),
            ("CG arm", format!("{:.3} m", self.result.cg_arm_m)),
            ("Moment", format!("{:.1} kg·m", self.result.moment_kg_m)),
        ]
    }
}
