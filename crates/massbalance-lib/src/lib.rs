//! Mass and balance library entry points.
//!
//! This crate exposes the aircraft profile and catalog types, the weight and
//! balance calculator, and the envelope membership test. Higher-level
//! consumers (the CLI, or any other front end) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod aircraft;
pub mod balance;
pub mod envelope;
pub mod error;
pub mod output;

pub use aircraft::{
    AircraftCatalog, AircraftProfile, ArmCoefficients, AxisBounds, AxisMode, ChartAxes,
    LoadInputs,
};
pub use balance::{compute, BalanceResult};
pub use envelope::{
    evaluate, is_within_envelope, Envelope, EnvelopeBounds, EnvelopeVerdict, Point,
};
pub use error::{Error, Result};
pub use output::{LoadSheet, RenderMode};
