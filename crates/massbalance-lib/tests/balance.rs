mod common;

use massbalance_lib::{
    compute, evaluate, AircraftProfile, ArmCoefficients, AxisMode, Envelope, Error, LoadInputs,
    Point,
};

const TOLERANCE: f64 = 1e-9;

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < TOLERANCE
}

#[test]
fn empty_aircraft_is_below_envelope() {
    let profile = common::hdlv();
    let result = compute(&profile, &LoadInputs::default()).expect("valid profile");

    assert!(approx(result.total_weight_kg, 345.9));
    assert!(approx(result.cg_arm_m, 0.26));
    assert!(approx(result.evaluation_point.x, 0.26));
    assert!(approx(result.evaluation_point.y, 345.9));

    let verdict = evaluate(&result, &profile.envelope);
    assert!(!verdict.within_limits);
}

#[test]
fn typical_flight_load_is_within_envelope() {
    let profile = common::hdlv();
    let result = compute(&profile, &LoadInputs::new(70.0, 10.0, 50.0)).expect("valid profile");

    let expected_moment = 345.9 * 0.26 + 70.0 * 0.55 + 10.0 * 1.08 + 36.0 * 0.68;
    assert!(approx(result.fuel_weight_kg, 36.0));
    assert!(approx(result.total_weight_kg, 461.9));
    assert!(approx(result.cg_arm_m, expected_moment / 461.9));
    assert!((result.cg_arm_m - 0.3544).abs() < 1e-4);
    assert!(approx(result.moment_kg_m, expected_moment));

    let verdict = evaluate(&result, &profile.envelope);
    assert!(verdict.within_limits);
    assert_eq!(verdict.point, result.evaluation_point);
}

#[test]
fn moment_axis_evaluates_moment_against_moment_envelope() {
    let profile = common::hdlv().with_axis_mode(AxisMode::Moment);
    let moment_envelope = common::hdlt().envelope;

    let result = compute(&profile, &LoadInputs::new(70.0, 10.0, 50.0)).expect("valid profile");
    assert_eq!(result.axis_mode, AxisMode::Moment);
    assert!((result.moment_kg_m - 163.714).abs() < 1e-6);
    assert!(approx(result.moment_kg_m, result.cg_arm_m * result.total_weight_kg));
    assert!(approx(result.evaluation_point.x, result.moment_kg_m));
    assert!(approx(result.evaluation_point.y, 461.9));

    assert!(evaluate(&result, &moment_envelope).within_limits);
}

#[test]
fn moment_profile_flags_empty_aircraft() {
    let profile = common::hdlt();
    let empty = compute(&profile, &LoadInputs::default()).expect("valid profile");
    assert!(approx(empty.evaluation_point.x, 365.0 * 0.27));
    assert!(!evaluate(&empty, &profile.envelope).within_limits);

    let loaded = compute(&profile, &LoadInputs::new(70.0, 10.0, 50.0)).expect("valid profile");
    assert!(evaluate(&loaded, &profile.envelope).within_limits);
}

#[test]
fn zero_empty_weight_with_no_load_reports_degenerate_weight() {
    let profile = AircraftProfile::new(
        "F-ZERO",
        0.0,
        ArmCoefficients::new(0.26, 0.55, 1.08, 0.68),
        common::hdlv().envelope,
    );

    match compute(&profile, &LoadInputs::default()) {
        Err(Error::DegenerateWeight { total_weight_kg }) => assert_eq!(total_weight_kg, 0.0),
        other => panic!("expected DegenerateWeight, got {:?}", other),
    }
}

#[test]
fn total_weight_is_exact_sum_of_stations() {
    let profile = common::hdlv();
    for pilot in [0.0, 55.5, 70.0, 180.0] {
        for baggage in [0.0, 4.2, 10.0, 35.0] {
            for fuel in [0.0, 12.5, 50.0, 120.0] {
                let result = compute(&profile, &LoadInputs::new(pilot, baggage, fuel))
                    .expect("valid profile");
                let expected = 345.9 + pilot + baggage + fuel * 0.72;
                assert!(approx(result.total_weight_kg, expected));
                assert!(approx(result.fuel_weight_kg, fuel * 0.72));
            }
        }
    }
}

#[test]
fn cg_is_a_convex_combination_of_arms() {
    for profile in [common::hdlv(), common::hdlt()] {
        let (lo, hi) = (profile.arms.min(), profile.arms.max());
        for pilot in [0.0, 1.0, 90.0, 250.0] {
            for baggage in [0.0, 0.5, 20.0, 500.0] {
                for fuel in [0.0, 3.0, 80.0, 1000.0] {
                    let result = compute(&profile, &LoadInputs::new(pilot, baggage, fuel))
                        .expect("valid profile");
                    assert!(
                        result.cg_arm_m >= lo - TOLERANCE && result.cg_arm_m <= hi + TOLERANCE,
                        "cg {} outside [{}, {}]",
                        result.cg_arm_m,
                        lo,
                        hi
                    );
                }
            }
        }
    }
}

#[test]
fn recomputation_depends_only_on_latest_inputs() {
    let profile = common::hdlv();
    let first = LoadInputs::new(70.0, 10.0, 50.0);
    let edited = first.with_baggage_kg(25.0);

    let a = compute(&profile, &edited).expect("valid");
    let _ = compute(&profile, &first).expect("valid");
    let b = compute(&profile, &edited).expect("valid");
    assert_eq!(a, b);
}

#[test]
fn invalid_entries_compute_as_zero_load() {
    let profile = common::hdlv();
    let inputs = LoadInputs::from_entries("abc", "-12", "");
    let result = compute(&profile, &inputs).expect("valid");
    assert!(approx(result.total_weight_kg, 345.9));
}

#[test]
fn open_envelope_profile_uses_configured_density() {
    let catalog = common::fixture_catalog();
    let profile = catalog.get("F-TRNG").expect("fixture profile");
    assert!(!profile.envelope.is_closed());

    let result = compute(profile, &LoadInputs::new(80.0, 0.0, 50.0)).expect("valid");
    assert!(approx(result.fuel_weight_kg, 40.0));
    assert!(approx(result.total_weight_kg, 530.0));
    assert!(evaluate(&result, &profile.envelope).within_limits);

    let custom = Envelope::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1000.0),
    ]);
    assert!(!evaluate(&result, &custom).within_limits);
}
