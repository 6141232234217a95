mod common;

use massbalance_lib::{is_within_envelope, Envelope, Point};

/// Vertices without the closing duplicate.
fn ring(envelope: &Envelope) -> Vec<Point> {
    let vertices = envelope.vertices();
    if envelope.is_closed() {
        vertices[..vertices.len() - 1].to_vec()
    } else {
        vertices.to_vec()
    }
}

fn rotations(ring: &[Point]) -> Vec<Vec<Point>> {
    (0..ring.len())
        .map(|k| {
            let mut rotated = ring.to_vec();
            rotated.rotate_left(k);
            rotated
        })
        .collect()
}

fn closed(mut vertices: Vec<Point>) -> Vec<Point> {
    if let Some(first) = vertices.first().copied() {
        vertices.push(first);
    }
    vertices
}

fn probe_grid(envelope: &Envelope) -> Vec<Point> {
    let bounds = envelope.bounds().expect("non-empty envelope");
    let (w, h) = (bounds.max_x - bounds.min_x, bounds.max_y - bounds.min_y);
    let mut points = Vec::new();
    for i in 0..=12 {
        for j in 0..=12 {
            points.push(Point::new(
                bounds.min_x - 0.1 * w + 1.2 * w * i as f64 / 12.0 + 1e-7,
                bounds.min_y - 0.1 * h + 1.2 * h * j as f64 / 12.0 + 1e-7,
            ));
        }
    }
    points
}

#[test]
fn verdict_is_invariant_under_vertex_rotation() {
    for envelope in [common::hdlv().envelope, common::hdlt().envelope] {
        let base = ring(&envelope);
        for probe in probe_grid(&envelope) {
            let expected = is_within_envelope(probe, envelope.vertices());
            for rotated in rotations(&base) {
                assert_eq!(is_within_envelope(probe, &rotated), expected);
                assert_eq!(is_within_envelope(probe, &closed(rotated)), expected);
            }
        }
    }
}

#[test]
fn centroid_of_convex_envelope_is_inside() {
    let catalog = common::fixture_catalog();
    for profile in catalog.profiles_sorted() {
        let centroid = profile.envelope.centroid().expect("non-empty envelope");
        assert!(
            profile.envelope.contains(centroid),
            "centroid {:?} of {} fell outside",
            centroid,
            profile.registration
        );
    }
}

#[test]
fn points_near_sloped_edge_are_classified_exactly() {
    let envelope = common::hdlv().envelope;
    // At 380 kg the forward-right edge sits at x ≈ 0.3268.
    assert!(envelope.contains(Point::new(0.30, 380.0)));
    assert!(!envelope.contains(Point::new(0.33, 380.0)));
    // Aft limit is the vertical edge at x = 0.40.
    assert!(envelope.contains(Point::new(0.399, 500.0)));
    assert!(!envelope.contains(Point::new(0.401, 500.0)));
}

#[test]
fn weights_outside_vertical_range_are_outside() {
    let envelope = common::hdlv().envelope;
    assert!(!envelope.contains(Point::new(0.30, 372.9)));
    assert!(!envelope.contains(Point::new(0.37, 600.1)));
}

#[test]
fn open_and_closed_forms_agree() {
    let envelope = common::hdlt().envelope;
    let open = ring(&envelope);
    for probe in probe_grid(&envelope) {
        assert_eq!(
            is_within_envelope(probe, &open),
            is_within_envelope(probe, envelope.vertices())
        );
    }
}

#[test]
fn bounds_cover_every_vertex() {
    let envelope = common::hdlt().envelope;
    let bounds = envelope.bounds().expect("non-empty envelope");
    assert_eq!(bounds.min_x, 92.0);
    assert_eq!(bounds.max_x, 240.0);
    assert_eq!(bounds.min_y, 374.0);
    assert_eq!(bounds.max_y, 600.0);
}

#[test]
fn horizontal_edges_at_point_weight_follow_half_open_rule() {
    let base = ring(&common::hdlv().envelope);
    let on_bottom_edge = Point::new(0.28, 373.0);
    let on_top_edge = Point::new(0.37, 600.0);

    for rotated in rotations(&base) {
        assert!(is_within_envelope(on_bottom_edge, &rotated));
        assert!(!is_within_envelope(on_top_edge, &rotated));
        let closed = closed(rotated);
        assert!(is_within_envelope(on_bottom_edge, &closed));
        assert!(!is_within_envelope(on_top_edge, &closed));
    }
}
