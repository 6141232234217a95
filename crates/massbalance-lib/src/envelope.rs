//! Flight envelope geometry and the point-in-polygon membership test.
//!
//! An envelope is an ordered list of (x, weight) vertices, where x is either
//! the CG arm or the moment depending on the profile's axis mode. Catalogs
//! usually repeat the first vertex at the end to close the polygon; the test
//! also closes open polygons through its wrap-around edge.

use serde::{Deserialize, Serialize};

use crate::balance::BalanceResult;

/// A point in the (CG-axis value, total weight) plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned extent of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvelopeBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Certified loading envelope as an ordered polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope {
    vertices: Vec<Point>,
}

impl Envelope {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Vertices in their configured order, including any closing vertex.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Whether the last vertex repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Vertices without the closing duplicate.
    fn ring(&self) -> &[Point] {
        if self.is_closed() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices
        }
    }

    /// Check that the vertices describe a polygon.
    ///
    /// Returns the reason as text; profile validation wraps it into
    /// [`crate::Error::MalformedEnvelope`] together with the registration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(index) = self.vertices.iter().position(|p| !p.is_finite()) {
            return Err(format!("vertex {index} has a non-finite coordinate"));
        }

        let mut distinct: Vec<Point> = Vec::with_capacity(self.vertices.len());
        for vertex in self.ring() {
            if !distinct.contains(vertex) {
                distinct.push(*vertex);
            }
        }
        if distinct.len() < 3 {
            return Err(format!(
                "at least 3 distinct vertices are required, got {}",
                distinct.len()
            ));
        }

        Ok(())
    }

    /// Whether `point` lies inside the envelope.
    pub fn contains(&self, point: Point) -> bool {
        is_within_envelope(point, &self.vertices)
    }

    /// Extent of the envelope, or `None` when it has no vertices.
    pub fn bounds(&self) -> Option<EnvelopeBounds> {
        let first = self.vertices.first()?;
        let init = EnvelopeBounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(self.vertices.iter().fold(init, |b, p| EnvelopeBounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Area-weighted centroid of the polygon.
    ///
    /// Falls back to the vertex mean when the polygon has no area.
    pub fn centroid(&self) -> Option<Point> {
        let ring = self.ring();
        if ring.is_empty() {
            return None;
        }

        let mut twice_area = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for (i, a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % ring.len()];
            let cross = a.x * b.y - b.x * a.y;
            twice_area += cross;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }

        if twice_area.abs() <= f64::EPSILON {
            let n = ring.len() as f64;
            let (sx, sy) = ring
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            return Some(Point::new(sx / n, sy / n));
        }

        let scale = 3.0 * twice_area;
        Some(Point::new(cx / scale, cy / scale))
    }
}

/// Ray-casting point-in-polygon test.
///
/// A horizontal ray is cast from `point` towards +x and every edge it crosses
/// toggles the result. An edge counts only when exactly one endpoint lies
/// strictly above the ray, so a vertex sitting on the ray is counted once and
/// horizontal edges never count (their denominator is therefore never zero).
///
/// Polygons with fewer than 3 vertices and non-finite points are outside.
pub fn is_within_envelope(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 || !point.is_finite() {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Outcome of checking a balance result against an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvelopeVerdict {
    pub within_limits: bool,
    pub point: Point,
}

/// Check the evaluation point of `result` against `envelope`.
pub fn evaluate(result: &BalanceResult, envelope: &Envelope) -> EnvelopeVerdict {
    let point = result.evaluation_point;
    let within_limits = envelope.contains(point);
    tracing::debug!(
        x = point.x,
        y = point.y,
        within_limits,
        "evaluated load point against envelope"
    );
    EnvelopeVerdict {
        within_limits,
        point,
    }
}
