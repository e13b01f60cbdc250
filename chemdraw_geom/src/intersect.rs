// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line/line intersection in point and parametric form.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::EPSILON;

/// Parametric intersection of the infinite lines through `(p1, p2)` and
/// `(p3, p4)`.
///
/// Returns `(t, u)` such that `p1 + t·(p2 − p1) == p3 + u·(p4 − p3)`. A
/// fraction strictly inside `(0, 1)` means the intersection lies within that
/// finite segment rather than on its extension.
///
/// Returns `None` when either segment has zero length, the lines are
/// parallel, or the result is not finite.
#[must_use]
pub fn intersect_lines(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<(f64, f64)> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let scale = d1.hypot() * d2.hypot();
    if !scale.is_finite() || scale < EPSILON {
        return None;
    }
    let denom = d1.cross(d2);
    if denom.abs() <= EPSILON * scale {
        return None;
    }
    let w = p3 - p1;
    let t = w.cross(d2) / denom;
    let u = w.cross(d1) / denom;
    (t.is_finite() && u.is_finite()).then_some((t, u))
}

/// Intersection point of the infinite lines through `(p1, p2)` and `(p3, p4)`.
///
/// Returns `None` for parallel or degenerate lines; callers must not
/// substitute a default point.
#[must_use]
pub fn intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let (t, _) = intersect_lines(p1, p2, p3, p4)?;
    Some(p1.lerp(p2, t))
}

/// Where the segment `from → to` crosses the boundary of `polygon`.
///
/// Of all edge crossings within both the segment and the edge, the one
/// farthest along the segment is returned together with its fraction along
/// `from → to`. For a convex polygon that contains `from`, this is the point
/// where the segment leaves the polygon.
///
/// Returns `None` for polygons with fewer than three points, or when the
/// segment does not cross any edge.
#[must_use]
pub fn segment_polygon_exit(from: Point, to: Point, polygon: &[Point]) -> Option<(Point, f64)> {
    if polygon.len() < 3 {
        return None;
    }
    let mut best: Option<f64> = None;
    for (a, b) in crate::polygon_edges(polygon) {
        let Some((t, u)) = intersect_lines(from, to, a, b) else {
            continue;
        };
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            best = Some(best.map_or(t, |prev| prev.max(t)));
        }
    }
    best.map(|t| (from.lerp(to, t), t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments() {
        let (t, u) = intersect_lines(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 3.0),
        )
        .unwrap();
        assert!((t - 0.25).abs() < 1e-12);
        assert!((u - 0.25).abs() < 1e-12);
    }

    #[test]
    fn fractions_outside_segment_are_reported() {
        let (t, u) = intersect_lines(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 2.0),
        )
        .unwrap();
        assert!((t - 3.0).abs() < 1e-12);
        assert!((u + 1.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_and_degenerate_lines_have_no_intersection() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(intersect(a, b, Point::new(0.0, 1.0), Point::new(10.0, 1.0)).is_none());
        assert!(intersect(a, a, Point::new(0.0, 1.0), Point::new(10.0, 1.0)).is_none());
        assert!(intersect(a, b, Point::new(f64::NAN, 1.0), Point::new(10.0, 1.0)).is_none());
    }

    #[test]
    fn exit_from_square() {
        let square = [
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ];
        let (pt, t) = segment_polygon_exit(Point::ZERO, Point::new(4.0, 0.0), &square).unwrap();
        assert!((pt - Point::new(1.0, 0.0)).hypot() < 1e-12);
        assert!((t - 0.25).abs() < 1e-12);

        assert!(
            segment_polygon_exit(Point::new(5.0, 5.0), Point::new(6.0, 5.0), &square).is_none()
        );
        assert!(segment_polygon_exit(Point::ZERO, Point::new(4.0, 0.0), &square[..2]).is_none());
    }
}
