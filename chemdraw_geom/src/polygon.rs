// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point queries against closed polygons given as vertex slices.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, ParamCurveNearest, Point};

/// Iterates the closed edges `(p[i], p[i + 1])` of a polygon, wrapping around
/// to the first vertex.
pub fn polygon_edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// Winding-number containment test. Works for convex and concave polygons of
/// either orientation; polygons with fewer than three vertices contain
/// nothing.
#[must_use]
pub fn polygon_contains(polygon: &[Point], pt: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut winding: i32 = 0;
    for (a, b) in polygon_edges(polygon) {
        let cross = (b - a).cross(pt - a);
        if a.y <= pt.y {
            if b.y > pt.y && cross > 0.0 {
                winding += 1;
            }
        } else if b.y <= pt.y && cross < 0.0 {
            winding -= 1;
        }
    }
    winding != 0
}

/// Distance from `pt` to the nearest edge of `polygon`.
///
/// Returns `None` for an empty polygon. A single vertex is treated as a point
/// and two vertices as a segment.
#[must_use]
pub fn distance_to_polygon(polygon: &[Point], pt: Point) -> Option<f64> {
    match polygon.len() {
        0 => None,
        1 => Some(polygon[0].distance(pt)),
        _ => polygon_edges(polygon)
            .map(|(a, b)| Line::new(a, b).nearest(pt, 0.).distance_sq.sqrt())
            .reduce(f64::min),
    }
}
