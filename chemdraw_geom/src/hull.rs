// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

/// Convex hull of `points` using Andrew's monotone chain.
///
/// The result is ordered counter-clockwise (positive signed area in a Y-up
/// frame), starts at the lowest-leftmost point, and contains no collinear or
/// duplicate vertices. Non-finite points are ignored. Fewer than three
/// distinct points are returned as-is (sorted and de-duplicated).
#[must_use]
pub fn convex_hull(points: impl IntoIterator<Item = Point>) -> Vec<Point> {
    let mut pts: Vec<Point> = points
        .into_iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let turn = |o: Point, a: Point, b: Point| (a - o).cross(b - o);

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn square_with_interior_and_edge_points() {
        let hull = convex_hull(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 2.0),
        ]);
        assert_eq!(
            hull,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn small_inputs_pass_through() {
        assert!(convex_hull(Vec::new()).is_empty());
        let two = convex_hull(vec![Point::new(1.0, 1.0), Point::new(0.0, 0.0)]);
        assert_eq!(two, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let hull = convex_hull(vec![
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 3.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ]);
        assert_eq!(hull.len(), 3);
    }
}
