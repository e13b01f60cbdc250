// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squiggle geometry for bonds of undefined stereochemistry.

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use chemdraw_geom::{normalize, perpendicular, rotate};

use crate::LayoutConfig;

/// A wavy bond's quadratic chain and hit boundary.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Wiggles {
    /// `[start, c0, p1, c1, p2, …, end]`.
    pub(crate) chain: Vec<Point>,
    pub(crate) boundary: Vec<Point>,
}

/// Number of wiggles for a segment of length `len`.
pub(crate) fn wiggle_count(len: f64, bond_length: f64, config: &LayoutConfig) -> usize {
    let step = config.line_separation(bond_length);
    let ratio = len / step;
    if step <= 0.0 || !ratio.is_finite() {
        return config.min_wiggles.max(1);
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "ratio is finite and non-negative; saturating is fine for absurd lengths"
    )]
    let count = ratio.ceil().max(0.0) as usize;
    count.max(config.min_wiggles).max(1)
}

/// Builds the squiggle from `start` to `end`.
///
/// The segment is cut into equal sub-segments, and each sub-segment into two
/// quadratic arcs meeting at its midpoint: the first bulges to the left (the
/// [`perpendicular`] side), the second to the right. Each control point
/// sprouts half a sub-length from the arc's start at `wiggle_angle_deg` from
/// the axis.
pub(crate) fn wiggles(start: Point, end: Point, bond_length: f64, config: &LayoutConfig) -> Wiggles {
    let axis = end - start;
    let len = axis.hypot();
    let unit = normalize(axis).unwrap_or(Vec2::new(1.0, 0.0));
    let count = wiggle_count(len, bond_length, config);
    #[allow(clippy::cast_precision_loss, reason = "wiggle counts are small")]
    let sub = len / count as f64;

    let angle = config.wiggle_angle_deg * PI / 180.0;
    let left = rotate(unit, angle) * (sub / 2.0);
    let right = rotate(unit, -angle) * (sub / 2.0);

    let arcs = 2 * count;
    let mut chain = Vec::with_capacity(2 * arcs + 1);
    chain.push(start);
    let mut on_curve = start;
    for i in 0..arcs {
        let sprout = if i % 2 == 0 { left } else { right };
        chain.push(on_curve + sprout);
        on_curve = if i + 1 == arcs {
            end
        } else {
            #[allow(clippy::cast_precision_loss, reason = "wiggle counts are small")]
            let along = sub * (i + 1) as f64 / 2.0;
            start + unit * along
        };
        chain.push(on_curve);
    }

    // Control points sit at the sprout's perpendicular reach from the axis,
    // and the curve within the control polygon.
    let height = unit.cross(left).abs() + config.hit_margin(bond_length);
    let n = perpendicular(unit) * height;
    let boundary = vec![start + n, end + n, end - n, start - n];

    Wiggles { chain, boundary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemdraw_geom::polygon_contains;

    #[test]
    fn short_bonds_still_get_three_wiggles() {
        let config = LayoutConfig::default();
        assert_eq!(wiggle_count(0.5, 20.0, &config), 3);
        assert_eq!(wiggle_count(0.0, 20.0, &config), 3);
        let w = wiggles(Point::ZERO, Point::new(0.5, 0.0), 20.0, &config);
        // Three wiggles of two arcs each.
        assert_eq!(w.chain.len(), 13);
    }

    #[test]
    fn long_bonds_scale_wiggle_count() {
        let config = LayoutConfig::default();
        // Step is 20 × 0.1 × 2 = 4.
        assert_eq!(wiggle_count(40.0, 20.0, &config), 10);
        assert_eq!(wiggle_count(41.0, 20.0, &config), 11);
    }

    #[test]
    fn degenerate_step_uses_minimum() {
        let config = LayoutConfig::default();
        assert_eq!(wiggle_count(10.0, 0.0, &config), 3);
        assert_eq!(wiggle_count(f64::NAN, 20.0, &config), 3);
    }

    #[test]
    fn chain_alternates_and_ends_exactly() {
        let config = LayoutConfig::default();
        let end = Point::new(20.0, 0.0);
        let w = wiggles(Point::ZERO, end, 20.0, &config);
        assert_eq!(w.chain.first(), Some(&Point::ZERO));
        assert_eq!(w.chain.last(), Some(&end));
        // 20 / 4 = 5 wiggles of two arcs each.
        assert_eq!(w.chain.len(), 21);
        for (i, pair) in w.chain.windows(2).step_by(2).enumerate() {
            let (from, ctrl) = (pair[0], pair[1]);
            // Every sprout is half a sub-length.
            assert!(
                ((ctrl - from).hypot() - 2.0).abs() < 1e-9,
                "sprout {i} has length {}",
                (ctrl - from).hypot()
            );
            if i % 2 == 0 {
                assert!(ctrl.y > 0.0, "even sprouts go left");
            } else {
                assert!(ctrl.y < 0.0, "odd sprouts go right");
            }
        }
        // Arcs meet on the axis at every half sub-length.
        assert!((w.chain[2] - Point::new(2.0, 0.0)).hypot() < 1e-9);
        assert!((w.chain[4] - Point::new(4.0, 0.0)).hypot() < 1e-9);
        // Controls sit over the arc midpoints.
        assert!((w.chain[1].x - 1.0).abs() < 1e-9);
        assert!((w.chain[3].x - 3.0).abs() < 1e-9);
    }

    #[test]
    fn boundary_encloses_control_polygon() {
        let config = LayoutConfig::default();
        let w = wiggles(Point::new(3.0, 4.0), Point::new(23.0, 19.0), 20.0, &config);
        for p in &w.chain[1..w.chain.len() - 1] {
            assert!(polygon_contains(&w.boundary, *p), "{p:?} outside boundary");
        }
    }
}
