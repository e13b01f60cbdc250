// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector helpers with a fixed chirality.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::EPSILON;

/// Which side of a directed line a point falls on.
///
/// [`Side::Left`] is the side that [`perpendicular`] of the direction points
/// to. In a Y-down (screen) coordinate system this is the clockwise side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The side [`perpendicular`] points to.
    Left,
    /// The opposite side.
    Right,
}

impl Side {
    /// `1.0` for [`Side::Left`], `-1.0` for [`Side::Right`].
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Rotates `v` by +90°: `(x, y) -> (-y, x)`.
///
/// Every offset computation in the workspace relies on this one convention to
/// tell the two sides of a bond apart.
#[inline]
#[must_use]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Returns `v` scaled to unit length, or `None` for zero-length or
/// non-finite vectors.
#[must_use]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = v.hypot();
    if !len.is_finite() || len < EPSILON {
        return None;
    }
    Some(v / len)
}

/// Rotates `v` by `radians`, positive towards [`perpendicular`].
#[must_use]
pub fn rotate(v: Vec2, radians: f64) -> Vec2 {
    let (s, c) = radians.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Signed angle in radians that rotates `from` onto `to`, in `(-π, π]`.
///
/// Returns `None` if either vector has zero length.
#[must_use]
pub fn signed_angle(from: Vec2, to: Vec2) -> Option<f64> {
    if normalize(from).is_none() || normalize(to).is_none() {
        return None;
    }
    Some(from.cross(to).atan2(from.dot(to)))
}

/// Unsigned angle between `a` and `b` in degrees, in `[0, 180]`.
#[must_use]
pub fn angle_between_deg(a: Vec2, b: Vec2) -> Option<f64> {
    signed_angle(a, b).map(|r| r.abs() * 180.0 / PI)
}

/// Reports which side of the line through `origin` along `direction` the
/// `point` lies on.
///
/// Returns `None` for collinear points, a zero-length `direction`, or
/// non-finite input.
#[must_use]
pub fn side_of(point: Point, origin: Point, direction: Vec2) -> Option<Side> {
    let unit = normalize(direction)?;
    let cross = unit.cross(point - origin);
    if !cross.is_finite() || cross.abs() < EPSILON {
        None
    } else if cross > 0.0 {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn perpendicular_turns_positive() {
        assert_eq!(perpendicular(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
        assert_eq!(perpendicular(Vec2::new(0.0, 1.0)), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn normalize_rejects_zero() {
        assert!(normalize(Vec2::ZERO).is_none());
        assert!(normalize(Vec2::new(f64::NAN, 1.0)).is_none());
        assert!(close(normalize(Vec2::new(3.0, 4.0)).unwrap(), Vec2::new(0.6, 0.8)));
    }

    #[test]
    fn rotate_matches_perpendicular() {
        let v = Vec2::new(2.0, 1.0);
        assert!(close(rotate(v, PI / 2.0), perpendicular(v)));
    }

    #[test]
    fn signed_angle_sign_follows_perpendicular() {
        let x = Vec2::new(1.0, 0.0);
        let a = signed_angle(x, perpendicular(x)).unwrap();
        assert!((a - PI / 2.0).abs() < 1e-12);
        let b = signed_angle(perpendicular(x), x).unwrap();
        assert!((b + PI / 2.0).abs() < 1e-12);
        assert!(signed_angle(Vec2::ZERO, x).is_none());
    }

    #[test]
    fn angle_between_is_unsigned() {
        let a = angle_between_deg(Vec2::new(1.0, 0.0), Vec2::new(-1.0, 1.0)).unwrap();
        assert!((a - 135.0).abs() < 1e-9);
    }

    #[test]
    fn side_of_uses_perpendicular_as_left() {
        let o = Point::ZERO;
        let d = Vec2::new(1.0, 0.0);
        assert_eq!(side_of(Point::new(5.0, 1.0), o, d), Some(Side::Left));
        assert_eq!(side_of(Point::new(5.0, -1.0), o, d), Some(Side::Right));
        assert_eq!(side_of(Point::new(5.0, 0.0), o, d), None);
        assert_eq!(side_of(Point::new(5.0, 1.0), o, Vec2::ZERO), None);
    }
}
