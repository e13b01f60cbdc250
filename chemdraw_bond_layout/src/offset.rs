// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the extra lines of double and triple bonds.
//!
//! A double bond either straddles the atom axis (both lines offset by half the
//! separation) or keeps its main line on the axis and puts the extra line on
//! one side. The side comes from explicit [`Placement`], else from the side
//! the ring centroid is on. A side-placed extra line is then shortened so it
//! fits inside the ring or the angle to neighbouring bonds:
//! - when the centroid is roughly square to the bond (a convex ring), clip it
//!   against the rays from each atom to the centroid;
//! - otherwise, and always for acyclic bonds, clip it against the bisector
//!   between the bond and the first neighbouring bond whose bisector crosses it.

use chemdraw_geom::{Side, angle_between_deg, intersect_lines, rotate, side_of, signed_angle};
use kurbo::{Line, Point};

use crate::builder::Axis;
use crate::trace::{Fallback, LayoutTrace, SideReason, Terminal};
use crate::trim::trim_line;
use crate::{BondShape, BondSpec, LayoutConfig, Neighbour, Placement};

/// Picks the side for a double bond's extra line, along with the centroid on
/// that side if there is one. `None` means the lines straddle the axis.
pub(crate) fn choose_side(
    spec: &BondSpec,
    axis: &Axis,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> Option<(Side, Option<Point>)> {
    let centroids = [
        (spec.ring_centroid, SideReason::RingCentroid),
        (spec.secondary_ring_centroid, SideReason::SecondaryRingCentroid),
    ];
    let centroid_side = centroids.iter().find_map(|(c, reason)| {
        let c = (*c)?;
        side_of(c, axis.start, axis.unit).map(|side| (side, c, *reason))
    });

    let explicit = match spec.placement {
        Placement::Clockwise => Some(Side::Left),
        Placement::Anticlockwise => Some(Side::Right),
        Placement::None => None,
    };
    if let Some(side) = explicit {
        trace.offset_side(side, SideReason::Placement);
        let centroid = centroids
            .iter()
            .filter_map(|(c, _)| *c)
            .find(|c| side_of(*c, axis.start, axis.unit) == Some(side));
        return Some((side, centroid));
    }

    match centroid_side {
        Some((side, c, reason)) => {
            trace.offset_side(side, reason);
            Some((side, Some(c)))
        }
        None => {
            if spec.ring_centroid.is_some() || spec.secondary_ring_centroid.is_some() {
                trace.fallback(Fallback::CollinearCentroid);
            }
            None
        }
    }
}

/// Clips the extra line against the bisector of the bond and the first
/// neighbour whose bisector crosses it. `near` is the end of the extra line
/// at `atom`.
fn split_angle(
    atom: Point,
    other: Point,
    neighbours: &[Neighbour],
    near: Point,
    far: Point,
) -> Option<Point> {
    let bond = other - atom;
    for neighbour in neighbours {
        let v = neighbour.far - atom;
        let Some(theta) = signed_angle(v, bond) else {
            continue;
        };
        let bisector = rotate(v, theta / 2.0);
        let Some((t, u)) = intersect_lines(near, far, atom, atom + bisector) else {
            continue;
        };
        if t > 0.0 && t < 1.0 && u > 0.0 {
            return Some(near.lerp(far, t));
        }
    }
    None
}

/// Clips the extra line against the ray from `atom` to `centroid`.
fn clip_to_centroid(atom: Point, centroid: Point, near: Point, far: Point) -> Option<Point> {
    let (t, _) = intersect_lines(near, far, atom, centroid)?;
    (t > 0.0 && t < 1.0).then(|| near.lerp(far, t))
}

fn shorten_inner(
    spec: &BondSpec,
    axis: &Axis,
    inner: Line,
    centroid: Option<Point>,
    config: &LayoutConfig,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> Line {
    let start_free = spec.start.hull.is_empty();
    let end_free = spec.end.hull.is_empty();

    let convex = centroid.filter(|c| {
        let mid = axis.start.midpoint(axis.end);
        angle_between_deg(*c - mid, axis.unit).is_some_and(|a| config.in_ring_window(a))
    });

    if let Some(c) = convex {
        let mut clip = |free: bool, atom: Point, near: Point, far: Point, terminal: Terminal| {
            if !free {
                return near;
            }
            clip_to_centroid(atom, c, near, far).unwrap_or_else(|| {
                trace.fallback(Fallback::InnerLineUnclipped(terminal));
                near
            })
        };
        let p0 = clip(start_free, axis.start, inner.p0, inner.p1, Terminal::Start);
        let p1 = clip(end_free, axis.end, inner.p1, inner.p0, Terminal::End);
        return Line::new(p0, p1);
    }

    let p0 = if start_free {
        split_angle(axis.start, axis.end, &spec.start.neighbours, inner.p0, inner.p1)
            .unwrap_or(inner.p0)
    } else {
        inner.p0
    };
    let p1 = if end_free {
        split_angle(axis.end, axis.start, &spec.end.neighbours, inner.p1, inner.p0)
            .unwrap_or(inner.p1)
    } else {
        inner.p1
    };
    Line::new(p0, p1)
}

/// Lines of a double bond (order 1.5 or 2).
pub(crate) fn double_shape(
    spec: &BondSpec,
    axis: &Axis,
    config: &LayoutConfig,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> BondShape {
    let sep = config.line_separation(spec.bond_length);
    let (primary, secondary) = match choose_side(spec, axis, trace) {
        Some((side, centroid)) => {
            let inner = axis.offset(side.sign() * sep);
            let inner = shorten_inner(spec, axis, inner, centroid, config, trace);
            (axis.line(), inner)
        }
        None => (axis.offset(sep / 2.0), axis.offset(-sep / 2.0)),
    };
    BondShape::Double {
        primary: trim_line(primary, spec, trace),
        secondary: trim_line(secondary, spec, trace),
        crossed: false,
    }
}

/// Crossed lines of a double bond with undefined geometry.
pub(crate) fn crossed_double_shape(
    spec: &BondSpec,
    axis: &Axis,
    config: &LayoutConfig,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> BondShape {
    let half = config.line_separation(spec.bond_length) / 2.0;
    let n = axis.normal * half;
    let primary = Line::new(axis.start + n, axis.end - n);
    let secondary = Line::new(axis.start - n, axis.end + n);
    BondShape::Double {
        primary: trim_line(primary, spec, trace),
        secondary: trim_line(secondary, spec, trace),
        crossed: true,
    }
}

/// Lines of a triple bond (order 2.5 or 3), always symmetric about the axis.
pub(crate) fn triple_shape(
    spec: &BondSpec,
    axis: &Axis,
    config: &LayoutConfig,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> BondShape {
    let sep = config.line_separation(spec.bond_length);
    BondShape::Triple {
        primary: trim_line(axis.line(), spec, trace),
        secondary: trim_line(axis.offset(sep), spec, trace),
        tertiary: trim_line(axis.offset(-sep), spec, trace),
    }
}
