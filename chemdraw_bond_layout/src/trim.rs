// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pulling bond ends back to the edge of atom label hulls.

use chemdraw_geom::normalize;
use chemdraw_hull::AtomHull;
use kurbo::{Line, Point};

use crate::BondSpec;
use crate::trace::{Fallback, LayoutTrace, Terminal};

/// Moves `from` to where the segment `from → toward` leaves `hull`, plus
/// `standoff` further along the segment.
///
/// Returns `None` when the hull is empty or not crossed.
pub(crate) fn trim_point(from: Point, toward: Point, hull: &AtomHull, standoff: f64) -> Option<Point> {
    let exit = hull.exit_point(from, toward)?;
    let unit = normalize(toward - from)?;
    Some(exit + unit * standoff)
}

/// Trims both ends of `line` against the bond's start and end hulls.
///
/// If the trimmed line would point the other way (the hulls overlap along
/// the line) the untrimmed line is returned.
pub(crate) fn trim_line(line: Line, spec: &BondSpec, trace: &mut (impl LayoutTrace + ?Sized)) -> Line {
    let p0 = trim_point(line.p0, line.p1, &spec.start.hull, spec.standoff);
    let p1 = trim_point(line.p1, line.p0, &spec.end.hull, spec.standoff);
    let trimmed = Line::new(p0.unwrap_or(line.p0), p1.unwrap_or(line.p1));
    if (p0.is_some() || p1.is_some()) && (trimmed.p1 - trimmed.p0).dot(line.p1 - line.p0) <= 0.0 {
        trace.fallback(Fallback::OverlappingHulls);
        return line;
    }
    if p0.is_some() {
        trace.trimmed(Terminal::Start);
    }
    if p1.is_some() {
        trace.trimmed(Terminal::End);
    }
    trimmed
}
