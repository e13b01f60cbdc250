// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reshaping stereo bond outlines where they meet other bonds.
//!
//! Where a wedge's wide end sits on a bare carbon it may abut:
//! - a thick bond, or the wide end of another wedge: both outlines are mitred
//!   along the bisector of the two bonds so they meet without overlapping;
//! - only plain single bonds splayed obliquely: the flat end is chamfered
//!   back along the two most widely splayed of them.
//!
//! A thick bond is mitred the same way at each end where a wedge's wide end
//! meets it. Each layout only ever reshapes its own outline; the neighbour
//! does the mirror-image work when it is laid out.

use chemdraw_geom::{angle_between_deg, intersect_lines, normalize, perpendicular};
use kurbo::Point;
use smallvec::SmallVec;

use crate::trace::{Fallback, Joint, LayoutTrace, Terminal};
use crate::{BondEnd, LayoutConfig, Neighbour};

/// Mitres two outline edges that end near `centre` against the bisector of
/// the bonds `centre → own_far` and `centre → other_far`.
///
/// Each edge is `(from, to)` with `to` the point to move. The edge on the
/// side of the other bond is cut back to the bisector and the edge on the
/// far side is extended to the reversed bisector. Returns the new `to`
/// points in edge order.
pub(crate) fn mitre(
    centre: Point,
    own_far: Point,
    other_far: Point,
    edges: [(Point, Point); 2],
    reach: f64,
) -> Option<[Point; 2]> {
    let own = normalize(own_far - centre)?;
    let other = normalize(other_far - centre)?;
    let dir = normalize(own + other).unwrap_or_else(|| perpendicular(own));
    let ahead = centre + dir * reach;
    let behind = centre - dir * reach;

    for inner in 0..2 {
        let outer = 1 - inner;
        let (i_from, i_to) = edges[inner];
        let (o_from, o_to) = edges[outer];
        let Some((ti, ui)) = intersect_lines(i_from, i_to, centre, ahead) else {
            continue;
        };
        if !(ti > 0.0 && ti < 1.0 && (0.0..=1.0).contains(&ui)) {
            continue;
        }
        let Some((to, uo)) = intersect_lines(o_from, o_to, centre, behind) else {
            continue;
        };
        if !(to > 0.0 && (0.0..=1.0).contains(&uo)) {
            continue;
        }
        let mut out = [i_to, o_to];
        out[inner] = i_from.lerp(i_to, ti);
        out[outer] = o_from.lerp(o_to, to);
        return Some(out);
    }
    None
}

fn only<'a>(
    neighbours: &'a [Neighbour],
    pred: impl Fn(&Neighbour) -> bool,
) -> Option<&'a Neighbour> {
    let mut it = neighbours.iter().filter(|n| pred(*n));
    let first = it.next()?;
    it.next().is_none().then_some(first)
}

/// A reshaped wedge end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct WedgeEnd {
    pub(crate) first_corner: Point,
    pub(crate) second_corner: Point,
    pub(crate) vertex: Option<Point>,
}

/// Applies wedge joinery at the wide end.
///
/// `origin` is the untrimmed start atom, used for angles; `apex` is the
/// trimmed apex the edges run from.
pub(crate) fn join_wedge(
    origin: Point,
    apex: Point,
    end: &BondEnd,
    corners: (Point, Point),
    bond_length: f64,
    config: &LayoutConfig,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> WedgeEnd {
    let plain = WedgeEnd {
        first_corner: corners.0,
        second_corner: corners.1,
        vertex: None,
    };
    if !end.is_bare_carbon() || end.neighbours.is_empty() {
        return plain;
    }
    let centre = end.position;
    let reach = config.bisector_scale * bond_length;

    let target = only(&end.neighbours, Neighbour::is_thick)
        .map(|n| (n, Joint::WedgeToThick))
        .or_else(|| {
            only(&end.neighbours, Neighbour::is_wedge_ending_here).map(|n| (n, Joint::WedgeToWedge))
        });
    if let Some((neighbour, joint)) = target {
        let edges = [(apex, corners.0), (apex, corners.1)];
        return match mitre(centre, origin, neighbour.far, edges, reach) {
            Some([first_corner, second_corner]) => {
                trace.joined(joint);
                WedgeEnd {
                    first_corner,
                    second_corner,
                    vertex: None,
                }
            }
            None => {
                trace.fallback(Fallback::MitreFailed);
                plain
            }
        };
    }

    chamfer(origin, apex, centre, &end.neighbours, corners, config, trace).unwrap_or(plain)
}

/// Whether every neighbour is a plain single bond splayed obliquely to the
/// wedge axis.
fn chamfer_eligible(origin: Point, centre: Point, neighbours: &[Neighbour], config: &LayoutConfig) -> bool {
    let axis = origin - centre;
    !neighbours.is_empty()
        && neighbours.iter().all(|n| {
            n.is_plain_single()
                && angle_between_deg(axis, n.far - centre).is_some_and(|a| config.is_oblique(a))
        })
}

/// The (up to) two neighbours with the widest mutual angle.
fn widest_pair(centre: Point, neighbours: &[Neighbour]) -> Option<(Point, Option<Point>)> {
    let mut best: Option<(f64, Point, Point)> = None;
    for (i, a) in neighbours.iter().enumerate() {
        for b in &neighbours[i + 1..] {
            let Some(angle) = angle_between_deg(a.far - centre, b.far - centre) else {
                continue;
            };
            if best.is_none_or(|(widest, ..)| angle > widest) {
                best = Some((angle, a.far, b.far));
            }
        }
    }
    match best {
        Some((_, a, b)) => Some((a, Some(b))),
        None => neighbours.first().map(|n| (n.far, None)),
    }
}

fn chamfer(
    origin: Point,
    apex: Point,
    centre: Point,
    neighbours: &[Neighbour],
    corners: (Point, Point),
    config: &LayoutConfig,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> Option<WedgeEnd> {
    if !chamfer_eligible(origin, centre, neighbours, config) {
        return None;
    }
    let (a, b) = widest_pair(centre, neighbours)?;
    let mut chosen: SmallVec<[Point; 2]> = SmallVec::new();
    chosen.push(a);
    chosen.extend(b);
    let bounded = chosen.len() > 1;

    let cut = |corner: Point| {
        chosen
            .iter()
            .filter_map(|far| intersect_lines(apex, corner, centre, *far))
            .filter(|(t, u)| *t > 0.0 && *t < 1.0 && (!bounded || (0.0..=1.0).contains(u)))
            .map(|(t, _)| t)
            .max_by(f64::total_cmp)
            .map(|t| apex.lerp(corner, t))
    };
    let first = cut(corners.0);
    let second = cut(corners.1);
    if first.is_none() && second.is_none() {
        trace.fallback(Fallback::ChamferRejected);
        return None;
    }
    trace.joined(Joint::Chamfer {
        neighbours: chosen.len(),
    });
    Some(WedgeEnd {
        first_corner: first.unwrap_or(corners.0),
        second_corner: second.unwrap_or(corners.1),
        vertex: Some(centre),
    })
}

/// Mitres each end of a thick bond that meets the wide end of a wedge.
///
/// `corners` are in outline order: start-left, end-left, end-right,
/// start-right.
pub(crate) fn join_thick(
    start: &BondEnd,
    end: &BondEnd,
    mut corners: [Point; 4],
    bond_length: f64,
    config: &LayoutConfig,
    trace: &mut (impl LayoutTrace + ?Sized),
) -> [Point; 4] {
    let reach = config.bisector_scale * bond_length;
    for (terminal, atom, other) in [(Terminal::Start, start, end), (Terminal::End, end, start)] {
        if !atom.is_bare_carbon() {
            continue;
        }
        let Some(wedge) = only(&atom.neighbours, Neighbour::is_wedge_ending_here) else {
            continue;
        };
        // (far corner, near corner) per side.
        let (left, right) = match terminal {
            Terminal::Start => ((1, 0), (2, 3)),
            Terminal::End => ((0, 1), (3, 2)),
        };
        let edges = [(corners[left.0], corners[left.1]), (corners[right.0], corners[right.1])];
        match mitre(atom.position, other.position, wedge.far, edges, reach) {
            Some([l, r]) => {
                corners[left.1] = l;
                corners[right.1] = r;
                trace.joined(Joint::ThickToWedge(terminal));
            }
            None => trace.fallback(Fallback::MitreFailed),
        }
    }
    corners
}
