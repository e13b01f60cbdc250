// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chemdraw_bond_layout::{BondGeometry, BondLayout};
use chemdraw_geom::{distance_to_polygon, polygon_contains};
use kurbo::Point;

use crate::stroke::{FilledPolygon, StrokedQuadChain, StrokedSegments};
use crate::{HitParams, HitScore, PreciseHitTest};

/// Broad test: inside the layout boundary, or within the larger tolerance of
/// its edge.
fn near_boundary(boundary: &[Point], pt: Point, params: &HitParams) -> bool {
    if polygon_contains(boundary, pt) {
        return true;
    }
    let slack = params.stroke_tolerance.max(params.fill_tolerance) + params.line_half_width;
    distance_to_polygon(boundary, pt).is_some_and(|d| d <= slack)
}

impl PreciseHitTest for BondLayout {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        if !near_boundary(self.boundary(), pt, params) {
            return None;
        }
        match self.geometry() {
            BondGeometry::Lines(lines) => {
                StrokedSegments::new(lines, params.line_half_width).hit_test_local(pt, params)
            }
            BondGeometry::Polygon(points) => FilledPolygon { points }.hit_test_local(pt, params),
            BondGeometry::QuadChain(chain) => StrokedQuadChain {
                chain,
                half_width: params.line_half_width,
            }
            .hit_test_local(pt, params),
        }
    }
}

/// Returns the key and score of the layout closest to `pt`, if any is hit.
///
/// Ties keep the earliest candidate.
pub fn pick<'a, K>(
    candidates: impl IntoIterator<Item = (K, &'a BondLayout)>,
    pt: Point,
    params: &HitParams,
) -> Option<(K, HitScore)> {
    let mut best: Option<(K, HitScore)> = None;
    for (key, layout) in candidates {
        let Some(score) = layout.hit_test_local(pt, params) else {
            continue;
        };
        if best
            .as_ref()
            .is_none_or(|(_, b)| score.cmp_distance(b).is_lt())
        {
            best = Some((key, score));
        }
    }
    best
}
