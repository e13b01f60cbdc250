// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke and fill building blocks for precise hit testing.
//!
//! These model exactly what bond layout draws: straight segments, quadratic
//! chains and convex filled outlines. They do not model joins or caps.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, ParamCurveNearest, Point, QuadBez};

use chemdraw_geom::{distance_to_polygon, polygon_contains};

use crate::{HitKind, HitParams, HitScore, PreciseHitTest};

fn stroke_score(dist: f64, half_width: f64, params: &HitParams) -> Option<HitScore> {
    (dist <= half_width + params.stroke_tolerance).then_some(HitScore {
        distance: dist,
        kind: HitKind::Stroke,
    })
}

/// A set of stroked line segments sharing one half-width.
///
/// The score is the distance to the nearest segment.
#[derive(Clone, Debug, Default)]
pub struct StrokedSegments {
    /// Centrelines.
    pub lines: Vec<Line>,
    /// Half of the stroke width.
    pub half_width: f64,
}

impl StrokedSegments {
    /// Creates a stroked set from centrelines.
    #[must_use]
    pub fn new(lines: impl IntoIterator<Item = Line>, half_width: f64) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            half_width,
        }
    }
}

impl PreciseHitTest for StrokedSegments {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let dist = self
            .lines
            .iter()
            .map(|line| line.nearest(pt, 0.).distance_sq.sqrt())
            .min_by(f64::total_cmp)?;
        stroke_score(dist, self.half_width, params)
    }
}

/// A stroked chain of quadratic Béziers `[p0, c0, p1, c1, p2, …]`.
#[derive(Clone, Debug, Default)]
pub struct StrokedQuadChain {
    /// Chain points: on-curve at even indices, controls at odd ones.
    pub chain: Vec<Point>,
    /// Half of the stroke width.
    pub half_width: f64,
}

impl PreciseHitTest for StrokedQuadChain {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let dist = self
            .chain
            .windows(3)
            .step_by(2)
            .map(|w| QuadBez::new(w[0], w[1], w[2]).nearest(pt, 1e-6).distance_sq.sqrt())
            .min_by(f64::total_cmp)?;
        stroke_score(dist, self.half_width, params)
    }
}

/// A filled polygon outline.
#[derive(Clone, Debug, Default)]
pub struct FilledPolygon {
    /// Outline vertices; the closing edge is implied.
    pub points: Vec<Point>,
}

impl PreciseHitTest for FilledPolygon {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        if polygon_contains(&self.points, pt) {
            return Some(HitScore {
                distance: 0.0,
                kind: HitKind::Fill,
            });
        }
        let dist = distance_to_polygon(&self.points, pt)?;
        (dist <= params.fill_tolerance).then_some(HitScore {
            distance: dist,
            kind: HitKind::Fill,
        })
    }
}
