// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use chemdraw_geom::{convex_hull, polygon_contains, segment_polygon_exit};
use kurbo::{Point, Rect, Vec2};

/// Convex polygon around an atom's visible glyphs.
///
/// The vertices are counter-clockwise with no collinear points. A hull is
/// either empty or has at least three vertices; inputs that collapse to a
/// point or a segment produce an empty hull.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtomHull {
    points: Vec<Point>,
}

impl AtomHull {
    /// A hull for an atom with nothing drawn.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds the convex hull of `points`.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let points = convex_hull(points);
        if points.len() < 3 {
            Self::empty()
        } else {
            Self { points }
        }
    }

    /// Builds the convex hull of the corners of `rects`.
    #[must_use]
    pub fn from_rects(rects: impl IntoIterator<Item = Rect>) -> Self {
        Self::from_points(rects.into_iter().flat_map(|r| {
            [
                Point::new(r.x0, r.y0),
                Point::new(r.x1, r.y0),
                Point::new(r.x1, r.y1),
                Point::new(r.x0, r.y1),
            ]
        }))
    }

    /// Convex hull of the union of two hulls.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self::from_points(self.points.iter().chain(&other.points).copied())
    }

    /// The hull vertices, counter-clockwise.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the atom has no visible extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `pt` lies inside the hull. An empty hull contains nothing.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        polygon_contains(&self.points, pt)
    }

    /// Axis-aligned bounds of the hull, or `None` if it is empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
        )
    }

    /// Returns the hull moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            points: self.points.iter().map(|p| *p + offset).collect(),
        }
    }

    /// Where a ray from `center` towards `toward` leaves the hull.
    ///
    /// Returns `None` when the hull is empty or the segment
    /// `center → toward` does not cross the hull boundary (for example when
    /// `toward` is itself inside the hull).
    #[must_use]
    pub fn exit_point(&self, center: Point, toward: Point) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        segment_polygon_exit(center, toward, &self.points).map(|(pt, _)| pt)
    }
}
