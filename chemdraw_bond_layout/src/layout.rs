// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output geometry of bond layout.

use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point, Vec2};
use smallvec::{SmallVec, smallvec};

use crate::{BondOrder, BondStereo};

/// Coarse classification of a finished layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LayoutKind {
    /// One line.
    Plain,
    /// Two parallel lines.
    Double,
    /// Two lines crossing between the parallel offsets.
    CrossedDouble,
    /// Three parallel lines.
    Triple,
    /// Filled wedge outline.
    Wedge,
    /// Hashed wedge outline.
    Hatch,
    /// Bold bond outline.
    Thick,
    /// Quadratic squiggle.
    Wavy,
}

/// Fields shared by every layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBase {
    /// Start of the bond after trimming against the start atom's hull.
    pub start: Point,
    /// End of the bond after trimming against the end atom's hull.
    pub end: Point,
    /// Untrimmed vector from the start atom to the end atom.
    pub principal: Vec2,
    /// Order the bond was laid out for.
    pub order: BondOrder,
    /// Stereo the bond was laid out for.
    pub stereo: BondStereo,
    /// Polygon enclosing the drawn geometry, for hit testing.
    pub boundary: Vec<Point>,
}

/// Variant-specific geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum BondShape {
    /// The segment `base.start → base.end`.
    Plain,
    /// Two lines.
    ///
    /// For a centred double bond both lines are offset from the atom axis;
    /// otherwise `primary` lies on the axis and `secondary` beside it. When
    /// `crossed` is set the two lines form an X instead.
    Double {
        /// Main line.
        primary: Line,
        /// Extra line, possibly shortened inside a ring.
        secondary: Line,
        /// Whether the lines cross (undefined cis/trans geometry).
        crossed: bool,
    },
    /// Three lines: on the axis and either side of it.
    Triple {
        /// Line on the axis.
        primary: Line,
        /// Line on the perpendicular side.
        secondary: Line,
        /// Line on the other side.
        tertiary: Line,
    },
    /// Wedge outline with its apex at `base.start`.
    ///
    /// The outline runs `start → first_corner → vertex? → second_corner`.
    Wedge {
        /// Wide-end corner on the perpendicular side.
        first_corner: Point,
        /// Wide-end corner on the other side.
        second_corner: Point,
        /// Extra outline point between the corners when the wide end has
        /// been chamfered against neighbouring bonds.
        vertex: Option<Point>,
    },
    /// Thick bond outline.
    Thick {
        /// Corners in outline order: start-left, end-left, end-right,
        /// start-right, where "left" is the perpendicular side.
        corners: [Point; 4],
    },
    /// Quadratic Bézier chain `[start, c0, p1, c1, p2, …, end]`: every odd
    /// entry is a control point, every even entry an on-curve point.
    Wavy {
        /// Chain points.
        chain: Vec<Point>,
    },
}

/// Renderer-agnostic drawable geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum BondGeometry {
    /// Stroked line segments.
    Lines(SmallVec<[Line; 3]>),
    /// A closed, filled outline.
    Polygon(Vec<Point>),
    /// A stroked quadratic chain, see [`BondShape::Wavy`].
    QuadChain(Vec<Point>),
}

impl BondGeometry {
    /// Converts the geometry into a [`BezPath`].
    ///
    /// Lines become separate open subpaths, polygons a closed subpath and
    /// quadratic chains a single open subpath.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        match self {
            Self::Lines(lines) => {
                for line in lines {
                    path.move_to(line.p0);
                    path.line_to(line.p1);
                }
            }
            Self::Polygon(points) => {
                if let Some((first, rest)) = points.split_first() {
                    path.move_to(*first);
                    for p in rest {
                        path.line_to(*p);
                    }
                    path.close_path();
                }
            }
            Self::QuadChain(points) => {
                if let Some((first, rest)) = points.split_first() {
                    path.move_to(*first);
                    for pair in rest.chunks_exact(2) {
                        path.quad_to(pair[0], pair[1]);
                    }
                }
            }
        }
        path
    }

    /// Every point the geometry is defined by.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Lines(lines) => lines.iter().flat_map(|l| [l.p0, l.p1]).collect(),
            Self::Polygon(points) | Self::QuadChain(points) => points.clone(),
        }
    }
}

/// The finished layout of one bond.
///
/// A layout is rebuilt from scratch whenever the diagram changes; it is never
/// patched in place.
#[derive(Clone, Debug, PartialEq)]
pub struct BondLayout {
    /// Fields shared by every kind.
    pub base: LayoutBase,
    /// Kind-specific geometry.
    pub shape: BondShape,
}

impl BondLayout {
    /// Trimmed start point.
    #[must_use]
    pub fn start(&self) -> Point {
        self.base.start
    }

    /// Trimmed end point.
    #[must_use]
    pub fn end(&self) -> Point {
        self.base.end
    }

    /// Hit-test polygon.
    #[must_use]
    pub fn boundary(&self) -> &[Point] {
        &self.base.boundary
    }

    /// Classification of this layout.
    #[must_use]
    pub fn kind(&self) -> LayoutKind {
        match &self.shape {
            BondShape::Plain => LayoutKind::Plain,
            BondShape::Double { crossed: true, .. } => LayoutKind::CrossedDouble,
            BondShape::Double { .. } => LayoutKind::Double,
            BondShape::Triple { .. } => LayoutKind::Triple,
            BondShape::Wedge { .. } if self.base.stereo == BondStereo::Hatch => LayoutKind::Hatch,
            BondShape::Wedge { .. } => LayoutKind::Wedge,
            BondShape::Thick { .. } => LayoutKind::Thick,
            BondShape::Wavy { .. } => LayoutKind::Wavy,
        }
    }

    /// The outline of a wedge, if this is one.
    #[must_use]
    pub fn wedge_outline(&self) -> Option<Vec<Point>> {
        match &self.shape {
            BondShape::Wedge {
                first_corner,
                second_corner,
                vertex,
            } => {
                let mut outline = Vec::with_capacity(4);
                outline.push(self.base.start);
                outline.push(*first_corner);
                outline.extend(*vertex);
                outline.push(*second_corner);
                Some(outline)
            }
            _ => None,
        }
    }

    /// The geometry a renderer should draw.
    #[must_use]
    pub fn geometry(&self) -> BondGeometry {
        match &self.shape {
            BondShape::Plain => {
                BondGeometry::Lines(smallvec![Line::new(self.base.start, self.base.end)])
            }
            BondShape::Double {
                primary, secondary, ..
            } => BondGeometry::Lines(smallvec![*primary, *secondary]),
            BondShape::Triple {
                primary,
                secondary,
                tertiary,
            } => BondGeometry::Lines(smallvec![*primary, *secondary, *tertiary]),
            BondShape::Wedge { .. } => {
                BondGeometry::Polygon(self.wedge_outline().unwrap_or_default())
            }
            BondShape::Thick { corners } => BondGeometry::Polygon(corners.to_vec()),
            BondShape::Wavy { chain } => BondGeometry::QuadChain(chain.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::PathEl;

    fn base(stereo: BondStereo) -> LayoutBase {
        LayoutBase {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
            principal: Vec2::new(10.0, 0.0),
            order: BondOrder::Single,
            stereo,
            boundary: Vec::new(),
        }
    }

    #[test]
    fn wedge_outline_includes_vertex_when_present() {
        let layout = BondLayout {
            base: base(BondStereo::Hatch),
            shape: BondShape::Wedge {
                first_corner: Point::new(9.0, 1.0),
                second_corner: Point::new(9.0, -1.0),
                vertex: Some(Point::new(10.0, 0.0)),
            },
        };
        assert_eq!(layout.kind(), LayoutKind::Hatch);
        assert_eq!(
            layout.wedge_outline().unwrap(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(9.0, 1.0),
                Point::new(10.0, 0.0),
                Point::new(9.0, -1.0),
            ]
        );
    }

    #[test]
    fn quad_chain_path_uses_quads() {
        let geometry = BondGeometry::QuadChain(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, -1.0),
            Point::new(4.0, 0.0),
        ]);
        let path = geometry.to_bez_path();
        let quads = path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::QuadTo(..)))
            .count();
        assert_eq!(quads, 2);
    }

    #[test]
    fn plain_geometry_is_the_trimmed_segment() {
        let layout = BondLayout {
            base: base(BondStereo::None),
            shape: BondShape::Plain,
        };
        assert_eq!(
            layout.geometry(),
            BondGeometry::Lines(smallvec![Line::new((0.0, 0.0), (10.0, 0.0))])
        );
        assert_eq!(layout.geometry().points().len(), 2);
    }
}
