// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch from bond attributes to layout geometry.

use alloc::vec;
use alloc::vec::Vec;

use chemdraw_geom::{convex_hull, normalize, perpendicular};
use kurbo::{Line, Point, Vec2};

use crate::joinery::{join_thick, join_wedge};
use crate::offset::{crossed_double_shape, double_shape, triple_shape};
use crate::trace::{Fallback, LayoutTrace};
use crate::trim::trim_line;
use crate::wavy::wiggles;
use crate::{
    BondLayout, BondOrder, BondShape, BondSpec, BondStereo, LayoutBase, LayoutConfig, LayoutKind,
};

/// The untrimmed atom-to-atom axis of a bond with its unit frame.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Axis {
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) unit: Vec2,
    pub(crate) normal: Vec2,
}

impl Axis {
    /// Reports [`Fallback::DegenerateBond`] and uses +X when the atoms
    /// coincide.
    pub(crate) fn new(spec: &BondSpec, trace: &mut (impl LayoutTrace + ?Sized)) -> Self {
        let unit = normalize(spec.principal()).unwrap_or_else(|| {
            trace.fallback(Fallback::DegenerateBond);
            Vec2::new(1.0, 0.0)
        });
        Self {
            start: spec.start.position,
            end: spec.end.position,
            unit,
            normal: perpendicular(unit),
        }
    }

    pub(crate) fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }

    /// The axis shifted by `distance` along the normal.
    pub(crate) fn offset(&self, distance: f64) -> Line {
        let d = self.normal * distance;
        Line::new(self.start + d, self.end + d)
    }
}

/// Hull of the given lines outset by `margin` in every direction.
fn lines_boundary(lines: &[Line], axis: &Axis, margin: f64) -> Vec<Point> {
    let along = axis.unit * margin;
    let across = axis.normal * margin;
    convex_hull(lines.iter().flat_map(|l| {
        [
            l.p0 - along + across,
            l.p0 - along - across,
            l.p1 + along + across,
            l.p1 + along - across,
        ]
    }))
}

/// Builds [`BondLayout`]s from [`BondSpec`]s.
///
/// The builder holds only configuration; every call is independent and
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct LayoutBuilder {
    config: LayoutConfig,
}

impl LayoutBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out one bond.
    #[must_use]
    pub fn build(&self, spec: &BondSpec) -> BondLayout {
        self.build_with_trace(spec, &mut ())
    }

    /// Lays out one bond, reporting each decision to `trace`.
    ///
    /// Dispatch, first match wins:
    ///
    /// | order          | stereo          | layout         |
    /// |----------------|-----------------|----------------|
    /// | 1              | thick           | thick          |
    /// | 1              | wedge, hatch    | wedge          |
    /// | 1              | indeterminate   | wavy           |
    /// | 2              | indeterminate   | crossed double |
    /// | 0, 0.5, 1      | any             | plain          |
    /// | 1.5, 2         | any             | double         |
    /// | 2.5, 3         | any             | triple         |
    pub fn build_with_trace<T: LayoutTrace + ?Sized>(&self, spec: &BondSpec, trace: &mut T) -> BondLayout {
        let kind = match (spec.order, spec.stereo) {
            (BondOrder::Single, BondStereo::Thick) => LayoutKind::Thick,
            (BondOrder::Single, BondStereo::Wedge) => LayoutKind::Wedge,
            (BondOrder::Single, BondStereo::Hatch) => LayoutKind::Hatch,
            (BondOrder::Single, BondStereo::Indeterminate) => LayoutKind::Wavy,
            (BondOrder::Double, BondStereo::Indeterminate) => LayoutKind::CrossedDouble,
            (BondOrder::Zero | BondOrder::Half | BondOrder::Single, _) => LayoutKind::Plain,
            (BondOrder::OneAndHalf | BondOrder::Double, _) => LayoutKind::Double,
            (BondOrder::TwoAndHalf | BondOrder::Triple, _) => LayoutKind::Triple,
        };
        trace.dispatched(kind);

        let axis = Axis::new(spec, trace);
        let config = &self.config;
        let margin = config.hit_margin(spec.bond_length);

        let (start, end, shape, boundary) = match kind {
            LayoutKind::Plain => {
                let line = trim_line(axis.line(), spec, trace);
                let boundary = lines_boundary(&[line], &axis, margin);
                (line.p0, line.p1, BondShape::Plain, boundary)
            }
            LayoutKind::Double | LayoutKind::CrossedDouble | LayoutKind::Triple => {
                let shape = match kind {
                    LayoutKind::CrossedDouble => crossed_double_shape(spec, &axis, config, trace),
                    LayoutKind::Triple => triple_shape(spec, &axis, config, trace),
                    _ => double_shape(spec, &axis, config, trace),
                };
                let lines: Vec<Line> = match &shape {
                    BondShape::Double {
                        primary, secondary, ..
                    } => vec![*primary, *secondary],
                    BondShape::Triple {
                        primary,
                        secondary,
                        tertiary,
                    } => vec![*primary, *secondary, *tertiary],
                    _ => Vec::new(),
                };
                let boundary = lines_boundary(&lines, &axis, margin);
                // Base endpoints follow the atom axis, trimmed like a plain bond.
                let line = trim_line(axis.line(), spec, &mut ());
                (line.p0, line.p1, shape, boundary)
            }
            LayoutKind::Wedge | LayoutKind::Hatch => {
                let line = trim_line(axis.line(), spec, trace);
                let n = axis.normal * config.wedge_half_width(spec.bond_length);
                let corners = (line.p1 + n, line.p1 - n);
                let joined = join_wedge(
                    axis.start,
                    line.p0,
                    &spec.end,
                    corners,
                    spec.bond_length,
                    config,
                    trace,
                );
                let shape = BondShape::Wedge {
                    first_corner: joined.first_corner,
                    second_corner: joined.second_corner,
                    vertex: joined.vertex,
                };
                let mut outline = vec![line.p0, joined.first_corner, joined.second_corner];
                outline.extend(joined.vertex);
                (line.p0, line.p1, shape, convex_hull(outline))
            }
            LayoutKind::Thick => {
                let line = trim_line(axis.line(), spec, trace);
                let n = axis.normal * config.wedge_half_width(spec.bond_length);
                let corners = [line.p0 + n, line.p1 + n, line.p1 - n, line.p0 - n];
                let corners = join_thick(
                    &spec.start,
                    &spec.end,
                    corners,
                    spec.bond_length,
                    config,
                    trace,
                );
                (line.p0, line.p1, BondShape::Thick { corners }, convex_hull(corners))
            }
            LayoutKind::Wavy => {
                let line = trim_line(axis.line(), spec, trace);
                let w = wiggles(line.p0, line.p1, spec.bond_length, config);
                (line.p0, line.p1, BondShape::Wavy { chain: w.chain }, w.boundary)
            }
        };

        BondLayout {
            base: LayoutBase {
                start,
                end,
                principal: spec.principal(),
                order: spec.order,
                stereo: spec.stereo,
                boundary,
            },
            shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{TraceEvent, TraceRecorder};
    use crate::BondEnd;

    fn spec(order: BondOrder, stereo: BondStereo) -> BondSpec {
        BondSpec::new(
            BondEnd::new(Point::ZERO),
            BondEnd::new(Point::new(20.0, 0.0)),
            order,
            20.0,
        )
        .with_stereo(stereo)
    }

    #[test]
    fn dispatch_table() {
        let builder = LayoutBuilder::default();
        let cases = [
            (BondOrder::Single, BondStereo::Thick, LayoutKind::Thick),
            (BondOrder::Single, BondStereo::Wedge, LayoutKind::Wedge),
            (BondOrder::Single, BondStereo::Hatch, LayoutKind::Hatch),
            (BondOrder::Single, BondStereo::Indeterminate, LayoutKind::Wavy),
            (BondOrder::Double, BondStereo::Indeterminate, LayoutKind::CrossedDouble),
            (BondOrder::Zero, BondStereo::Wedge, LayoutKind::Plain),
            (BondOrder::Half, BondStereo::None, LayoutKind::Plain),
            (BondOrder::Single, BondStereo::None, LayoutKind::Plain),
            (BondOrder::OneAndHalf, BondStereo::Indeterminate, LayoutKind::Double),
            (BondOrder::Double, BondStereo::Wedge, LayoutKind::Double),
            (BondOrder::TwoAndHalf, BondStereo::None, LayoutKind::Triple),
            (BondOrder::Triple, BondStereo::Thick, LayoutKind::Triple),
        ];
        for (order, stereo, kind) in cases {
            let mut rec = TraceRecorder::new();
            let layout = builder.build_with_trace(&spec(order, stereo), &mut rec);
            assert_eq!(layout.kind(), kind, "{order:?} {stereo:?}");
            assert_eq!(rec.events()[0], TraceEvent::Dispatched(kind));
        }
    }

    #[test]
    fn coincident_atoms_fall_back() {
        let s = BondSpec::new(
            BondEnd::new(Point::new(5.0, 5.0)),
            BondEnd::new(Point::new(5.0, 5.0)),
            BondOrder::Double,
            20.0,
        );
        let mut rec = TraceRecorder::new();
        let layout = LayoutBuilder::default().build_with_trace(&s, &mut rec);
        assert!(rec.fallbacks().any(|f| f == Fallback::DegenerateBond));
        assert!(layout.boundary().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn plain_boundary_encloses_segment() {
        let layout = LayoutBuilder::default().build(&spec(BondOrder::Single, BondStereo::None));
        for p in [Point::ZERO, Point::new(10.0, 0.0), Point::new(20.0, 0.0)] {
            assert!(chemdraw_geom::polygon_contains(layout.boundary(), p));
        }
    }

    #[test]
    fn default_wedge_is_a_triangle() {
        let layout = LayoutBuilder::default().build(&spec(BondOrder::Single, BondStereo::Wedge));
        let BondShape::Wedge {
            first_corner,
            second_corner,
            vertex,
        } = layout.shape
        else {
            panic!("expected wedge");
        };
        assert_eq!(first_corner, Point::new(20.0, 2.0));
        assert_eq!(second_corner, Point::new(20.0, -2.0));
        assert_eq!(vertex, None);
        assert_eq!(layout.start(), Point::ZERO);
    }

    #[test]
    fn thick_corners_are_outline_ordered() {
        let layout = LayoutBuilder::default().build(&spec(BondOrder::Single, BondStereo::Thick));
        let BondShape::Thick { corners } = layout.shape else {
            panic!("expected thick");
        };
        assert_eq!(
            corners,
            [
                Point::new(0.0, 2.0),
                Point::new(20.0, 2.0),
                Point::new(20.0, -2.0),
                Point::new(0.0, -2.0),
            ]
        );
    }
}
