// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `chemdraw_precise_hit` crate against real bond layouts.

use chemdraw_bond_layout::{
    BondEnd, BondLayout, BondOrder, BondSpec, BondStereo, Diagram, DiagramAtom, DiagramBond,
    LayoutBuilder,
};
use chemdraw_precise_hit::{HitKind, HitParams, PreciseHitTest, pick};
use kurbo::Point;

fn layout(order: BondOrder, stereo: BondStereo) -> BondLayout {
    let spec = BondSpec::new(
        BondEnd::new(Point::new(0.0, 0.0)),
        BondEnd::new(Point::new(20.0, 0.0)),
        order,
        20.0,
    )
    .with_stereo(stereo);
    LayoutBuilder::default().build(&spec)
}

#[test]
fn double_bond_gap_is_not_a_hit() {
    // Straddled lines at y = ±2.
    let double = layout(BondOrder::Double, BondStereo::None);
    let params = HitParams {
        stroke_tolerance: 0.25,
        ..HitParams::default()
    };
    assert!(double.hit_test_local(Point::new(10.0, 2.2), &params).is_some());
    assert!(double.hit_test_local(Point::new(10.0, 0.0), &params).is_none());
}

#[test]
fn wedge_is_hit_as_fill() {
    let wedge = layout(BondOrder::Single, BondStereo::Wedge);
    let params = HitParams::default();
    let hit = wedge.hit_test_local(Point::new(18.0, 1.0), &params).unwrap();
    assert_eq!(hit.kind, HitKind::Fill);
    assert_eq!(hit.distance, 0.0);
    // Near the apex the wedge is narrow.
    assert!(wedge.hit_test_local(Point::new(2.0, 2.0), &params).is_none());
}

#[test]
fn wavy_bond_is_hit_on_the_curve() {
    let wavy = layout(BondOrder::Single, BondStereo::Indeterminate);
    let params = HitParams::default();
    let hit = wavy.hit_test_local(Point::new(0.0, 0.0), &params).unwrap();
    assert_eq!(hit.kind, HitKind::Stroke);
    assert!(wavy.hit_test_local(Point::new(10.0, 10.0), &params).is_none());
}

#[test]
fn pick_returns_closest_bond() {
    let mut diagram = Diagram::new(20.0);
    let a = diagram.add_atom(DiagramAtom::new(Point::new(0.0, 0.0)));
    let b = diagram.add_atom(DiagramAtom::new(Point::new(20.0, 0.0)));
    let c = diagram.add_atom(DiagramAtom::new(Point::new(20.0, 3.0)));
    diagram.add_bond(DiagramBond::new(a, b, 1.0));
    diagram.add_bond(DiagramBond::new(a, c, 1.0));
    diagram.add_bond(DiagramBond::new(b, c, 9.0));
    let layouts = diagram.layout_bonds(&LayoutBuilder::default());

    let candidates = layouts
        .iter()
        .enumerate()
        .filter_map(|(i, l)| l.as_ref().map(|l| (i, l)));
    let params = HitParams::default();

    let (index, score) = pick(candidates.clone(), Point::new(19.0, 0.4), &params).unwrap();
    assert_eq!(index, 0);
    assert!(score.distance < 0.5);

    let (index, _) = pick(candidates.clone(), Point::new(19.0, 2.9), &params).unwrap();
    assert_eq!(index, 1);

    assert!(pick(candidates, Point::new(10.0, -10.0), &params).is_none());
}
