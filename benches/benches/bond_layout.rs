// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use chemdraw_bond_layout::{
    BondEnd, BondOrder, BondSpec, BondStereo, Diagram, DiagramAtom, DiagramBond, LayoutBuilder,
    Neighbour, NeighbourDirection, Ring,
};
use chemdraw_hull::{AtomGlyphs, GlyphHullProvider};
use chemdraw_precise_hit::{HitParams, pick};
use kurbo::{Point, Rect, Vec2};

const BOND: f64 = 20.0;

fn polar(center: Point, deg: f64, len: f64) -> Point {
    let r = deg.to_radians();
    center + Vec2::new(r.cos(), r.sin()) * len
}

/// A strip of `n` hexagons sharing edges, alternating single and double
/// bonds, with every seventh atom labelled.
fn hexagon_strip(n: usize) -> Diagram {
    let mut diagram = Diagram::new(BOND);
    let dx = BOND * 3f64.sqrt();
    for k in 0..n {
        let centre = Point::new(k as f64 * dx, 0.0);
        let atoms: Vec<usize> = (0..6)
            .map(|i| {
                let p = polar(centre, 30.0 + 60.0 * i as f64, BOND);
                diagram
                    .atoms
                    .iter()
                    .position(|a| (a.position - p).hypot() < 1e-6)
                    .unwrap_or_else(|| diagram.add_atom(DiagramAtom::new(p)))
            })
            .collect();
        for i in 0..6 {
            let (a, b) = (atoms[i], atoms[(i + 1) % 6]);
            let exists = diagram
                .bonds
                .iter()
                .any(|bond| (bond.start == a && bond.end == b) || (bond.start == b && bond.end == a));
            if !exists {
                let order = if i % 2 == 0 { 2.0 } else { 1.0 };
                diagram.add_bond(DiagramBond::new(a, b, order));
            }
        }
        diagram.add_ring(Ring::new(atoms));
    }

    let provider = GlyphHullProvider::new(1.0);
    let glyphs = AtomGlyphs {
        label: Some(Rect::from_center_size(Point::ZERO, (8.0, 10.0))),
        ..AtomGlyphs::default()
    };
    let positions: Vec<Point> = diagram.atoms.iter().map(|a| a.position).collect();
    diagram.refresh_hulls(&|i: usize| {
        if i % 7 == 3 {
            provider.hull_for(&glyphs).translate(positions[i].to_vec2())
        } else {
            chemdraw_hull::AtomHull::empty()
        }
    });
    for (i, atom) in diagram.atoms.iter_mut().enumerate() {
        atom.carbon = i % 7 != 3;
    }
    diagram
}

fn bench_diagram_layout(c: &mut Criterion) {
    let builder = LayoutBuilder::default();
    let mut group = c.benchmark_group("diagram_layout");
    for rings in [1_usize, 10, 100] {
        let diagram = hexagon_strip(rings);
        group.throughput(Throughput::Elements(diagram.bonds.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rings), &diagram, |b, diagram| {
            b.iter(|| black_box(diagram.layout_bonds(&builder)));
        });
    }
    group.finish();
}

fn bench_single_bond(c: &mut Criterion) {
    let builder = LayoutBuilder::default();
    let centre = Point::new(BOND, 0.0);
    let plain_end = BondEnd::new(centre);
    let splayed_end = BondEnd::new(centre)
        .with_neighbour(Neighbour::single(polar(centre, 120.0, BOND)))
        .with_neighbour(Neighbour::single(polar(centre, 240.0, BOND)));
    let thick_end = BondEnd::new(centre).with_neighbour(
        Neighbour::single(polar(centre, 60.0, BOND))
            .with_stereo(BondStereo::Thick, NeighbourDirection::Outgoing),
    );

    let cases = [
        ("plain", BondOrder::Single, BondStereo::None, plain_end.clone()),
        ("double", BondOrder::Double, BondStereo::None, plain_end.clone()),
        ("triple", BondOrder::Triple, BondStereo::None, plain_end.clone()),
        ("wavy", BondOrder::Single, BondStereo::Indeterminate, plain_end),
        ("wedge_chamfer", BondOrder::Single, BondStereo::Wedge, splayed_end),
        ("wedge_to_thick", BondOrder::Single, BondStereo::Wedge, thick_end),
    ];

    let mut group = c.benchmark_group("single_bond");
    for (name, order, stereo, end) in cases {
        let spec = BondSpec::new(BondEnd::new(Point::ZERO), end, order, BOND).with_stereo(stereo);
        group.bench_with_input(BenchmarkId::from_parameter(name), &spec, |b, spec| {
            b.iter(|| black_box(builder.build(black_box(spec))));
        });
    }
    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let diagram = hexagon_strip(100);
    let layouts = diagram.layout_bonds(&LayoutBuilder::default());
    let params = HitParams::default();
    let target = diagram.atoms[diagram.atoms.len() / 2].position + Vec2::new(0.5, 0.5);

    c.bench_function("pick_100_rings", |b| {
        b.iter(|| {
            let candidates = layouts
                .iter()
                .enumerate()
                .filter_map(|(i, l)| l.as_ref().map(|l| (i, l)));
            black_box(pick(candidates, black_box(target), &params))
        });
    });
}

criterion_group!(benches, bench_diagram_layout, bench_single_bond, bench_pick);
criterion_main!(benches);
