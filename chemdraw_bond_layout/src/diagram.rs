// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal molecular graph that derives [`BondSpec`]s for every bond.
//!
//! [`LayoutBuilder`] works on one self-contained [`BondSpec`] at a time. A
//! [`Diagram`] holds the atoms, bonds and rings those specs are derived from:
//! neighbouring bonds at each end, ring centroids, atom hulls. Atoms, bonds
//! and rings are addressed by their index in the respective `Vec`.
//!
//! ```
//! use chemdraw_bond_layout::{Diagram, DiagramAtom, DiagramBond, LayoutBuilder, LayoutKind};
//! use kurbo::Point;
//!
//! let mut diagram = Diagram::new(20.0);
//! let a = diagram.add_atom(DiagramAtom::new(Point::new(0.0, 0.0)));
//! let b = diagram.add_atom(DiagramAtom::new(Point::new(20.0, 0.0)));
//! diagram.add_bond(DiagramBond::new(a, b, 2.0));
//! diagram.add_bond(DiagramBond::new(a, b, 4.0));
//!
//! let layouts = diagram.layout_bonds(&LayoutBuilder::default());
//! assert_eq!(layouts[0].as_ref().map(|l| l.kind()), Some(LayoutKind::Double));
//! assert!(layouts[1].is_none());
//! ```

use alloc::vec::Vec;
use core::fmt;

use chemdraw_hull::{AtomHull, HullSource};
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::trace::LayoutTrace;
use crate::{
    BondEnd, BondLayout, BondOrder, BondSpec, BondStereo, LayoutBuilder, Neighbour,
    NeighbourDirection, Placement, UnknownBondOrder,
};

/// An atom of a [`Diagram`].
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramAtom {
    /// Atom centre.
    pub position: Point,
    /// Hull of the atom's label, empty when no label is drawn.
    pub hull: AtomHull,
    /// Whether the atom is carbon.
    pub carbon: bool,
}

impl DiagramAtom {
    /// A carbon atom with no label hull.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            hull: AtomHull::empty(),
            carbon: true,
        }
    }

    /// Returns this atom marked as a non-carbon.
    #[must_use]
    pub fn heteroatom(mut self) -> Self {
        self.carbon = false;
        self
    }

    /// Returns this atom with `hull` set.
    #[must_use]
    pub fn with_hull(mut self, hull: AtomHull) -> Self {
        self.hull = hull;
        self
    }
}

/// A bond of a [`Diagram`], from atom `start` to atom `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramBond {
    /// Index of the start atom (the wedge apex).
    pub start: usize,
    /// Index of the end atom.
    pub end: usize,
    /// Numeric bond order as stored by the model.
    pub order: f64,
    /// Stereo rendering.
    pub stereo: BondStereo,
    /// Explicit side for a double bond's extra line.
    pub placement: Placement,
}

impl DiagramBond {
    /// A bond with no stereo or placement.
    #[must_use]
    pub fn new(start: usize, end: usize, order: f64) -> Self {
        Self {
            start,
            end,
            order,
            stereo: BondStereo::None,
            placement: Placement::None,
        }
    }

    /// Returns this bond with `stereo` set.
    #[must_use]
    pub fn with_stereo(mut self, stereo: BondStereo) -> Self {
        self.stereo = stereo;
        self
    }

    /// Returns this bond with `placement` set.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    fn other(&self, atom: usize) -> usize {
        if self.start == atom { self.end } else { self.start }
    }
}

/// A ring, as the cyclic sequence of its atom indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ring {
    /// Atom indices in ring order.
    pub atoms: Vec<usize>,
}

impl Ring {
    /// Creates a ring from atoms in ring order.
    #[must_use]
    pub fn new(atoms: impl IntoIterator<Item = usize>) -> Self {
        Self {
            atoms: atoms.into_iter().collect(),
        }
    }

    /// Whether `a` and `b` are adjacent in the ring.
    #[must_use]
    pub fn contains_bond(&self, a: usize, b: usize) -> bool {
        let n = self.atoms.len();
        if n < 3 {
            return false;
        }
        (0..n).any(|i| {
            let (x, y) = (self.atoms[i], self.atoms[(i + 1) % n]);
            (x == a && y == b) || (x == b && y == a)
        })
    }

    /// Mean position of the ring's atoms, or `None` if any index is out of
    /// range or the ring has fewer than three atoms.
    #[must_use]
    pub fn centroid(&self, atoms: &[DiagramAtom]) -> Option<Point> {
        if self.atoms.len() < 3 {
            return None;
        }
        let mut sum = Vec2::ZERO;
        for &i in &self.atoms {
            sum += atoms.get(i)?.position.to_vec2();
        }
        #[allow(clippy::cast_precision_loss, reason = "ring sizes are small")]
        let n = self.atoms.len() as f64;
        Some((sum / n).to_point())
    }
}

/// Errors from deriving a [`BondSpec`] out of a [`Diagram`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DiagramError {
    /// No bond has this index.
    MissingBond(usize),
    /// A bond refers to an atom index that does not exist.
    MissingAtom {
        /// The bond.
        bond: usize,
        /// The missing atom index.
        atom: usize,
    },
    /// A bond's numeric order is not drawable.
    UnknownOrder {
        /// The bond.
        bond: usize,
        /// The underlying conversion error.
        source: UnknownBondOrder,
    },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBond(bond) => write!(f, "no bond with index {bond}"),
            Self::MissingAtom { bond, atom } => {
                write!(f, "bond {bond} refers to missing atom {atom}")
            }
            Self::UnknownOrder { bond, source } => write!(f, "bond {bond}: {source}"),
        }
    }
}

impl core::error::Error for DiagramError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::UnknownOrder { source, .. } => Some(source),
            _ => None,
        }
    }
}

type Adjacency = Vec<SmallVec<[usize; 4]>>;

/// Atoms, bonds and rings of one structure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagram {
    /// Atoms, addressed by index.
    pub atoms: Vec<DiagramAtom>,
    /// Bonds, addressed by index.
    pub bonds: Vec<DiagramBond>,
    /// Rings, in any order.
    pub rings: Vec<Ring>,
    /// Reference bond length of the drawing.
    pub bond_length: f64,
    /// Gap kept between a bond end and an atom hull.
    pub standoff: f64,
}

impl Diagram {
    /// Creates an empty diagram with the given reference bond length and a
    /// standoff of a tenth of it.
    #[must_use]
    pub fn new(bond_length: f64) -> Self {
        Self {
            bond_length,
            standoff: bond_length * 0.1,
            ..Self::default()
        }
    }

    /// Adds an atom and returns its index.
    pub fn add_atom(&mut self, atom: DiagramAtom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Adds a bond and returns its index.
    pub fn add_bond(&mut self, bond: DiagramBond) -> usize {
        self.bonds.push(bond);
        self.bonds.len() - 1
    }

    /// Adds a ring and returns its index.
    pub fn add_ring(&mut self, ring: Ring) -> usize {
        self.rings.push(ring);
        self.rings.len() - 1
    }

    /// Recomputes every atom hull from `source`.
    pub fn refresh_hulls<S: HullSource<usize> + ?Sized>(&mut self, source: &S) {
        for (i, atom) in self.atoms.iter_mut().enumerate() {
            atom.hull = source.hull(i);
        }
    }

    fn adjacency(&self) -> Adjacency {
        let mut adjacency: Adjacency = Vec::new();
        adjacency.resize_with(self.atoms.len(), SmallVec::new);
        for (i, bond) in self.bonds.iter().enumerate() {
            for atom in [bond.start, bond.end] {
                if let Some(list) = adjacency.get_mut(atom) {
                    list.push(i);
                }
            }
        }
        adjacency
    }

    /// Derives the [`BondSpec`] of bond `index`.
    ///
    /// Neighbouring bonds with an undrawable order are left out of the
    /// neighbour lists.
    pub fn bond_spec(&self, index: usize) -> Result<BondSpec, DiagramError> {
        self.bond_spec_with(index, &self.adjacency())
    }

    fn bond_spec_with(&self, index: usize, adjacency: &Adjacency) -> Result<BondSpec, DiagramError> {
        let bond = self.bonds.get(index).ok_or(DiagramError::MissingBond(index))?;
        let order = BondOrder::try_from(bond.order).map_err(|source| DiagramError::UnknownOrder {
            bond: index,
            source,
        })?;
        let start = self.bond_end(index, bond.start, adjacency)?;
        let end = self.bond_end(index, bond.end, adjacency)?;

        let mut rings: SmallVec<[&Ring; 2]> = self
            .rings
            .iter()
            .filter(|r| r.contains_bond(bond.start, bond.end))
            .collect();
        rings.sort_by_key(|r| r.atoms.len());
        let mut centroids = rings.iter().filter_map(|r| r.centroid(&self.atoms));

        let mut spec = BondSpec::new(start, end, order, self.bond_length)
            .with_stereo(bond.stereo)
            .with_placement(bond.placement)
            .with_standoff(self.standoff);
        spec.ring_centroid = centroids.next();
        spec.secondary_ring_centroid = centroids.next();
        Ok(spec)
    }

    fn bond_end(&self, bond: usize, atom: usize, adjacency: &Adjacency) -> Result<BondEnd, DiagramError> {
        let a = self
            .atoms
            .get(atom)
            .ok_or(DiagramError::MissingAtom { bond, atom })?;
        let mut end = BondEnd::new(a.position).with_hull(a.hull.clone());
        end.carbon = a.carbon;
        for &other in adjacency.get(atom).into_iter().flatten() {
            if other == bond {
                continue;
            }
            let nb = &self.bonds[other];
            let Ok(order) = BondOrder::try_from(nb.order) else {
                continue;
            };
            let Some(far) = self.atoms.get(nb.other(atom)) else {
                continue;
            };
            let direction = if nb.start == atom {
                NeighbourDirection::Outgoing
            } else {
                NeighbourDirection::Incoming
            };
            end.neighbours.push(Neighbour {
                far: far.position,
                order,
                stereo: nb.stereo,
                direction,
            });
        }
        Ok(end)
    }

    /// Lays out every bond, in bond order. Bonds that cannot be laid out are
    /// `None`.
    #[must_use]
    pub fn layout_bonds(&self, builder: &LayoutBuilder) -> Vec<Option<BondLayout>> {
        self.layout_bonds_with_trace(builder, &mut ())
    }

    /// Like [`layout_bonds`](Self::layout_bonds), reporting to `trace`.
    ///
    /// Bonds with an undrawable order are reported through
    /// [`LayoutTrace::rejected_order`].
    pub fn layout_bonds_with_trace<T: LayoutTrace + ?Sized>(
        &self,
        builder: &LayoutBuilder,
        trace: &mut T,
    ) -> Vec<Option<BondLayout>> {
        let adjacency = self.adjacency();
        (0..self.bonds.len())
            .map(|i| match self.bond_spec_with(i, &adjacency) {
                Ok(spec) => Some(builder.build_with_trace(&spec, trace)),
                Err(DiagramError::UnknownOrder { bond, source }) => {
                    trace.rejected_order(bond, source.0);
                    None
                }
                Err(_) => None,
            })
            .collect()
    }
}
