// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input description of a single bond and its surroundings.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use chemdraw_hull::AtomHull;

/// Bond order as drawn.
///
/// Half orders are drawn like the next whole order with one line dashed by
/// the renderer; order zero is drawn like a single bond.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BondOrder {
    /// Zero-order (dative/ionic placeholder) bond.
    Zero,
    /// Half bond.
    Half,
    /// Single bond.
    #[default]
    Single,
    /// Aromatic or delocalised bond.
    OneAndHalf,
    /// Double bond.
    Double,
    /// Two-and-a-half bond.
    TwoAndHalf,
    /// Triple bond.
    Triple,
}

impl BondOrder {
    const ALL: [Self; 7] = [
        Self::Zero,
        Self::Half,
        Self::Single,
        Self::OneAndHalf,
        Self::Double,
        Self::TwoAndHalf,
        Self::Triple,
    ];

    /// The numeric order.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Half => 0.5,
            Self::Single => 1.0,
            Self::OneAndHalf => 1.5,
            Self::Double => 2.0,
            Self::TwoAndHalf => 2.5,
            Self::Triple => 3.0,
        }
    }
}

/// Error returned when a numeric bond order is not one of
/// `0, 0.5, 1, 1.5, 2, 2.5, 3`.
#[derive(Clone, Copy, PartialEq)]
pub struct UnknownBondOrder(pub f64);

impl fmt::Debug for UnknownBondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnknownBondOrder({})", self.0)
    }
}

impl fmt::Display for UnknownBondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bond order {} is not one of 0, 0.5, 1, 1.5, 2, 2.5, 3", self.0)
    }
}

impl core::error::Error for UnknownBondOrder {}

impl TryFrom<f64> for BondOrder {
    type Error = UnknownBondOrder;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|order| (order.value() - value).abs() < 1e-6)
            .ok_or(UnknownBondOrder(value))
    }
}

/// Stereochemistry rendering of a bond.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BondStereo {
    /// No stereo information.
    #[default]
    None,
    /// Solid wedge, substituent towards the viewer.
    Wedge,
    /// Hashed wedge, substituent away from the viewer.
    Hatch,
    /// Bold bond.
    Thick,
    /// Undefined stereochemistry (wavy single, crossed double).
    Indeterminate,
}

impl BondStereo {
    /// Whether this is a wedge or hatch, the two kinds sharing a wedge outline.
    #[must_use]
    pub const fn is_wedge_like(self) -> bool {
        matches!(self, Self::Wedge | Self::Hatch)
    }
}

/// Which side of the bond axis the extra lines of a double bond go.
///
/// `Clockwise` is the side [`chemdraw_geom::perpendicular`] of the principal
/// vector points to (clockwise on a Y-down canvas).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Placement {
    /// Let ring membership decide, or centre the lines on the axis.
    #[default]
    None,
    /// Towards the perpendicular side.
    Clockwise,
    /// Away from the perpendicular side.
    Anticlockwise,
}

/// How a neighbouring bond is oriented relative to the shared atom.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NeighbourDirection {
    /// The neighbouring bond starts at the shared atom.
    Outgoing,
    /// The neighbouring bond ends at the shared atom.
    Incoming,
}

/// Another bond incident on one of this bond's atoms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    /// Position of the neighbouring bond's other atom.
    pub far: Point,
    /// Order of the neighbouring bond.
    pub order: BondOrder,
    /// Stereo of the neighbouring bond.
    pub stereo: BondStereo,
    /// Orientation of the neighbouring bond at the shared atom.
    pub direction: NeighbourDirection,
}

impl Neighbour {
    /// A plain single bond to `far`, starting at the shared atom.
    #[must_use]
    pub const fn single(far: Point) -> Self {
        Self {
            far,
            order: BondOrder::Single,
            stereo: BondStereo::None,
            direction: NeighbourDirection::Outgoing,
        }
    }

    /// Returns this neighbour with `stereo` and `direction` replaced.
    #[must_use]
    pub const fn with_stereo(mut self, stereo: BondStereo, direction: NeighbourDirection) -> Self {
        self.stereo = stereo;
        self.direction = direction;
        self
    }

    /// Single order with no stereo.
    #[must_use]
    pub fn is_plain_single(&self) -> bool {
        self.order == BondOrder::Single && self.stereo == BondStereo::None
    }

    /// A single-order wedge or hatch whose wide end sits on the shared atom.
    #[must_use]
    pub fn is_wedge_ending_here(&self) -> bool {
        self.order == BondOrder::Single
            && self.stereo.is_wedge_like()
            && self.direction == NeighbourDirection::Incoming
    }

    /// A single-order thick bond.
    #[must_use]
    pub fn is_thick(&self) -> bool {
        self.order == BondOrder::Single && self.stereo == BondStereo::Thick
    }
}

/// One end of a bond: its atom and what surrounds it.
#[derive(Clone, Debug, PartialEq)]
pub struct BondEnd {
    /// Atom centre.
    pub position: Point,
    /// Hull of the atom's rendered label; empty when nothing is drawn.
    pub hull: AtomHull,
    /// Whether the atom is a carbon.
    pub carbon: bool,
    /// Other bonds on this atom, excluding the bond being laid out.
    pub neighbours: SmallVec<[Neighbour; 4]>,
}

impl BondEnd {
    /// An unlabelled carbon at `position` with no other bonds.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            hull: AtomHull::empty(),
            carbon: true,
            neighbours: SmallVec::new(),
        }
    }

    /// Returns this end with `hull` as the atom hull.
    #[must_use]
    pub fn with_hull(mut self, hull: AtomHull) -> Self {
        self.hull = hull;
        self
    }

    /// Returns this end marked as a non-carbon atom.
    #[must_use]
    pub fn heteroatom(mut self) -> Self {
        self.carbon = false;
        self
    }

    /// Returns this end with one more neighbouring bond.
    #[must_use]
    pub fn with_neighbour(mut self, neighbour: Neighbour) -> Self {
        self.neighbours.push(neighbour);
        self
    }

    /// A carbon with no visible label.
    #[must_use]
    pub fn is_bare_carbon(&self) -> bool {
        self.carbon && self.hull.is_empty()
    }
}

/// Everything needed to lay out one bond.
#[derive(Clone, Debug, PartialEq)]
pub struct BondSpec {
    /// Start atom; the wedge apex for wedge and hatch bonds.
    pub start: BondEnd,
    /// End atom; the wide end for wedge and hatch bonds.
    pub end: BondEnd,
    /// Bond order.
    pub order: BondOrder,
    /// Stereo rendering.
    pub stereo: BondStereo,
    /// Side of the extra lines of a double bond.
    pub placement: Placement,
    /// Centroid of the (smallest) ring containing the bond.
    pub ring_centroid: Option<Point>,
    /// Centroid of a second ring containing the bond, for fused systems.
    pub secondary_ring_centroid: Option<Point>,
    /// Gap between a label hull and the drawn bond end.
    pub standoff: f64,
    /// Reference bond length all offsets scale with.
    pub bond_length: f64,
}

impl BondSpec {
    /// A bond with no stereo, placement, ring or standoff.
    #[must_use]
    pub fn new(start: BondEnd, end: BondEnd, order: BondOrder, bond_length: f64) -> Self {
        Self {
            start,
            end,
            order,
            stereo: BondStereo::None,
            placement: Placement::None,
            ring_centroid: None,
            secondary_ring_centroid: None,
            standoff: 0.0,
            bond_length,
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

    /// Returns this bond with a primary ring centroid.
    #[must_use]
    pub fn with_ring_centroid(mut self, centroid: Point) -> Self {
        self.ring_centroid = Some(centroid);
        self
    }

    /// Returns this bond with a secondary ring centroid.
    #[must_use]
    pub fn with_secondary_ring_centroid(mut self, centroid: Point) -> Self {
        self.secondary_ring_centroid = Some(centroid);
        self
    }

    /// Returns this bond with `standoff` set.
    #[must_use]
    pub fn with_standoff(mut self, standoff: f64) -> Self {
        self.standoff = standoff;
        self
    }

    /// Vector from the start atom to the end atom, before trimming.
    #[must_use]
    pub fn principal(&self) -> Vec2 {
        self.end.position - self.start.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_orders_round_trip() {
        for order in BondOrder::ALL {
            assert_eq!(BondOrder::try_from(order.value()), Ok(order));
        }
    }

    #[test]
    fn unknown_order_is_rejected() {
        let err = BondOrder::try_from(4.0).unwrap_err();
        assert_eq!(err, UnknownBondOrder(4.0));
        assert!(BondOrder::try_from(f64::NAN).is_err());
        assert!(BondOrder::try_from(1.25).is_err());
    }

    #[test]
    fn unknown_order_message_names_value() {
        extern crate std;
        use std::string::ToString;
        let msg = UnknownBondOrder(7.0).to_string();
        assert!(msg.contains('7'), "message should mention the value: {msg}");
    }

    #[test]
    fn neighbour_predicates() {
        let far = Point::new(1.0, 0.0);
        assert!(Neighbour::single(far).is_plain_single());
        let wedge = Neighbour::single(far).with_stereo(BondStereo::Hatch, NeighbourDirection::Incoming);
        assert!(wedge.is_wedge_ending_here());
        assert!(!wedge.is_plain_single());
        let apex_here = wedge.with_stereo(BondStereo::Wedge, NeighbourDirection::Outgoing);
        assert!(!apex_here.is_wedge_ending_here());
        assert!(Neighbour::single(far).with_stereo(BondStereo::Thick, NeighbourDirection::Outgoing).is_thick());
    }

    #[test]
    fn bare_carbon_requires_carbon_and_no_hull() {
        let end = BondEnd::new(Point::ZERO);
        assert!(end.is_bare_carbon());
        assert!(!end.clone().heteroatom().is_bare_carbon());
        let labelled = end.with_hull(AtomHull::from_points([
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(0.0, 1.0),
        ]));
        assert!(!labelled.is_bare_carbon());
    }
}
