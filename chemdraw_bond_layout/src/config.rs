// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunable constants of bond layout.
///
/// Lengths are fractions of [`BondSpec::bond_length`](crate::BondSpec::bond_length)
/// so that a diagram can be drawn at any scale; angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Half the gap between the lines of a double bond.
    ///
    /// The full gap between a double bond's two lines, and between adjacent
    /// lines of a triple bond, is `bond_length × offset_fraction × 2`.
    pub offset_fraction: f64,
    /// Half the width of a wedge's wide end and of a thick bond.
    pub wedge_width_fraction: f64,
    /// Fewest wiggles a wavy bond is drawn with.
    pub min_wiggles: usize,
    /// Angle between the bond axis and each wavy-bond sprout.
    pub wiggle_angle_deg: f64,
    /// Lower bound of the centroid angle for which a ring double bond's inner
    /// line is clipped against the centroid rays.
    pub ring_window_min_deg: f64,
    /// Upper bound of the same window.
    pub ring_window_max_deg: f64,
    /// Lower bound of the angle (to the wedge axis) at which a neighbouring
    /// bond counts as roughly tetrahedral rather than oblique.
    pub tetrahedral_min_deg: f64,
    /// Upper bound of the same window.
    pub tetrahedral_max_deg: f64,
    /// Length of the mitre bisector in bond lengths.
    pub bisector_scale: f64,
    /// Half-width of the hit boundary around line-drawn bonds.
    pub hit_margin_fraction: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            offset_fraction: 0.1,
            wedge_width_fraction: 0.1,
            min_wiggles: 3,
            wiggle_angle_deg: 60.0,
            ring_window_min_deg: 80.0,
            ring_window_max_deg: 100.0,
            tetrahedral_min_deg: 109.5,
            tetrahedral_max_deg: 130.5,
            bisector_scale: 10.0,
            hit_margin_fraction: 0.05,
        }
    }
}

impl LayoutConfig {
    /// Gap between adjacent parallel lines for a given bond length.
    #[must_use]
    pub fn line_separation(&self, bond_length: f64) -> f64 {
        bond_length * self.offset_fraction * 2.0
    }

    /// Half-width of wedge ends and thick bonds for a given bond length.
    #[must_use]
    pub fn wedge_half_width(&self, bond_length: f64) -> f64 {
        bond_length * self.wedge_width_fraction
    }

    /// Half-width of the hit boundary around line bonds.
    #[must_use]
    pub fn hit_margin(&self, bond_length: f64) -> f64 {
        bond_length * self.hit_margin_fraction
    }

    /// Whether the centroid angle selects centroid-ray clipping.
    #[must_use]
    pub fn in_ring_window(&self, angle_deg: f64) -> bool {
        (self.ring_window_min_deg..=self.ring_window_max_deg).contains(&angle_deg)
    }

    /// Whether a neighbour at `angle_deg` from the wedge axis splays obliquely.
    #[must_use]
    pub fn is_oblique(&self, angle_deg: f64) -> bool {
        !(self.tetrahedral_min_deg..=self.tetrahedral_max_deg).contains(&angle_deg)
    }
}
