// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chemdraw Precise Hit: narrow-phase hit testing for bond layouts.
//!
//! Every [`BondLayout`](chemdraw_bond_layout::BondLayout) carries a boundary
//! polygon that is cheap to test and deliberately generous. This crate answers
//! the finer question of whether a point actually touches the drawn geometry,
//! and how far away it is, so that the closest of several overlapping bonds
//! can be picked.
//!
//! - [`PreciseHitTest`] is the single entry point, implemented for
//!   `BondLayout` and for the small building blocks in [`stroke`].
//! - [`HitParams`] carries the tolerances; [`HitScore`] the result.
//! - [`pick`] returns the closest hit among many layouts.
//!
//! ```rust
//! use chemdraw_bond_layout::{BondEnd, BondOrder, BondSpec, LayoutBuilder};
//! use chemdraw_precise_hit::{HitKind, HitParams, PreciseHitTest};
//! use kurbo::Point;
//!
//! let spec = BondSpec::new(
//!     BondEnd::new(Point::new(0.0, 0.0)),
//!     BondEnd::new(Point::new(20.0, 0.0)),
//!     BondOrder::Single,
//!     20.0,
//! );
//! let layout = LayoutBuilder::default().build(&spec);
//! let params = HitParams::default();
//!
//! let hit = layout.hit_test_local(Point::new(10.0, 0.5), &params).unwrap();
//! assert_eq!(hit.kind, HitKind::Stroke);
//! assert!(layout.hit_test_local(Point::new(10.0, 8.0), &params).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use core::cmp::Ordering;

use kurbo::Point;

mod bond;
pub mod stroke;

pub use bond::pick;

/// How a point hit a shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HitKind {
    /// Inside (or within tolerance of) a filled outline.
    Fill,
    /// Within tolerance of a stroked centreline.
    Stroke,
}

/// Tolerances for precise hit tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Extra distance beyond a stroke's half-width that still counts as a hit.
    pub stroke_tolerance: f64,
    /// Distance outside a filled outline that still counts as a hit.
    pub fill_tolerance: f64,
    /// Half the drawn width of bond lines and squiggles.
    pub line_half_width: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            stroke_tolerance: 1.0,
            fill_tolerance: 1.0,
            line_half_width: 0.5,
        }
    }
}

/// Result of a successful hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point to the geometry; `0.0` inside fills.
    pub distance: f64,
    /// What was hit.
    pub kind: HitKind,
}

impl HitScore {
    /// Orders by distance, then prefers fills over strokes.
    #[must_use]
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| match (self.kind, other.kind) {
                (HitKind::Fill, HitKind::Stroke) => Ordering::Less,
                (HitKind::Stroke, HitKind::Fill) => Ordering::Greater,
                _ => Ordering::Equal,
            })
    }
}

/// Geometry-level hit testing in the shape's own coordinates.
pub trait PreciseHitTest {
    /// Returns a score when `pt` hits the shape under `params`.
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}
