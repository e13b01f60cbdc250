// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chemdraw Bond Layout: headless geometry for the bonds of a structure diagram.
//!
//! Given the two atoms of a bond, their label hulls, the bond's order and
//! stereo, and (for ring bonds) the ring centroid, [`LayoutBuilder`] computes
//! the exact 2D geometry to draw: line segments, filled outlines or a
//! quadratic squiggle, plus a boundary polygon for hit testing.
//!
//! The pipeline for one bond is:
//! 1. Dispatch on order and stereo to a [`LayoutKind`].
//! 2. Trim each drawn line against the atom hulls so it stops a fixed
//!    standoff short of the label.
//! 3. For double bonds, pick the side of the extra line from explicit
//!    [`Placement`] or the ring centroid, and shorten it to fit inside the
//!    ring or the angle to neighbouring bonds.
//! 4. For wedges and thick bonds, mitre or chamfer the outline where it meets
//!    adjoining stereo bonds or splayed single bonds.
//!
//! Each stage takes its input by reference and returns new values; a
//! [`BondLayout`] is never patched after it is returned. Layout never fails:
//! degenerate input falls back to simpler geometry, and [`trace`] reports
//! every such decision.
//!
//! [`Diagram`] is a small graph model that derives [`BondSpec`]s (neighbour
//! lists, ring centroids) for every bond of a structure.
//!
//! ## Example
//!
//! ```rust
//! use chemdraw_bond_layout::{BondEnd, BondOrder, BondShape, BondSpec, LayoutBuilder, LayoutConfig};
//! use kurbo::Point;
//!
//! let config = LayoutConfig {
//!     offset_fraction: 0.05,
//!     ..LayoutConfig::default()
//! };
//! let spec = BondSpec::new(
//!     BondEnd::new(Point::new(0.0, 0.0)),
//!     BondEnd::new(Point::new(20.0, 0.0)),
//!     BondOrder::Double,
//!     20.0,
//! );
//! let layout = LayoutBuilder::new(config).build(&spec);
//! let BondShape::Double { primary, secondary, .. } = layout.shape else {
//!     unreachable!()
//! };
//! assert!((primary.p0.y - 1.0).abs() < 1e-12);
//! assert!((secondary.p0.y + 1.0).abs() < 1e-12);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable `std` (the default) or
//! `libm` for floating point functions.

#![no_std]

extern crate alloc;

mod bond;
mod builder;
mod config;
mod diagram;
mod joinery;
mod layout;
mod offset;
pub mod trace;
mod trim;
mod wavy;

pub use bond::{
    BondEnd, BondOrder, BondSpec, BondStereo, Neighbour, NeighbourDirection, Placement,
    UnknownBondOrder,
};
pub use builder::LayoutBuilder;
pub use config::LayoutConfig;
pub use diagram::{Diagram, DiagramAtom, DiagramBond, DiagramError, Ring};
pub use layout::{BondGeometry, BondLayout, BondShape, LayoutBase, LayoutKind};
pub use trace::{LayoutTrace, TraceRecorder};
