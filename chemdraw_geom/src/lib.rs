// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chemdraw Geom: vector and intersection primitives for 2D structure diagrams.
//!
//! This crate holds the small amount of vector algebra that bond layout needs,
//! built on top of [`kurbo`] value types:
//! - A single perpendicular convention ([`perpendicular`]) that decides which
//!   side of a bond is "left" everywhere in the workspace.
//! - Infinite-line intersection ([`intersect`]) and its parametric form
//!   ([`intersect_lines`]), used both for trimming bonds against atom hulls and
//!   for mitring adjoining stereo bonds.
//! - Convex hull construction ([`convex_hull`]) and polygon queries
//!   ([`polygon_contains`], [`distance_to_polygon`], [`segment_polygon_exit`]).
//!
//! Degenerate input (zero-length vectors, parallel lines, non-finite
//! coordinates) never panics: every helper that can fail returns an
//! [`Option`], and callers are expected to fall back to an untrimmed or
//! unmitred default.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use chemdraw_geom::{intersect, intersect_lines, perpendicular};
//!
//! // The perpendicular of +X is +Y.
//! assert_eq!(perpendicular(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
//!
//! let hit = intersect(
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(5.0, -5.0),
//!     Point::new(5.0, 5.0),
//! );
//! assert_eq!(hit, Some(Point::new(5.0, 0.0)));
//!
//! let (t, u) = intersect_lines(
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(5.0, -5.0),
//!     Point::new(5.0, 5.0),
//! )
//! .unwrap();
//! assert!(t > 0.0 && t < 1.0);
//! assert!(u > 0.0 && u < 1.0);
//! ```
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod hull;
mod intersect;
mod polygon;
mod vector;

pub use hull::convex_hull;
pub use intersect::{intersect, intersect_lines, segment_polygon_exit};
pub use polygon::{distance_to_polygon, polygon_contains, polygon_edges};
pub use vector::{
    Side, angle_between_deg, normalize, perpendicular, rotate, side_of, signed_angle,
};

/// Tolerance used to reject near-parallel lines and near-zero vectors.
pub const EPSILON: f64 = 1e-10;
