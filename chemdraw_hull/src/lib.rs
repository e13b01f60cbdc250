// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chemdraw Hull: convex outlines around rendered atom labels.
//!
//! Bond layout keeps bond lines from running underneath atom text by trimming
//! every bond end against a convex polygon, the atom's *hull*, that bounds the
//! atom's visible glyphs (element symbol, implicit hydrogens, charge, isotope
//! mark, electron dots). An atom with nothing drawn, such as a bare carbon
//! vertex, has an empty hull, which is a normal state rather than an error.
//!
//! - [`AtomHull`] is the value type consumed read-only by bond layout.
//! - [`HullSource`] is the seam to whatever measures text: it maps an atom
//!   key to its hull. Closures implement it directly.
//! - [`GlyphHullProvider`] is a ready-made source that builds hulls from the
//!   glyph rectangles in [`AtomGlyphs`].
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use chemdraw_hull::{AtomGlyphs, GlyphHullProvider};
//!
//! let provider = GlyphHullProvider::new(1.0);
//! let glyphs = AtomGlyphs {
//!     label: Some(Rect::new(-4.0, -5.0, 4.0, 5.0)),
//!     hydrogens: Some(Rect::new(4.0, -5.0, 12.0, 5.0)),
//!     ..AtomGlyphs::default()
//! };
//! let hull = provider.hull_for(&glyphs);
//! assert!(hull.contains(Point::new(10.0, 0.0)));
//! assert!(provider.hull_for(&AtomGlyphs::default()).is_empty());
//! ```
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod hull;
mod provider;

pub use hull::AtomHull;
pub use provider::{AtomGlyphs, GlyphHullProvider, HullSource};
