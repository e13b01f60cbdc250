// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of atom hulls.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::AtomHull;

/// Supplies the hull of an atom identified by `A`.
///
/// This is the boundary to whatever measures and places atom text. Hulls are
/// expected to be recomputed by the source whenever an atom's rendered label
/// changes; bond layout only ever reads them.
pub trait HullSource<A> {
    /// Returns the hull for `atom`, empty if nothing is drawn for it.
    fn hull(&self, atom: A) -> AtomHull;
}

impl<A, F> HullSource<A> for F
where
    F: Fn(A) -> AtomHull,
{
    fn hull(&self, atom: A) -> AtomHull {
        self(atom)
    }
}

/// Measured glyph boxes for one atom, in diagram coordinates.
///
/// Any box may be absent. An atom with no boxes at all is a bare vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtomGlyphs {
    /// Element symbol.
    pub label: Option<Rect>,
    /// Implicit hydrogen run, including its count subscript.
    pub hydrogens: Option<Rect>,
    /// Charge superscript.
    pub charge: Option<Rect>,
    /// Isotope superscript.
    pub isotope: Option<Rect>,
    /// Anything else drawn as part of the atom, such as electron dots.
    pub extra: Vec<Rect>,
}

impl AtomGlyphs {
    /// Whether no glyph boxes are present.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.label.is_none()
            && self.hydrogens.is_none()
            && self.charge.is_none()
            && self.isotope.is_none()
            && self.extra.is_empty()
    }

    fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        [self.label, self.hydrogens, self.charge, self.isotope]
            .into_iter()
            .flatten()
            .chain(self.extra.iter().copied())
    }
}

/// Builds hulls from [`AtomGlyphs`] by inflating each box by `padding` and
/// taking the convex hull of all corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphHullProvider {
    padding: f64,
}

impl GlyphHullProvider {
    /// Creates a provider that pads every glyph box by `padding` on each side.
    ///
    /// Negative or non-finite padding is treated as zero.
    #[must_use]
    pub fn new(padding: f64) -> Self {
        let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
        Self { padding }
    }

    /// Returns the configured padding.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Computes the hull for one atom's glyphs.
    #[must_use]
    pub fn hull_for(&self, glyphs: &AtomGlyphs) -> AtomHull {
        if glyphs.is_bare() {
            return AtomHull::empty();
        }
        let pad = self.padding;
        AtomHull::from_rects(glyphs.rects().map(|r| r.inflate(pad, pad)))
    }
}

impl Default for GlyphHullProvider {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<'a> HullSource<&'a AtomGlyphs> for GlyphHullProvider {
    fn hull(&self, atom: &'a AtomGlyphs) -> AtomHull {
        self.hull_for(atom)
    }
}
