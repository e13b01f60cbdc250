// Copyright 2025 the Chemdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for bond layout.
//!
//! Layout never fails: degenerate input falls back to simpler geometry. That
//! keeps drawing robust but makes it hard to tell *why* a bond looks the way
//! it does. [`LayoutBuilder::build_with_trace`](crate::LayoutBuilder::build_with_trace)
//! reports each decision to a [`LayoutTrace`] sink; [`TraceRecorder`] keeps
//! them in order for inspection or tests.
//!
//! Every hook has an empty default body, and `()` is a no-op sink, so
//! embedders only implement what they care about.

use alloc::vec::Vec;

use chemdraw_geom::Side;

use crate::LayoutKind;

/// Which end of a bond an event refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Terminal {
    /// The start atom (wedge apex).
    Start,
    /// The end atom (wedge wide end).
    End,
}

/// Why a double bond's extra line went where it did.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SideReason {
    /// Explicit clockwise/anticlockwise placement.
    Placement,
    /// Side of the primary ring centroid.
    RingCentroid,
    /// Side of the secondary ring centroid.
    SecondaryRingCentroid,
}

/// A stereo joint that reshaped a bond outline.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Joint {
    /// A wedge's wide end mitred against a thick bond.
    WedgeToThick,
    /// A wedge's wide end mitred against another wedge's wide end.
    WedgeToWedge,
    /// A thick bond end mitred against a wedge's wide end.
    ThickToWedge(Terminal),
    /// A wedge's wide end cut back along splayed single bonds.
    Chamfer {
        /// Number of neighbouring bonds used for the cut.
        neighbours: usize,
    },
}

/// A fallback to simpler geometry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Fallback {
    /// The bond has zero length or non-finite coordinates.
    DegenerateBond,
    /// Trimming against both hulls would invert the bond; drawn untrimmed.
    OverlappingHulls,
    /// No ring centroid lies off the bond axis; lines were centred instead.
    CollinearCentroid,
    /// The inner line of a double bond could not be shortened at one end.
    InnerLineUnclipped(Terminal),
    /// A mitre bisector did not cross the outline as expected.
    MitreFailed,
    /// A chamfer was eligible but no cut shrinks the wedge.
    ChamferRejected,
}

/// A callback sink for layout decisions.
pub trait LayoutTrace {
    /// Called once per bond with the chosen layout kind.
    fn dispatched(&mut self, kind: LayoutKind) {
        let _ = kind;
    }

    /// Called when a bond end was moved to the edge of an atom hull.
    fn trimmed(&mut self, terminal: Terminal) {
        let _ = terminal;
    }

    /// Called when a double bond's extra line is placed on one side.
    fn offset_side(&mut self, side: Side, reason: SideReason) {
        let _ = (side, reason);
    }

    /// Called when a stereo joint reshaped the outline.
    fn joined(&mut self, joint: Joint) {
        let _ = joint;
    }

    /// Called when layout fell back to simpler geometry.
    fn fallback(&mut self, fallback: Fallback) {
        let _ = fallback;
    }

    /// Called by [`Diagram`](crate::Diagram) when a bond's numeric order is
    /// not drawable and the bond is skipped.
    fn rejected_order(&mut self, bond: usize, value: f64) {
        let _ = (bond, value);
    }
}

impl LayoutTrace for () {}

/// One recorded [`LayoutTrace`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// See [`LayoutTrace::dispatched`].
    Dispatched(LayoutKind),
    /// See [`LayoutTrace::trimmed`].
    Trimmed(Terminal),
    /// See [`LayoutTrace::offset_side`].
    OffsetSide(Side, SideReason),
    /// See [`LayoutTrace::joined`].
    Joined(Joint),
    /// See [`LayoutTrace::fallback`].
    Fallback(Fallback),
    /// See [`LayoutTrace::rejected_order`].
    RejectedOrder {
        /// Index of the skipped bond.
        bond: usize,
        /// Its numeric order.
        value: f64,
    },
}

/// Records every layout decision in call order.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Recorded fallbacks, oldest first.
    pub fn fallbacks(&self) -> impl Iterator<Item = Fallback> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Fallback(f) => Some(*f),
            _ => None,
        })
    }

    /// Recorded joints, oldest first.
    pub fn joints(&self) -> impl Iterator<Item = Joint> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Joined(j) => Some(*j),
            _ => None,
        })
    }
}

impl LayoutTrace for TraceRecorder {
    fn dispatched(&mut self, kind: LayoutKind) {
        self.events.push(TraceEvent::Dispatched(kind));
    }

    fn trimmed(&mut self, terminal: Terminal) {
        self.events.push(TraceEvent::Trimmed(terminal));
    }

    fn offset_side(&mut self, side: Side, reason: SideReason) {
        self.events.push(TraceEvent::OffsetSide(side, reason));
    }

    fn joined(&mut self, joint: Joint) {
        self.events.push(TraceEvent::Joined(joint));
    }

    fn fallback(&mut self, fallback: Fallback) {
        self.events.push(TraceEvent::Fallback(fallback));
    }

    fn rejected_order(&mut self, bond: usize, value: f64) {
        self.events.push(TraceEvent::RejectedOrder { bond, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order_and_filters() {
        let mut rec = TraceRecorder::new();
        rec.dispatched(LayoutKind::Wedge);
        rec.fallback(Fallback::ChamferRejected);
        rec.joined(Joint::WedgeToThick);
        rec.fallback(Fallback::MitreFailed);

        assert_eq!(rec.events().len(), 4);
        assert_eq!(rec.events()[0], TraceEvent::Dispatched(LayoutKind::Wedge));
        let fallbacks: Vec<_> = rec.fallbacks().collect();
        assert_eq!(
            fallbacks,
            [Fallback::ChamferRejected, Fallback::MitreFailed]
        );
        assert_eq!(rec.joints().count(), 1);

        rec.clear();
        assert!(rec.events().is_empty());
    }

    #[test]
    fn unit_sink_accepts_everything() {
        let sink = &mut ();
        sink.dispatched(LayoutKind::Plain);
        sink.rejected_order(3, 4.0);
    }
}
