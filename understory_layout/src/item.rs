// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item query interface layouts talk to, plus a fixed-size reference item.

use alloc::boxed::Box;
use kurbo::{Point, Rect, Size};

use crate::types::{Anchor, ItemSpacing, Placement, ProposedSize};

/// An item arranged by a [`Layout`](crate::Layout).
///
/// Layouts borrow items for the duration of one pass: shared for measuring,
/// exclusive for placing. They never store them.
pub trait LayoutItem {
    /// Size the item wants under `proposal`.
    fn measure(&self, proposal: ProposedSize) -> Size;

    /// Receive the final position of the item's `anchor` and the proposal it was placed under.
    fn place(&mut self, position: Point, anchor: Anchor, proposal: ProposedSize);

    /// Layout priority. Only [`PyramidStack`](crate::PyramidStack) consults it; higher ranks first.
    fn priority(&self) -> f64 {
        0.0
    }

    /// Preferred spacing around the item, used when a stack has no explicit spacing.
    fn spacing(&self) -> ItemSpacing {
        ItemSpacing::STANDARD
    }

    /// Receive a display scale computed by [`PyramidStack`](crate::PyramidStack).
    ///
    /// Layouts never call this during placement; see [`ScaleUpdates::apply`](crate::ScaleUpdates::apply).
    fn set_scale(&mut self, _scale: f64) {}
}

impl<T: LayoutItem + ?Sized> LayoutItem for &mut T {
    fn measure(&self, proposal: ProposedSize) -> Size {
        (**self).measure(proposal)
    }

    fn place(&mut self, position: Point, anchor: Anchor, proposal: ProposedSize) {
        (**self).place(position, anchor, proposal);
    }

    fn priority(&self) -> f64 {
        (**self).priority()
    }

    fn spacing(&self) -> ItemSpacing {
        (**self).spacing()
    }

    fn set_scale(&mut self, scale: f64) {
        (**self).set_scale(scale);
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn measure(&self, proposal: ProposedSize) -> Size {
        (**self).measure(proposal)
    }

    fn place(&mut self, position: Point, anchor: Anchor, proposal: ProposedSize) {
        (**self).place(position, anchor, proposal);
    }

    fn priority(&self) -> f64 {
        (**self).priority()
    }

    fn spacing(&self) -> ItemSpacing {
        (**self).spacing()
    }

    fn set_scale(&mut self, scale: f64) {
        (**self).set_scale(scale);
    }
}

/// An item with a fixed natural size that records what it was told.
///
/// It answers every proposal with its natural size, remembers its latest
/// placement, and stores the last scale written to it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedItem {
    /// Natural size, reported for every proposal.
    pub size: Size,
    /// Layout priority.
    pub priority: f64,
    /// Preferred spacing around the item.
    pub spacing: ItemSpacing,
    /// Most recent placement, if any.
    pub placement: Option<Placement>,
    /// Most recent scale written back to the item.
    pub scale: f64,
}

impl FixedItem {
    /// Create an unplaced item with priority `0`, standard spacing, and scale `1`.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            priority: 0.0,
            spacing: ItemSpacing::STANDARD,
            placement: None,
            scale: 1.0,
        }
    }

    /// Set the layout priority.
    pub const fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Set the preferred spacing.
    pub const fn with_spacing(mut self, spacing: ItemSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Rectangle covered by the item at its latest placement.
    pub fn frame(&self) -> Option<Rect> {
        self.placement.map(|p| p.frame(self.size))
    }
}

impl LayoutItem for FixedItem {
    fn measure(&self, _proposal: ProposedSize) -> Size {
        self.size
    }

    fn place(&mut self, position: Point, anchor: Anchor, proposal: ProposedSize) {
        self.placement = Some(Placement {
            position,
            anchor,
            proposal,
        });
    }

    fn priority(&self) -> f64 {
        self.priority
    }

    fn spacing(&self) -> ItemSpacing {
        self.spacing
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}
