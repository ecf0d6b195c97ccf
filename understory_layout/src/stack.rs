// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear stack: items one after another along a single axis.

use alloc::vec::Vec;
use kurbo::{Rect, Size};

use crate::item::LayoutItem;
use crate::layout::Layout;
use crate::types::{Alignment, Axis, ProposedSize};
use crate::util::{cross_position, natural_sizes, spacings};

/// Stacks items along one axis in their given order.
///
/// The stack's main extent is the sum of item extents plus the gaps between
/// them, and its cross extent is the largest item cross extent. Gaps come from
/// [`spacing`](Self::spacing) when set, otherwise from each neighbouring pair's
/// [`ItemSpacing`](crate::ItemSpacing).
///
/// During placement every item is offered the container's full size, so items
/// that want to fill the available space can.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LinearStack {
    /// Stacking direction.
    pub axis: Axis,
    /// Uniform gap between neighbours, or `None` to derive it from the items.
    pub spacing: Option<f64>,
    /// Cross-axis alignment.
    pub alignment: Alignment,
}

impl LinearStack {
    /// A top-to-bottom stack with item-derived spacing and leading alignment.
    pub const fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            spacing: None,
            alignment: Alignment::Leading,
        }
    }

    /// A left-to-right stack with item-derived spacing and leading (top) alignment.
    pub const fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            spacing: None,
            alignment: Alignment::Leading,
        }
    }

    /// Use `spacing` between every pair of neighbours.
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set the cross-axis alignment.
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn gaps<I: LayoutItem>(&self, items: &[I]) -> Vec<f64> {
        spacings(items.len(), self.spacing, self.axis, |i| items[i].spacing())
    }
}

impl Layout for LinearStack {
    type Cache = ();

    fn make_cache<I: LayoutItem>(&self, _items: &[I]) -> Self::Cache {}

    fn measure<I: LayoutItem>(
        &self,
        _proposal: ProposedSize,
        items: &[I],
        _cache: &mut Self::Cache,
    ) -> Size {
        if items.is_empty() {
            return Size::ZERO;
        }
        let gaps: f64 = self.gaps(items).iter().sum();
        let (main, cross) = natural_sizes(items)
            .iter()
            .fold((0.0, 0.0_f64), |(main, cross), size| {
                (
                    main + self.axis.main(*size),
                    cross.max(self.axis.cross(*size)),
                )
            });
        self.axis.size(main + gaps, cross)
    }

    fn place<I: LayoutItem>(
        &self,
        bounds: Rect,
        _proposal: ProposedSize,
        items: &mut [I],
        _cache: &mut Self::Cache,
    ) {
        if items.is_empty() {
            return;
        }
        let gaps = self.gaps(items);
        let proposal = ProposedSize::from_size(bounds.size());
        let (cross, anchor) = cross_position(self.alignment, self.axis, bounds);
        let mut next = self.axis.start(bounds);
        for (item, gap) in items.iter_mut().zip(gaps) {
            let size = item.measure(proposal);
            item.place(self.axis.point(next, cross), anchor, proposal);
            next += self.axis.main(size) + gap;
        }
    }
}
