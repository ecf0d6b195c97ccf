// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pyramid stack: a priority-ranked vertical stack whose items shrink with rank.
//!
//! ## Ranking and scale
//!
//! Items are ranked by descending [`LayoutItem::priority`]; equal priorities
//! keep their original order. With `N` items, the item ranked `p` from the top
//! (zero-based) gets scale `(N - p) / N`: the highest priority gets `1`, the
//! lowest `1 / N`. Each item advances the stack by its height plus the gap
//! after it, multiplied by its scale, so lower-ranked items take up
//! proportionally less room.
//!
//! ## Deferred scale write-back
//!
//! Writing a scale into an item may invalidate the host's layout, which must not
//! happen in the middle of a pass. Placement therefore never calls
//! [`LayoutItem::set_scale`]. It produces [`ScaleUpdates`] instead, which the
//! host applies once the pass is over:
//!
//! ```
//! use kurbo::Rect;
//! use understory_layout::{FixedItem, Layout, ProposedSize, PyramidStack};
//!
//! let pyramid = PyramidStack::default().with_spacing(8.0);
//! let mut items = vec![FixedItem::new(60.0, 20.0), FixedItem::new(120.0, 20.0)];
//! let mut cache = pyramid.make_cache(&items);
//!
//! pyramid.place(Rect::new(0.0, 0.0, 200.0, 100.0), ProposedSize::UNSPECIFIED, &mut items, &mut cache);
//! assert_eq!(items[1].scale, 1.0, "scales are not written during placement");
//!
//! // After the pass.
//! cache.take_scale_updates().apply(&mut items);
//! assert_eq!(items[0].scale, 1.0);
//! assert_eq!(items[1].scale, 0.5);
//! ```

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use log::trace;

use crate::item::LayoutItem;
use crate::layout::Layout;
use crate::types::{Alignment, Axis, ProposedSize};
use crate::util::{cross_position, spacings};

/// Stacks items top to bottom in priority order, scaling each by its rank.
///
/// See the [module documentation](self) for ranking and scaling rules.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PyramidStack {
    /// Uniform gap between neighbours, or `None` to derive it from the items.
    pub spacing: Option<f64>,
    /// Horizontal alignment.
    pub alignment: Alignment,
}

impl PyramidStack {
    /// Use `spacing` between every pair of ranked neighbours.
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set the horizontal alignment.
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Place `items` inside `bounds` and return the scales they should display at.
    ///
    /// The returned updates are not applied; see [`ScaleUpdates::apply`].
    pub fn place_ranked<I: LayoutItem>(&self, bounds: Rect, items: &mut [I]) -> ScaleUpdates {
        if items.is_empty() {
            return ScaleUpdates::default();
        }
        let ranks = self.rank(items);
        let (x, anchor) = cross_position(self.alignment, Axis::Vertical, bounds);
        let mut next = bounds.min_y();
        let mut updates = Vec::with_capacity(ranks.len());
        for rank in &ranks {
            let item = &mut items[rank.index];
            item.place(Point::new(x, next), anchor, ProposedSize::UNSPECIFIED);
            updates.push(ScaleUpdate {
                index: rank.index,
                scale: rank.scale,
            });
            next += rank.extent();
        }
        ScaleUpdates { updates }
    }

    /// Ranked order with each item's natural size, trailing gap, and scale.
    fn rank<I: LayoutItem>(&self, items: &[I]) -> Vec<Rank> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        // Stable, so equal priorities keep their original order.
        order.sort_by(|&a, &b| items[b].priority().total_cmp(&items[a].priority()));
        let gaps = spacings(order.len(), self.spacing, Axis::Vertical, |p| {
            items[order[p]].spacing()
        });
        let count = order.len() as f64;
        order
            .iter()
            .zip(gaps)
            .enumerate()
            .map(|(position, (&index, gap))| Rank {
                index,
                size: items[index].measure(ProposedSize::UNSPECIFIED),
                gap,
                scale: (count - position as f64) / count,
            })
            .collect()
    }
}

#[derive(Copy, Clone, Debug)]
struct Rank {
    index: usize,
    size: Size,
    gap: f64,
    scale: f64,
}

impl Rank {
    /// Vertical room the item takes, including the gap after it.
    fn extent(&self) -> f64 {
        (self.size.height + self.gap) * self.scale
    }
}

/// A scale to write back into the item at `index` (original order).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleUpdate {
    /// Index of the item in the sequence that was placed.
    pub index: usize,
    /// Scale the item should display at.
    pub scale: f64,
}

/// Scale write-backs produced by a pyramid placement, in ranked order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScaleUpdates {
    updates: Vec<ScaleUpdate>,
}

impl ScaleUpdates {
    /// True if there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Number of updates.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Iterate over updates, highest rank first.
    pub fn iter(&self) -> impl Iterator<Item = &ScaleUpdate> {
        self.updates.iter()
    }

    /// Scale recorded for the item at `index`, if any.
    ///
    /// This scans every update; use [`apply`](Self::apply) or
    /// [`iter`](Self::iter) to visit all of them.
    pub fn scale_of(&self, index: usize) -> Option<f64> {
        self.updates
            .iter()
            .find(|update| update.index == index)
            .map(|update| update.scale)
    }

    /// Write every scale into `items` with [`LayoutItem::set_scale`].
    ///
    /// Indices that are out of range for `items` are skipped.
    pub fn apply<I: LayoutItem>(self, items: &mut [I]) {
        for update in self.updates {
            if let Some(item) = items.get_mut(update.index) {
                item.set_scale(update.scale);
            }
        }
    }
}

/// Pending output of a [`PyramidStack`] placement.
///
/// Each placement replaces the pending updates; the host drains them with
/// [`take_scale_updates`](Self::take_scale_updates) after the pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PyramidCache {
    pending: ScaleUpdates,
}

impl PyramidCache {
    /// Updates from the latest placement that have not been taken yet.
    pub fn pending(&self) -> &ScaleUpdates {
        &self.pending
    }

    /// Take the pending updates, leaving none behind.
    pub fn take_scale_updates(&mut self) -> ScaleUpdates {
        core::mem::take(&mut self.pending)
    }
}

impl Layout for PyramidStack {
    type Cache = PyramidCache;

    fn make_cache<I: LayoutItem>(&self, _items: &[I]) -> Self::Cache {
        PyramidCache::default()
    }

    /// Keeps pending updates; only [`PyramidCache::take_scale_updates`] clears them.
    fn update_cache<I: LayoutItem>(&self, _cache: &mut Self::Cache, _items: &[I]) {}

    /// The widest natural width, and the sum of every ranked item's scaled extent.
    fn measure<I: LayoutItem>(
        &self,
        _proposal: ProposedSize,
        items: &[I],
        _cache: &mut Self::Cache,
    ) -> Size {
        if items.is_empty() {
            return Size::ZERO;
        }
        self.rank(items)
            .iter()
            .fold(Size::ZERO, |acc, rank| {
                Size::new(acc.width.max(rank.size.width), acc.height + rank.extent())
            })
    }

    fn place<I: LayoutItem>(
        &self,
        bounds: Rect,
        _proposal: ProposedSize,
        items: &mut [I],
        cache: &mut Self::Cache,
    ) {
        let updates = self.place_ranked(bounds, items);
        trace!("pyramid placement queued {} scale updates", updates.len());
        cache.pending = updates;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::FixedItem;
    use crate::types::{Anchor, ItemSpacing};
    use alloc::vec;

    fn greetings() -> Vec<FixedItem> {
        vec![
            FixedItem::new(60.0, 30.0).with_priority(1.0),
            FixedItem::new(120.0, 30.0).with_priority(3.0),
            FixedItem::new(240.0, 30.0).with_priority(2.0),
        ]
    }

    #[test]
    fn highest_priority_gets_full_scale() {
        let pyramid = PyramidStack::default().with_spacing(8.0);
        let mut items = greetings();
        let updates = pyramid.place_ranked(Rect::new(0.0, 0.0, 300.0, 300.0), &mut items);

        assert_eq!(updates.scale_of(1), Some(1.0));
        assert_eq!(updates.scale_of(2), Some(2.0 / 3.0));
        assert_eq!(updates.scale_of(0), Some(1.0 / 3.0));
        let ranked: Vec<usize> = updates.iter().map(|u| u.index).collect();
        assert_eq!(ranked, [1, 2, 0]);
    }

    #[test]
    fn placement_advances_by_scaled_extent() {
        let pyramid = PyramidStack::default()
            .with_spacing(9.0)
            .with_alignment(Alignment::Center);
        let mut items = greetings();
        pyramid.place_ranked(Rect::new(0.0, 10.0, 300.0, 310.0), &mut items);

        let y = |i: usize| items[i].placement.unwrap().position.y;
        assert_eq!(y(1), 10.0);
        assert_eq!(y(2), 10.0 + (30.0 + 9.0) * 1.0);
        assert_eq!(y(0), 10.0 + 39.0 + (30.0 + 9.0) * (2.0 / 3.0));
        for item in &items {
            let placement = item.placement.unwrap();
            assert_eq!(placement.position.x, 150.0);
            assert_eq!(placement.anchor, Anchor::Top);
            assert_eq!(placement.proposal, ProposedSize::UNSPECIFIED);
        }
    }

    #[test]
    fn measured_height_matches_placed_extents() {
        let pyramid = PyramidStack::default().with_spacing(9.0);
        let mut items = greetings();
        let mut cache = pyramid.make_cache(&items);
        let size = pyramid.measure(ProposedSize::UNSPECIFIED, &items, &mut cache);
        // Scaled extents: (30 + 9) * 1, (30 + 9) * 2/3, (30 + 0) * 1/3.
        let expected = 39.0 + 39.0 * (2.0 / 3.0) + 30.0 / 3.0;
        let d = size.height - expected;
        assert!(d < 1e-9 && d > -1e-9);
        assert_eq!(size.width, 240.0);

        pyramid.place(
            Rect::from_origin_size(Point::ZERO, size),
            ProposedSize::UNSPECIFIED,
            &mut items,
            &mut cache,
        );
        let last = items[0].placement.unwrap().position.y;
        let d = last + 30.0 / 3.0 - size.height;
        assert!(d < 1e-9 && d > -1e-9);
    }

    #[test]
    fn ties_keep_original_order() {
        let pyramid = PyramidStack::default();
        let mut items = vec![FixedItem::new(10.0, 10.0); 4];
        let updates = pyramid.place_ranked(Rect::new(0.0, 0.0, 100.0, 100.0), &mut items);
        let ranked: Vec<usize> = updates.iter().map(|u| u.index).collect();
        assert_eq!(ranked, [0, 1, 2, 3]);
        let scales: Vec<f64> = updates.iter().map(|u| u.scale).collect();
        assert_eq!(scales, [1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn derived_spacing_follows_ranked_neighbours() {
        let pyramid = PyramidStack::default();
        let items = vec![
            FixedItem::new(10.0, 10.0).with_spacing(ItemSpacing::uniform(2.0)),
            FixedItem::new(10.0, 10.0)
                .with_priority(1.0)
                .with_spacing(ItemSpacing::uniform(6.0)),
        ];
        let mut cache = pyramid.make_cache(&items);
        let size = pyramid.measure(ProposedSize::UNSPECIFIED, &items, &mut cache);
        // Ranked [1, 0]: gap max(6, 2) = 6 after the first, none after the last.
        assert_eq!(size.height, (10.0 + 6.0) * 1.0 + 10.0 * 0.5);
    }

    #[test]
    fn scales_are_deferred_until_applied() {
        let pyramid = PyramidStack::default().with_spacing(8.0);
        let mut items = greetings();
        let mut cache = pyramid.make_cache(&items);
        pyramid.place(
            Rect::new(0.0, 0.0, 300.0, 300.0),
            ProposedSize::UNSPECIFIED,
            &mut items,
            &mut cache,
        );
        assert!(items.iter().all(|item| item.scale == 1.0));
        assert_eq!(cache.pending().len(), 3);

        pyramid.update_cache(&mut cache, &items);
        assert_eq!(cache.pending().len(), 3);

        cache.take_scale_updates().apply(&mut items);
        assert!(cache.pending().is_empty());
        assert_eq!(items[0].scale, 1.0 / 3.0);
        assert_eq!(items[1].scale, 1.0);
        assert_eq!(items[2].scale, 2.0 / 3.0);
    }

    #[test]
    fn measure_is_idempotent_across_placement() {
        let pyramid = PyramidStack::default().with_spacing(8.0);
        let mut items = greetings();
        let mut cache = pyramid.make_cache(&items);
        let first = pyramid.measure(ProposedSize::UNSPECIFIED, &items, &mut cache);
        let second = pyramid.measure(ProposedSize::UNSPECIFIED, &items, &mut cache);
        pyramid.place(
            Rect::new(0.0, 0.0, 300.0, 300.0),
            ProposedSize::UNSPECIFIED,
            &mut items,
            &mut cache,
        );
        cache.take_scale_updates().apply(&mut items);
        let third = pyramid.measure(ProposedSize::UNSPECIFIED, &items, &mut cache);
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn scale_lookup_and_apply_skip_unknown_indices() {
        let pyramid = PyramidStack::default();
        let mut items = greetings();
        let updates = pyramid.place_ranked(Rect::new(0.0, 0.0, 300.0, 300.0), &mut items);
        assert_eq!(updates.scale_of(3), None);

        // Applying to a shorter slice only touches what is there.
        updates.apply(&mut items[..1]);
        assert_eq!(items[0].scale, 1.0 / 3.0);
        assert_eq!(items[1].scale, 1.0);
        assert_eq!(items[2].scale, 1.0);
    }

    #[test]
    fn empty_items_yield_nothing() {
        let pyramid = PyramidStack::default();
        let mut items: Vec<FixedItem> = Vec::new();
        let mut cache = pyramid.make_cache(&items);
        assert_eq!(
            pyramid.measure(ProposedSize::UNSPECIFIED, &items, &mut cache),
            Size::ZERO
        );
        pyramid.place(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ProposedSize::UNSPECIFIED,
            &mut items,
            &mut cache,
        );
        assert!(cache.pending().is_empty());
    }
}
