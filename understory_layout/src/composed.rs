// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed layout: a linear stack or a radial stack, chosen per call from the size class.
//!
//! ## Selection
//!
//! A compact vertical size class selects the [`LinearStack`]; anything else,
//! including an unknown size class, selects the [`RadialStack`]. The choice is
//! made again on every [`measure`](Layout::measure) and [`place`](Layout::place)
//! from the current size classes, with no memory of earlier choices. A size class
//! that alternates between passes makes the strategy alternate with it.
//!
//! ## Caches
//!
//! [`ComposedCache`] always holds a cache for both strategies, so switching
//! strategies never rebuilds anything and each cache picks up where it left off
//! when its strategy becomes active again.
//!
//! ```
//! use kurbo::Rect;
//! use understory_layout::{ComposedLayout, FixedItem, Layout, LayoutKind, ProposedSize, SizeClass};
//!
//! let mut items = vec![FixedItem::new(40.0, 40.0); 6];
//! let layout = ComposedLayout::default();
//! let mut cache = layout.make_cache(&items);
//! let bounds = Rect::new(0.0, 0.0, 320.0, 320.0);
//!
//! // A phone rotated to landscape: compact vertical size class.
//! let landscape = layout.with_size_classes(Some(SizeClass::Compact), Some(SizeClass::Regular));
//! assert_eq!(landscape.layout_kind(), LayoutKind::Stack);
//! landscape.place(bounds, ProposedSize::UNSPECIFIED, &mut items, &mut cache);
//!
//! // Back to portrait.
//! let portrait = layout.with_size_classes(Some(SizeClass::Regular), Some(SizeClass::Compact));
//! assert_eq!(portrait.layout_kind(), LayoutKind::Radial);
//! portrait.place(bounds, ProposedSize::UNSPECIFIED, &mut items, &mut cache);
//! assert_eq!(cache.radial.radius(), Some(140.0));
//! ```

use kurbo::{Rect, Size};
use log::trace;

use crate::item::LayoutItem;
use crate::layout::Layout;
use crate::radial::{RadialCache, RadialStack};
use crate::stack::LinearStack;
use crate::types::{ProposedSize, SizeClass};

/// Strategy a [`ComposedLayout`] delegates to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// The linear stack.
    Stack,
    /// The radial stack.
    Radial,
}

/// Switches between a [`LinearStack`] and a [`RadialStack`] based on size classes.
///
/// The layout value is cheap to copy; hosts rebuild it each pass with the
/// current size classes and keep one [`ComposedCache`] for its lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComposedLayout {
    /// Vertical size class of the environment, if known.
    pub vertical_size_class: Option<SizeClass>,
    /// Horizontal size class of the environment, if known.
    pub horizontal_size_class: Option<SizeClass>,
    stack: LinearStack,
    radial: RadialStack,
}

impl Default for ComposedLayout {
    /// A horizontal stack with 16 points of spacing, or a radial stack.
    fn default() -> Self {
        Self::new(LinearStack::horizontal().with_spacing(16.0), RadialStack::new())
    }
}

impl ComposedLayout {
    /// Compose `stack` and `radial` with unknown size classes.
    pub const fn new(stack: LinearStack, radial: RadialStack) -> Self {
        Self {
            vertical_size_class: None,
            horizontal_size_class: None,
            stack,
            radial,
        }
    }

    /// Set the size classes used for the next calls.
    pub const fn with_size_classes(
        mut self,
        vertical: Option<SizeClass>,
        horizontal: Option<SizeClass>,
    ) -> Self {
        self.vertical_size_class = vertical;
        self.horizontal_size_class = horizontal;
        self
    }

    /// Strategy the current size classes select.
    pub const fn layout_kind(&self) -> LayoutKind {
        match self.vertical_size_class {
            Some(SizeClass::Compact) => LayoutKind::Stack,
            Some(SizeClass::Regular) | None => LayoutKind::Radial,
        }
    }

    /// The linear candidate.
    pub const fn stack(&self) -> &LinearStack {
        &self.stack
    }

    /// The radial candidate.
    pub const fn radial(&self) -> &RadialStack {
        &self.radial
    }

    fn select(&self) -> LayoutKind {
        let kind = self.layout_kind();
        trace!(
            "composed layout selected {kind:?} for vertical size class {:?}",
            self.vertical_size_class
        );
        kind
    }
}

/// Caches for both candidates of a [`ComposedLayout`].
///
/// Each field is only ever touched by its own strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedCache {
    /// Cache of the linear stack.
    pub stack: <LinearStack as Layout>::Cache,
    /// Cache of the radial stack.
    pub radial: RadialCache,
}

impl Layout for ComposedLayout {
    type Cache = ComposedCache;

    fn make_cache<I: LayoutItem>(&self, items: &[I]) -> Self::Cache {
        ComposedCache {
            stack: self.stack.make_cache(items),
            radial: self.radial.make_cache(items),
        }
    }

    fn update_cache<I: LayoutItem>(&self, cache: &mut Self::Cache, items: &[I]) {
        self.stack.update_cache(&mut cache.stack, items);
        self.radial.update_cache(&mut cache.radial, items);
    }

    fn measure<I: LayoutItem>(
        &self,
        proposal: ProposedSize,
        items: &[I],
        cache: &mut Self::Cache,
    ) -> Size {
        match self.select() {
            LayoutKind::Stack => self.stack.measure(proposal, items, &mut cache.stack),
            LayoutKind::Radial => self.radial.measure(proposal, items, &mut cache.radial),
        }
    }

    fn place<I: LayoutItem>(
        &self,
        bounds: Rect,
        proposal: ProposedSize,
        items: &mut [I],
        cache: &mut Self::Cache,
    ) {
        match self.select() {
            LayoutKind::Stack => self.stack.place(bounds, proposal, items, &mut cache.stack),
            LayoutKind::Radial => self.radial.place(bounds, proposal, items, &mut cache.radial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::FixedItem;
    use crate::types::{Alignment, Anchor};
    use alloc::vec;
    use alloc::vec::Vec;

    fn stars() -> Vec<FixedItem> {
        vec![FixedItem::new(40.0, 40.0); 5]
    }

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 240.0)
    }

    #[test]
    fn size_class_selects_strategy() {
        let layout = ComposedLayout::default();
        assert_eq!(layout.layout_kind(), LayoutKind::Radial);
        let compact = layout.with_size_classes(Some(SizeClass::Compact), None);
        assert_eq!(compact.layout_kind(), LayoutKind::Stack);
        let regular = layout.with_size_classes(Some(SizeClass::Regular), Some(SizeClass::Compact));
        assert_eq!(regular.layout_kind(), LayoutKind::Radial);
        // Only the vertical size class is consulted.
        let wide = layout.with_size_classes(None, Some(SizeClass::Compact));
        assert_eq!(wide.layout_kind(), LayoutKind::Radial);
    }

    #[test]
    fn compact_matches_linear_stack() {
        let stack = LinearStack::vertical()
            .with_spacing(8.0)
            .with_alignment(Alignment::Center);
        let layout = ComposedLayout::new(stack, RadialStack::new())
            .with_size_classes(Some(SizeClass::Compact), Some(SizeClass::Regular));

        let mut composed_items = stars();
        let mut direct_items = stars();
        let mut cache = layout.make_cache(&composed_items);

        let composed_size = layout.measure(ProposedSize::UNSPECIFIED, &composed_items, &mut cache);
        let direct_size = stack.measure(ProposedSize::UNSPECIFIED, &direct_items, &mut ());
        assert_eq!(composed_size, direct_size);

        layout.place(bounds(), ProposedSize::UNSPECIFIED, &mut composed_items, &mut cache);
        stack.place(bounds(), ProposedSize::UNSPECIFIED, &mut direct_items, &mut ());
        assert_eq!(composed_items, direct_items);
        // The radial cache was not touched.
        assert_eq!(cache.radial.radius(), None);
    }

    #[test]
    fn regular_matches_radial_stack() {
        let radial = RadialStack::new();
        let layout = ComposedLayout::default()
            .with_size_classes(Some(SizeClass::Regular), Some(SizeClass::Regular));

        let mut composed_items = stars();
        let mut direct_items = stars();
        let mut cache = layout.make_cache(&composed_items);
        let mut direct_cache = radial.make_cache(&direct_items);

        let proposal = ProposedSize::new(300.0, 240.0);
        assert_eq!(
            layout.measure(proposal, &composed_items, &mut cache),
            radial.measure(proposal, &direct_items, &mut direct_cache)
        );

        layout.place(bounds(), proposal, &mut composed_items, &mut cache);
        radial.place(bounds(), proposal, &mut direct_items, &mut direct_cache);
        assert_eq!(composed_items, direct_items);
        assert_eq!(cache.radial, direct_cache);
    }

    #[test]
    fn caches_survive_strategy_flips() {
        let layout = ComposedLayout::default();
        let compact = layout.with_size_classes(Some(SizeClass::Compact), None);
        let regular = layout.with_size_classes(Some(SizeClass::Regular), None);

        let mut items = stars();
        let mut cache = layout.make_cache(&items);
        regular.place(bounds(), ProposedSize::UNSPECIFIED, &mut items, &mut cache);
        let radial_cache = cache.radial;
        assert_eq!(radial_cache.radius(), Some(100.0));

        // Flip every pass; the radial cache is left exactly as it was.
        for pass in 0..4 {
            let active = if pass % 2 == 0 { compact } else { regular };
            active.place(bounds(), ProposedSize::UNSPECIFIED, &mut items, &mut cache);
            assert_eq!(cache.radial, radial_cache);
        }
        assert_eq!(items[0].placement.unwrap().anchor, Anchor::Center);
    }

    #[test]
    fn update_cache_reaches_both_strategies() {
        let layout = ComposedLayout::default();
        let mut items = stars();
        let mut cache = layout.make_cache(&items);
        layout.place(bounds(), ProposedSize::UNSPECIFIED, &mut items, &mut cache);
        assert!(cache.radial.radius().is_some());

        items.push(FixedItem::new(40.0, 40.0));
        layout
            .with_size_classes(Some(SizeClass::Compact), None)
            .update_cache(&mut cache, &items);
        assert_eq!(cache.radial.radius(), None);
        assert_eq!(cache.radial.count(), 6);
    }
}
