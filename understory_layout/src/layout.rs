// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout protocol shared by every strategy.

use kurbo::{Rect, Size};

use crate::item::LayoutItem;
use crate::types::ProposedSize;

/// A closed-form arrangement of items inside a container.
///
/// A host drives a layout in passes. It creates a cache once with
/// [`make_cache`](Layout::make_cache), calls [`update_cache`](Layout::update_cache)
/// whenever the item sequence or the container may have changed, then asks for
/// a size with [`measure`](Layout::measure) and positions items with
/// [`place`](Layout::place). Either step may run several times per pass and
/// must give the same answer for the same inputs.
///
/// The cache is owned by the host and handed back on every call, so the layout
/// value itself stays cheap to rebuild each pass.
pub trait Layout {
    /// Derived quantities kept between passes.
    type Cache;

    /// Build a cache for `items`.
    fn make_cache<I: LayoutItem>(&self, items: &[I]) -> Self::Cache;

    /// Refresh `cache` after the items or the container may have changed.
    ///
    /// The default rebuilds the cache from scratch.
    fn update_cache<I: LayoutItem>(&self, cache: &mut Self::Cache, items: &[I]) {
        *cache = self.make_cache(items);
    }

    /// Size the arrangement wants within `proposal`.
    fn measure<I: LayoutItem>(
        &self,
        proposal: ProposedSize,
        items: &[I],
        cache: &mut Self::Cache,
    ) -> Size;

    /// Place every item exactly once inside `bounds`.
    fn place<I: LayoutItem>(
        &self,
        bounds: Rect,
        proposal: ProposedSize,
        items: &mut [I],
        cache: &mut Self::Cache,
    );
}
