// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial stack: items evenly spaced around a circle.

use kurbo::{Rect, Size};
use log::{debug, trace};

use crate::item::LayoutItem;
use crate::layout::Layout;
use crate::types::{Anchor, ProposedSize};
use crate::util::{angle_step, circle_point, fitting_radius, max_size, natural_sizes};

/// Places items evenly around a circle centered in the container.
///
/// Item `i` of `N` sits at `i * 360°/N` clockwise from 12 o'clock, anchored at
/// its center. The radius is half the smaller container dimension minus half
/// the largest item dimension, so every item stays inside the container
/// whatever its angle.
///
/// The stack takes whatever size it is offered; see [`Layout::measure`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RadialStack;

impl RadialStack {
    /// Create a radial stack.
    pub const fn new() -> Self {
        Self
    }
}

/// Values a [`RadialStack`] keeps between passes.
///
/// The angle step depends only on the item count and survives passes until the
/// count changes. The radius depends on the container and is recomputed on the
/// first placement after each [`update_cache`](Layout::update_cache).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialCache {
    radius: Option<f64>,
    angle: f64,
    count: usize,
}

impl RadialCache {
    fn for_count(count: usize) -> Self {
        Self {
            radius: None,
            angle: angle_step(count),
            count,
        }
    }

    /// Resolved circle radius, if a placement has computed it since the last invalidation.
    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    /// Angle between neighbouring items, in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Item count the angle was computed for.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Forget the radius and, if the count moved, recompute the angle.
    fn sync_count(&mut self, count: usize) {
        self.radius = None;
        if self.count != count {
            debug!("radial item count changed from {} to {count}", self.count);
            self.count = count;
            self.angle = angle_step(count);
        }
    }
}

impl Layout for RadialStack {
    type Cache = RadialCache;

    fn make_cache<I: LayoutItem>(&self, items: &[I]) -> Self::Cache {
        trace!("radial cache built for {} items", items.len());
        RadialCache::for_count(items.len())
    }

    fn update_cache<I: LayoutItem>(&self, cache: &mut Self::Cache, items: &[I]) {
        cache.sync_count(items.len());
    }

    /// The proposal, with unspecified dimensions replaced by
    /// [`ProposedSize::DEFAULT_REPLACEMENT`]. Item sizes do not grow the stack.
    fn measure<I: LayoutItem>(
        &self,
        proposal: ProposedSize,
        _items: &[I],
        _cache: &mut Self::Cache,
    ) -> Size {
        proposal.replacing_unspecified_dimensions(ProposedSize::DEFAULT_REPLACEMENT)
    }

    fn place<I: LayoutItem>(
        &self,
        bounds: Rect,
        _proposal: ProposedSize,
        items: &mut [I],
        cache: &mut Self::Cache,
    ) {
        if items.is_empty() {
            return;
        }
        if cache.count != items.len() {
            cache.sync_count(items.len());
        }
        let radius = match cache.radius {
            Some(radius) => radius,
            None => {
                let radius = fitting_radius(bounds, max_size(&natural_sizes(items)));
                trace!("radial radius computed: {radius}");
                cache.radius = Some(radius);
                radius
            }
        };
        let center = bounds.center();
        for (index, item) in items.iter_mut().enumerate() {
            item.place(
                circle_point(center, radius, cache.angle * index as f64),
                Anchor::Center,
                ProposedSize::UNSPECIFIED,
            );
        }
    }
}
