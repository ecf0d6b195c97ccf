// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spiral stack: rings of a fixed size whose radius shifts a little per item.
//!
//! ## Geometry
//!
//! Items are laid out in rings of [`SpiralStack::elements_per_ring`]. Within a
//! ring, item `i` sits at angle `i * 360° / elements_per_ring` and at distance
//! `ring_radius ± radius_step * i` from the container center, where
//! `radius_step = (max item extent + ring_padding) / elements_per_ring`.
//! Whatever does not fit in the ring goes to the next ring, whose radius
//! is shifted by the ring step (`max item extent + ring_padding` unless set
//! explicitly). With the default step, the last item of one ring and the first
//! of the next are exactly one `radius_step` apart, so the rings read as one
//! continuous spiral.
//!
//! The first ring's radius is the same fitting radius a
//! [`RadialStack`](crate::RadialStack) uses, computed on the first placement
//! and cached.

use kurbo::{Point, Rect, Size};
use log::{debug, trace};

use crate::error::LayoutError;
use crate::item::LayoutItem;
use crate::layout::Layout;
use crate::types::{Anchor, ProposedSize};
use crate::util::{angle_step, circle_point, fitting_radius, max_size, natural_sizes};

/// Which way successive items move relative to the first ring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpiralDirection {
    /// Distance shrinks with every item; the spiral stays inside the container.
    #[default]
    Inward,
    /// Distance grows with every item.
    Outward,
}

impl SpiralDirection {
    const fn sign(self) -> f64 {
        match self {
            Self::Inward => -1.0,
            Self::Outward => 1.0,
        }
    }
}

/// Places any number of items on a spiral of fixed-size rings.
///
/// See the [module documentation](self) for the geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpiralStack {
    elements_per_ring: usize,
    ring_padding: f64,
    ring_step: Option<f64>,
    direction: SpiralDirection,
}

impl Default for SpiralStack {
    fn default() -> Self {
        Self {
            elements_per_ring: Self::DEFAULT_ELEMENTS_PER_RING,
            ring_padding: Self::DEFAULT_RING_PADDING,
            ring_step: None,
            direction: SpiralDirection::Inward,
        }
    }
}

impl SpiralStack {
    /// Items per ring used by [`Default`].
    pub const DEFAULT_ELEMENTS_PER_RING: usize = 24;

    /// Gap between rings used by [`Default`].
    pub const DEFAULT_RING_PADDING: f64 = 4.0;

    /// Create a spiral with `elements_per_ring` items per ring and `ring_padding` between rings.
    ///
    /// Fails if `elements_per_ring` is zero or `ring_padding` is not finite.
    pub fn new(elements_per_ring: usize, ring_padding: f64) -> Result<Self, LayoutError> {
        if elements_per_ring == 0 {
            return Err(LayoutError::ZeroElementsPerRing);
        }
        if !ring_padding.is_finite() {
            return Err(LayoutError::NonFiniteRingPadding(ring_padding));
        }
        Ok(Self {
            elements_per_ring,
            ring_padding,
            ..Self::default()
        })
    }

    /// Set the direction the spiral winds in.
    pub const fn with_direction(mut self, direction: SpiralDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Shift each ring by `ring_step` instead of the max item extent plus padding.
    ///
    /// Fails if `ring_step` is not finite.
    pub fn with_ring_step(mut self, ring_step: f64) -> Result<Self, LayoutError> {
        if !ring_step.is_finite() {
            return Err(LayoutError::NonFiniteRingStep(ring_step));
        }
        self.ring_step = Some(ring_step);
        Ok(self)
    }

    /// Items per ring.
    pub const fn elements_per_ring(&self) -> usize {
        self.elements_per_ring
    }

    /// Padding added to the max item extent between rings.
    pub const fn ring_padding(&self) -> f64 {
        self.ring_padding
    }

    /// Explicit ring step, if set.
    pub const fn ring_step(&self) -> Option<f64> {
        self.ring_step
    }

    /// Winding direction.
    pub const fn direction(&self) -> SpiralDirection {
        self.direction
    }

    /// Lay out `items` ring by ring, the first ring at `radius`.
    fn place_rings<I: LayoutItem>(&self, ring: &RingGeometry, radius: f64, items: &mut [I]) {
        let sign = self.direction.sign();
        let mut ring_radius = radius;
        for current in items.chunks_mut(self.elements_per_ring) {
            for (index, item) in current.iter_mut().enumerate() {
                let i = index as f64;
                let distance = ring_radius + sign * ring.radius_step * i;
                item.place(
                    circle_point(ring.center, distance, ring.angle * i),
                    Anchor::Center,
                    ProposedSize::UNSPECIFIED,
                );
            }
            ring_radius += sign * ring.ring_step;
        }
    }
}

/// Values a [`SpiralStack`] keeps between passes.
///
/// Everything except the first ring's radius is derived from the items when
/// the cache is built, and kept until the item count changes. The radius is
/// filled in by the first placement after each
/// [`update_cache`](Layout::update_cache).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpiralCache {
    radius: Option<f64>,
    count: usize,
    max_size: Size,
    angle: f64,
    radius_step: f64,
}

impl SpiralCache {
    /// First ring's radius, once a placement has computed it.
    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    /// Item count the cache was built for.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Largest item width and height.
    pub fn max_size(&self) -> Size {
        self.max_size
    }

    /// Angle between neighbouring items of a ring, in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Distance change from one item to the next within a ring.
    pub fn radius_step(&self) -> f64 {
        self.radius_step
    }
}

/// Pass-wide geometry shared by every ring. Nothing in it changes between rings.
#[derive(Copy, Clone, Debug)]
struct RingGeometry {
    center: Point,
    angle: f64,
    radius_step: f64,
    ring_step: f64,
}

impl Layout for SpiralStack {
    type Cache = SpiralCache;

    fn make_cache<I: LayoutItem>(&self, items: &[I]) -> Self::Cache {
        let max_size = max_size(&natural_sizes(items));
        let extent = max_size.width.max(max_size.height);
        let radius_step = (extent + self.ring_padding) / self.elements_per_ring as f64;
        trace!(
            "spiral cache built for {} items: max {max_size:?}, radius step {radius_step}",
            items.len()
        );
        SpiralCache {
            radius: None,
            count: items.len(),
            max_size,
            angle: angle_step(self.elements_per_ring),
            radius_step,
        }
    }

    /// Forget the radius; rebuild everything else only if the item count moved.
    fn update_cache<I: LayoutItem>(&self, cache: &mut Self::Cache, items: &[I]) {
        if cache.count == items.len() {
            cache.radius = None;
        } else {
            debug!("spiral item count changed from {} to {}", cache.count, items.len());
            *cache = self.make_cache(items);
        }
    }

    /// The proposal, with unspecified dimensions replaced by
    /// [`ProposedSize::DEFAULT_REPLACEMENT`].
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
        let max_size = cache.max_size;
        let radius = *cache.radius.get_or_insert_with(|| {
            let radius = fitting_radius(bounds, max_size);
            trace!("spiral radius computed: {radius}");
            radius
        });
        let ring = RingGeometry {
            center: bounds.center(),
            angle: cache.angle,
            radius_step: cache.radius_step,
            ring_step: self
                .ring_step
                .unwrap_or(max_size.width.max(max_size.height) + self.ring_padding),
        };
        self.place_rings(&ring, radius, items);
    }
}
