// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_layout --heading-base-level=0

//! Understory Layout: Kurbo-native, closed-form layouts for small item collections.
//!
//! Understory Layout computes where items go. Given a container and a sequence of
//! items that can report a preferred size, each layout answers two questions:
//!
//! - How big does the arrangement want to be within a proposed size? ([`Layout::measure`])
//! - Where does each item go? ([`Layout::place`])
//!
//! Every layout is a fixed, deterministic formula. There is no constraint solver.
//!
//! ## Layouts
//!
//! - [`LinearStack`]: items one after another along an axis, with explicit or item-derived spacing.
//! - [`RadialStack`]: items evenly spaced around a circle that fits the container.
//! - [`SpiralStack`]: any number of items on rings of a fixed size, each item nudging the radius.
//! - [`PyramidStack`]: a priority-ranked vertical stack whose items shrink with rank.
//! - [`ComposedLayout`]: a linear or radial stack, chosen on every call from a [`SizeClass`].
//!
//! ## Items
//!
//! Items implement [`LayoutItem`]. Layouts only ever ask an item for its size under a
//! [`ProposedSize`] and tell it where to go: a position, the [`Anchor`] that position
//! refers to, and the proposal it was placed under. Items are borrowed for a single pass.
//! [`FixedItem`] is a ready-made item with a fixed size that records its placement.
//!
//! ## Caching
//!
//! Each layout names a [`Layout::Cache`] the host keeps between passes. Radial and
//! spiral caches hold angles and radii so a pass with an unchanged item count does not
//! recompute them. The pyramid cache holds the scale updates produced by the last
//! placement, which the host applies once the pass is over (see [`ScaleUpdates`]).
//!
//! ## Coordinates
//!
//! Coordinates are y-down. Angles on circles are measured clockwise from 12 o'clock.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_layout::{FixedItem, Layout, ProposedSize, RadialStack};
//!
//! // Three 20×20 items around a 200×200 container.
//! let mut items = vec![FixedItem::new(20.0, 20.0); 3];
//! let radial = RadialStack::new();
//! let mut cache = radial.make_cache(&items);
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//! let size = radial.measure(ProposedSize::from_size(bounds.size()), &items, &mut cache);
//! assert_eq!(size, bounds.size());
//!
//! radial.place(bounds, ProposedSize::from_size(size), &mut items, &mut cache);
//! assert_eq!(cache.radius(), Some(90.0));
//! assert_eq!(items[0].placement.unwrap().position, Point::new(100.0, 10.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod composed;
pub mod error;
pub mod item;
pub mod layout;
pub mod pyramid;
pub mod radial;
pub mod spiral;
pub mod stack;
pub mod types;
mod util;

pub use composed::{ComposedCache, ComposedLayout, LayoutKind};
pub use error::LayoutError;
pub use item::{FixedItem, LayoutItem};
pub use layout::Layout;
pub use pyramid::{PyramidCache, PyramidStack, ScaleUpdate, ScaleUpdates};
pub use radial::{RadialCache, RadialStack};
pub use spiral::{SpiralCache, SpiralDirection, SpiralStack};
pub use stack::LinearStack;
pub use types::{Alignment, Anchor, Axis, ItemSpacing, Placement, ProposedSize, SizeClass};
