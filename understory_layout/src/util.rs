// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers shared by the layouts.

use alloc::vec::Vec;
use core::f64::consts::TAU;
use kurbo::{Affine, Point, Rect, Size};

use crate::item::LayoutItem;
use crate::types::{Alignment, Anchor, Axis, ItemSpacing, ProposedSize};

/// Ideal sizes of `items`, in order.
pub(crate) fn natural_sizes<I: LayoutItem>(items: &[I]) -> Vec<Size> {
    items
        .iter()
        .map(|item| item.measure(ProposedSize::UNSPECIFIED))
        .collect()
}

/// Component-wise maximum of `sizes`; zero when empty.
pub(crate) fn max_size(sizes: &[Size]) -> Size {
    sizes.iter().fold(Size::ZERO, |acc, size| {
        Size::new(acc.width.max(size.width), acc.height.max(size.height))
    })
}

/// Gap following each of `count` items along `axis`; the last gap is zero.
///
/// `explicit` applies uniformly. Otherwise each gap is derived from the
/// preferences of the item at that position and its successor.
pub(crate) fn spacings(
    count: usize,
    explicit: Option<f64>,
    axis: Axis,
    spacing_of: impl Fn(usize) -> ItemSpacing,
) -> Vec<f64> {
    (0..count)
        .map(|i| {
            if i + 1 == count {
                return 0.0;
            }
            match explicit {
                Some(spacing) => spacing,
                None => spacing_of(i).distance(&spacing_of(i + 1), axis),
            }
        })
        .collect()
}

/// Cross-axis coordinate and anchor for items aligned inside `bounds`.
pub(crate) fn cross_position(alignment: Alignment, axis: Axis, bounds: Rect) -> (f64, Anchor) {
    match (axis, alignment) {
        (Axis::Vertical, Alignment::Leading) => (bounds.min_x(), Anchor::TopLeading),
        (Axis::Vertical, Alignment::Center) => (bounds.center().x, Anchor::Top),
        (Axis::Vertical, Alignment::Trailing) => (bounds.max_x(), Anchor::TopTrailing),
        (Axis::Horizontal, Alignment::Leading) => (bounds.min_y(), Anchor::TopLeading),
        (Axis::Horizontal, Alignment::Center) => (bounds.center().y, Anchor::Leading),
        (Axis::Horizontal, Alignment::Trailing) => (bounds.max_y(), Anchor::BottomLeading),
    }
}

/// Largest circle radius that keeps items of up to `max_item` inside `bounds`.
pub(crate) fn fitting_radius(bounds: Rect, max_item: Size) -> f64 {
    bounds.width().min(bounds.height()) / 2.0 - max_item.width.max(max_item.height) / 2.0
}

/// Angle between `count` evenly spaced points on a circle; zero when `count` is zero.
pub(crate) fn angle_step(count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        TAU / count as f64
    }
}

/// Point `distance` from `center` at `angle` radians clockwise from 12 o'clock (y-down).
pub(crate) fn circle_point(center: Point, distance: f64, angle: f64) -> Point {
    let offset = Affine::rotate(angle) * Point::new(0.0, -distance);
    center + offset.to_vec2()
}
