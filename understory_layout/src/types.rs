// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by every layout: size proposals, anchors, placements, and configuration enums.

use kurbo::{Point, Rect, Size, Vec2};

/// A size offered to a layout or an item.
///
/// `None` in a dimension means "unspecified": the receiver answers with its ideal
/// extent along that axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ProposedSize {
    /// Proposed width, or `None` if unspecified.
    pub width: Option<f64>,
    /// Proposed height, or `None` if unspecified.
    pub height: Option<f64>,
}

impl ProposedSize {
    /// Both dimensions unspecified; asks for the ideal size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Zero in both dimensions; asks for the minimum size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Infinite in both dimensions; asks for the maximum size.
    pub const INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY);

    /// Stand-in extent for unspecified dimensions when a concrete size is required.
    pub const DEFAULT_REPLACEMENT: Size = Size::new(10.0, 10.0);

    /// Create a proposal with both dimensions specified.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Create a proposal matching `size` exactly.
    pub const fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Returns true if neither dimension is specified.
    pub const fn is_unspecified(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Resolve to a concrete size, filling unspecified dimensions from `replacement`.
    pub fn replacing_unspecified_dimensions(self, replacement: Size) -> Size {
        Size::new(
            self.width.unwrap_or(replacement.width),
            self.height.unwrap_or(replacement.height),
        )
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

/// The point of an item that a placement position refers to.
///
/// Coordinates are y-down: `Top` is the minimum y edge and `Leading` the minimum x edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Top-left corner.
    TopLeading,
    /// Middle of the top edge.
    Top,
    /// Top-right corner.
    TopTrailing,
    /// Middle of the left edge.
    Leading,
    /// Center of the item.
    #[default]
    Center,
    /// Middle of the right edge.
    Trailing,
    /// Bottom-left corner.
    BottomLeading,
    /// Middle of the bottom edge.
    Bottom,
    /// Bottom-right corner.
    BottomTrailing,
}

impl Anchor {
    /// Fractional offset of the anchor inside a unit square, `(0, 0)` being top-leading.
    pub const fn unit(self) -> Vec2 {
        match self {
            Self::TopLeading => Vec2::new(0.0, 0.0),
            Self::Top => Vec2::new(0.5, 0.0),
            Self::TopTrailing => Vec2::new(1.0, 0.0),
            Self::Leading => Vec2::new(0.0, 0.5),
            Self::Center => Vec2::new(0.5, 0.5),
            Self::Trailing => Vec2::new(1.0, 0.5),
            Self::BottomLeading => Vec2::new(0.0, 1.0),
            Self::Bottom => Vec2::new(0.5, 1.0),
            Self::BottomTrailing => Vec2::new(1.0, 1.0),
        }
    }

    /// Top-leading origin of an item of `size` whose anchor sits at `position`.
    pub fn origin(self, position: Point, size: Size) -> Point {
        let unit = self.unit();
        position - Vec2::new(unit.x * size.width, unit.y * size.height)
    }
}

/// Where an item was told to go during a placement pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Position of the anchor point in the container's coordinate space.
    pub position: Point,
    /// Which point of the item `position` refers to.
    pub anchor: Anchor,
    /// Size proposal the item was placed under.
    pub proposal: ProposedSize,
}

impl Placement {
    /// The rectangle an item of `size` occupies under this placement.
    pub fn frame(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.anchor.origin(self.position, size), size)
    }
}

/// Cross-axis alignment for stacks.
///
/// For vertical stacks this is horizontal alignment. For horizontal stacks
/// `Leading` aligns to the top edge and `Trailing` to the bottom edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the minimum edge.
    #[default]
    Leading,
    /// Align to the middle.
    Center,
    /// Align to the maximum edge.
    Trailing,
}

/// Stacking axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// Extent of `size` along this axis.
    pub(crate) const fn main(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    pub(crate) const fn cross(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Size with `main` along this axis and `cross` across it.
    pub(crate) const fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Point at `main` along this axis and `cross` across it.
    pub(crate) const fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Minimum edge of `bounds` along this axis.
    pub(crate) fn start(self, bounds: Rect) -> f64 {
        match self {
            Self::Horizontal => bounds.min_x(),
            Self::Vertical => bounds.min_y(),
        }
    }
}

/// Coarse environment signal describing how much room a container has along one dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Constrained space, e.g. a phone in landscape along the vertical dimension.
    Compact,
    /// Ample space.
    Regular,
}

/// Preferred spacing an item wants around each of its edges.
///
/// When a stack has no explicit spacing, the gap between neighbours is derived
/// from these preferences with [`ItemSpacing::distance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemSpacing {
    /// Space wanted above the item.
    pub top: f64,
    /// Space wanted left of the item.
    pub leading: f64,
    /// Space wanted below the item.
    pub bottom: f64,
    /// Space wanted right of the item.
    pub trailing: f64,
}

impl ItemSpacing {
    /// No preferred spacing.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The conventional 8-point spacing on every edge.
    pub const STANDARD: Self = Self::uniform(8.0);

    /// Same preference on every edge.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    /// Distance from this item to `next` when `next` follows it along `axis`.
    ///
    /// The larger of the two facing preferences wins.
    pub fn distance(&self, next: &Self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.bottom.max(next.top),
            Axis::Horizontal => self.trailing.max(next.leading),
        }
    }
}

impl Default for ItemSpacing {
    fn default() -> Self {
        Self::STANDARD
    }
}
