// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported when constructing layouts.

/// A layout was configured with values it cannot work with.
///
/// Layout passes themselves never fail; these are raised by constructors.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A spiral needs at least one element per ring.
    #[error("elements per ring must be greater than zero")]
    ZeroElementsPerRing,
    /// Ring padding must be a finite number.
    #[error("ring padding must be finite, got {0}")]
    NonFiniteRingPadding(f64),
    /// An explicit ring step must be a finite number.
    #[error("ring step must be finite, got {0}")]
    NonFiniteRingStep(f64),
}
