// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation axis slides are laid out along.

use kurbo::{Size, Vec2};

/// Axis along which slides are arranged and gestures are measured.
///
/// The axis is fixed for the lifetime of a [`Pager`](crate::Pager). It selects
/// which offset, velocity, and viewport component is consulted everywhere.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Slides are laid out left to right.
    #[default]
    X,
    /// Slides are laid out top to bottom.
    Y,
}

impl Axis {
    /// Returns the component of `v` along this axis.
    #[must_use]
    pub const fn component(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub const fn extent(self, size: Size) -> f64 {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    /// Lifts a scalar offset along this axis into a 2D offset.
    ///
    /// The cross-axis component is zero.
    #[must_use]
    pub const fn offset(self, along: f64) -> Vec2 {
        match self {
            Self::X => Vec2::new(along, 0.0),
            Self::Y => Vec2::new(0.0, along),
        }
    }

    /// Returns `true` for [`Axis::X`].
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::X)
    }
}
