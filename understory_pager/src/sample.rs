// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-end telemetry as delivered by the host and as consumed by the index policy.

use kurbo::{Size, Vec2};

use crate::Axis;

/// Which host callback produced a [`ScrollEndEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollEndKind {
    /// The user lifted their finger at the end of a drag.
    DragEnd,
    /// A momentum (fling) animation came to rest.
    MomentumEnd,
}

/// Raw scroll-end event reported by a host scroll primitive.
///
/// Every component is optional so that adapters can forward malformed or
/// partial platform events as-is; [`ScrollSample::from_event`] decides what
/// is usable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollEndEvent {
    /// The callback this event was delivered through.
    pub kind: ScrollEndKind,
    /// Scroll position of the content, in the host's logical units.
    pub content_offset: Option<Vec2>,
    /// Size of the visible viewport.
    pub viewport_size: Option<Size>,
    /// Gesture velocity at the time of the event.
    pub velocity: Option<Vec2>,
}

impl ScrollEndEvent {
    /// Creates a fully populated event.
    #[must_use]
    pub const fn new(
        kind: ScrollEndKind,
        content_offset: Vec2,
        viewport_size: Size,
        velocity: Vec2,
    ) -> Self {
        Self {
            kind,
            content_offset: Some(content_offset),
            viewport_size: Some(viewport_size),
            velocity: Some(velocity),
        }
    }

    /// A drag-release event.
    #[must_use]
    pub const fn drag_end(content_offset: Vec2, viewport_size: Size, velocity: Vec2) -> Self {
        Self::new(ScrollEndKind::DragEnd, content_offset, viewport_size, velocity)
    }

    /// A momentum-completion event.
    #[must_use]
    pub const fn momentum_end(content_offset: Vec2, viewport_size: Size, velocity: Vec2) -> Self {
        Self::new(ScrollEndKind::MomentumEnd, content_offset, viewport_size, velocity)
    }
}

/// A scroll-end event projected onto the navigation axis.
///
/// Samples are ephemeral: one is produced per gesture-end event and consumed
/// immediately by [`IndexPolicy::compute_index`](crate::IndexPolicy::compute_index).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollSample {
    /// Content offset along the axis.
    pub offset: f64,
    /// Viewport extent along the axis.
    pub extent: f64,
    /// Gesture velocity along the axis.
    pub velocity: f64,
}

impl ScrollSample {
    /// Creates a sample from already-projected components.
    #[must_use]
    pub const fn new(offset: f64, extent: f64, velocity: f64) -> Self {
        Self {
            offset,
            extent,
            velocity,
        }
    }

    /// Projects `event` onto `axis`.
    ///
    /// Returns `None` if any of offset, viewport size, or velocity is missing.
    #[must_use]
    pub fn from_event(event: &ScrollEndEvent, axis: Axis) -> Option<Self> {
        Some(Self {
            offset: axis.component(event.content_offset?),
            extent: axis.extent(event.viewport_size?),
            velocity: axis.component(event.velocity?),
        })
    }

    /// Fractional slide position: `offset / extent`.
    ///
    /// Only meaningful when `extent > 0`.
    #[must_use]
    pub fn raw_position(&self) -> f64 {
        self.offset / self.extent
    }
}
