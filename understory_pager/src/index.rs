// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index policy: turning a scroll-end sample into a discrete slide index.
//!
//! ## Rounding
//!
//! The fractional position `offset / extent` is resolved relative to the
//! current index:
//!
//! - more than [`IndexPolicy::dead_zone`] past the current index: round up,
//! - more than [`IndexPolicy::dead_zone`] before it: round down,
//! - otherwise: round to nearest.
//!
//! A short drag that stays inside the dead zone therefore snaps back to the
//! current slide, while a drag that leaves it advances even if it did not
//! reach the halfway point.
//!
//! ## Velocity gating
//!
//! A sample whose velocity magnitude is at or above
//! [`IndexPolicy::settle_velocity`] is still in motion and is discarded. This
//! separates a completed drag-release from a flick that is still decelerating;
//! the subsequent momentum-end event carries the settled position.
//!
//! ```
//! use understory_pager::{DiscardReason, IndexDecision, IndexPolicy, ScrollSample};
//!
//! let policy = IndexPolicy::default();
//!
//! // 25% of the way towards slide 3 leaves the dead zone: advance.
//! let sample = ScrollSample::new(225.0, 100.0, 0.0);
//! assert_eq!(policy.compute_index(&sample, 2, 10), IndexDecision::Commit(3));
//!
//! // Same position, still flicking: ignored.
//! let sample = ScrollSample::new(225.0, 100.0, 8.0);
//! assert_eq!(
//!     policy.compute_index(&sample, 2, 10),
//!     IndexDecision::Discard(DiscardReason::InMotion)
//! );
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{Axis, ScrollEndEvent, ScrollSample};

/// Default half-width of the snap-back dead zone, in slides.
pub const DEFAULT_DEAD_ZONE: f64 = 0.2;

/// Default velocity magnitude at or above which a sample is considered unsettled.
pub const DEFAULT_SETTLE_VELOCITY: f64 = 6.0;

/// Why a scroll-end sample did not produce a commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiscardReason {
    /// The slide set is empty; there is no valid index to commit.
    EmptySet,
    /// The event lacked an offset, viewport size, or velocity.
    MissingComponent,
    /// A component of the sample was NaN or infinite.
    NonFinite,
    /// The gesture was still moving too fast for the offset to be final.
    InMotion,
    /// The viewport extent along the axis was zero or negative.
    DegenerateExtent,
}

/// Outcome of running a sample through an [`IndexPolicy`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexDecision {
    /// The sample is trusted and resolves to this in-range index.
    Commit(usize),
    /// The sample is not trusted; the previous index is retained.
    Discard(DiscardReason),
}

impl IndexDecision {
    /// Returns the committed index, if any.
    #[must_use]
    pub const fn committed(self) -> Option<usize> {
        match self {
            Self::Commit(index) => Some(index),
            Self::Discard(_) => None,
        }
    }

    /// Returns `true` if the sample was discarded.
    #[must_use]
    pub const fn is_discard(self) -> bool {
        matches!(self, Self::Discard(_))
    }
}

/// Thresholds used to derive a slide index from scroll-end telemetry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexPolicy {
    /// Half-width of the dead zone around the current index, in slides.
    ///
    /// Positions within `current ± dead_zone` round to nearest; positions
    /// beyond it round away from the current index.
    pub dead_zone: f64,
    /// Samples with `|velocity| >= settle_velocity` are discarded.
    pub settle_velocity: f64,
}

impl Default for IndexPolicy {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            settle_velocity: DEFAULT_SETTLE_VELOCITY,
        }
    }
}

impl IndexPolicy {
    /// Creates a policy with custom thresholds.
    #[must_use]
    pub const fn with_thresholds(dead_zone: f64, settle_velocity: f64) -> Self {
        Self {
            dead_zone,
            settle_velocity,
        }
    }

    /// Resolves `sample` to a slide index in `0..len`, relative to `current`.
    ///
    /// The result is clamped into range, so an overscroll past either end
    /// commits the first or last slide.
    #[must_use]
    pub fn compute_index(
        &self,
        sample: &ScrollSample,
        current: usize,
        len: usize,
    ) -> IndexDecision {
        if len == 0 {
            return IndexDecision::Discard(DiscardReason::EmptySet);
        }
        let finite =
            sample.offset.is_finite() && sample.extent.is_finite() && sample.velocity.is_finite();
        if !finite {
            return IndexDecision::Discard(DiscardReason::NonFinite);
        }
        if sample.velocity.abs() >= self.settle_velocity {
            return IndexDecision::Discard(DiscardReason::InMotion);
        }
        if sample.extent <= 0.0 {
            return IndexDecision::Discard(DiscardReason::DegenerateExtent);
        }

        let raw = sample.raw_position();
        let delta = raw - current as f64;
        let candidate = if delta > self.dead_zone {
            raw.ceil()
        } else if delta < -self.dead_zone {
            raw.floor()
        } else {
            raw.round()
        };

        let last = (len - 1) as f64;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Candidate is integral and clamped to 0..len before the cast"
        )]
        let index = candidate.clamp(0.0, last) as usize;
        IndexDecision::Commit(index)
    }

    /// Projects `event` onto `axis` and resolves it like [`Self::compute_index`].
    ///
    /// An event missing any component is discarded with
    /// [`DiscardReason::MissingComponent`].
    #[must_use]
    pub fn decide(
        &self,
        event: &ScrollEndEvent,
        axis: Axis,
        current: usize,
        len: usize,
    ) -> IndexDecision {
        match ScrollSample::from_event(event, axis) {
            Some(sample) => self.compute_index(&sample, current, len),
            None if len == 0 => IndexDecision::Discard(DiscardReason::EmptySet),
            None => IndexDecision::Discard(DiscardReason::MissingComponent),
        }
    }
}

/// Resolves `sample` with the default [`IndexPolicy`].
#[must_use]
pub fn compute_index(sample: &ScrollSample, current: usize, len: usize) -> IndexDecision {
    IndexPolicy::default().compute_index(sample, current, len)
}

#[cfg(test)]
mod tests {
    use super::{DiscardReason, IndexDecision, IndexPolicy, compute_index};
    use crate::{Axis, ScrollEndEvent, ScrollSample};
    use kurbo::{Size, Vec2};

    const EXTENT: f64 = 100.0;

    fn at(position: f64) -> ScrollSample {
        ScrollSample::new(position * EXTENT, EXTENT, 0.0)
    }

    #[test]
    fn dead_zone_snaps_back_small_drags() {
        assert_eq!(compute_index(&at(2.15), 2, 10), IndexDecision::Commit(2));
        assert_eq!(compute_index(&at(1.85), 2, 10), IndexDecision::Commit(2));
        assert_eq!(compute_index(&at(2.0), 2, 10), IndexDecision::Commit(2));
    }

    #[test]
    fn leaving_dead_zone_rounds_away_from_current() {
        // Forward: ceiling, even short of the halfway point.
        assert_eq!(compute_index(&at(2.25), 2, 10), IndexDecision::Commit(3));
        // Backward: floor.
        assert_eq!(compute_index(&at(1.75), 2, 10), IndexDecision::Commit(1));
        assert_eq!(compute_index(&at(1.65), 2, 10), IndexDecision::Commit(1));
    }

    #[test]
    fn dead_zone_edges_are_exclusive() {
        let policy = IndexPolicy::with_thresholds(0.25, 6.0);
        // Exactly on the edge stays inside the dead zone.
        assert_eq!(policy.compute_index(&at(2.25), 2, 10), IndexDecision::Commit(2));
        assert_eq!(policy.compute_index(&at(1.75), 2, 10), IndexDecision::Commit(2));
    }

    #[test]
    fn far_jumps_resolve_to_nearest_boundary_in_direction() {
        // A long drag from 2 lands between 5 and 6: ceiling.
        assert_eq!(compute_index(&at(5.3), 2, 10), IndexDecision::Commit(6));
        // A long drag back from 7 lands between 3 and 4: floor.
        assert_eq!(compute_index(&at(3.7), 7, 10), IndexDecision::Commit(3));
    }

    #[test]
    fn result_is_clamped_into_range() {
        // Overscroll past the end.
        assert_eq!(compute_index(&at(9.6), 9, 10), IndexDecision::Commit(9));
        // Bounce before the start.
        assert_eq!(compute_index(&at(-0.4), 0, 10), IndexDecision::Commit(0));
    }

    #[test]
    fn velocity_gate_discards_unsettled_samples() {
        for velocity in [6.0, -6.0, 6.5, -40.0] {
            let sample = ScrollSample::new(350.0, EXTENT, velocity);
            assert_eq!(
                compute_index(&sample, 2, 10),
                IndexDecision::Discard(DiscardReason::InMotion),
                "velocity {velocity} should be rejected"
            );
        }
        let sample = ScrollSample::new(350.0, EXTENT, 5.99);
        assert_eq!(compute_index(&sample, 2, 10), IndexDecision::Commit(4));
    }

    #[test]
    fn degenerate_samples_are_discarded() {
        let zero = ScrollSample::new(100.0, 0.0, 0.0);
        assert_eq!(
            compute_index(&zero, 0, 3),
            IndexDecision::Discard(DiscardReason::DegenerateExtent)
        );
        let negative = ScrollSample::new(100.0, -10.0, 0.0);
        assert_eq!(
            compute_index(&negative, 0, 3),
            IndexDecision::Discard(DiscardReason::DegenerateExtent)
        );
        let nan = ScrollSample::new(f64::NAN, EXTENT, 0.0);
        assert_eq!(
            compute_index(&nan, 0, 3),
            IndexDecision::Discard(DiscardReason::NonFinite)
        );
        assert_eq!(
            compute_index(&at(1.0), 0, 0),
            IndexDecision::Discard(DiscardReason::EmptySet)
        );
    }

    #[test]
    fn decide_treats_missing_components_as_no_signal() {
        let policy = IndexPolicy::default();
        let mut event =
            ScrollEndEvent::drag_end(Vec2::new(0.0, 300.0), Size::new(50.0, EXTENT), Vec2::ZERO);
        assert_eq!(policy.decide(&event, Axis::Y, 0, 5), IndexDecision::Commit(3));

        event.velocity = None;
        assert_eq!(
            policy.decide(&event, Axis::Y, 0, 5),
            IndexDecision::Discard(DiscardReason::MissingComponent)
        );
        assert_eq!(
            policy.decide(&event, Axis::Y, 0, 0),
            IndexDecision::Discard(DiscardReason::EmptySet)
        );
    }

    #[test]
    fn decision_accessors() {
        assert_eq!(IndexDecision::Commit(4).committed(), Some(4));
        assert!(!IndexDecision::Commit(4).is_discard());
        let discarded = IndexDecision::Discard(DiscardReason::InMotion);
        assert_eq!(discarded.committed(), None);
        assert!(discarded.is_discard());
    }
}
