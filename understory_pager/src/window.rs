// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy rendering window around the current slide.

use core::ops::Range;

/// Slides whose distance from the current index is below this render live content.
pub const LAZY_WINDOW_DISTANCE: usize = 2;

/// How slides outside the lazy window are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RenderMode {
    /// Only slides inside the lazy window show content; the rest show a placeholder.
    #[default]
    Lazy,
    /// Every slide shows its content.
    Eager,
}

/// What a single slide should display during a render pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlideContent {
    /// The slide's real content.
    Live,
    /// A loading placeholder.
    Placeholder,
}

/// Returns `true` if `index` lies in the lazy window around `current`.
///
/// This is the literal predicate `|index - current| < 2`.
#[must_use]
pub const fn is_in_lazy_window(index: usize, current: usize) -> bool {
    index.abs_diff(current) < LAZY_WINDOW_DISTANCE
}

/// Returns the contiguous range of live indices for a strip of `len` slides.
///
/// The range is empty when there is no current index (an empty slide set).
/// It never holds more than three indices.
///
/// ```
/// use understory_pager::lazy_window;
///
/// assert_eq!(lazy_window(Some(5), 10), 4..7);
/// assert_eq!(lazy_window(Some(0), 10), 0..2);
/// assert_eq!(lazy_window(Some(9), 10), 8..10);
/// assert_eq!(lazy_window(None, 0), 0..0);
/// ```
#[must_use]
pub fn lazy_window(current: Option<usize>, len: usize) -> Range<usize> {
    let Some(current) = current.filter(|&c| c < len) else {
        return 0..0;
    };
    let start = current.saturating_sub(LAZY_WINDOW_DISTANCE - 1);
    let end = current.saturating_add(LAZY_WINDOW_DISTANCE).min(len);
    start..end
}

/// Content for `index` under `mode`, given the current index.
#[must_use]
pub fn slide_content(mode: RenderMode, index: usize, current: Option<usize>) -> SlideContent {
    match (mode, current) {
        (RenderMode::Eager, _) => SlideContent::Live,
        (RenderMode::Lazy, Some(current)) if is_in_lazy_window(index, current) => {
            SlideContent::Live
        }
        (RenderMode::Lazy, _) => SlideContent::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderMode, SlideContent, is_in_lazy_window, lazy_window, slide_content};
    use alloc::vec::Vec;

    #[test]
    fn window_predicate_is_strict() {
        assert!(is_in_lazy_window(4, 5));
        assert!(is_in_lazy_window(5, 5));
        assert!(is_in_lazy_window(6, 5));
        assert!(!is_in_lazy_window(3, 5));
        assert!(!is_in_lazy_window(7, 5));
    }

    #[test]
    fn window_matches_predicate_for_ten_slides() {
        let live: Vec<usize> = (0..10)
            .filter(|&i| slide_content(RenderMode::Lazy, i, Some(5)) == SlideContent::Live)
            .collect();
        let placeholders: Vec<usize> = (0..10)
            .filter(|&i| slide_content(RenderMode::Lazy, i, Some(5)) == SlideContent::Placeholder)
            .collect();

        assert_eq!(live, [4, 5, 6]);
        assert_eq!(placeholders, [0, 1, 2, 3, 7, 8, 9]);
        assert_eq!(lazy_window(Some(5), 10), 4..7);
    }

    #[test]
    fn window_is_clipped_at_the_edges() {
        assert_eq!(lazy_window(Some(0), 1), 0..1);
        assert_eq!(lazy_window(Some(1), 2), 0..2);
        // A stale current index past the end yields nothing.
        assert_eq!(lazy_window(Some(4), 3), 0..0);
    }

    #[test]
    fn eager_mode_renders_everything() {
        let eager = |i| slide_content(RenderMode::Eager, i, Some(0));
        assert!((0..10).all(|i| eager(i) == SlideContent::Live));
        assert_eq!(slide_content(RenderMode::Eager, 0, None), SlideContent::Live);
        assert_eq!(slide_content(RenderMode::Lazy, 0, None), SlideContent::Placeholder);
    }
}
