// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager configuration.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Axis, IndexPolicy, RenderMode, SelectorPresentation};

/// Options fixed for the lifetime of a [`Pager`](crate::Pager).
///
/// ```
/// use understory_pager::{Axis, PagerConfig, RenderMode};
///
/// let config = PagerConfig::default()
///     .with_axis(Axis::Y)
///     .with_start_index(2)
///     .with_selector_labels(["Intro", "Setup", "Done"]);
///
/// assert_eq!(config.render_mode(), RenderMode::Lazy);
/// assert_eq!(config.selector_labels.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    /// Axis slides are laid out and measured along.
    pub axis: Axis,
    /// Initial current index; clamped to the slide count.
    pub start_index: usize,
    /// Render every slide's content instead of only the lazy window.
    pub eager_render: bool,
    /// Labels for the picker. Empty hides it.
    pub selector_labels: Vec<String>,
    /// How the picker is presented.
    pub selector_presentation: SelectorPresentation,
    /// Ask the host scroll primitive to snap to page boundaries itself.
    pub momentum_scroll_enabled: bool,
    /// Re-scroll to the current slide when the viewport extent changes.
    ///
    /// Off by default: a resize leaves the scroll position as-is until the
    /// next navigation.
    pub realign_on_resize: bool,
    /// Thresholds used for drag navigation.
    pub index_policy: IndexPolicy,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            start_index: 0,
            eager_render: false,
            selector_labels: Vec::new(),
            selector_presentation: SelectorPresentation::Inline,
            momentum_scroll_enabled: false,
            realign_on_resize: false,
            index_policy: IndexPolicy::default(),
        }
    }
}

impl PagerConfig {
    /// Sets the navigation axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the initial index.
    #[must_use]
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Enables or disables eager rendering.
    #[must_use]
    pub fn with_eager_render(mut self, eager_render: bool) -> Self {
        self.eager_render = eager_render;
        self
    }

    /// Sets the picker labels.
    #[must_use]
    pub fn with_selector_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selector_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the picker presentation.
    #[must_use]
    pub fn with_selector_presentation(mut self, presentation: SelectorPresentation) -> Self {
        self.selector_presentation = presentation;
        self
    }

    /// Enables or disables native page snapping.
    #[must_use]
    pub fn with_momentum_scroll(mut self, enabled: bool) -> Self {
        self.momentum_scroll_enabled = enabled;
        self
    }

    /// Enables or disables the corrective re-scroll on resize.
    #[must_use]
    pub fn with_realign_on_resize(mut self, enabled: bool) -> Self {
        self.realign_on_resize = enabled;
        self
    }

    /// Sets the drag navigation thresholds.
    #[must_use]
    pub fn with_index_policy(mut self, policy: IndexPolicy) -> Self {
        self.index_policy = policy;
        self
    }

    /// The render mode implied by [`Self::eager_render`].
    #[must_use]
    pub const fn render_mode(&self) -> RenderMode {
        if self.eager_render {
            RenderMode::Eager
        } else {
            RenderMode::Lazy
        }
    }
}
