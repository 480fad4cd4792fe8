// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slide presenter: current index, viewport, and the shared commit path.

use core::ops::Range;

use kurbo::Size;

use crate::{
    Axis, DiscardReason, IndexDecision, PagerConfig, PagerHost, RenderMode, ScrollCommand,
    ScrollEndEvent, ScrollEndKind, Selector, SelectorOption, SlideContent, SlideKey, SlideSet,
    lazy_window, slide_content,
};

/// Which navigation channel produced a commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommitSource {
    /// A scroll-end event resolved by the index policy.
    Drag(ScrollEndKind),
    /// A direct selection, typically from the picker.
    DirectSelect,
}

/// What a slide frame shows during a render pass.
#[derive(Debug, PartialEq)]
pub enum FrameContent<'a, T> {
    /// The slide's payload.
    Live(&'a T),
    /// A loading placeholder.
    Placeholder,
}

impl<T> Clone for FrameContent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FrameContent<'_, T> {}

/// One slide as laid out by [`Pager::render`].
#[derive(Debug, PartialEq)]
pub struct SlideFrame<'a, T> {
    /// Position in the slide set.
    pub index: usize,
    /// Stable key for diffing host views across passes.
    pub key: &'a SlideKey,
    /// Every slide fills the viewport.
    pub size: Size,
    /// Payload or placeholder.
    pub content: FrameContent<'a, T>,
}

impl<'a, T> SlideFrame<'a, T> {
    /// The payload, if this frame is live.
    #[must_use]
    pub fn live(&self) -> Option<&'a T> {
        match self.content {
            FrameContent::Live(payload) => Some(payload),
            FrameContent::Placeholder => None,
        }
    }

    /// Returns `true` if this frame shows a placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, FrameContent::Placeholder)
    }
}

impl<T> Clone for SlideFrame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlideFrame<'_, T> {}

/// Paged slide container state.
///
/// A [`Pager`] owns the slide set, the current index, and the viewport. It is
/// driven by the host through three kinds of events:
///
/// - scroll-end telemetry via [`Pager::on_scroll_end`] (drag navigation),
/// - direct selection via [`Pager::on_direct_select`] or
///   [`Pager::on_selector_pick`] (picker navigation),
/// - viewport changes via [`Pager::set_viewport`].
///
/// Both navigation channels end in the same commit: the index is updated,
/// a scroll command to the slide's offset is issued, and the host is
/// notified of the new index, in that order.
///
/// ```
/// use kurbo::{Size, Vec2};
/// use understory_pager::{Pager, PagerConfig, RecordingHost, ScrollEndEvent, SlideSet};
///
/// let slides: SlideSet<&str> = ["a", "b", "c", "d"].into_iter().collect();
/// let viewport = Size::new(100.0, 200.0);
/// let mut pager = Pager::new(PagerConfig::default(), slides, viewport);
/// let mut host = RecordingHost::new();
///
/// // The user drags 30% of the way towards the next slide and lets go.
/// let event = ScrollEndEvent::drag_end(Vec2::new(30.0, 0.0), viewport, Vec2::ZERO);
/// pager.on_scroll_end(&event, &mut host);
///
/// assert_eq!(pager.current_index(), Some(1));
/// assert_eq!(host.notifications, [1]);
/// assert_eq!(host.last_command().map(|c| c.offset), Some(100.0));
/// ```
#[derive(Debug)]
pub struct Pager<T> {
    config: PagerConfig,
    slides: SlideSet<T>,
    selector: Selector,
    current: Option<usize>,
    last_commit: Option<CommitSource>,
    viewport: Size,
}

impl<T> Pager<T> {
    /// Creates a pager over `slides` with the given initial `viewport`.
    ///
    /// The current index starts at [`PagerConfig::start_index`], clamped to
    /// the last slide. An empty slide set has no current index.
    #[must_use]
    pub fn new(config: PagerConfig, slides: SlideSet<T>, viewport: Size) -> Self {
        let selector = Selector::new(
            config.selector_labels.clone(),
            config.selector_presentation,
        );
        let current = clamp_start(config.start_index, slides.len());
        Self {
            config,
            slides,
            selector,
            current,
            last_commit: None,
            viewport: sanitize_size(viewport),
        }
    }

    /// The configuration this pager was created with.
    #[must_use]
    pub const fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// The navigation axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.config.axis
    }

    /// The current slide set.
    #[must_use]
    pub const fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The current index, or `None` for an empty slide set.
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The channel that produced the most recent commit.
    ///
    /// `None` until the first commit, and again after the slide set becomes
    /// empty.
    #[must_use]
    pub const fn last_commit_source(&self) -> Option<CommitSource> {
        self.last_commit
    }

    /// The current viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Viewport extent along the navigation axis.
    #[must_use]
    pub const fn viewport_extent(&self) -> f64 {
        self.config.axis.extent(self.viewport)
    }

    /// Whether the host scroll primitive should snap to page boundaries itself.
    #[must_use]
    pub const fn paging_enabled(&self) -> bool {
        self.config.momentum_scroll_enabled
    }

    /// The configured render mode.
    #[must_use]
    pub const fn render_mode(&self) -> RenderMode {
        self.config.render_mode()
    }

    /// Content offset along the axis at which slide `index` is aligned.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.viewport_extent()
    }

    /// Indices that render live content in lazy mode.
    #[must_use]
    pub fn lazy_window(&self) -> Range<usize> {
        lazy_window(self.current, self.slides.len())
    }

    /// What slide `index` shows under the configured render mode.
    #[must_use]
    pub fn slide_content(&self, index: usize) -> Option<SlideContent> {
        (index < self.slides.len())
            .then(|| slide_content(self.render_mode(), index, self.current))
    }

    /// Lays out every slide for a render pass.
    ///
    /// The result depends only on the slide set, viewport, current index,
    /// and render mode.
    pub fn render(&self) -> impl Iterator<Item = SlideFrame<'_, T>> {
        let mode = self.render_mode();
        let current = self.current;
        let size = self.viewport;
        self.slides
            .iter()
            .enumerate()
            .map(move |(index, slide)| SlideFrame {
                index,
                key: slide.key(),
                size,
                content: match slide_content(mode, index, current) {
                    SlideContent::Live => FrameContent::Live(slide.payload()),
                    SlideContent::Placeholder => FrameContent::Placeholder,
                },
            })
    }

    /// The picker model.
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Picker rows, with the current slide marked as selected.
    pub fn selector_options(&self) -> impl Iterator<Item = SelectorOption<'_>> {
        self.selector.options(self.current)
    }

    /// Opens a sheet-presented picker. Returns `false` if there are no labels.
    pub fn open_selector(&mut self) -> bool {
        self.selector.open()
    }

    /// Closes a sheet-presented picker without navigating.
    pub fn dismiss_selector(&mut self) {
        self.selector.dismiss();
    }

    /// Handles a drag-end or momentum-end event from the host scroll primitive.
    ///
    /// The event is resolved by the configured [`IndexPolicy`](crate::IndexPolicy).
    /// A discarded event leaves all state untouched and issues nothing.
    pub fn on_scroll_end<H: PagerHost + ?Sized>(
        &mut self,
        event: &ScrollEndEvent,
        host: &mut H,
    ) -> IndexDecision {
        let decision = match self.current {
            Some(current) => {
                self.config
                    .index_policy
                    .decide(event, self.config.axis, current, self.slides.len())
            }
            None => IndexDecision::Discard(DiscardReason::EmptySet),
        };
        match decision {
            IndexDecision::Commit(index) => {
                self.commit(index, CommitSource::Drag(event.kind), host);
            }
            IndexDecision::Discard(reason) => {
                tracing::trace!(?reason, kind = ?event.kind, "discarded scroll-end sample");
            }
        }
        decision
    }

    /// Navigates straight to `target`, bypassing the index policy.
    ///
    /// Targets past the last slide are clamped to it. Returns the committed
    /// index, or `None` for an empty slide set.
    pub fn on_direct_select<H: PagerHost + ?Sized>(
        &mut self,
        target: usize,
        host: &mut H,
    ) -> Option<usize> {
        let len = self.slides.len();
        if len == 0 {
            tracing::trace!(requested = target, "ignored direct select on empty pager");
            return None;
        }
        let index = target.min(len - 1);
        if index != target {
            tracing::debug!(requested = target, index, "clamped direct select target");
        }
        self.commit(index, CommitSource::DirectSelect, host);
        Some(index)
    }

    /// Handles the user picking option `option` in the selector.
    ///
    /// Returns the committed index, or `None` if the option does not exist or
    /// there are no slides.
    pub fn on_selector_pick<H: PagerHost + ?Sized>(
        &mut self,
        option: usize,
        host: &mut H,
    ) -> Option<usize> {
        let target = self.selector.pick(option)?;
        self.on_direct_select(target, host)
    }

    /// Issues an animated scroll command aligning slide `target`.
    ///
    /// This does not change the current index, and it is issued even when the
    /// viewport is already aligned. Targets past the last slide are clamped.
    pub fn scroll_to_offset<H: PagerHost + ?Sized>(&self, target: usize, host: &mut H) {
        let len = self.slides.len();
        if len == 0 {
            return;
        }
        self.issue(target.min(len - 1), true, host);
    }

    /// Updates the viewport after a screen or orientation change.
    ///
    /// By default this only affects future offset math and frame sizes; the
    /// scroll position is left as-is until the next navigation. With
    /// [`PagerConfig::realign_on_resize`] a change in extent along the axis
    /// issues a non-animated scroll command to keep the current slide
    /// aligned. The host is never notified of an index change here.
    pub fn set_viewport<H: PagerHost + ?Sized>(&mut self, viewport: Size, host: &mut H) {
        let viewport = sanitize_size(viewport);
        if viewport == self.viewport {
            return;
        }
        let previous_extent = self.viewport_extent();
        self.viewport = viewport;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport changed"
        );
        if self.config.realign_on_resize
            && self.viewport_extent() != previous_extent
            && let Some(current) = self.current
        {
            self.issue(current, false, host);
        }
    }

    /// Replaces the slide set after the host's children changed.
    ///
    /// The current index is clamped into the new range, cleared if the set is
    /// empty, or restored from [`PagerConfig::start_index`] if the pager was
    /// empty before. No scroll command or notification is issued.
    pub fn set_slides(&mut self, slides: SlideSet<T>) {
        let len = slides.len();
        self.slides = slides;
        let previous = self.current;
        self.current = match previous {
            _ if len == 0 => {
                self.last_commit = None;
                None
            }
            Some(current) => Some(current.min(len - 1)),
            None => clamp_start(self.config.start_index, len),
        };
        tracing::debug!(len, current = ?self.current, ?previous, "slide set replaced");
    }

    /// The single "set index and sync" path shared by both navigation channels.
    fn commit<H: PagerHost + ?Sized>(
        &mut self,
        index: usize,
        source: CommitSource,
        host: &mut H,
    ) {
        debug_assert!(
            index < self.slides.len(),
            "committed index {index} out of range for {} slides",
            self.slides.len()
        );
        let previous = self.current.replace(index);
        self.last_commit = Some(source);
        tracing::debug!(index, ?previous, ?source, "committed slide index");
        self.issue(index, true, host);
        host.index_changed(index);
    }

    fn issue<H: PagerHost + ?Sized>(&self, index: usize, animated: bool, host: &mut H) {
        let command = ScrollCommand {
            axis: self.config.axis,
            offset: self.offset_of(index),
            animated,
        };
        tracing::trace!(index, offset = command.offset, animated, "scroll command");
        host.scroll_to(command);
    }
}

fn clamp_start(start_index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| start_index.min(len - 1))
}

fn sanitize_size(size: Size) -> Size {
    if !size.is_finite() {
        tracing::debug!(?size, "non-finite viewport component clamped to zero");
    }
    Size::new(sanitize_extent(size.width), sanitize_extent(size.height))
}

/// Negative, NaN, and infinite extents become zero.
fn sanitize_extent(extent: f64) -> f64 {
    if extent.is_finite() {
        extent.max(0.0)
    } else {
        0.0
    }
}
