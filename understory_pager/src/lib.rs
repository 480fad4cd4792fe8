// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager --heading-base-level=0

//! Understory Pager: index tracking for paged, swipeable slide containers.
//!
//! This crate provides the state machine behind a "swipe between slides"
//! container: slides laid out along one axis, each filling the viewport, with
//! one current slide. It is renderer-agnostic and does not own a scroll view.
//! Host frameworks are responsible for:
//!
//! - Forwarding drag-end and momentum-end telemetry from their native scroll
//!   primitive as [`ScrollEndEvent`]s.
//! - Executing the [`ScrollCommand`]s and index notifications they receive
//!   through their [`PagerHost`] implementation.
//! - Rendering the [`SlideFrame`]s returned by [`Pager::render`], showing a
//!   placeholder for frames outside the lazy window.
//! - Optionally surfacing a picker over [`Pager::selector_options`] and
//!   reporting picks via [`Pager::on_selector_pick`].
//!
//! The core concepts are:
//!
//! - [`IndexPolicy`]: turns a scroll-end [`ScrollSample`] into a discrete
//!   index. A dead zone of `0.2` slides around the current index snaps short
//!   drags back, and samples with `|velocity| >= 6` are discarded as still
//!   in motion.
//! - [`Pager`]: owns the [`SlideSet`], the current index, and the viewport.
//!   Drag navigation ([`Pager::on_scroll_end`]) and direct selection
//!   ([`Pager::on_direct_select`]) share one commit path, so the index, the
//!   scroll command, and the notification never disagree.
//! - [`lazy_window`]: the indices within distance one of the current index,
//!   which are the only slides that render real content in
//!   [`RenderMode::Lazy`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_pager::{
//!     Child, IndexDecision, Pager, PagerConfig, RecordingHost, ScrollEndEvent, SlideSet,
//! };
//!
//! let slides = SlideSet::from_children([
//!     Child::Slide("welcome"),
//!     Child::Slide("features"),
//!     Child::Slide("pricing"),
//!     Child::Slide("signup"),
//! ]);
//! let viewport = Size::new(390.0, 844.0);
//! let config = PagerConfig::default().with_selector_labels(["Welcome", "Features", "Pricing", "Sign up"]);
//! let mut pager = Pager::new(config, slides, viewport);
//! let mut host = RecordingHost::new();
//!
//! // A flick is still moving when the finger lifts: ignored.
//! let release = ScrollEndEvent::drag_end(Vec2::new(120.0, 0.0), viewport, Vec2::new(14.0, 0.0));
//! assert!(pager.on_scroll_end(&release, &mut host).is_discard());
//!
//! // Once momentum settles on the second slide, it commits.
//! let settled = ScrollEndEvent::momentum_end(Vec2::new(390.0, 0.0), viewport, Vec2::ZERO);
//! assert_eq!(pager.on_scroll_end(&settled, &mut host), IndexDecision::Commit(1));
//!
//! // Jump to the last slide from the picker.
//! assert_eq!(pager.on_selector_pick(3, &mut host), Some(3));
//! assert_eq!(host.notifications, [1, 3]);
//!
//! // Only slides 2 and 3 render content now.
//! let live: Vec<&str> = pager.render().filter_map(|f| f.live().copied()).collect();
//! assert_eq!(live, ["pricing", "signup"]);
//! ```
//!
//! ## Viewport changes
//!
//! [`Pager::set_viewport`] updates frame sizes and future offset math but does
//! not move the scroll position, so after a rotation the content may sit
//! between slides until the next navigation. Set
//! [`PagerConfig::realign_on_resize`] to have the pager issue a corrective,
//! non-animated scroll command instead.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `tracing`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`PagerConfig`] and the enums it holds.
//!
//! Discarded samples, commits, and viewport changes are reported as
//! [`tracing`] events; install a subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod host;
mod index;
mod pager;
mod sample;
mod selector;
mod slides;
mod window;

pub use axis::Axis;
pub use config::PagerConfig;
pub use host::{PagerHost, RecordingHost, ScrollCommand};
pub use index::{
    DEFAULT_DEAD_ZONE, DEFAULT_SETTLE_VELOCITY, DiscardReason, IndexDecision, IndexPolicy,
    compute_index,
};
pub use pager::{CommitSource, FrameContent, Pager, SlideFrame};
pub use sample::{ScrollEndEvent, ScrollEndKind, ScrollSample};
pub use selector::{Selector, SelectorOption, SelectorPresentation};
pub use slides::{Child, KeySegment, Slide, SlideKey, SlideSet};
pub use window::{
    LAZY_WINDOW_DISTANCE, RenderMode, SlideContent, is_in_lazy_window, lazy_window, slide_content,
};
