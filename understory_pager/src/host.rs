// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities a host UI framework provides to a [`Pager`](crate::Pager).
//!
//! The pager never talks to a scroll view directly. Instead it issues
//! [`ScrollCommand`]s and index notifications through a [`PagerHost`]
//! passed into each operation. An adapter per UI toolkit implements the
//! trait on top of its native scroll primitive.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::Axis;

/// Request to move the host scroll primitive to an absolute offset.
///
/// Commands are fire-and-forget: a later command supersedes an earlier one
/// that is still animating.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollCommand {
    /// Axis the offset applies to.
    pub axis: Axis,
    /// Target content offset along `axis`.
    pub offset: f64,
    /// Whether the host should animate the move.
    pub animated: bool,
}

impl ScrollCommand {
    /// The target offset as a 2D content offset; the cross axis is zero.
    #[must_use]
    pub const fn content_offset(&self) -> Vec2 {
        self.axis.offset(self.offset)
    }
}

/// Host side of a [`Pager`](crate::Pager).
pub trait PagerHost {
    /// Move the scroll primitive as described by `command`.
    fn scroll_to(&mut self, command: ScrollCommand);

    /// Called after every committed index, from either navigation channel.
    fn index_changed(&mut self, index: usize) {
        let _ = index;
    }
}

impl<H: PagerHost + ?Sized> PagerHost for &mut H {
    fn scroll_to(&mut self, command: ScrollCommand) {
        (**self).scroll_to(command);
    }

    fn index_changed(&mut self, index: usize) {
        (**self).index_changed(index);
    }
}

/// A [`PagerHost`] that records everything it is asked to do.
///
/// Useful for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingHost {
    /// Scroll commands, oldest first.
    pub commands: Vec<ScrollCommand>,
    /// Index notifications, oldest first.
    pub notifications: Vec<usize>,
}

impl RecordingHost {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent scroll command.
    #[must_use]
    pub fn last_command(&self) -> Option<&ScrollCommand> {
        self.commands.last()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.notifications.clear();
    }
}

impl PagerHost for RecordingHost {
    fn scroll_to(&mut self, command: ScrollCommand) {
        self.commands.push(command);
    }

    fn index_changed(&mut self, index: usize) {
        self.notifications.push(index);
    }
}
