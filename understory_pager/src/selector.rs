// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker model for direct navigation to a slide by label.

use alloc::string::String;
use alloc::vec::Vec;

/// How a host presents the selector.
///
/// This only affects the open/closed bookkeeping; selection semantics are the
/// same for both.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectorPresentation {
    /// Always-visible inline picker.
    #[default]
    Inline,
    /// A picker shown in a modal sheet that is opened on demand.
    Sheet,
}

/// A single row of the selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption<'a> {
    /// Slide index this option navigates to.
    pub index: usize,
    /// Display label.
    pub label: &'a str,
    /// Whether this option matches the current slide.
    pub selected: bool,
}

/// Label list plus presentation state for the picker affordance.
///
/// The selected value is not stored here: it is always the pager's current
/// index, passed in by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    labels: Vec<String>,
    presentation: SelectorPresentation,
    sheet_open: bool,
}

impl Selector {
    /// Creates a selector over `labels`.
    #[must_use]
    pub fn new(labels: Vec<String>, presentation: SelectorPresentation) -> Self {
        Self {
            labels,
            presentation,
            sheet_open: false,
        }
    }

    /// Whether the host should surface the selector at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.labels.is_empty()
    }

    /// The labels, in slide order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The configured presentation.
    #[must_use]
    pub const fn presentation(&self) -> SelectorPresentation {
        self.presentation
    }

    /// Options to render, marking the one at `selected`.
    pub fn options(&self, selected: Option<usize>) -> impl Iterator<Item = SelectorOption<'_>> {
        self.labels
            .iter()
            .enumerate()
            .map(move |(index, label)| SelectorOption {
                index,
                label: label.as_str(),
                selected: selected == Some(index),
            })
    }

    /// Label for `index`, if there is one.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Whether the options are currently shown.
    ///
    /// Inline selectors are always open while visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        match self.presentation {
            SelectorPresentation::Inline => self.is_visible(),
            SelectorPresentation::Sheet => self.sheet_open,
        }
    }

    /// Opens the sheet. Returns `false` if there is nothing to show.
    pub fn open(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.sheet_open = true;
        true
    }

    /// Closes the sheet without selecting anything.
    pub fn dismiss(&mut self) {
        self.sheet_open = false;
    }

    /// Resolves a picked option to the slide index it targets.
    ///
    /// Picking closes a sheet. Returns `None` for an option that does not
    /// exist.
    pub fn pick(&mut self, option: usize) -> Option<usize> {
        if option >= self.labels.len() {
            return None;
        }
        self.sheet_open = false;
        Some(option)
    }
}

#[cfg(test)]
mod tests {
    use super::{Selector, SelectorOption, SelectorPresentation};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_labels_hide_the_selector() {
        let mut selector = Selector::new(Vec::new(), SelectorPresentation::Sheet);
        assert!(!selector.is_visible());
        assert!(!selector.open());
        assert!(!selector.is_open());
        assert_eq!(selector.pick(0), None);
        assert_eq!(selector.options(Some(0)).count(), 0);
    }

    #[test]
    fn options_mark_current_index() {
        let selector =
            Selector::new(labels(&["One", "Two", "Three"]), SelectorPresentation::Inline);
        let options: Vec<SelectorOption<'_>> = selector.options(Some(1)).collect();
        assert_eq!(options.len(), 3);
        assert_eq!(
            options[1],
            SelectorOption {
                index: 1,
                label: "Two",
                selected: true
            }
        );
        assert!(!options[0].selected && !options[2].selected);
        assert!(selector.options(None).all(|o| !o.selected));
        assert_eq!(selector.label(2), Some("Three"));
        assert_eq!(selector.label(3), None);
    }

    #[test]
    fn sheet_opens_and_closes_on_pick() {
        let mut selector = Selector::new(labels(&["A", "B"]), SelectorPresentation::Sheet);
        assert!(!selector.is_open());
        assert!(selector.open());
        assert!(selector.is_open());

        assert_eq!(selector.pick(5), None);
        assert!(selector.is_open());

        assert_eq!(selector.pick(1), Some(1));
        assert!(!selector.is_open());

        selector.open();
        selector.dismiss();
        assert!(!selector.is_open());
    }

    #[test]
    fn inline_selector_is_open_while_visible() {
        let mut selector = Selector::new(labels(&["A"]), SelectorPresentation::Inline);
        assert!(selector.is_open());
        selector.dismiss();
        assert!(selector.is_open());
        assert_eq!(selector.presentation(), SelectorPresentation::Inline);
    }
}
