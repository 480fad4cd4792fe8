// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened, keyed slide sequences built from host children.
//!
//! Hosts describe their children as a small tree: individual slides, keyed
//! slides, nested fragments, and empty slots (for example a conditionally
//! omitted child). [`SlideSet::from_children`] flattens that tree into a dense
//! `0..len` sequence and assigns every slide a [`SlideKey`].
//!
//! A key is the path of child positions leading to the slide, with explicit
//! names replacing positions where the host supplied them. Empty slots keep
//! their position, so toggling one child does not rename its siblings.
//!
//! ```
//! use understory_pager::{Child, SlideSet};
//!
//! let slides = SlideSet::from_children([
//!     Child::Slide("intro"),
//!     Child::Empty,
//!     Child::Fragment(vec![Child::Slide("a"), Child::keyed("b", Child::Slide("b"))]),
//! ]);
//!
//! assert_eq!(slides.len(), 3);
//! let keys: Vec<String> = slides.iter().map(|s| s.key().to_string()).collect();
//! assert_eq!(keys, [".0", ".2:0", ".2:$b"]);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// One step in a [`SlideKey`] path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeySegment {
    /// Position among siblings.
    Position(usize),
    /// Explicit, host-supplied name.
    Named(String),
}

/// Stable identity of a slide across slide set rebuilds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlideKey(SmallVec<[KeySegment; 2]>);

impl SlideKey {
    /// Key for a top-level slide at `position`.
    #[must_use]
    pub fn position(position: usize) -> Self {
        let mut segments = SmallVec::new();
        segments.push(KeySegment::Position(position));
        Self(segments)
    }

    /// Key for a top-level slide with an explicit `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(KeySegment::Named(name.into()));
        Self(segments)
    }

    /// The path from the outermost child list to the slide.
    #[must_use]
    pub fn segments(&self) -> &[KeySegment] {
        &self.0
    }
}

impl fmt::Display for SlideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(".")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            match segment {
                KeySegment::Position(position) => write!(f, "{position}")?,
                KeySegment::Named(name) => write!(f, "${name}")?,
            }
        }
        Ok(())
    }
}

/// A host child, before flattening.
#[derive(Clone, Debug, PartialEq)]
pub enum Child<T> {
    /// A single slide.
    Slide(T),
    /// A child with an explicit key.
    Keyed(String, Box<Self>),
    /// A nested list of children.
    Fragment(Vec<Self>),
    /// An empty slot; produces no slide.
    Empty,
}

impl<T> Child<T> {
    /// Wraps `child` with an explicit key.
    #[must_use]
    pub fn keyed(key: impl Into<String>, child: Self) -> Self {
        Self::Keyed(key.into(), Box::new(child))
    }
}

/// A single flattened slide.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide<T> {
    key: SlideKey,
    payload: T,
}

impl<T> Slide<T> {
    /// The slide's stable key.
    #[must_use]
    pub fn key(&self) -> &SlideKey {
        &self.key
    }

    /// The host payload.
    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// An ordered, immutable sequence of keyed slides.
#[derive(Clone, Debug)]
pub struct SlideSet<T> {
    slides: Vec<Slide<T>>,
    positions: HashMap<SlideKey, usize>,
}

impl<T> Default for SlideSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlideSet<T> {
    /// Creates an empty slide set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Flattens `children` into a slide set.
    ///
    /// If two slides end up with the same key, both are kept in order but
    /// [`Self::position_of`] resolves the key to the first one.
    pub fn from_children(children: impl IntoIterator<Item = Child<T>>) -> Self {
        let mut set = Self::new();
        // `path` holds one segment per open fragment below the top level.
        let mut path: SmallVec<[KeySegment; 2]> = SmallVec::new();
        let top: Vec<Child<T>> = children.into_iter().collect();
        let mut stack = vec![top.into_iter().enumerate()];

        while let Some(frame) = stack.last_mut() {
            let Some((position, child)) = frame.next() else {
                stack.pop();
                path.pop();
                continue;
            };
            let (segment, child) = strip_keys(child, KeySegment::Position(position));
            match child {
                Child::Slide(payload) => {
                    path.push(segment);
                    set.push(SlideKey(path.clone()), payload);
                    path.pop();
                }
                Child::Fragment(children) => {
                    path.push(segment);
                    stack.push(children.into_iter().enumerate());
                }
                // `strip_keys` never returns `Keyed`.
                Child::Empty | Child::Keyed(..) => {}
            }
        }
        set
    }

    fn push(&mut self, key: SlideKey, payload: T) {
        let index = self.slides.len();
        if self.positions.contains_key(&key) {
            tracing::warn!(%key, index, "duplicate slide key");
        } else {
            self.positions.insert(key.clone(), index);
        }
        self.slides.push(Slide { key, payload });
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

    /// Returns the slide at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide<T>> {
        self.slides.get(index)
    }

    /// Iterates slides in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Slide<T>> {
        self.slides.iter()
    }

    /// Returns the index of the slide with `key`.
    #[must_use]
    pub fn position_of(&self, key: &SlideKey) -> Option<usize> {
        self.positions.get(key).copied()
    }
}

/// Unwraps nested keys; the innermost name wins.
fn strip_keys<T>(mut child: Child<T>, mut segment: KeySegment) -> (KeySegment, Child<T>) {
    while let Child::Keyed(name, inner) = child {
        segment = KeySegment::Named(name);
        child = *inner;
    }
    (segment, child)
}

impl<T> FromIterator<T> for SlideSet<T> {
    /// Builds a set of top-level slides keyed by position.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_children(iter.into_iter().map(Child::Slide))
    }
}

impl<'a, T> IntoIterator for &'a SlideSet<T> {
    type Item = &'a Slide<T>;
    type IntoIter = core::slice::Iter<'a, Slide<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Child, KeySegment, SlideKey, SlideSet};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    fn keys<T>(set: &SlideSet<T>) -> Vec<String> {
        set.iter().map(|s| s.key().to_string()).collect()
    }

    #[test]
    fn from_iter_keys_by_position() {
        let set: SlideSet<u32> = (10..13).collect();
        assert_eq!(set.len(), 3);
        assert_eq!(keys(&set), [".0", ".1", ".2"]);
        assert_eq!(set.get(1).map(|s| *s.payload()), Some(11));
        assert_eq!(set.position_of(&SlideKey::position(2)), Some(2));
    }

    #[test]
    fn empty_slots_keep_sibling_keys_stable() {
        let with_gap =
            SlideSet::from_children([Child::Slide('a'), Child::Empty, Child::Slide('c')]);
        let without_gap =
            SlideSet::from_children([Child::Slide('a'), Child::Slide('b'), Child::Slide('c')]);

        assert_eq!(keys(&with_gap), [".0", ".2"]);
        assert_eq!(keys(&without_gap), [".0", ".1", ".2"]);
        // The same payload keeps the same key whether or not the middle slot is filled.
        assert_eq!(with_gap.get(1).unwrap().key(), without_gap.get(2).unwrap().key());
    }

    #[test]
    fn fragments_flatten_with_path_keys() {
        let set = SlideSet::from_children([
            Child::Fragment(vec![
                Child::Slide(1),
                Child::Fragment(vec![Child::Slide(2), Child::Slide(3)]),
            ]),
            Child::keyed("tail", Child::Slide(4)),
        ]);

        let payloads: Vec<i32> = set.iter().map(|s| *s.payload()).collect();
        assert_eq!(payloads, [1, 2, 3, 4]);
        assert_eq!(keys(&set), [".0:0", ".0:1:0", ".0:1:1", ".$tail"]);
        assert_eq!(set.position_of(&SlideKey::named("tail")), Some(3));
        assert_eq!(
            set.get(2).unwrap().key().segments(),
            [KeySegment::Position(0), KeySegment::Position(1), KeySegment::Position(1)]
        );
    }

    #[test]
    fn keyed_fragment_names_its_subtree() {
        let set = SlideSet::from_children([Child::keyed(
            "group",
            Child::Fragment(vec![Child::Slide(()), Child::keyed("x", Child::Slide(()))]),
        )]);
        assert_eq!(keys(&set), [".$group:0", ".$group:$x"]);
    }

    #[test]
    fn duplicate_keys_resolve_to_first() {
        let set = SlideSet::from_children([
            Child::keyed("dup", Child::Slide('a')),
            Child::keyed("dup", Child::Slide('b')),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.position_of(&SlideKey::named("dup")), Some(0));
    }

    #[test]
    fn deeply_nested_fragments_flatten_without_recursion() {
        const DEPTH: usize = 50_000;
        let mut child = Child::Slide(7_u8);
        for _ in 0..DEPTH {
            child = Child::Fragment(vec![Child::Empty, child]);
        }
        let set = SlideSet::from_children([child, Child::Slide(8)]);

        assert_eq!(set.len(), 2);
        let deep = set.get(0).unwrap();
        assert_eq!(*deep.payload(), 7);
        assert_eq!(deep.key().segments().len(), DEPTH + 1);
        assert_eq!(deep.key().segments()[1], KeySegment::Position(1));
        assert_eq!(set.get(1).unwrap().key().to_string(), ".1");
    }

    #[test]
    fn nested_keys_use_innermost_name() {
        let set = SlideSet::from_children([Child::keyed(
            "outer",
            Child::keyed("inner", Child::Slide(())),
        )]);
        assert_eq!(keys(&set), [".$inner"]);
    }

    #[test]
    fn empty_set() {
        let set = SlideSet::<u8>::from_children([Child::Empty, Child::Fragment(vec![])]);
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
        assert_eq!(set.iter().count(), 0);
    }
}
