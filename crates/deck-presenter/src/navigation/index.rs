//! Slide index

use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

/// 1-based slide position, always within the deck it was created for
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SlideIndex(NonZeroUsize);

impl SlideIndex {
    /// The first slide of every deck
    pub const FIRST: SlideIndex = SlideIndex(NonZeroUsize::MIN);

    /// Create an index for slide `n` of a deck with `total` slides
    ///
    /// Returns `None` when `n` is 0 or greater than `total`.
    #[inline]
    pub fn new(n: usize, total: usize) -> Option<Self> {
        if n > total {
            return None;
        }
        NonZeroUsize::new(n).map(SlideIndex)
    }

    /// The 1-based position
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based position, for indexing slices
    #[inline]
    pub fn offset(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
