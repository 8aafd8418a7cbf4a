//! Navigation state machine
//!
//! Holds the current slide and enforces bounds. Every operation either
//! returns the [`Transition`] it performed or `None` when the request was
//! rejected; rejected requests leave no trace.

mod index;

pub use index::SlideIndex;

use serde::Serialize;

/// Direction of a slide transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the last slide
    Forward,
    /// Towards the first slide
    Backward,
}

impl Direction {
    /// Direction of travel from one slide to another
    pub fn between(from: SlideIndex, to: SlideIndex) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// A successful change of the current slide
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Slide shown before the transition
    pub from: SlideIndex,
    /// Slide shown after the transition
    pub to: SlideIndex,
    /// Number of slides in the deck
    pub total: usize,
    /// Direction of travel
    pub direction: Direction,
}

impl Transition {
    /// Progress through the deck after this transition (0.0 to 100.0)
    pub fn percent_complete(&self) -> f64 {
        self.to.get() as f64 / self.total as f64 * 100.0
    }
}

/// Current position in the deck
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationState {
    current: SlideIndex,
    total: usize,
}

impl PresentationState {
    /// Currently shown slide
    #[inline]
    pub fn current(&self) -> SlideIndex {
        self.current
    }

    /// Number of slides in the deck
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if the first slide is shown
    #[inline]
    pub fn is_first(&self) -> bool {
        self.current == SlideIndex::FIRST
    }

    /// Check if the last slide is shown
    #[inline]
    pub fn is_last(&self) -> bool {
        self.current.get() == self.total
    }

    /// Progress through the deck (0.0 to 100.0)
    pub fn percent_complete(&self) -> f64 {
        self.current.get() as f64 / self.total as f64 * 100.0
    }
}

/// Navigation state machine
///
/// Sole owner of the [`PresentationState`]. No wraparound at either end.
#[derive(Clone, Debug)]
pub struct Navigator {
    state: PresentationState,
}

impl Navigator {
    /// Create a navigator positioned on the first slide
    ///
    /// A zero total is treated as a single-slide deck.
    pub fn new(total: usize) -> Self {
        Self {
            state: PresentationState {
                current: SlideIndex::FIRST,
                total: total.max(1),
            },
        }
    }

    /// Snapshot of the current state
    #[inline]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Currently shown slide
    #[inline]
    pub fn current(&self) -> SlideIndex {
        self.state.current
    }

    /// Number of slides in the deck
    #[inline]
    pub fn total(&self) -> usize {
        self.state.total
    }

    /// Move to the next slide; no-op on the last slide
    pub fn advance(&mut self) -> Option<Transition> {
        let next = SlideIndex::new(self.state.current.get().checked_add(1)?, self.state.total)?;
        Some(self.move_to(next))
    }

    /// Move to the previous slide; no-op on the first slide
    pub fn retreat(&mut self) -> Option<Transition> {
        let previous = SlideIndex::new(self.state.current.get() - 1, self.state.total)?;
        Some(self.move_to(previous))
    }

    /// Jump to slide `n`
    ///
    /// Out-of-range targets and the current slide are rejected silently.
    pub fn go_to(&mut self, n: usize) -> Option<Transition> {
        let target = SlideIndex::new(n, self.state.total)?;
        if target == self.state.current {
            return None;
        }
        Some(self.move_to(target))
    }

    fn move_to(&mut self, to: SlideIndex) -> Transition {
        let from = self.state.current;
        self.state.current = to;

        log::debug!("[deck] slide {} -> {} of {}", from, to, self.state.total);

        Transition {
            from,
            to,
            total: self.state.total,
            direction: Direction::between(from, to),
        }
    }
}
