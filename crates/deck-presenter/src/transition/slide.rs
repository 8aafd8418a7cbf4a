//! Slide entrance effect

use crate::navigation::{Direction, SlideIndex, Transition};

/// Horizontal shift of an entering slide in pixels
pub const SLIDE_OFFSET_PX: f32 = 15.0;

/// Entrance effect of the newly active slide
///
/// The slide starts hidden and shifted, and is restored after
/// `duration_ms`. The surface's CSS transition does the interpolation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideTransition {
    /// Slide being revealed
    pub slide: SlideIndex,
    /// Direction of travel
    pub direction: Direction,
    /// Time until the slide is restored (ms)
    pub duration_ms: u32,
}

impl SlideTransition {
    /// Create the effect for a transition
    pub fn new(transition: &Transition, duration_ms: u32) -> Self {
        Self {
            slide: transition.to,
            direction: transition.direction,
            duration_ms,
        }
    }

    /// Shift at the start of the effect
    ///
    /// Forward moves start shifted left, backward moves shifted right.
    pub fn initial_offset_px(&self) -> f32 {
        match self.direction {
            Direction::Forward => -SLIDE_OFFSET_PX,
            Direction::Backward => SLIDE_OFFSET_PX,
        }
    }

    /// CSS transform for a shift
    pub fn transform_css(offset_px: f32) -> String {
        format!("translateX({}px)", offset_px)
    }
}
