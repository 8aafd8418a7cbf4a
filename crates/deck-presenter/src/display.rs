//! Display synchronizer
//!
//! Projects the presentation state onto a [`DisplayFrame`]. A frame
//! describes every element's full state rather than a delta, so applying it
//! repeatedly converges to the same rendering.

use serde::Serialize;

use crate::navigation::{PresentationState, SlideIndex};
use crate::registry::SlideRegistry;
use crate::surface::RenderSurface;

/// Previous control label on the first slide
pub const FIRST_SLIDE_LABEL: &str = "First Slide";
/// Previous control label elsewhere
pub const PREVIOUS_LABEL: &str = "← Previous";
/// Next control label on the last slide
pub const FINAL_SLIDE_LABEL: &str = "Final Slide";
/// Next control label elsewhere
pub const NEXT_LABEL: &str = "Next →";

/// State of a previous/next control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub disabled: bool,
    pub label: &'static str,
}

/// Complete presentation of one state
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFrame {
    /// The only active slide (and indicator)
    pub active_slide: SlideIndex,
    /// Number of slides and indicators
    pub slide_count: usize,
    /// Current slide counter text
    pub counter_text: String,
    /// Total slides counter text
    pub total_text: String,
    /// Document title
    pub document_title: String,
    /// Previous control
    pub previous: ControlState,
    /// Next control
    pub next: ControlState,
}

impl DisplayFrame {
    /// Check if slide `n` is the active one
    #[inline]
    pub fn is_slide_active(&self, n: usize) -> bool {
        self.active_slide.get() == n
    }

    /// Check if indicator `n` is the active one
    #[inline]
    pub fn is_indicator_active(&self, n: usize) -> bool {
        self.is_slide_active(n)
    }
}

/// Project a state onto a frame
pub fn project(state: &PresentationState, registry: &SlideRegistry) -> DisplayFrame {
    let current = state.current();

    let previous = if state.is_first() {
        ControlState { disabled: true, label: FIRST_SLIDE_LABEL }
    } else {
        ControlState { disabled: false, label: PREVIOUS_LABEL }
    };

    let next = if state.is_last() {
        ControlState { disabled: true, label: FINAL_SLIDE_LABEL }
    } else {
        ControlState { disabled: false, label: NEXT_LABEL }
    };

    DisplayFrame {
        active_slide: current,
        slide_count: state.total(),
        counter_text: current.to_string(),
        total_text: state.total().to_string(),
        document_title: registry.document_title(current),
        previous,
        next,
    }
}

/// Project a state and apply the frame to a surface
pub fn synchronize(
    state: &PresentationState,
    registry: &SlideRegistry,
    surface: &mut dyn RenderSurface,
) -> DisplayFrame {
    let frame = project(state, registry);
    surface.apply_frame(&frame);
    frame
}
