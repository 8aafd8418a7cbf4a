//! Cosmetic slide transition
//!
//! The navigation state is final before the effect starts; the effect only
//! decides how the newly active slide fades and slides into place.

mod slide;

pub use slide::{SlideTransition, SLIDE_OFFSET_PX};
