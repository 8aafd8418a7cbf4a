//! Rendering surface
//!
//! The presenter never touches pixels. Everything visible goes through a
//! [`RenderSurface`]; implementations skip elements that do not exist.

use crate::display::DisplayFrame;
use crate::transition::SlideTransition;

/// Page landmark assigned an ARIA role by the announcer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landmark {
    Main,
    Banner,
    Navigation,
}

impl Landmark {
    /// All landmarks in assignment order
    pub const ALL: [Landmark; 3] = [Landmark::Main, Landmark::Banner, Landmark::Navigation];

    /// ARIA role for this landmark
    pub fn role(self) -> &'static str {
        match self {
            Landmark::Main => "main",
            Landmark::Banner => "banner",
            Landmark::Navigation => "navigation",
        }
    }
}

/// Polite live-region message for screen readers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    /// Text read out
    pub message: String,
    /// Delay before the message is posted (ms)
    pub delay_ms: u32,
    /// Time the message stays in the page (ms)
    pub lifetime_ms: u32,
}

/// Presentation collaborator
pub trait RenderSurface {
    /// Overwrite slides, indicators, counters, title and controls
    fn apply_frame(&mut self, frame: &DisplayFrame);

    /// Start the cosmetic slide transition effect
    fn play_transition(&mut self, transition: &SlideTransition);

    /// Set the progress bar width in percent
    fn set_progress(&mut self, percent: f64);

    /// Assign ARIA roles to the page landmarks
    fn set_landmark_roles(&mut self, landmarks: &[Landmark]);

    /// Post a screen reader announcement
    fn announce(&mut self, announcement: &Announcement);

    /// Render an action item checkbox
    fn set_action_item(&mut self, index: usize, completed: bool);

    /// Briefly confirm a completed action item
    fn confirm_action_item(&mut self, index: usize);

    /// Enter or leave fullscreen, best effort
    fn toggle_fullscreen(&mut self);

    /// Show the keyboard shortcut help
    fn show_help(&mut self, text: &str);

    /// Offer a document for download
    fn offer_download(&mut self, file_name: &str, contents: &str);
}
