//! Test doubles
//!
//! A recording surface, a manual clock and a store that always fails.
//! Used by this crate's tests and available to downstream tests.

use std::cell::Cell;

use crate::display::DisplayFrame;
use crate::session::Clock;
use crate::storage::{SessionStore, StoreError};
use crate::surface::{Announcement, Landmark, RenderSurface};
use crate::transition::SlideTransition;

/// One call made on a [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Frame(DisplayFrame),
    Transition(SlideTransition),
    Progress(f64),
    Landmarks(Vec<Landmark>),
    Announce(Announcement),
    ActionItem { index: usize, completed: bool },
    ActionConfirmed(usize),
    Fullscreen,
    Help(String),
    Download { file_name: String, contents: String },
}

/// Surface that records every call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Applied frames, oldest first
    pub fn frames(&self) -> Vec<&DisplayFrame> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Frame(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }

    /// Most recently applied frame
    pub fn last_frame(&self) -> Option<&DisplayFrame> {
        self.frames().pop()
    }

    /// Progress widths, oldest first
    pub fn progress_values(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Progress(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Announcement messages, oldest first
    pub fn announcements(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Announce(a) => Some(a.message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn apply_frame(&mut self, frame: &DisplayFrame) {
        self.calls.push(SurfaceCall::Frame(frame.clone()));
    }

    fn play_transition(&mut self, transition: &SlideTransition) {
        self.calls.push(SurfaceCall::Transition(transition.clone()));
    }

    fn set_progress(&mut self, percent: f64) {
        self.calls.push(SurfaceCall::Progress(percent));
    }

    fn set_landmark_roles(&mut self, landmarks: &[Landmark]) {
        self.calls.push(SurfaceCall::Landmarks(landmarks.to_vec()));
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.calls.push(SurfaceCall::Announce(announcement.clone()));
    }

    fn set_action_item(&mut self, index: usize, completed: bool) {
        self.calls.push(SurfaceCall::ActionItem { index, completed });
    }

    fn confirm_action_item(&mut self, index: usize) {
        self.calls.push(SurfaceCall::ActionConfirmed(index));
    }

    fn toggle_fullscreen(&mut self) {
        self.calls.push(SurfaceCall::Fullscreen);
    }

    fn show_help(&mut self, text: &str) {
        self.calls.push(SurfaceCall::Help(text.to_string()));
    }

    fn offer_download(&mut self, file_name: &str, contents: &str) {
        self.calls.push(SurfaceCall::Download {
            file_name: file_name.to_string(),
            contents: contents.to_string(),
        });
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Create a clock at `now_ms`
    pub fn new(now_ms: f64) -> Self {
        Self { now: Cell::new(now_ms) }
    }

    /// Set the current time
    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    /// Move the clock forward
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Store whose every operation fails with [`StoreError::Unavailable`]
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingStore;

impl SessionStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
