//! Progress bar extension

use super::{Extension, ExtensionId};
use crate::navigation::{PresentationState, Transition};
use crate::registry::SlideRegistry;
use crate::surface::RenderSurface;

/// Keeps the progress bar at `current / total` of the page width
#[derive(Debug, Default)]
pub struct ProgressBar {
    percent: f64,
}

impl ProgressBar {
    pub const ID: ExtensionId = "progress-bar";

    /// Create the extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Last width set, in percent
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl Extension for ProgressBar {
    fn id(&self) -> ExtensionId {
        Self::ID
    }

    fn install(
        &mut self,
        state: &PresentationState,
        _registry: &SlideRegistry,
        surface: &mut dyn RenderSurface,
    ) {
        self.percent = state.percent_complete();
        surface.set_progress(self.percent);
    }

    fn on_transition(
        &mut self,
        transition: &Transition,
        _registry: &SlideRegistry,
        surface: &mut dyn RenderSurface,
    ) {
        self.percent = transition.percent_complete();
        surface.set_progress(self.percent);
    }
}
