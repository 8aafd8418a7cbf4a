//! Screen reader announcer extension

use super::{Extension, ExtensionId};
use crate::navigation::{PresentationState, Transition};
use crate::registry::SlideRegistry;
use crate::surface::{Announcement, Landmark, RenderSurface};

/// Text announced after a transition
pub fn announcement_text(transition: &Transition, registry: &SlideRegistry) -> String {
    format!(
        "Now showing slide {} of {}: {}",
        transition.to,
        transition.total,
        registry.title(transition.to)
    )
}

/// Posts a polite live announcement for every transition
#[derive(Debug)]
pub struct Announcer {
    delay_ms: u32,
    lifetime_ms: u32,
}

impl Announcer {
    pub const ID: ExtensionId = "announcer";

    /// Create the extension with announcement delay and lifetime (ms)
    pub fn new(delay_ms: u32, lifetime_ms: u32) -> Self {
        Self { delay_ms, lifetime_ms }
    }
}

impl Extension for Announcer {
    fn id(&self) -> ExtensionId {
        Self::ID
    }

    fn install(
        &mut self,
        _state: &PresentationState,
        _registry: &SlideRegistry,
        surface: &mut dyn RenderSurface,
    ) {
        surface.set_landmark_roles(&Landmark::ALL);
    }

    fn on_transition(
        &mut self,
        transition: &Transition,
        registry: &SlideRegistry,
        surface: &mut dyn RenderSurface,
    ) {
        surface.announce(&Announcement {
            message: announcement_text(transition, registry),
            delay_ms: self.delay_ms,
            lifetime_ms: self.lifetime_ms,
        });
    }
}
