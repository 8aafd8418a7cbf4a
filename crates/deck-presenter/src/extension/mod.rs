//! Extension layer
//!
//! Enhancements observe every successful transition without the navigator
//! knowing about them.
//!
//! ## Ordering
//!
//! Extensions run in registration order: the first registered fires first,
//! after the presenter's own transition work (display sync, transition
//! effect, view tracking). This is the order a chain of wrappers produces
//! when each new wrapper calls the previously installed one before its own
//! side effect. Reversing the iteration here would silently invert every
//! side effect relative to load order.
//!
//! Registration is keyed by [`ExtensionId`]; registering an id that is
//! already present is refused, so an extension can never fire twice for
//! one transition.

mod announcer;
mod progress;

pub use announcer::{announcement_text, Announcer};
pub use progress::ProgressBar;

use crate::navigation::{PresentationState, Transition};
use crate::registry::SlideRegistry;
use crate::surface::RenderSurface;

/// Stable extension identifier
pub type ExtensionId = &'static str;

/// Enhancement observing transitions
pub trait Extension {
    /// Identifier used to refuse duplicate registration
    fn id(&self) -> ExtensionId;

    /// Called once when the extension is registered
    fn install(
        &mut self,
        _state: &PresentationState,
        _registry: &SlideRegistry,
        _surface: &mut dyn RenderSurface,
    ) {
    }

    /// Called after every successful transition
    fn on_transition(
        &mut self,
        transition: &Transition,
        registry: &SlideRegistry,
        surface: &mut dyn RenderSurface,
    );
}

/// Ordered list of registered extensions
#[derive(Default)]
pub struct ExtensionChain {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an id is registered
    pub fn contains(&self, id: ExtensionId) -> bool {
        self.extensions.iter().any(|e| e.id() == id)
    }

    /// Append an extension; returns false if its id is already registered
    pub fn register(&mut self, extension: Box<dyn Extension>) -> bool {
        if self.contains(extension.id()) {
            return false;
        }
        self.extensions.push(extension);
        true
    }

    /// Registered ids in firing order
    pub fn ids(&self) -> Vec<ExtensionId> {
        self.extensions.iter().map(|e| e.id()).collect()
    }

    /// Number of registered extensions
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Check if no extension is registered
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Deliver a transition to every extension in registration order
    pub fn notify(
        &mut self,
        transition: &Transition,
        registry: &SlideRegistry,
        surface: &mut dyn RenderSurface,
    ) {
        for extension in self.extensions.iter_mut() {
            extension.on_transition(transition, registry, surface);
        }
    }
}
