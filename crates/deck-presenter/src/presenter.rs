//! Presenter coordinating all components
//!
//! The presenter owns the navigator, the rendering surface, the session
//! services and the extension chain. It is built once and handed to
//! whatever drives it; nothing reaches it through a global.

use std::rc::Rc;

use crate::config::{ConfigError, DeckConfig};
use crate::display::{self, DisplayFrame};
use crate::export::{ExportPayload, Progress};
use crate::extension::{Extension, ExtensionChain, ExtensionId};
use crate::help::shortcut_help;
use crate::input::{Command, InputResult, InputRouter, KeyInput, PointerTarget};
use crate::navigation::{Navigator, PresentationState, SlideIndex, Transition};
use crate::registry::SlideRegistry;
use crate::session::{iso_timestamp, resolve_session_id, ActionItems, Clock, ViewEvent, ViewHistory};
use crate::storage::SessionStore;
use crate::surface::RenderSurface;
use crate::transition::SlideTransition;

/// Slide-deck presenter
///
/// Navigation entry points ([`advance`](Self::advance),
/// [`retreat`](Self::retreat), [`go_to`](Self::go_to)) return the
/// transition performed, or `None` if the request was rejected. A rejected
/// request produces no rendering, no view event and no extension callback.
pub struct Presenter<S: RenderSurface> {
    config: DeckConfig,
    registry: SlideRegistry,
    navigator: Navigator,
    router: InputRouter,
    surface: S,
    extensions: ExtensionChain,
    history: ViewHistory,
    action_items: ActionItems,
    clock: Rc<dyn Clock>,
    session_id: String,
}

impl<S: RenderSurface> Presenter<S> {
    /// Create a presenter on the first slide and render it
    pub fn new(
        config: DeckConfig,
        surface: S,
        store: Rc<dyn SessionStore>,
        clock: Rc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let registry = SlideRegistry::from_config(&config)?;
        let navigator = Navigator::new(registry.len());
        let router = InputRouter::new(registry.len());

        let session_id = resolve_session_id(store.as_ref(), &config.session_key(), clock.now_ms());
        let history = ViewHistory::open(store.clone(), config.views_key(), config.history_capacity);
        let action_items = ActionItems::new(store, config.action_key_prefix());

        let mut presenter = Self {
            config,
            registry,
            navigator,
            router,
            surface,
            extensions: ExtensionChain::new(),
            history,
            action_items,
            clock,
            session_id,
        };
        presenter.refresh();

        log::info!(
            "[deck] {} loaded with {} slides",
            presenter.registry.deck_title(),
            presenter.registry.len()
        );
        Ok(presenter)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to the next slide
    pub fn advance(&mut self) -> Option<Transition> {
        let transition = self.navigator.advance()?;
        self.after_transition(&transition);
        Some(transition)
    }

    /// Move to the previous slide
    pub fn retreat(&mut self) -> Option<Transition> {
        let transition = self.navigator.retreat()?;
        self.after_transition(&transition);
        Some(transition)
    }

    /// Jump to slide `n`; out-of-range and current-slide requests are ignored
    pub fn go_to(&mut self, n: usize) -> Option<Transition> {
        let transition = self.navigator.go_to(n)?;
        self.after_transition(&transition);
        Some(transition)
    }

    /// Work done for every successful transition
    ///
    /// The presenter's own effects run first, then the extensions in
    /// registration order.
    fn after_transition(&mut self, transition: &Transition) {
        self.refresh();

        let effect = SlideTransition::new(transition, self.config.transition_delay_ms);
        self.surface.play_transition(&effect);

        self.track_view(transition.to);

        self.extensions
            .notify(transition, &self.registry, &mut self.surface);
    }

    /// Re-apply the display frame for the current state
    ///
    /// Safe to call at any time, e.g. on resize or when the tab becomes
    /// visible again.
    pub fn refresh(&mut self) -> DisplayFrame {
        display::synchronize(&self.navigator.state(), &self.registry, &mut self.surface)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route and run a key press
    pub fn handle_key(&mut self, input: &KeyInput) -> InputResult {
        let result = self.router.route_key(input);
        if let Some(command) = result.command() {
            self.dispatch(command);
        }
        result
    }

    /// Route and run a click
    pub fn handle_pointer(&mut self, target: PointerTarget) -> InputResult {
        let result = self.router.route_pointer(target);
        if let Some(command) = result.command() {
            self.dispatch(command);
        }
        result
    }

    /// Run a command
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Advance => {
                self.advance();
            }
            Command::Retreat => {
                self.retreat();
            }
            Command::GoTo { slide } => {
                self.go_to(slide);
            }
            Command::ToggleFullscreen => self.surface.toggle_fullscreen(),
            Command::ShowHelp => {
                let text = shortcut_help(&self.config.company_name, self.registry.len());
                self.surface.show_help(&text);
            }
            Command::ToggleActionItem { index } => {
                self.toggle_action_item(index);
            }
        }
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    /// Register an extension
    ///
    /// Returns false and leaves the chain unchanged if an extension with
    /// the same id is already registered.
    pub fn install_extension(&mut self, mut extension: Box<dyn Extension>) -> bool {
        if self.extensions.contains(extension.id()) {
            log::warn!("[deck] extension {} already installed", extension.id());
            return false;
        }

        extension.install(&self.navigator.state(), &self.registry, &mut self.surface);
        log::debug!("[deck] extension {} installed", extension.id());
        self.extensions.register(extension)
    }

    /// Installed extension ids in firing order
    pub fn extension_ids(&self) -> Vec<ExtensionId> {
        self.extensions.ids()
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Record the view of the current slide
    ///
    /// Called once when the presentation starts; transitions record their
    /// own views.
    pub fn record_initial_view(&mut self) {
        self.track_view(self.navigator.current());
    }

    fn track_view(&mut self, slide: SlideIndex) {
        let event = ViewEvent {
            slide: slide.get(),
            timestamp: iso_timestamp(self.clock.now_ms()),
            title: self.registry.title(slide),
            session_id: self.session_id.clone(),
        };
        self.history.record(event);
    }

    /// Restore persisted action items `0..count` and render them
    pub fn restore_action_items(&mut self, count: usize) {
        for index in self.action_items.restore(count) {
            self.surface.set_action_item(index, true);
        }
    }

    /// Toggle an action item; returns the new completion state
    pub fn toggle_action_item(&mut self, index: usize) -> bool {
        let completed = self.action_items.toggle(index);
        self.surface.set_action_item(index, completed);
        if completed {
            self.surface.confirm_action_item(index);
        }
        completed
    }

    /// Build the data export document
    pub fn export_payload(&self) -> ExportPayload {
        ExportPayload {
            company_name: self.config.company_name.clone(),
            presentation_title: self.config.presentation_title.clone(),
            total_slides: self.navigator.total(),
            current_slide: self.navigator.current().get(),
            view_history: self.history.to_vec(),
            business_metrics: self.config.business_metrics.clone(),
            export_date: iso_timestamp(self.clock.now_ms()),
            session_id: self.session_id.clone(),
        }
    }

    /// Offer the data export as a download
    pub fn export(&mut self) -> bool {
        match self.export_payload().to_json_pretty() {
            Ok(json) => {
                self.surface.offer_download(&self.config.export_file_name, &json);
                log::info!("[deck] presentation data exported");
                true
            }
            Err(e) => {
                log::warn!("[deck] export not available: {}", e);
                false
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current navigation state
    pub fn state(&self) -> PresentationState {
        self.navigator.state()
    }

    /// Current position in human terms
    pub fn progress(&self) -> Progress {
        Progress::new(&self.navigator.state(), &self.registry)
    }

    /// Deck configuration
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Slide registry
    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    /// Session id shared by all view events
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// View history of this session
    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    /// Action item flags
    pub fn action_items(&self) -> &ActionItems {
        &self.action_items
    }

    /// Rendering surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Rendering surface, mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
