//! WASM exports for the slide-deck presenter
//!
//! This module provides wasm-bindgen exports for the Presenter, allowing
//! the page script to drive the deck. The page forwards key presses and
//! clicks; everything else happens here.

mod clock;
mod dom;
mod logger;
mod storage;

use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use crate::config::DeckConfig;
use crate::extension::{Announcer, ProgressBar};
use crate::input::{Command, KeyInput, PointerTarget};
use crate::interactive::HOVER_EFFECTS;
use crate::presenter::Presenter;
use crate::storage::{MemoryStore, SessionStore};

pub use clock::JsClock;
pub use dom::DomSurface;
pub use logger::init_logging;
pub use storage::WebSessionStore;

/// Deck controller for WASM - wraps Presenter with JS-friendly API
#[wasm_bindgen]
pub struct DeckController {
    presenter: Presenter<DomSurface>,
    started: bool,
}

#[wasm_bindgen]
impl DeckController {
    /// Create a controller over the current document
    ///
    /// `config_json` overrides the bundled deck. Invalid JSON is logged and
    /// the bundled deck is used instead.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DeckController, JsValue> {
        init_logging(LevelFilter::Info);

        let config = match config_json.as_deref().map(DeckConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("[deck] invalid deck configuration, using bundled deck: {}", e);
                DeckConfig::default()
            }
            None => DeckConfig::default(),
        };

        let surface = DomSurface::new().ok_or_else(|| JsValue::from_str("no document available"))?;

        let store: Rc<dyn SessionStore> = match WebSessionStore::open() {
            Some(store) => Rc::new(store),
            None => {
                log::warn!("[deck] sessionStorage unavailable, session data kept in memory");
                Rc::new(MemoryStore::new())
            }
        };

        let presenter = Presenter::new(config, surface, store, Rc::new(JsClock))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            presenter,
            started: false,
        })
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Start the session
    ///
    /// Records the view of slide 1, restores action items and attaches
    /// hover effects. Returns false without doing anything if the session
    /// was already started.
    #[wasm_bindgen]
    pub fn begin_session(&mut self) -> bool {
        if self.started {
            log::warn!("[deck] session already started");
            return false;
        }
        self.started = true;

        self.presenter.record_initial_view();

        let count = self.presenter.surface().prepare_action_items();
        self.presenter.restore_action_items(count);
        self.presenter.surface().apply_hover_effects(&HOVER_EFFECTS);

        let progress = self.presenter.progress();
        log::info!("[deck] {}", self.presenter.config().deck_title);
        log::info!(
            "[deck] Currently viewing: Slide {} - {}",
            progress.current_slide,
            progress.slide_title
        );
        true
    }

    /// Add the progress bar
    #[wasm_bindgen]
    pub fn install_progress_bar(&mut self) -> bool {
        self.presenter.install_extension(Box::new(ProgressBar::new()))
    }

    /// Add screen reader landmarks and slide announcements
    #[wasm_bindgen]
    pub fn install_announcer(&mut self) -> bool {
        let config = self.presenter.config();
        let announcer = Announcer::new(config.announcement_delay_ms, config.announcement_lifetime_ms);
        self.presenter.install_extension(Box::new(announcer))
    }

    /// Re-apply the display, e.g. after resize or when the tab is shown again
    #[wasm_bindgen]
    pub fn refresh(&mut self) {
        self.presenter.refresh();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Next slide
    #[wasm_bindgen]
    pub fn next_slide(&mut self) -> bool {
        self.presenter.advance().is_some()
    }

    /// Previous slide
    #[wasm_bindgen]
    pub fn previous_slide(&mut self) -> bool {
        self.presenter.retreat().is_some()
    }

    /// Jump to slide `n` (1-based)
    #[wasm_bindgen]
    pub fn go_to_slide(&mut self, n: usize) -> bool {
        self.presenter.go_to(n).is_some()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a `keydown`; returns true if the page should prevent the default
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.presenter
            .handle_key(&KeyInput::from_dom(key, ctrl, shift))
            .is_handled()
    }

    /// Click on indicator `i` (1-based)
    #[wasm_bindgen]
    pub fn click_indicator(&mut self, i: usize) {
        self.presenter.handle_pointer(PointerTarget::Indicator(i));
    }

    /// Click on the previous button
    #[wasm_bindgen]
    pub fn click_previous(&mut self) {
        self.presenter.handle_pointer(PointerTarget::Previous);
    }

    /// Click on the next button
    #[wasm_bindgen]
    pub fn click_next(&mut self) {
        self.presenter.handle_pointer(PointerTarget::Next);
    }

    /// Click on action item checkbox `index` (0-based)
    #[wasm_bindgen]
    pub fn click_action_item(&mut self, index: usize) {
        self.presenter.handle_pointer(PointerTarget::ActionItem(index));
    }

    /// Enter or leave fullscreen
    #[wasm_bindgen]
    pub fn toggle_fullscreen(&mut self) {
        self.presenter.dispatch(Command::ToggleFullscreen);
    }

    /// Show the keyboard shortcut help
    #[wasm_bindgen]
    pub fn show_help(&mut self) {
        self.presenter.dispatch(Command::ShowHelp);
    }

    // =========================================================================
    // Business utilities
    // =========================================================================

    /// Download the presentation data as JSON
    #[wasm_bindgen]
    pub fn export_data(&mut self) -> bool {
        self.presenter.export()
    }

    /// Get the current progress as JSON
    #[wasm_bindgen]
    pub fn get_progress_json(&self) -> String {
        serde_json::to_string(&self.presenter.progress()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the presentation state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        let state = self.presenter.state();
        serde_json::to_string(&serde_json::json!({
            "currentSlide": state.current().get(),
            "totalSlides": state.total(),
            "isFirst": state.is_first(),
            "isLast": state.is_last(),
            "sessionId": self.presenter.session_id(),
            "viewCount": self.presenter.history().len(),
            "extensions": self.presenter.extension_ids(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}
