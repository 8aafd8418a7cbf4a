//! Integration tests for the Presenter
//!
//! These tests verify full presentation workflows:
//! - Navigation walkthroughs and bounds
//! - Keyboard and pointer routing
//! - Extension ordering and registration
//! - Session storage (view history, action items, session id)

use std::cell::RefCell;
use std::rc::Rc;

use deck_presenter::testing::{FailingStore, ManualClock, RecordingSurface, SurfaceCall};
use deck_presenter::{
    Announcer, DeckConfig, Direction, Extension, ExtensionId, KeyInput, MemoryStore,
    PointerTarget, PresentationState, Presenter, ProgressBar, RenderSurface, SessionStore,
    SlideRegistry, Transition,
};
use proptest::prelude::*;

const START_MS: f64 = 1_736_071_200_000.0;

fn presenter_with(store: Rc<dyn SessionStore>) -> Presenter<RecordingSurface> {
    Presenter::new(
        DeckConfig::default(),
        RecordingSurface::default(),
        store,
        Rc::new(ManualClock::new(START_MS)),
    )
    .unwrap()
}

fn presenter() -> Presenter<RecordingSurface> {
    presenter_with(Rc::new(MemoryStore::new()))
}

fn key(k: &str) -> KeyInput {
    KeyInput::from_dom(k, false, false)
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[test]
fn test_walkthrough() {
    let mut presenter = presenter();

    for _ in 0..6 {
        assert!(presenter.advance().is_some());
    }
    assert_eq!(presenter.state().current().get(), 7);

    let jump = presenter.go_to(12).unwrap();
    assert_eq!(jump.to.get(), 12);
    assert_eq!(jump.direction, Direction::Forward);
    assert!(presenter.state().is_last());

    let back = presenter.retreat().unwrap();
    assert_eq!(back.to.get(), 11);
    assert_eq!(back.direction, Direction::Backward);
}

#[test]
fn test_bounds_are_no_ops() {
    let mut presenter = presenter();
    assert!(presenter.retreat().is_none());
    assert_eq!(presenter.state().current().get(), 1);

    presenter.go_to(12);
    let before = presenter.surface().calls.len();
    assert!(presenter.advance().is_none());
    assert_eq!(presenter.state().current().get(), 12);
    assert_eq!(presenter.surface().calls.len(), before);
}

#[test]
fn test_go_to_rejected_targets_leave_no_trace() {
    let mut presenter = presenter();
    presenter.go_to(4);
    let calls = presenter.surface().calls.len();
    let views = presenter.history().len();

    for n in [0, 4, 13, usize::MAX] {
        assert!(presenter.go_to(n).is_none());
    }

    assert_eq!(presenter.state().current().get(), 4);
    assert_eq!(presenter.surface().calls.len(), calls);
    assert_eq!(presenter.history().len(), views);
}

proptest! {
    #[test]
    fn prop_current_stays_in_range(ops in prop::collection::vec((0u8..3, 0usize..20), 0..64)) {
        let mut presenter = presenter();
        for (op, n) in ops {
            match op {
                0 => { presenter.advance(); }
                1 => { presenter.retreat(); }
                _ => { presenter.go_to(n); }
            }
            let current = presenter.state().current().get();
            prop_assert!((1..=12).contains(&current));
        }
    }
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_refresh_is_idempotent() {
    let mut presenter = presenter();
    presenter.go_to(5);
    presenter.surface_mut().clear();

    let first = presenter.refresh();
    let second = presenter.refresh();

    assert_eq!(first, second);
    let calls = &presenter.surface().calls;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn test_controls_at_edges() {
    let mut presenter = presenter();
    let frame = presenter.refresh();
    assert!(frame.previous.disabled);
    assert_eq!(frame.previous.label, "First Slide");
    assert!(!frame.next.disabled);
    assert_eq!(frame.next.label, "Next →");

    presenter.go_to(12);
    let frame = presenter.refresh();
    assert!(!frame.previous.disabled);
    assert_eq!(frame.previous.label, "← Previous");
    assert!(frame.next.disabled);
    assert_eq!(frame.next.label, "Final Slide");
    assert_eq!(
        frame.document_title,
        "Next Steps & Action Items | Clancy Brothers Pest Control - 2025 Performance & MailChimp Strategy"
    );
}

// =============================================================================
// Input Tests
// =============================================================================

#[test]
fn test_digit_shortcuts() {
    let mut presenter = presenter();

    assert!(presenter.handle_key(&key("5")).is_handled());
    assert_eq!(presenter.state().current().get(), 5);

    assert!(presenter.handle_key(&key("0")).is_handled());
    assert_eq!(presenter.state().current().get(), 10);

    assert!(presenter.handle_key(&KeyInput::from_dom("2", true, false)).is_handled());
    assert_eq!(presenter.state().current().get(), 12);
}

#[test]
fn test_ctrl_digit_is_a_single_jump() {
    let mut presenter = presenter();
    presenter.handle_key(&KeyInput::from_dom("1", true, false));

    assert_eq!(presenter.state().current().get(), 11);
    assert_eq!(presenter.history().len(), 1);
}

#[test]
fn test_navigation_keys() {
    let mut presenter = presenter();
    presenter.handle_key(&key("ArrowRight"));
    presenter.handle_key(&key(" "));
    assert_eq!(presenter.state().current().get(), 3);

    presenter.handle_key(&key("ArrowLeft"));
    assert_eq!(presenter.state().current().get(), 2);

    presenter.handle_key(&key("End"));
    assert_eq!(presenter.state().current().get(), 12);

    presenter.handle_key(&key("Home"));
    assert_eq!(presenter.state().current().get(), 1);

    assert!(!presenter.handle_key(&key("x")).is_handled());
}

#[test]
fn test_pointer_targets() {
    let mut presenter = presenter();
    presenter.handle_pointer(PointerTarget::Indicator(8));
    assert_eq!(presenter.state().current().get(), 8);

    presenter.handle_pointer(PointerTarget::Previous);
    assert_eq!(presenter.state().current().get(), 7);

    presenter.handle_pointer(PointerTarget::Next);
    assert_eq!(presenter.state().current().get(), 8);
}

#[test]
fn test_help_and_fullscreen_keys() {
    let mut presenter = presenter();
    presenter.surface_mut().clear();

    presenter.handle_key(&key("Escape"));
    presenter.handle_key(&key("F1"));
    presenter.handle_key(&KeyInput::from_dom("?", false, true));

    let calls = &presenter.surface().calls;
    assert_eq!(calls[0], SurfaceCall::Fullscreen);
    assert!(matches!(&calls[1], SurfaceCall::Help(_)));
    assert!(matches!(&calls[2], SurfaceCall::Help(_)));
    assert_eq!(presenter.state().current().get(), 1);
}

// =============================================================================
// Extension Tests
// =============================================================================

/// Marks its turn on the surface so the call log shows the firing order
struct Marker {
    id: ExtensionId,
    seen: Rc<RefCell<Vec<usize>>>,
}

impl Extension for Marker {
    fn id(&self) -> ExtensionId {
        self.id
    }

    fn on_transition(
        &mut self,
        transition: &Transition,
        _registry: &SlideRegistry,
        surface: &mut dyn RenderSurface,
    ) {
        self.seen.borrow_mut().push(transition.to.get());
        surface.show_help(self.id);
    }
}

#[test]
fn test_extensions_run_after_base_pipeline_in_registration_order() {
    let mut presenter = presenter();
    let seen = Rc::new(RefCell::new(Vec::new()));
    presenter.install_extension(Box::new(Marker { id: "a", seen: seen.clone() }));
    presenter.install_extension(Box::new(Marker { id: "b", seen: seen.clone() }));
    presenter.surface_mut().clear();

    presenter.advance();

    let calls = &presenter.surface().calls;
    assert_eq!(calls.len(), 4);
    assert!(matches!(&calls[0], SurfaceCall::Frame(f) if f.is_slide_active(2)));
    assert!(matches!(&calls[1], SurfaceCall::Transition(_)));
    assert_eq!(calls[2], SurfaceCall::Help("a".to_string()));
    assert_eq!(calls[3], SurfaceCall::Help("b".to_string()));
    assert_eq!(*seen.borrow(), vec![2, 2]);
    assert_eq!(presenter.history().len(), 1);
}

#[test]
fn test_extensions_skip_rejected_navigation() {
    let mut presenter = presenter();
    let seen = Rc::new(RefCell::new(Vec::new()));
    presenter.install_extension(Box::new(Marker { id: "a", seen: seen.clone() }));

    presenter.retreat();
    presenter.go_to(1);
    presenter.go_to(40);

    assert!(seen.borrow().is_empty());
}

#[test]
fn test_duplicate_registration_is_refused() {
    let mut presenter = presenter();
    let seen = Rc::new(RefCell::new(Vec::new()));
    assert!(presenter.install_extension(Box::new(Marker { id: "a", seen: seen.clone() })));
    assert!(!presenter.install_extension(Box::new(Marker { id: "a", seen: seen.clone() })));

    presenter.advance();

    // The refused copy never fires.
    assert_eq!(*seen.borrow(), vec![2]);
    assert_eq!(presenter.extension_ids(), vec!["a"]);
}

#[test]
fn test_progress_bar_and_announcer() {
    let mut presenter = presenter();
    presenter.install_extension(Box::new(ProgressBar::new()));
    presenter.install_extension(Box::new(Announcer::new(100, 1500)));

    presenter.go_to(3);

    let surface = presenter.surface();
    let progress = surface.progress_values();
    assert_eq!(progress.len(), 2);
    assert!((progress[0] - 100.0 / 12.0).abs() < 1e-9);
    assert!((progress[1] - 25.0).abs() < 1e-9);
    assert_eq!(
        surface.announcements(),
        vec!["Now showing slide 3 of 12: 2025 Performance Overview".to_string()]
    );
    assert_eq!(presenter.extension_ids(), vec!["progress-bar", "announcer"]);
}

#[test]
fn test_extension_sees_installation_state() {
    struct InstallSpy(Rc<RefCell<Option<usize>>>);

    impl Extension for InstallSpy {
        fn id(&self) -> ExtensionId {
            "install-spy"
        }

        fn install(
            &mut self,
            state: &PresentationState,
            _registry: &SlideRegistry,
            _surface: &mut dyn RenderSurface,
        ) {
            *self.0.borrow_mut() = Some(state.current().get());
        }

        fn on_transition(
            &mut self,
            _transition: &Transition,
            _registry: &SlideRegistry,
            _surface: &mut dyn RenderSurface,
        ) {
        }
    }

    let mut presenter = presenter();
    presenter.go_to(6);
    let installed_at = Rc::new(RefCell::new(None));
    presenter.install_extension(Box::new(InstallSpy(installed_at.clone())));

    assert_eq!(*installed_at.borrow(), Some(6));
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_action_item_toggle_persists() {
    let store = Rc::new(MemoryStore::new());
    let mut presenter = presenter_with(store.clone());

    presenter.handle_pointer(PointerTarget::ActionItem(2));
    assert!(presenter.action_items().is_completed(2));
    assert_eq!(store.get("clancy-action-2").unwrap().as_deref(), Some("completed"));
    assert!(presenter
        .surface()
        .calls
        .contains(&SurfaceCall::ActionConfirmed(2)));

    presenter.handle_pointer(PointerTarget::ActionItem(2));
    assert!(!presenter.action_items().is_completed(2));
    assert_eq!(store.get("clancy-action-2").unwrap(), None);
    assert_eq!(
        presenter.surface().calls.last(),
        Some(&SurfaceCall::ActionItem { index: 2, completed: false })
    );
}

#[test]
fn test_action_item_toggle_with_failing_store() {
    let mut presenter = presenter_with(Rc::new(FailingStore));

    assert!(presenter.toggle_action_item(0));
    assert!(presenter.action_items().is_completed(0));
    assert!(!presenter.toggle_action_item(0));
    assert!(!presenter.action_items().is_completed(0));
}

#[test]
fn test_action_items_restored_on_reload() {
    let store = Rc::new(MemoryStore::new());
    store.set("clancy-action-1", "completed").unwrap();
    store.set("clancy-action-3", "completed").unwrap();

    let mut presenter = presenter_with(store);
    presenter.restore_action_items(3);

    let surface = presenter.surface();
    assert!(surface.calls.contains(&SurfaceCall::ActionItem { index: 1, completed: true }));
    assert!(!surface.calls.contains(&SurfaceCall::ActionItem { index: 3, completed: true }));
    assert_eq!(presenter.action_items().completed().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_session_survives_reload() {
    let store: Rc<MemoryStore> = Rc::new(MemoryStore::new());

    let mut first = presenter_with(store.clone());
    first.record_initial_view();
    first.advance();
    let session_id = first.session_id().to_string();
    assert!(session_id.starts_with("session_"));

    let second = presenter_with(store.clone());
    assert_eq!(second.session_id(), session_id);
    assert_eq!(second.history().len(), 2);
    assert!(store.get("clancyPresentationViews").unwrap().is_some());
}

#[test]
fn test_view_history_is_bounded() {
    let config = DeckConfig {
        history_capacity: 3,
        ..DeckConfig::default()
    };
    let mut presenter = Presenter::new(
        config,
        RecordingSurface::default(),
        Rc::new(MemoryStore::new()),
        Rc::new(ManualClock::new(START_MS)),
    )
    .unwrap();

    for n in 2..=6 {
        presenter.go_to(n);
    }

    let slides: Vec<usize> = presenter.history().events().map(|e| e.slide).collect();
    assert_eq!(slides, vec![4, 5, 6]);
}

#[test]
fn test_view_timestamps_follow_the_clock() {
    let clock = Rc::new(ManualClock::new(START_MS));
    let mut presenter = Presenter::new(
        DeckConfig::default(),
        RecordingSurface::default(),
        Rc::new(MemoryStore::new()),
        clock.clone(),
    )
    .unwrap();

    presenter.record_initial_view();
    clock.advance(1_500.0);
    presenter.advance();
    clock.set(START_MS + 60_000.0);
    presenter.advance();

    let stamps: Vec<String> = presenter.history().events().map(|e| e.timestamp.clone()).collect();
    assert_eq!(
        stamps,
        vec![
            "2025-01-05T10:00:00.000Z".to_string(),
            "2025-01-05T10:00:01.500Z".to_string(),
            "2025-01-05T10:01:00.000Z".to_string(),
        ]
    );
}

#[test]
fn test_failing_store_keeps_history_in_memory() {
    let mut presenter = presenter_with(Rc::new(FailingStore));
    presenter.record_initial_view();
    presenter.advance();

    assert_eq!(presenter.history().len(), 2);
    assert!(presenter.session_id().starts_with("session_"));
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_progress_query() {
    let mut presenter = presenter();
    presenter.go_to(6);

    let progress = presenter.progress();
    assert_eq!(progress.current_slide, 6);
    assert_eq!(progress.total_slides, 12);
    assert_eq!(progress.percentage, 50);
    assert_eq!(progress.slide_title, "Major Contract Analysis");
}

#[test]
fn test_export_document() {
    let mut presenter = presenter();
    presenter.record_initial_view();
    presenter.go_to(2);

    assert!(presenter.export());

    let Some(SurfaceCall::Download { contents, .. }) = presenter.surface().calls.last() else {
        panic!("Expected a download");
    };
    let value: serde_json::Value = serde_json::from_str(contents).unwrap();
    assert_eq!(value["totalSlides"], 12);
    assert_eq!(value["currentSlide"], 2);
    assert_eq!(value["viewHistory"][1]["slideTitle"], "Executive Summary");
    assert_eq!(value["exportDate"], "2025-01-05T10:00:00.000Z");
    assert_eq!(value["sessionId"], presenter.session_id());
}
