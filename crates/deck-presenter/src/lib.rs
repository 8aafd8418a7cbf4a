//! Slide-deck presenter
//!
//! This crate provides the core of a browser slide-deck presenter:
//! - Slide registry (ordered slide titles, deck title)
//! - Navigation state machine with bounds enforcement
//! - Display projection (which slide, indicator and controls are active)
//! - Input routing from keys and pointer targets to commands
//! - Extensions observing every successful transition
//! - Session services (view history, action items, session id, export)
//!
//! ## Architecture
//!
//! - [`navigation`]: `SlideIndex`, `PresentationState`, `Navigator`
//! - [`display`]: `DisplayFrame` projection and synchronizer
//! - [`input`]: Key parsing and the input router
//! - [`extension`]: Extension trait, ordered chain, bundled extensions
//! - [`session`]: Clock, session id, view history, action items
//! - [`storage`]: Session store capability and in-memory backend
//! - [`transition`]: Cosmetic slide transition effect
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use deck_presenter::{DeckConfig, MemoryStore, Presenter, SystemClock};
//! use deck_presenter::testing::RecordingSurface;
//!
//! let mut presenter = Presenter::new(
//!     DeckConfig::default(),
//!     RecordingSurface::default(),
//!     Rc::new(MemoryStore::new()),
//!     Rc::new(SystemClock),
//! )
//! .unwrap();
//!
//! presenter.advance();
//! assert_eq!(presenter.state().current().get(), 2);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Injected Services**: Storage, clock and rendering surface are passed in
//! 3. **Silent Rejection**: Navigation never fails; invalid requests are no-ops

pub mod config;
pub mod display;
pub mod export;
pub mod extension;
pub mod help;
pub mod input;
pub mod interactive;
pub mod navigation;
pub mod registry;
pub mod session;
pub mod storage;
pub mod surface;
pub mod testing;
pub mod transition;

mod presenter;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{BusinessMetrics, ConfigError, DeckConfig};
pub use display::{ControlState, DisplayFrame};
pub use export::{ExportPayload, Progress};
pub use extension::{Announcer, Extension, ExtensionChain, ExtensionId, ProgressBar};
pub use input::{Command, InputResult, InputRouter, Key, KeyInput, PointerTarget};
pub use navigation::{Direction, Navigator, PresentationState, SlideIndex, Transition};
pub use registry::{SlideMetadata, SlideRegistry};
pub use session::{ActionItems, Clock, SystemClock, ViewEvent, ViewHistory};
pub use storage::{MemoryStore, SessionStore, StoreError};
pub use surface::{Announcement, Landmark, RenderSurface};
pub use transition::SlideTransition;

pub use presenter::Presenter;
