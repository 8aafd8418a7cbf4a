//! Session services
//!
//! Everything scoped to one browser tab session: the clock, the session
//! id, the view history and the action item flags.

mod action_items;
mod clock;
mod history;
mod id;

pub use action_items::{ActionItems, COMPLETED};
pub use clock::{iso_timestamp, Clock, SystemClock};
pub use history::{ViewEvent, ViewHistory};
pub use id::{generate_session_id, resolve_session_id};
