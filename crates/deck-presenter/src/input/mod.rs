//! Input routing module
//!
//! Maps keyboard and pointer input to navigation commands.

mod keys;
mod result;
mod router;

pub use keys::{Key, KeyInput};
pub use result::{Command, InputResult};
pub use router::{InputRouter, PointerTarget};
