//! Input router

use super::{Command, InputResult, Key, KeyInput};

/// Clickable element that maps to a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Slide indicator (1-based)
    Indicator(usize),
    /// Previous control
    Previous,
    /// Next control
    Next,
    /// Action item checkbox (0-based)
    ActionItem(usize),
}

/// Input router mapping key presses and clicks to commands
///
/// Routing is stateless apart from the deck size, which decides which
/// digit shortcuts exist.
#[derive(Clone, Copy, Debug)]
pub struct InputRouter {
    total: usize,
}

impl InputRouter {
    /// Create a router for a deck of `total` slides
    pub fn new(total: usize) -> Self {
        Self { total }
    }

    /// Number of slides the router maps to
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Route a key press
    pub fn route_key(&self, input: &KeyInput) -> InputResult {
        // Ctrl+1 and Ctrl+2 reach slides 11 and 12. They win over the plain
        // digit so a single jump happens.
        if input.ctrl {
            match input.key {
                Key::Digit(1) if self.total >= 11 => return self.go_to(11),
                Key::Digit(2) if self.total >= 12 => return self.go_to(12),
                _ => {}
            }
        }

        match input.key {
            Key::ArrowRight | Key::Space => InputResult::handled(Command::Advance),
            Key::ArrowLeft => InputResult::handled(Command::Retreat),
            Key::Home => self.go_to(1),
            Key::End => self.go_to(self.total),
            Key::Escape => InputResult::handled(Command::ToggleFullscreen),
            Key::F1 => InputResult::handled(Command::ShowHelp),
            Key::Char('?') if input.shift => InputResult::handled(Command::ShowHelp),
            Key::Digit(0) if self.total >= 10 => self.go_to(10),
            Key::Digit(d @ 1..=9) if usize::from(d) <= self.total => self.go_to(usize::from(d)),
            _ => InputResult::Unhandled,
        }
    }

    /// Route a click
    pub fn route_pointer(&self, target: PointerTarget) -> InputResult {
        let command = match target {
            PointerTarget::Indicator(slide) => Command::GoTo { slide },
            PointerTarget::Previous => Command::Retreat,
            PointerTarget::Next => Command::Advance,
            PointerTarget::ActionItem(index) => Command::ToggleActionItem { index },
        };
        InputResult::handled(command)
    }

    fn go_to(&self, slide: usize) -> InputResult {
        InputResult::handled(Command::GoTo { slide })
    }
}
