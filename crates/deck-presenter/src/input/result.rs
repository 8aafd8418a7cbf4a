//! Input result type

use serde::Serialize;

/// Action requested by an input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Next slide
    Advance,
    /// Previous slide
    Retreat,
    /// Jump to a slide
    GoTo {
        /// 1-based target
        slide: usize,
    },
    /// Enter or leave fullscreen
    ToggleFullscreen,
    /// Show keyboard shortcut help
    ShowHelp,
    /// Toggle an action item checkbox
    ToggleActionItem {
        /// 0-based checkbox index
        index: usize,
    },
}

/// Result of input routing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input matched; default browser handling must be suppressed
    Handled {
        /// Command to run
        command: Command,
    },
    /// Input was not handled (pass through)
    Unhandled,
}

impl InputResult {
    /// Wrap a matched command
    #[inline]
    pub fn handled(command: Command) -> Self {
        InputResult::Handled { command }
    }

    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled { .. })
    }

    /// Matched command, if any
    #[inline]
    pub fn command(&self) -> Option<Command> {
        match self {
            InputResult::Handled { command } => Some(*command),
            InputResult::Unhandled => None,
        }
    }
}
