//! Keyboard input

/// A key, parsed from a DOM `KeyboardEvent.key` value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    End,
    Escape,
    F1,
    /// `0` to `9`
    Digit(u8),
    /// Any other printable character
    Char(char),
    /// Anything else (modifiers, function keys, ...)
    Other,
}

impl Key {
    /// Parse a DOM key value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowRight" => Key::ArrowRight,
            "ArrowLeft" => Key::ArrowLeft,
            " " | "Spacebar" => Key::Space,
            "Home" => Key::Home,
            "End" => Key::End,
            "Escape" | "Esc" => Key::Escape,
            "F1" => Key::F1,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => match c.to_digit(10) {
                        Some(d) => Key::Digit(d as u8),
                        None => Key::Char(c),
                    },
                    _ => Key::Other,
                }
            }
        }
    }
}

/// A key press with its modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    /// Key press without modifiers
    pub fn new(key: Key) -> Self {
        Self { key, ctrl: false, shift: false }
    }

    /// Key press from DOM event fields
    pub fn from_dom(key: &str, ctrl: bool, shift: bool) -> Self {
        Self { key: Key::from_dom(key), ctrl, shift }
    }

    /// Same key with Ctrl held
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Same key with Shift held
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}
