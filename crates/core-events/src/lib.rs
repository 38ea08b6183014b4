//! Logical key events consumed by the editor core.
//!
//! The input layer decodes terminal bytes and escape sequences into these
//! normalized events before the core ever sees them; nothing downstream
//! depends on the terminal library's own event types. Control chords
//! (save, quit) surface as `Char` events with `CTRL` set and are
//! interpreted by the key translator, which keeps this alphabet small.

use std::fmt;

/// Normalized logical key representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    pub fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            mods: KeyModifiers::CTRL,
        }
    }

    /// Printable character payload, if this event should insert text.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.mods.contains(KeyModifiers::CTRL) && !c.is_control() => {
                Some(c)
            }
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

/// Result alias for event-producing collaborators.
pub type EventResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_rejects_ctrl_chords() {
        assert_eq!(KeyEvent::ch('a').printable(), Some('a'));
        assert_eq!(KeyEvent::ctrl('s').printable(), None);
        assert_eq!(KeyEvent::plain(KeyCode::Enter).printable(), None);
    }

    #[test]
    fn key_event_display_names_code() {
        let k = KeyEvent::ctrl('x');
        assert!(format!("{}", k).contains("Char"));
    }
}
