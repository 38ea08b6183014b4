//! Bounded-timeout keyboard polling.
//!
//! Decodes crossterm terminal events into the logical `core-events`
//! alphabet. `poll_key` is the event loop's single blocking point: it
//! waits at most `timeout` and returns `Ok(None)`, with no side
//! effects, when nothing arrived. Non-key events (resize, focus,
//! mouse) also surface as `None`; the renderer re-queries terminal
//! dimensions every pass, so a resize needs no dedicated event.

use core_events::{EventResult, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

/// Poll for one logical key event, waiting at most `timeout`.
pub fn poll_key(timeout: Duration) -> EventResult<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            let mapped = map_key(key);
            if let Some(k) = mapped {
                tracing::trace!(target: "input", key = %k, "key_event");
            }
            Ok(mapped)
        }
        _ => Ok(None),
    }
}

fn map_key(key: event::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    let mut mods = KeyModifiers::empty();
    if key.modifiers.contains(event::KeyModifiers::CONTROL) {
        mods |= KeyModifiers::CTRL;
    }
    if key.modifiers.contains(event::KeyModifiers::ALT) {
        mods |= KeyModifiers::ALT;
    }
    if key.modifiers.contains(event::KeyModifiers::SHIFT) {
        mods |= KeyModifiers::SHIFT;
    }
    Some(KeyEvent { code, mods })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: event::KeyCode, mods: event::KeyModifiers) -> event::KeyEvent {
        event::KeyEvent::new(code, mods)
    }

    #[test]
    fn maps_printable_and_named_keys() {
        let k = map_key(raw(event::KeyCode::Char('x'), event::KeyModifiers::NONE)).unwrap();
        assert_eq!(k, KeyEvent::ch('x'));
        let k = map_key(raw(event::KeyCode::Enter, event::KeyModifiers::NONE)).unwrap();
        assert_eq!(k.code, KeyCode::Enter);
    }

    #[test]
    fn maps_control_chords() {
        let k = map_key(raw(event::KeyCode::Char('s'), event::KeyModifiers::CONTROL)).unwrap();
        assert_eq!(k, KeyEvent::ctrl('s'));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert!(map_key(raw(event::KeyCode::F(5), event::KeyModifiers::NONE)).is_none());
        assert!(map_key(raw(event::KeyCode::Home, event::KeyModifiers::NONE)).is_none());
    }
}
