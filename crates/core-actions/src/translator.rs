//! KeyTranslator: stateful key -> Action translation.
//!
//! Owns the numeric-prefix accumulator for the modal grammar. The rules:
//! * Digits accumulate as `count = count * 10 + digit`, except that `0`
//!   with no count pending is the line-start motion, not a prefix digit.
//! * A count applies to the single following motion key and is consumed
//!   by it; any non-motion key discards a pending count.
//! * Escape resets the accumulator along with the mode.
//!
//! Counts are clamped to `MAX_COUNT` so a held-down digit key cannot
//! overflow the accumulator.

use crate::{Action, EditKind, ModeChange, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

const MAX_COUNT: u32 = 999_999;

#[derive(Debug, Default)]
pub struct KeyTranslator {
    /// Numeric prefix awaiting its motion key (Normal/Visual only).
    pending_count: Option<u32>,
}

impl KeyTranslator {
    pub fn new() -> Self {
        Self {
            pending_count: None,
        }
    }

    /// Discard transient grammar state.
    pub fn reset(&mut self) {
        self.pending_count = None;
    }

    /// Translate one key under the given mode. Returns `None` when the
    /// key only updates translator state (digit accumulation) or means
    /// nothing in this mode.
    pub fn translate(&mut self, mode: &Mode, key: &KeyEvent) -> Option<Action> {
        tracing::trace!(
            target: "actions.translate",
            mode = ?std::mem::discriminant(mode),
            key = ?key.code,
            ctrl = key.mods.contains(KeyModifiers::CTRL),
            pending = ?self.pending_count,
            "translate_key"
        );
        match mode {
            Mode::Plain => translate_plain(key),
            Mode::Insert => translate_insert(key),
            Mode::Command { .. } => translate_command(key),
            Mode::Normal | Mode::Visual { .. } => self.translate_modal(key),
        }
    }

    fn translate_modal(&mut self, key: &KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.reset();
                return Some(Action::ModeChange(ModeChange::ToNormal));
            }
            KeyCode::Up => return self.counted(MotionKind::Up),
            KeyCode::Down => return self.counted(MotionKind::Down),
            KeyCode::Left => return self.counted(MotionKind::Left),
            KeyCode::Right => return self.counted(MotionKind::Right),
            KeyCode::Char(c) if !key.mods.contains(KeyModifiers::CTRL) => {
                if c.is_ascii_digit() {
                    if c == '0' && self.pending_count.is_none() {
                        return Some(Action::Motion(MotionKind::LineStart));
                    }
                    let digit = (c as u8 - b'0') as u32;
                    let accumulated = self
                        .pending_count
                        .unwrap_or(0)
                        .saturating_mul(10)
                        .saturating_add(digit)
                        .min(MAX_COUNT);
                    self.pending_count = Some(accumulated);
                    return None;
                }
                match c {
                    'h' => return self.counted(MotionKind::Left),
                    'j' => return self.counted(MotionKind::Down),
                    'k' => return self.counted(MotionKind::Up),
                    'l' => return self.counted(MotionKind::Right),
                    'w' => return self.counted(MotionKind::WordForward),
                    'b' => return self.counted(MotionKind::WordBackward),
                    'e' => return self.counted(MotionKind::WordEnd),
                    _ => {}
                }
                // Everything below is a non-motion key: it discards an
                // accumulated count.
                self.reset();
                match c {
                    '$' => Some(Action::Motion(MotionKind::LineEnd)),
                    'i' => Some(Action::ModeChange(ModeChange::EnterInsert)),
                    'a' => Some(Action::ModeChange(ModeChange::EnterInsertAfter)),
                    'v' => Some(Action::ModeChange(ModeChange::EnterVisual)),
                    ':' => Some(Action::ModeChange(ModeChange::EnterCommand)),
                    _ => None,
                }
            }
            _ => {
                self.reset();
                None
            }
        }
    }

    fn counted(&mut self, motion: MotionKind) -> Option<Action> {
        match self.pending_count.take() {
            Some(count) => Some(Action::MotionWithCount {
                motion,
                count: count.max(1),
            }),
            None => Some(Action::Motion(motion)),
        }
    }
}

/// Plain mode: direct editing, no modal grammar and no way out of it.
fn translate_plain(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('s') => Some(Action::Save),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Enter => Some(Action::Edit(EditKind::SplitLine)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Up => Some(Action::Motion(MotionKind::Up)),
        KeyCode::Down => Some(Action::Motion(MotionKind::Down)),
        KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
        KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
        _ => key.printable().map(|c| Action::Edit(EditKind::InsertChar(c))),
    }
}

fn translate_insert(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::ModeChange(ModeChange::ToNormal)),
        KeyCode::Enter => Some(Action::Edit(EditKind::SplitLine)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::Backspace)),
        KeyCode::Up => Some(Action::Motion(MotionKind::Up)),
        KeyCode::Down => Some(Action::Motion(MotionKind::Down)),
        KeyCode::Left => Some(Action::Motion(MotionKind::Left)),
        KeyCode::Right => Some(Action::Motion(MotionKind::Right)),
        _ => key.printable().map(|c| Action::Edit(EditKind::InsertChar(c))),
    }
}

fn translate_command(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CommandCancel),
        KeyCode::Enter => Some(Action::CommandExecute),
        KeyCode::Backspace => Some(Action::CommandBackspace),
        _ => key.printable().map(Action::CommandChar),
    }
}
