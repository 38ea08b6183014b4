//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `motion`  - cursor movement semantics
//! * `edit`    - text mutation (insert/backspace/split)
//! * `mode`    - mode transitions
//! * `command` - command-line editing & execution (:w, :q, :<line>)
//!
//! Dispatch is fully synchronous: one action is applied in its entirety
//! before the caller reads the next key event.

use crate::Action;
use core_state::EditorState;

mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;

pub use command_parser::{CommandParser, ParsedCommand};

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// State changed in a way the next frame should show.
    pub dirty: bool,
    /// The session should terminate.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply one action. Returns whether a repaint is due (`dirty`) or the
/// editor should exit (`quit`).
pub fn dispatch(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::MotionWithCount {
            motion: kind,
            count,
        } => {
            let mut result = DispatchResult::clean();
            for _ in 0..count {
                if motion::handle_motion(kind, state).dirty {
                    result.dirty = true;
                }
            }
            result
        }
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state),
        Action::CommandChar(_)
        | Action::CommandBackspace
        | Action::CommandExecute
        | Action::CommandCancel => command::handle_command_action(action, state),
        Action::Save => {
            command::save(state);
            DispatchResult::dirty()
        }
        Action::Quit => DispatchResult::quit(),
    }
}
