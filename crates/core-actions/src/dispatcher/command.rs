//! Command-line editing and execution.
//!
//! Every path out of Command mode lands in Normal. Execution semantics:
//! `w`/`write` saves, `q`/`quit` terminates immediately (unsaved changes
//! notwithstanding), a digit string jumps to that 1-based line (silently
//! ignored when out of range), anything else is silently ignored.

use super::command_parser::{CommandParser, ParsedCommand};
use super::DispatchResult;
use crate::Action;
use core_state::{EditorState, Mode};
use std::time::Duration;

const NOTICE_TTL: Duration = Duration::from_secs(3);

pub(crate) fn handle_command_action(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::CommandChar(c) => {
            if let Mode::Command { input } = &mut state.mode {
                input.push(c);
            }
            DispatchResult::dirty()
        }
        Action::CommandBackspace => {
            if let Mode::Command { input } = &mut state.mode {
                input.pop();
            }
            DispatchResult::dirty()
        }
        Action::CommandCancel => {
            state.mode = Mode::Normal;
            DispatchResult::dirty()
        }
        Action::CommandExecute => execute(state),
        _ => DispatchResult::clean(),
    }
}

fn execute(state: &mut EditorState) -> DispatchResult {
    let input = match std::mem::replace(&mut state.mode, Mode::Normal) {
        Mode::Command { input } => input,
        other => {
            // Execute outside Command mode is a translator bug; restore
            // the mode and ignore.
            state.mode = other;
            return DispatchResult::clean();
        }
    };
    match CommandParser::parse(&input) {
        ParsedCommand::Write => {
            save(state);
        }
        ParsedCommand::Quit => {
            tracing::info!(target: "actions.dispatch", modified = state.buffer.is_modified(), "quit_command");
            return DispatchResult::quit();
        }
        ParsedCommand::Goto(n) => {
            if n >= 1 && n <= state.buffer.line_count() {
                state.cursor.line = n - 1;
                state.cursor.col = 0;
                tracing::debug!(target: "actions.dispatch", line = n, "goto_line");
            }
        }
        ParsedCommand::Unknown(cmd) => {
            tracing::debug!(target: "actions.dispatch", command = cmd.as_str(), "unknown_command_ignored");
        }
    }
    DispatchResult::dirty()
}

/// Save the buffer; failure is recoverable. The modified flag survives a
/// failed write and the error surfaces on the status line.
pub(crate) fn save(state: &mut EditorState) {
    match state.save() {
        Ok(()) => {}
        Err(e) => {
            tracing::error!(target: "io", error = %format!("{e:#}"), "save_failed");
            state.set_notice(format!("write failed: {e:#}"), NOTICE_TTL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;
    use std::path::PathBuf;

    fn command_state(text: &str, input: &str) -> EditorState {
        let mut st = EditorState::new(Buffer::from_content(text), PathBuf::from("t.txt"), true);
        st.mode = Mode::Command {
            input: input.to_string(),
        };
        st
    }

    #[test]
    fn goto_moves_to_one_based_line_column_zero() {
        let mut st = command_state("a\nb\nc", "3");
        st.cursor.col = 1;
        let r = execute(&mut st);
        assert!(!r.quit);
        assert_eq!((st.cursor.line, st.cursor.col), (2, 0));
        assert_eq!(st.mode, Mode::Normal);
    }

    #[test]
    fn goto_out_of_range_is_ignored() {
        let mut st = command_state("a\nb", "42");
        st.cursor.line = 1;
        execute(&mut st);
        assert_eq!(st.cursor.line, 1, "cursor unchanged");
        assert_eq!(st.mode, Mode::Normal);
    }

    #[test]
    fn quit_bypasses_unsaved_changes() {
        let mut st = command_state("a", "q");
        st.buffer.insert_char(&mut st.cursor, 'x');
        let r = execute(&mut st);
        assert!(r.quit);
        assert!(st.buffer.is_modified(), "nothing was written");
    }

    #[test]
    fn unknown_command_returns_to_normal() {
        let mut st = command_state("a", "nonsense");
        let r = execute(&mut st);
        assert!(!r.quit);
        assert_eq!(st.mode, Mode::Normal);
    }

    #[test]
    fn backspace_edits_and_cancel_discards() {
        let mut st = command_state("a", "qq");
        handle_command_action(Action::CommandBackspace, &mut st);
        assert_eq!(
            st.mode,
            Mode::Command {
                input: "q".to_string()
            }
        );
        handle_command_action(Action::CommandCancel, &mut st);
        assert_eq!(st.mode, Mode::Normal);
    }
}
