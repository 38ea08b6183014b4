//! Mode transition handling.
//!
//! Transitions replace the `Mode` value wholesale, so payloads carried by
//! the departing variant (Visual's anchor, Command's input) are dropped
//! by construction rather than by explicit clearing.

use super::DispatchResult;
use crate::ModeChange;
use core_state::{EditorState, Mode};
use core_text::motion;

pub(crate) fn handle_mode_change(mc: ModeChange, state: &mut EditorState) -> DispatchResult {
    match mc {
        ModeChange::EnterInsert => {
            state.mode = Mode::Insert;
        }
        ModeChange::EnterInsertAfter => {
            motion::right(&state.buffer, &mut state.cursor);
            state.mode = Mode::Insert;
        }
        ModeChange::EnterVisual => {
            let anchor = (state.cursor.line, state.cursor.col);
            tracing::trace!(target: "actions.dispatch", line = anchor.0, col = anchor.1, "visual_anchor");
            state.mode = Mode::Visual { anchor };
        }
        ModeChange::EnterCommand => {
            state.mode = Mode::Command {
                input: String::new(),
            };
        }
        ModeChange::ToNormal => {
            state.mode = Mode::Normal;
        }
    }
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;
    use std::path::PathBuf;

    fn setup(text: &str) -> EditorState {
        EditorState::new(Buffer::from_content(text), PathBuf::from("t.txt"), true)
    }

    #[test]
    fn visual_records_the_current_cursor_as_anchor() {
        let mut st = setup("abc");
        st.cursor.col = 2;
        handle_mode_change(ModeChange::EnterVisual, &mut st);
        assert_eq!(st.mode, Mode::Visual { anchor: (0, 2) });
    }

    #[test]
    fn escape_from_visual_drops_the_anchor() {
        let mut st = setup("abc");
        handle_mode_change(ModeChange::EnterVisual, &mut st);
        handle_mode_change(ModeChange::ToNormal, &mut st);
        assert_eq!(st.mode, Mode::Normal);
    }

    #[test]
    fn insert_after_clamps_at_line_end() {
        let mut st = setup("x");
        st.cursor.col = 1;
        handle_mode_change(ModeChange::EnterInsertAfter, &mut st);
        assert_eq!(st.cursor.col, 1, "right motion clamps at the anchor");
        assert_eq!(st.mode, Mode::Insert);
    }
}
