//! Editor session state: buffer, cursor, mode, and file I/O.
//!
//! One `EditorState` exists per session and is exclusively owned by the
//! event loop; no locking discipline applies because no concurrent
//! mutator exists. Mode is a closed variant type where each mode carries
//! only the state it needs: `Command` its accumulating input, `Visual`
//! its anchor. Leaving a mode drops that payload, which is exactly the
//! cancel semantics the grammar requires; there is no separate
//! clear-the-anchor bookkeeping to forget.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use core_text::{Buffer, Cursor};

/// Modal state. `Plain` has no modal grammar at all: every printable key
/// inserts and there are no transitions out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Plain,
    Normal,
    Insert,
    Visual { anchor: (usize, usize) },
    Command { input: String },
}

impl Mode {
    /// Short bracketed tag for the status line. Plain mode and Command
    /// mode render no tag (Command mode replaces the whole status line).
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Plain | Mode::Command { .. } => "",
            Mode::Normal => "[NOR] ",
            Mode::Insert => "[INS] ",
            Mode::Visual { .. } => "[VIS] ",
        }
    }

}

/// Transient status-line notice (e.g. a failed save). Replaces the hint
/// segment of the status line until it expires.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct EditorState {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub mode: Mode,
    pub path: PathBuf,
    pub notice: Option<StatusMessage>,
}

impl EditorState {
    /// Create session state over a loaded buffer. Initial mode is `Plain`
    /// unless modal editing was requested at startup.
    pub fn new(buffer: Buffer, path: PathBuf, modal: bool) -> Self {
        Self {
            buffer,
            cursor: Cursor::origin(),
            mode: if modal { Mode::Normal } else { Mode::Plain },
            path,
            notice: None,
        }
    }

    /// File name for the status line.
    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    /// Post a transient notice with a fixed time-to-live.
    pub fn set_notice<S: Into<String>>(&mut self, text: S, ttl: Duration) {
        self.notice = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + ttl,
        });
    }

    /// Expire the notice if its deadline passed; returns true when a
    /// notice was cleared (the caller owes a repaint).
    pub fn tick_notice(&mut self) -> bool {
        if let Some(n) = &self.notice {
            if Instant::now() >= n.expires_at {
                self.notice = None;
                return true;
            }
        }
        false
    }

    /// Write every buffer line followed by a line terminator. Clears the
    /// modified flag on success only; a failed save leaves the in-memory
    /// state untouched so editing continues.
    pub fn save(&mut self) -> Result<()> {
        let mut out = String::new();
        for line in self.buffer.lines() {
            out.push_str(line);
            out.push('\n');
        }
        std::fs::write(&self.path, out)
            .with_context(|| format!("writing {}", self.path.display()))?;
        self.buffer.mark_saved();
        tracing::debug!(target: "io", file = %self.path.display(), lines = self.buffer.line_count(), "file_written");
        Ok(())
    }
}

/// Load a file into a buffer. Failure here is fatal to the session; the
/// caller reports it and never enters the editor.
pub fn load_buffer(path: &Path) -> Result<Buffer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let buffer = Buffer::from_content(&content);
    tracing::debug!(target: "io", file = %path.display(), size_bytes = content.len(), lines = buffer.line_count(), "file_read_ok");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str, modal: bool) -> EditorState {
        EditorState::new(Buffer::from_content(text), PathBuf::from("scratch.txt"), modal)
    }

    #[test]
    fn initial_mode_follows_modal_flag() {
        assert_eq!(state("x", false).mode, Mode::Plain);
        assert_eq!(state("x", true).mode, Mode::Normal);
    }

    #[test]
    fn mode_tags() {
        assert_eq!(Mode::Plain.tag(), "");
        assert_eq!(Mode::Normal.tag(), "[NOR] ");
        assert_eq!(Mode::Insert.tag(), "[INS] ");
        assert_eq!(Mode::Visual { anchor: (0, 0) }.tag(), "[VIS] ");
        assert_eq!(Mode::Command { input: String::new() }.tag(), "");
    }

    #[test]
    fn leaving_visual_drops_the_anchor() {
        let mut st = state("abc", true);
        st.mode = Mode::Visual { anchor: (0, 2) };
        st.mode = Mode::Normal;
        assert!(!matches!(st.mode, Mode::Visual { .. }));
    }

    #[test]
    fn notice_expires_after_ttl() {
        let mut st = state("x", false);
        st.set_notice("written", Duration::from_millis(0));
        assert!(st.notice.is_some());
        assert!(st.tick_notice());
        assert!(st.notice.is_none());
        assert!(!st.tick_notice(), "second tick has nothing to clear");
    }

    #[test]
    fn save_round_trips_and_clears_modified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "one\ntwo\n").unwrap();
        let mut st = EditorState::new(load_buffer(&path).unwrap(), path.clone(), false);
        st.buffer.insert_char(&mut st.cursor, 'X');
        assert!(st.buffer.is_modified());
        st.save().unwrap();
        assert!(!st.buffer.is_modified());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Xone\ntwo\n");
    }

    #[test]
    fn save_failure_keeps_modified_set() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path is not writable as a file.
        let mut st = EditorState::new(Buffer::from_content("a"), dir.path().to_path_buf(), false);
        st.buffer.insert_char(&mut st.cursor, 'b');
        assert!(st.save().is_err());
        assert!(st.buffer.is_modified());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        assert!(load_buffer(Path::new("__no_such_file__.txt")).is_err());
    }
}
