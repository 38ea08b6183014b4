//! Terminal writer: batches one frame into queued commands.
//!
//! Commands preserve ordering and nothing flushes mid-frame; the writer
//! is a short-lived object built and consumed once per repaint. The
//! editor renders inline (beneath the shell prompt), so after writing
//! all UI rows the cursor moves back up to the frame's first row rather
//! than addressing absolute coordinates.

use anyhow::Result;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{Write as _, stdout};

use crate::frame::{Frame, Row};

#[derive(Debug)]
enum Command {
    ClearLine,
    Print(String),
    PrintReversed(String),
    Newline,
    MoveUp(u16),
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }

    fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    fn print_reversed<S: Into<String>>(&mut self, s: S) {
        self.cmds.push(Command::PrintReversed(s.into()));
    }

    fn newline(&mut self) {
        self.cmds.push(Command::Newline);
    }

    fn move_up(&mut self, n: u16) {
        if n > 0 {
            self.cmds.push(Command::MoveUp(n));
        }
    }

    fn flush(self) -> Result<()> {
        let mut out = stdout();
        for c in self.cmds {
            match c {
                Command::ClearLine => {
                    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
                Command::PrintReversed(s) => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Reverse),
                        Print(s),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
                Command::Newline => {
                    queue!(out, Print("\r\n"))?;
                }
                Command::MoveUp(n) => {
                    queue!(out, MoveUp(n))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Write one frame and park the terminal cursor back at the frame top.
pub fn present(frame: &Frame) -> Result<()> {
    let mut w = Writer::new();
    for row in &frame.rows {
        w.clear_line();
        match row {
            Row::Text(s) | Row::Placeholder(s) => w.print(s.clone()),
            Row::Cursor(c) => {
                w.print(format!("{}{}", c.gutter, c.before));
                w.print_reversed(c.at.to_string());
                w.print(format!("{}{}", c.after, " ".repeat(c.pad)));
            }
        }
        w.newline();
    }
    w.clear_line();
    w.print(frame.separator.clone());
    w.newline();
    w.clear_line();
    w.print(frame.status.clone());
    w.newline();
    w.move_up(frame.ui_rows());
    tracing::trace!(target: "render.frame", rows = frame.rows.len(), "frame_flush");
    w.flush()
}
