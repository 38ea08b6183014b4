//! Status line composition.
//!
//! Layout outside Command mode:
//! `[TAG] File: <name> | Line <cur>/<total> | Col <col> [modified] | <trailer>`
//! where the tag is the mode's bracketed short form (absent in Plain
//! mode), positions are 1-based, and the trailer is a transient notice
//! when one is active, else the key hint in Plain mode. In Command mode
//! the entire line is a literal `:` followed by the in-progress command
//! text. The result is truncated with `...` and padded to the width.

use core_state::Mode;

const PLAIN_HINT: &str = "Ctrl+S: save, Ctrl+Q: quit";

/// Everything the status line needs, gathered by the frame composer.
pub struct StatusContext<'a> {
    pub mode: &'a Mode,
    pub file: &'a str,
    /// 0-based cursor line.
    pub line: usize,
    pub total: usize,
    /// 0-based cursor column.
    pub col: usize,
    pub modified: bool,
    pub notice: Option<&'a str>,
}

pub fn build_status(ctx: &StatusContext<'_>, width: usize) -> String {
    if let Mode::Command { input } = ctx.mode {
        return fit(&format!(":{input}"), width);
    }
    let mut s = String::with_capacity(64);
    s.push_str(ctx.mode.tag());
    use std::fmt::Write as _;
    let _ = write!(
        s,
        "File: {} | Line {}/{} | Col {}",
        ctx.file,
        ctx.line + 1,
        ctx.total,
        ctx.col + 1
    );
    if ctx.modified {
        s.push_str(" [modified]");
    }
    let trailer = ctx.notice.or(match ctx.mode {
        Mode::Plain => Some(PLAIN_HINT),
        _ => None,
    });
    if let Some(t) = trailer {
        s.push_str(" | ");
        s.push_str(t);
    }
    fit(&s, width)
}

/// Separator row between text and status.
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate with `...` (when room allows) and pad to exactly `width`.
fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let mut out: String = if len > width {
        if width >= 3 {
            let mut t: String = s.chars().take(width - 3).collect();
            t.push_str("...");
            t
        } else {
            s.chars().take(width).collect()
        }
    } else {
        s.to_string()
    };
    let used = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(mode: &'a Mode, notice: Option<&'a str>) -> StatusContext<'a> {
        StatusContext {
            mode,
            file: "notes.txt",
            line: 0,
            total: 3,
            col: 4,
            modified: false,
            notice,
        }
    }

    #[test]
    fn plain_mode_shows_hint_and_no_tag() {
        let mode = Mode::Plain;
        let s = build_status(&ctx(&mode, None), 80);
        assert_eq!(s.trim_end(), "File: notes.txt | Line 1/3 | Col 5 | Ctrl+S: save, Ctrl+Q: quit");
        assert_eq!(s.chars().count(), 80);
    }

    #[test]
    fn normal_mode_shows_tag_without_hint() {
        let mode = Mode::Normal;
        let s = build_status(&ctx(&mode, None), 80);
        assert_eq!(s.trim_end(), "[NOR] File: notes.txt | Line 1/3 | Col 5");
    }

    #[test]
    fn modified_flag_is_appended() {
        let mode = Mode::Insert;
        let mut c = ctx(&mode, None);
        c.modified = true;
        let s = build_status(&c, 80);
        assert_eq!(s.trim_end(), "[INS] File: notes.txt | Line 1/3 | Col 5 [modified]");
    }

    #[test]
    fn notice_replaces_the_trailer() {
        let mode = Mode::Plain;
        let s = build_status(&ctx(&mode, Some("write failed: denied")), 80);
        assert_eq!(
            s.trim_end(),
            "File: notes.txt | Line 1/3 | Col 5 | write failed: denied"
        );
    }

    #[test]
    fn command_mode_replaces_the_whole_line() {
        let mode = Mode::Command {
            input: "wq".to_string(),
        };
        let s = build_status(&ctx(&mode, None), 40);
        assert_eq!(s.trim_end(), ":wq");
        assert_eq!(s.chars().count(), 40);
    }

    #[test]
    fn overlong_status_is_truncated_with_ellipsis() {
        let mode = Mode::Plain;
        let s = build_status(&ctx(&mode, None), 20);
        assert_eq!(s.chars().count(), 20);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn separator_matches_width() {
        assert_eq!(separator(4), "────");
    }
}
