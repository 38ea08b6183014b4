//! Command-line classification.
//!
//! Converts the raw command text (what the user typed after `:`) into a
//! `ParsedCommand`. Pure classification, no side effects; unknown input
//! is carried verbatim so the dispatcher can log it before ignoring it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Write,
    Quit,
    /// 1-based line number jump.
    Goto(usize),
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        let body = raw.trim();
        match body {
            "w" | "write" => return ParsedCommand::Write,
            "q" | "quit" => return ParsedCommand::Quit,
            _ => {}
        }
        if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = body.parse::<usize>() {
                return ParsedCommand::Goto(n);
            }
        }
        ParsedCommand::Unknown(body.to_string())
    }
}
