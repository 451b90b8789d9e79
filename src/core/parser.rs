//! Turns raw input into something the executor can dispatch.
//!
//! Nothing here mutates its input: every function borrows the line and
//! hands back slices or freshly owned tokens, so the caller can still
//! record the untouched line in history.

/// Characters that separate arguments inside a single command.
const ARG_DELIMITERS: &[char] = &[' ', '\t', '\n'];

/// Characters trimmed off each `;`-separated piece of a line.
const SEQUENCE_PADDING: &[char] = &[' ', '\t'];

/// Hard cap on argument count when no configuration says otherwise.
///
/// Every slot holds a real token: 64 means 64 arguments, with none kept
/// back for a terminating NULL the way a C `argv` array would need.
pub const DEFAULT_MAX_ARGS: usize = 64;

/// Split a command into whitespace-delimited tokens.
///
/// Runs of delimiters never produce empty tokens. Anything past `max_args`
/// tokens is dropped without complaint.
pub fn tokenize(command: &str, max_args: usize) -> Vec<String> {
    command
        .split(ARG_DELIMITERS)
        .filter(|token| !token.is_empty())
        .take(max_args)
        .map(str::to_owned)
        .collect()
}

/// Whether a line has to go through [`split_sequence`] first.
pub fn is_sequence(line: &str) -> bool {
    line.contains(';')
}

/// Split a line on `;` into trimmed sub-commands, left to right.
///
/// Pieces that are empty once trimmed are left out entirely.
pub fn split_sequence(line: &str) -> Vec<&str> {
    line.split(';')
        .map(|part| part.trim_matches(SEQUENCE_PADDING))
        .filter(|part| !part.is_empty())
        .collect()
}

/// Look for a trailing `&` and strip it.
///
/// Returns the command without the marker (and without the padding that
/// sat in front of it) plus `true`, or the command unchanged plus `false`.
pub fn detect_background(command: &str) -> (&str, bool) {
    let content = command.trim_end_matches(ARG_DELIMITERS);
    match content.strip_suffix('&') {
        Some(rest) => (rest.trim_end_matches(SEQUENCE_PADDING), true),
        None => (command, false),
    }
}

/// A single sub-command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub argv: Vec<String>,
    pub background: bool,
}

impl ParsedCommand {
    /// Run background detection and then tokenization on one sub-command.
    pub fn parse(command: &str, max_args: usize) -> Self {
        let (command, background) = detect_background(command);
        Self {
            argv: tokenize(command, max_args),
            background,
        }
    }

    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Everything after the program name.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }
}
