//! Input line handling
//!
//! Turns the single free-form input line into path text plus an
//! [`IgnoreSet`]. The ignore directive may appear anywhere in the line;
//! everything before it is the path, everything after it the extension list.

use crate::ignore::IgnoreSet;
use crate::string_utils::{match_any_prefix, strip_outer_quotes};

/// Directive spellings, longest first so `--ignore:` wins over `--ignore`.
const IGNORE_DIRECTIVES: &[&str] = &["--ignore:", "--ignore"];

/// Location of an ignore directive inside the input line (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub start: usize,
    pub len: usize,
}

impl Directive {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// An input line split into its path text and ignore list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Sanitized path text (trimmed, outer quotes removed).
    pub path: String,
    pub ignore: IgnoreSet,
}

/// Trim whitespace, strip one layer of surrounding quotes, trim again.
pub fn sanitize_path(input: &str) -> String {
    strip_outer_quotes(input.trim()).trim().to_string()
}

/// Find the first ignore directive, scanning left to right.
///
/// At each position `--ignore:` is tried before `--ignore`. Comparison is
/// ASCII case-insensitive, so byte offsets match the original line.
pub fn find_ignore_directive(line: &str) -> Option<Directive> {
    line.char_indices().find_map(|(start, _)| {
        match_any_prefix(&line[start..], IGNORE_DIRECTIVES).map(|token| Directive {
            start,
            len: token.len(),
        })
    })
}

/// Split a raw input line into sanitized path text and ignore set.
pub fn parse_input(line: &str) -> ParsedInput {
    let line = line.trim();
    match find_ignore_directive(line) {
        Some(directive) => ParsedInput {
            path: sanitize_path(&line[..directive.start]),
            ignore: IgnoreSet::parse(&line[directive.end()..]),
        },
        None => ParsedInput {
            path: sanitize_path(line),
            ignore: IgnoreSet::new(),
        },
    }
}
