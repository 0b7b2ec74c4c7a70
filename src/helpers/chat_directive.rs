//! Transcript to `.. chat::` directive conversion
//!
//! Docs and prompt examples write conversations as plain transcripts:
//!
//! ```text
//! # Example
//!
//! > User: hello
//! > Assistant: hi
//! ```
//!
//! [`ChatDirective`] rewrites them into an indented reStructuredText block
//! opened by `.. chat::`, so the turns get rendered as a conversation:
//!
//! ```text
//! Example
//!
//! .. chat::
//!
//!    User: hello
//!    Assistant: hi
//! ```
//!
//! The rewrite runs in two passes over the lines. First the `> ` quote
//! marker is stripped from role lines (`Role: ...`) and everything is
//! indented; then the directive is placed before the first `User:` turn,
//! lifting a directly preceding heading line out of the block.

use crate::core::{UtilError, UtilResult};

/// Indentation unit for the directive body
pub const INDENT: &str = "   ";

/// Directive opener inserted before the first user turn
pub const DIRECTIVE: &str = ".. chat::";

const QUOTE_MARKER: &str = "> ";
const ANCHOR_ROLE: &str = "User:";

/// How an indented line takes part in directive placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    /// Indented `User:` turn
    Anchor,
    /// Indented line starting with `#` or a space; holds the text after the markers
    Heading(&'a str),
    /// Empty or whitespace-only
    Blank,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State<'a> {
    SeekingAnchor,
    /// A heading was seen at output position `start`, followed only by blanks so far
    InHeadingBlock { start: usize, text: &'a str },
    Inserted,
}

/// Converts role-delimited transcripts into `.. chat::` blocks
///
/// ```
/// use shadow_agent_utils::helpers::ChatDirective;
///
/// let out = ChatDirective::new()
///     .with_strict(true)
///     .transform("User: hello\nAssistant: hi")
///     .unwrap();
/// assert_eq!(out, "\n\n.. chat::\n\n   User: hello\n   Assistant: hi");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatDirective {
    strict: bool,
}

impl ChatDirective {
    /// Create a non-strict transformer
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail instead of passing text through when nothing can be transformed
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Transform a transcript
    ///
    /// In strict mode, returns [`UtilError::NoMessageFound`] when no line looks
    /// like `Role: ...`, and [`UtilError::NoDirectivePlacementFound`] when
    /// there is no `User:` turn to put the directive in front of. Otherwise
    /// those cases return the text indented but without a directive.
    pub fn transform(&self, text: &str) -> UtilResult<String> {
        let mut role_lines = 0;
        let indented: Vec<String> = text
            .split('\n')
            .map(|line| {
                let line = match strip_quote_marker(line) {
                    Some(role_line) => {
                        role_lines += 1;
                        role_line
                    }
                    None => line,
                };
                indent(line)
            })
            .collect();

        if role_lines == 0 && self.strict {
            return Err(UtilError::NoMessageFound);
        }

        let placed = place_directive(&indented);
        if placed.is_none() && self.strict {
            return Err(UtilError::NoDirectivePlacementFound);
        }

        tracing::debug!(
            "[ChatDirective] {} lines, {} role lines, directive placed: {}",
            indented.len(),
            role_lines,
            placed.is_some()
        );

        Ok(match placed {
            Some(lines) => lines.join("\n"),
            None => indented.join("\n"),
        })
    }
}

/// Role lines keep their label and colon; only the `> ` marker goes.
///
/// Returns `None` for lines that are not role lines.
fn strip_quote_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix(QUOTE_MARKER) {
        if is_role_line(rest) {
            return Some(rest);
        }
    }
    is_role_line(line).then_some(line)
}

/// One or more non-colon characters, then a colon
fn is_role_line(line: &str) -> bool {
    matches!(line.find(':'), Some(pos) if pos > 0)
}

fn indent(line: &str) -> String {
    if line.trim().is_empty() {
        line.to_string()
    } else {
        format!("{INDENT}{line}")
    }
}

fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    let Some(rest) = line.strip_prefix(INDENT) else {
        return LineKind::Other;
    };

    if rest.starts_with(ANCHOR_ROLE) {
        return LineKind::Anchor;
    }

    let is_marker = |c: char| c == '#' || c == ' ';
    if rest.len() < 2 || !rest.starts_with(is_marker) {
        return LineKind::Other;
    }

    // The heading text keeps at least one character, even if it is a marker.
    let markers = (rest.len() - rest.trim_start_matches(is_marker).len()).min(rest.len() - 1);
    LineKind::Heading(&rest[markers..])
}

/// Place the directive before the first anchor, or `None` if there is none.
fn place_directive(lines: &[String]) -> Option<Vec<&str>> {
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 4);
    let mut state = State::SeekingAnchor;

    for line in lines {
        if state == State::Inserted {
            out.push(line);
            continue;
        }

        match classify(line) {
            LineKind::Anchor => {
                let heading = match state {
                    State::InHeadingBlock { start, text } => {
                        out.truncate(start);
                        text
                    }
                    _ => "",
                };
                out.extend([heading, "", DIRECTIVE, ""]);
                out.push(line);
                state = State::Inserted;
            }
            LineKind::Heading(text) => {
                state = State::InHeadingBlock {
                    start: out.len(),
                    text,
                };
                out.push(line);
            }
            LineKind::Blank => out.push(line),
            LineKind::Other => {
                state = State::SeekingAnchor;
                out.push(line);
            }
        }
    }

    (state == State::Inserted).then_some(out)
}

/// Transform a transcript into a `.. chat::` block
///
/// Shorthand for `ChatDirective::new().with_strict(strict).transform(text)`.
pub fn transform_transcript(text: &str, strict: bool) -> UtilResult<String> {
    ChatDirective::new().with_strict(strict).transform(text)
}
