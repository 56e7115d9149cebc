//! Line classification shared by the parser and the serializer.
//!
//! The serializer decides what to escape by asking how the parser would read
//! a line, so both sides go through these helpers.

/// Character that makes up a literal fence.
pub(crate) const FENCE: char = '`';

/// Narrowest fence; shorter backtick runs are ordinary text.
pub(crate) const MIN_FENCE_WIDTH: usize = 3;

/// How a single non-blank line outside a literal block is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// `#`, `##`, ... optionally followed by a space and a key.
    Header { depth: usize, text: &'a str },
    /// `-`, `--`, ... optionally followed by a space and a value.
    List { depth: usize, text: &'a str },
    /// Anything else: part of the scalar being collected.
    Text,
}

/// Count the consecutive `target` characters at the start of `s`.
pub(crate) fn leading_run(s: &str, target: char) -> usize {
    s.chars().take_while(|&c| c == target).count()
}

/// Classify a line by its left-trimmed content.
///
/// The marker run must extend from the first character up to the first
/// space (or the end of the line); everything after that space is the
/// trailing text, kept verbatim. `#a` and `-x` are therefore plain text.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim_start();
    let marker = match line.chars().next() {
        Some(c @ ('#' | '-')) => c,
        _ => return LineKind::Text,
    };
    let (run, text) = match line.find(' ') {
        Some(space) => (&line[..space], &line[space + 1..]),
        None => (line, ""),
    };
    if !run.chars().all(|c| c == marker) {
        return LineKind::Text;
    }
    let depth = run.len();
    if marker == '#' {
        LineKind::Header { depth, text }
    } else {
        LineKind::List { depth, text }
    }
}

/// True for lines the parser would not hand back unchanged outside a
/// literal block: blank lines, lines with surrounding whitespace, and lines
/// that open with a structural character.
pub(crate) fn needs_literal(line: &str) -> bool {
    line.is_empty()
        || line != line.trim()
        || line.starts_with(['#', '-', '\\'])
        || leading_run(line, FENCE) >= MIN_FENCE_WIDTH
}
