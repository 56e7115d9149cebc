//! Hashdown parser: rebuilds a [`Value`] tree from lines of text.
//!
//! Parsing is a single pass over the lines with a small state machine:
//!
//! - `#` headers open a keyed (or, when bare, auto-numbered) entry whose
//!   depth is the number of hashes
//! - `-` list markers open an auto-numbered entry; `--`, `---` nest lists
//!   inside list items
//! - any other non-blank line is scalar text for the entry currently open
//! - a run of three or more backticks opens a literal block that is copied
//!   verbatim until a run of exactly the same width closes it
//!
//! # Key design decisions
//!
//! - **Write on close**: an entry's text is buffered and only stored in the
//!   tree when the next header/list line arrives (or input ends). Opening a
//!   child later converts the stored scalar into a container.
//! - **Depth bounds**: a marker may go at most one level deeper than the
//!   current position. Hash depth counts the path without the entries list
//!   markers contributed; after scalar text neither kind may go deeper, and
//!   right after a list item headers may not open inside it.
//! - **Blank lines carry no state**: outside literal blocks they are skipped
//!   without touching the buffer or the status used for the depth bounds.

use crate::error::{HashdownError, Result};
use crate::line::{self, LineKind, FENCE, MIN_FENCE_WIDTH};
use crate::value::{Container, Key, Value};
use tracing::{debug, trace};

/// Parse a Hashdown document.
///
/// Splits `text` on `\n` and hands the lines to [`parse_lines`]. A `\r`
/// before the `\n` is a line ending everywhere except inside literal blocks,
/// where it is kept as content.
///
/// # Example
/// ```
/// use hashdown_core::{parse, Value};
///
/// let value = parse("# name\nAda\n\n# langs\n- en\n- fr\n").unwrap();
/// assert_eq!(value.get("name"), Some(&Value::from("Ada")));
/// assert_eq!(value.get("langs"), Some(&Value::list(["en", "fr"])));
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_lines(text.strip_suffix('\n').unwrap_or(text).split('\n'))
}

/// Parse a Hashdown document supplied as individual lines (without line
/// terminators).
///
/// Fails with [`HashdownError::Structure`] on the first header or list line
/// that nests deeper than allowed, or [`HashdownError::KeyOverflow`] when an
/// implicit entry follows an `18446744073709551615` key; no partial tree is
/// returned. A document
/// that never opens an entry parses to a single scalar (`""` when empty).
pub fn parse_lines<I, S>(lines: I) -> Result<Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    let mut count = 0;
    for (index, line) in lines.into_iter().enumerate() {
        parser.feed(line.as_ref(), index + 1)?;
        count += 1;
    }
    let value = parser.finish();
    debug!(lines = count, scalar = value.is_scalar(), "parsed hashdown document");
    Ok(value)
}

/// What the previous non-blank line did. Drives the depth bounds and the
/// literal block handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    WithinScalar,
    WithinLiteral { fence: usize },
    NewArray,
    NewObject,
}

/// Deepest header and list markers accepted on the next line.
#[derive(Debug, Clone, Copy)]
struct DepthBounds {
    hash: usize,
    list: usize,
}

struct Parser {
    root: Value,
    /// Keys leading to the entry currently being collected.
    path: Vec<Key>,
    /// Number of trailing `path` entries opened by list markers.
    list_depth: usize,
    status: Status,
    buffer: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            root: Value::Container(Container::new()),
            path: Vec::new(),
            list_depth: 0,
            status: Status::Idle,
            buffer: Vec::new(),
        }
    }

    fn feed(&mut self, raw: &str, line_no: usize) -> Result<()> {
        let fence = line::leading_run(raw, FENCE);

        if let Status::WithinLiteral { fence: open } = self.status {
            if fence == open {
                self.status = Status::Idle;
            } else {
                self.buffer.push(raw.to_string());
            }
            return Ok(());
        }
        // Outside literal blocks a trailing `\r` is part of a CRLF ending.
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if fence >= MIN_FENCE_WIDTH {
            self.status = Status::WithinLiteral { fence };
            return Ok(());
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        match line::classify(raw) {
            LineKind::Text => {
                self.buffer.push(trimmed.to_string());
                self.status = Status::WithinScalar;
                Ok(())
            }
            LineKind::List { depth, text } => self.open_list_item(depth, text, line_no, raw),
            LineKind::Header { depth, text } => self.open_header(depth, text, line_no, raw),
        }
    }

    fn open_list_item(&mut self, depth: usize, text: &str, line_no: usize, raw: &str) -> Result<()> {
        self.flush();
        if depth > self.bounds().list {
            return Err(structure_error(line_no, raw));
        }

        // Drop the list levels at or below `depth`, keeping its parent.
        let pops = (self.list_depth + 1).saturating_sub(depth);
        self.path.truncate(self.path.len().saturating_sub(pops));
        self.list_depth = depth;

        let key = self.next_numeric_key(line_no, raw)?;
        trace!(line = line_no, depth, key = %key, "list item");
        self.path.push(key);
        if !text.is_empty() {
            self.buffer.push(text.to_string());
        }
        self.status = Status::NewArray;
        Ok(())
    }

    fn open_header(&mut self, depth: usize, text: &str, line_no: usize, raw: &str) -> Result<()> {
        self.flush();
        if depth > self.bounds().hash {
            return Err(structure_error(line_no, raw));
        }

        self.list_depth = 0;
        self.path.truncate(depth - 1);
        let key = if text.is_empty() {
            self.next_numeric_key(line_no, raw)?
        } else {
            Key::from(text)
        };
        trace!(line = line_no, depth, key = %key, "header");
        self.path.push(key);
        self.status = Status::NewObject;
        Ok(())
    }

    fn bounds(&self) -> DepthBounds {
        let mut hash = self.path.len().saturating_sub(self.list_depth) + 1;
        let mut list = self.list_depth + 1;
        match self.status {
            // A scalar was written here, nothing can nest under it.
            Status::WithinScalar => {
                hash -= 1;
                list -= 1;
            }
            // List items only nest further lists.
            Status::NewArray => hash -= 1,
            _ => {}
        }
        DepthBounds { hash, list }
    }

    /// Auto-assigned key for a new entry in the container at `path`.
    fn next_numeric_key(&self, line_no: usize, raw: &str) -> Result<Key> {
        let next = match self.root.at_path(&self.path).and_then(Value::as_container) {
            Some(container) => container.next_index(),
            None => Some(0),
        };
        next.map(Key::Index).ok_or_else(|| HashdownError::KeyOverflow {
            line: line_no,
            text: raw.to_string(),
        })
    }

    /// Store the collected text at the current path. Text collected before
    /// the first entry is dropped, since the root becomes a container.
    fn flush(&mut self) {
        let text = self.take_buffer();
        if !self.path.is_empty() {
            self.root.set_at_path(&self.path, Value::Scalar(text));
        }
    }

    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer).join("\n")
    }

    fn finish(mut self) -> Value {
        let text = self.take_buffer();
        self.root.set_at_path(&self.path, Value::Scalar(text));
        self.root
    }
}

fn structure_error(line: usize, raw: &str) -> HashdownError {
    HashdownError::Structure {
        line,
        text: raw.to_string(),
    }
}
