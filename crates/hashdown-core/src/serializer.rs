//! Hashdown serializer: renders a [`Value`] tree as Hashdown text.
//!
//! The output is canonical: parsing it with [`parse`](crate::parse) gives the
//! same tree back. Rendering rules:
//!
//! - **Header nesting**: each container entry becomes a header line with one
//!   `#` per nesting level, followed by the entry's value
//! - **Shorthand lists**: a list-shaped container holding only scalars is
//!   written as `- item` lines instead (unless disabled)
//! - **Key omission**: optionally, list-shaped containers rendered with
//!   headers drop the key text and rely on auto-numbering (`#`, `##`)
//! - **Literal fences**: scalar text that would not survive re-parsing
//!   (blank lines, surrounding whitespace, lines opening with `#`, `-`, `\`
//!   or a backtick fence) is wrapped in a backtick fence wider than any
//!   backtick run it contains
//!
//! # Example
//! ```
//! use hashdown_core::{stringify, StringifyOptions, Value};
//!
//! let value = Value::list(["a", "b"]);
//! assert_eq!(stringify(&value, &StringifyOptions::default()), "- a\n- b\n");
//! ```

use crate::line::{self, FENCE, MIN_FENCE_WIDTH};
use crate::value::{Container, Value};
use tracing::debug;

/// Serializer knobs. The default uses shorthand lists and writes every key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringifyOptions {
    /// Write list-shaped containers of scalars as `- item` lines.
    pub shorthand_lists: bool,
    /// Leave the key text off headers of list-shaped containers.
    pub omit_numeric_keys: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            shorthand_lists: true,
            omit_numeric_keys: false,
        }
    }
}

/// Render `value` as a Hashdown document.
///
/// Never fails. The result has no leading or trailing blank lines and ends
/// with exactly one newline. Spaces at either end are kept.
pub fn stringify(value: &Value, options: &StringifyOptions) -> String {
    let mut out = String::new();
    render(value, 1, options, &mut out);
    // Only blank lines are stripped; a trailing key may end in spaces.
    let mut doc = out.trim_matches('\n').to_string();
    doc.push('\n');
    debug!(
        shorthand_lists = options.shorthand_lists,
        omit_numeric_keys = options.omit_numeric_keys,
        bytes = doc.len(),
        "stringified hashdown document"
    );
    doc
}

/// Dispatch on the value kind. `level` is the header depth used for the
/// entries of a container at this position.
fn render(value: &Value, level: usize, options: &StringifyOptions, out: &mut String) {
    match value {
        Value::Scalar(text) => {
            write_scalar(text, false, out);
        }
        Value::Container(container) => render_container(container, level, options, out),
    }
}

fn render_container(container: &Container, level: usize, options: &StringifyOptions, out: &mut String) {
    let is_list = container.is_list();

    if options.shorthand_lists && is_list {
        if let Some(items) = scalar_items(container) {
            write_list(&items, out);
            return;
        }
    }

    let omit_keys = options.omit_numeric_keys && is_list;
    for (key, value) in container.iter() {
        out.push_str(&"#".repeat(level));
        if !omit_keys {
            out.push_str(&format!(" {}", key));
        }
        out.push('\n');
        render(value, level + 1, options, out);
    }
}

/// The entries' text when every value is a scalar.
fn scalar_items(container: &Container) -> Option<Vec<&str>> {
    container.values().map(Value::as_str).collect()
}

/// Emit `- item` lines. A multiline item is followed by a blank line; a
/// single blank line closes the list when the last item was single-line.
fn write_list(items: &[&str], out: &mut String) {
    let mut last_multiline = false;
    for item in items {
        out.push('-');
        last_multiline = write_scalar(item, true, out);
        if last_multiline {
            out.push('\n');
        }
    }
    if !items.is_empty() && !last_multiline {
        out.push('\n');
    }
}

/// Emit scalar text, fenced when needed. Returns whether the text took more
/// than the marker line, which is what list items need to know.
///
/// Outside a list the block is followed by a blank separator line. Inside a
/// list the caller already wrote the `-`; a space or a line break follows it
/// and no separator is added.
fn write_scalar(text: &str, in_list: bool, out: &mut String) -> bool {
    if text.is_empty() {
        out.push('\n');
        return false;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let fence = literal_fence(&lines);
    let multiline = fence.is_some() || lines.len() > 1;

    if in_list {
        out.push(if multiline { '\n' } else { ' ' });
    }
    if let Some(width) = fence {
        push_fence(width, out);
    }
    out.push_str(text);
    out.push('\n');
    if let Some(width) = fence {
        push_fence(width, out);
    }
    if !in_list {
        out.push('\n');
    }
    multiline
}

/// Width of the fence `lines` must be wrapped in, or `None` when they can be
/// written as-is. The fence is one backtick wider than the longest fence-like
/// run the text contains, so no content line can close it.
fn literal_fence(lines: &[&str]) -> Option<usize> {
    let mut needed = false;
    let mut width = MIN_FENCE_WIDTH;
    for line in lines {
        needed |= line::needs_literal(line);
        let run = line::leading_run(line, FENCE);
        if run >= MIN_FENCE_WIDTH {
            width = width.max(run + 1);
        }
    }
    needed.then_some(width)
}

fn push_fence(width: usize, out: &mut String) {
    out.extend(std::iter::repeat(FENCE).take(width));
    out.push('\n');
}
