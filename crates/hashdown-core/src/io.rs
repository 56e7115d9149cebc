//! Reading and writing Hashdown files.

use crate::error::{HashdownError, Result};
use crate::parser::parse;
use crate::serializer::{stringify, StringifyOptions};
use crate::value::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read and parse a Hashdown file.
///
/// A missing file is reported as [`HashdownError::NotFound`], other read
/// failures as [`HashdownError::Io`], and malformed nesting as
/// [`HashdownError::Structure`].
pub fn read_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => HashdownError::NotFound {
            path: path.to_path_buf(),
        },
        _ => HashdownError::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read hashdown file");
    parse(&text)
}

/// Serialize `value` and write it to `path`, replacing any existing file.
pub fn write_file(value: &Value, path: impl AsRef<Path>, options: &StringifyOptions) -> Result<()> {
    let path = path.as_ref();
    let doc = stringify(value, options);
    fs::write(path, &doc).map_err(|source| HashdownError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = doc.len(), "wrote hashdown file");
    Ok(())
}
