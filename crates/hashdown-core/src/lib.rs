//! # hashdown-core
//!
//! Pure-Rust parser and serializer for **Hashdown**, a Markdown-like way of
//! writing nested key/value data.
//!
//! Headers name keys and their depth gives the nesting; dash lists hold
//! auto-numbered entries; everything else is text. Text that would be
//! mistaken for structure is wrapped in a backtick fence.
//!
//! ````text
//! # name
//! Ada Lovelace
//!
//! # languages
//! - English
//! - French
//!
//! # notes
//! ```
//! ## not a header
//! ```
//! ````
//!
//! ## Quick start
//!
//! ```rust
//! use hashdown_core::{encode, decode, StringifyOptions};
//!
//! // JSON → Hashdown
//! let json = r#"{"name":"Ada","langs":["en","fr"]}"#;
//! let doc = encode(json, &StringifyOptions::default()).unwrap();
//! assert_eq!(doc, "# name\nAda\n\n# langs\n- en\n- fr\n");
//!
//! // Hashdown → JSON (roundtrip)
//! let back = decode(&doc).unwrap();
//! assert_eq!(back, json);
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: Hashdown text → [`Value`] tree
//! - [`serializer`]: [`Value`] tree → Hashdown text
//! - [`value`]: tree types [`Value`], [`Container`], [`Key`]
//! - [`convert`]: [`ToTreeValue`] adapters and the JSON bridge
//! - [`io`]: file read/write helpers
//! - [`error`]: error types

pub mod convert;
pub mod error;
pub mod io;
mod line;
pub mod parser;
pub mod serializer;
pub mod value;

pub use convert::{decode, encode, to_tree, ToTreeValue};
pub use error::{HashdownError, Result};
pub use io::{read_file, write_file};
pub use parser::{parse, parse_lines};
pub use serializer::{stringify, StringifyOptions};
pub use value::{Container, Key, Value};
