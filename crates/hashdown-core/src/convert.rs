//! Bridges between host data and the Hashdown tree.
//!
//! Hashdown only stores text, so conversion into the tree is lossy in the
//! same way everywhere:
//!
//! - `null`, `false` and `None` become the empty scalar
//! - `true` becomes `"1"`
//! - numbers become their JSON text
//! - arrays become list-shaped containers (`0..n` keys)
//! - object keys that spell a non-negative integer become index keys
//!
//! Going back to JSON, list-shaped containers become arrays and every scalar
//! becomes a string.

use crate::error::Result;
use crate::parser::parse;
use crate::serializer::{stringify, StringifyOptions};
use crate::value::{Container, Key, Value};
use serde::Serialize;
use serde_json::Map;

/// Types that can be turned into a Hashdown tree for serialization.
pub trait ToTreeValue {
    fn to_tree_value(&self) -> Value;
}

impl ToTreeValue for Value {
    fn to_tree_value(&self) -> Value {
        self.clone()
    }
}

impl ToTreeValue for str {
    fn to_tree_value(&self) -> Value {
        Value::from(self)
    }
}

impl ToTreeValue for String {
    fn to_tree_value(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl<T: ToTreeValue + ?Sized> ToTreeValue for &T {
    fn to_tree_value(&self) -> Value {
        (**self).to_tree_value()
    }
}

impl ToTreeValue for bool {
    fn to_tree_value(&self) -> Value {
        Value::from(if *self { "1" } else { "" })
    }
}

impl<T: ToTreeValue> ToTreeValue for Option<T> {
    fn to_tree_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_tree_value(),
            None => Value::default(),
        }
    }
}

impl<T: ToTreeValue> ToTreeValue for [T] {
    fn to_tree_value(&self) -> Value {
        Value::list(self.iter().map(|item| item.to_tree_value()))
    }
}

impl<T: ToTreeValue> ToTreeValue for Vec<T> {
    fn to_tree_value(&self) -> Value {
        self.as_slice().to_tree_value()
    }
}

impl ToTreeValue for serde_json::Value {
    fn to_tree_value(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::default(),
            serde_json::Value::Bool(b) => b.to_tree_value(),
            serde_json::Value::Number(n) => Value::from(n.to_string()),
            serde_json::Value::String(s) => Value::from(s.as_str()),
            serde_json::Value::Array(arr) => arr.to_tree_value(),
            serde_json::Value::Object(map) => Value::Container(
                map.iter()
                    .map(|(k, v)| (Key::from(k.as_str()), v.to_tree_value()))
                    .collect(),
            ),
        }
    }
}

/// Convert any serde-serializable value into a Hashdown tree, going through
/// `serde_json::Value`.
///
/// # Example
/// ```
/// use hashdown_core::{stringify, to_tree, StringifyOptions};
///
/// #[derive(serde::Serialize)]
/// struct Person { name: String, langs: Vec<String> }
///
/// let person = Person { name: "Ada".into(), langs: vec!["en".into()] };
/// let tree = to_tree(&person).unwrap();
/// assert_eq!(
///     stringify(&tree, &StringifyOptions::default()),
///     "# name\nAda\n\n# langs\n- en\n"
/// );
/// ```
pub fn to_tree<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?.to_tree_value())
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Scalar(s) => serde_json::Value::String(s.clone()),
            Value::Container(c) => container_to_json(c),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

fn container_to_json(container: &Container) -> serde_json::Value {
    if container.is_list() {
        return serde_json::Value::Array(container.values().map(serde_json::Value::from).collect());
    }
    let mut map = Map::new();
    for (key, value) in container.iter() {
        map.insert(key.to_string(), serde_json::Value::from(value));
    }
    serde_json::Value::Object(map)
}

/// Encode a JSON string as a Hashdown document.
///
/// Returns an error if the input is not valid JSON.
pub fn encode(json: &str, options: &StringifyOptions) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(stringify(&value.to_tree_value(), options))
}

/// Decode a Hashdown document into compact JSON.
///
/// The output is minified; use `serde_json::to_string_pretty` on the parsed
/// result if human-readable JSON is needed.
pub fn decode(text: &str) -> Result<String> {
    let value = parse(text)?;
    Ok(serde_json::to_string(&serde_json::Value::from(&value))?)
}
