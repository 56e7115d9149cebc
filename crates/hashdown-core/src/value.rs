//! The Hashdown tree: text scalars and ordered key/value containers.
//!
//! Lists have no type of their own. A list is a [`Container`] whose keys are
//! `Index(0)..Index(n-1)` in insertion order, which is what the parser builds
//! for dash items and bare header markers. Containers keep their entries in a
//! `Vec` so insertion order survives both directions without pulling in an
//! ordered-map crate.

use std::fmt;

/// A container key: an explicit name or a non-negative integer index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(u64),
    Name(String),
}

impl Key {
    /// Returns the integer if this is an `Index` key.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }
}

/// Key text that spells a canonical non-negative integer becomes an `Index`,
/// so `# 3` and the third auto-numbered item address the same entry.
impl From<&str> for Key {
    fn from(text: &str) -> Self {
        match canonical_index(text) {
            Some(i) => Key::Index(i),
            None => Key::Name(text.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        match canonical_index(&text) {
            Some(i) => Key::Index(i),
            None => Key::Name(text),
        }
    }
}

impl From<u64> for Key {
    fn from(i: u64) -> Self {
        Key::Index(i)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i as u64)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// `"0"` or a digit string without a leading zero that fits in a `u64`.
fn canonical_index(text: &str) -> Option<u64> {
    let bytes = text.as_bytes();
    let canonical = match bytes.first() {
        Some(b'0') => bytes.len() == 1,
        Some(b'1'..=b'9') => bytes.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if !canonical {
        return None;
    }
    text.parse().ok()
}

/// An ordered mapping from unique keys to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    entries: Vec<(Key, Value)>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Mutable access to the value at `key`, appending an empty scalar first
    /// if the key is absent.
    pub fn entry_mut(&mut self, key: Key) -> &mut Value {
        let index = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key, Value::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// The key an implicit (dash or bare header) entry receives: one past
    /// the largest `Index` key present, or 0 when there is none. Named keys
    /// are ignored. `None` once `u64::MAX` is taken.
    pub fn next_index(&self) -> Option<u64> {
        match self.keys().filter_map(Key::as_index).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }

    /// True when the keys are exactly `0..len` in insertion order.
    pub fn is_list(&self) -> bool {
        self.keys()
            .enumerate()
            .all(|(i, key)| key.as_index() == Some(i as u64))
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A Hashdown document value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Leaf text, possibly spanning several lines. Also the "empty" value.
    Scalar(String),
    Container(Container),
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(String::new())
    }
}

impl Value {
    /// Build a list-shaped container from `items`, keyed `0..n`.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Container(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), v.into()))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(c) => Some(c),
            Value::Scalar(_) => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Look up a direct child by key. Scalars have no children.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_container()?.get(&key.into())
    }

    /// The node addressed by `path`, if every step exists.
    pub fn at_path(&self, path: &[Key]) -> Option<&Value> {
        path.iter()
            .try_fold(self, |node, key| node.as_container()?.get(key))
    }

    /// Assign `value` at `path`, creating containers along the way. Any
    /// scalar met on the way is replaced by an empty container, and an empty
    /// path replaces the whole tree.
    pub fn set_at_path(&mut self, path: &[Key], value: Value) {
        let mut node = self;
        for key in path {
            node = node.make_container().entry_mut(key.clone());
        }
        *node = value;
    }

    fn make_container(&mut self) -> &mut Container {
        if let Value::Scalar(_) = self {
            *self = Value::Container(Container::new());
        }
        match self {
            Value::Container(c) => c,
            Value::Scalar(_) => unreachable!("scalar was just replaced by a container"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Container(c)
    }
}
