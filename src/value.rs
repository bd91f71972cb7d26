// shortcuts-vdf/src/value.rs

//! The in-memory value tree that the codec reads and writes.
//!
//! A binary VDF tree has exactly three kinds of values. Objects keep their
//! entries in insertion order since the encoder must reproduce that order
//! byte for byte.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::tag::{ROOT_KEY, Tag};

/// A node in the value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Object(Object),
    Str(String),
    Int32(u32),
}

impl Value {
    /// The tag byte this value is written with.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Value::Object(_) => Tag::Object,
            Value::Str(_) => Tag::Str,
            Value::Int32(_) => Tag::Int32,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Int32(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int32(n)
    }
}

/// An ordered string-keyed mapping. Keys are unique; order is insertion order.
///
/// Backed by a `Vec` because objects in this format are small (a shortcut
/// entry has 17 fields) and lookups are linear scans anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(Value::as_u32)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a value under `key`.
    ///
    /// An existing key keeps its position and has its value replaced; the
    /// previous value is returned. A new key is appended at the end.
    ///
    /// Keys and string values are NUL-terminated on the wire; the encoder
    /// cuts any of them at an interior NUL.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, shifting later entries down so their order is kept.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Direct access for in-place rekeying. Callers must keep keys unique.
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<(String, Value)> {
        &mut self.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Object(obj) => obj.serialize(serializer),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Int32(n) => serializer.serialize_u32(*n),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A whole shortcuts file: a synthetic root object with the single child
/// `"shortcuts"`, holding the collection keyed `"0"`, `"1"`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    shortcuts: Object,
}

impl Document {
    /// An empty document, as produced for a missing or headerless source.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shortcuts(shortcuts: Object) -> Self {
        Self { shortcuts }
    }

    pub fn shortcuts(&self) -> &Object {
        &self.shortcuts
    }

    pub fn shortcuts_mut(&mut self) -> &mut Object {
        &mut self.shortcuts
    }

    pub fn into_shortcuts(self) -> Object {
        self.shortcuts
    }

    /// Pretty-printed JSON view of the whole tree, root key included.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(ROOT_KEY, &self.shortcuts)?;
        map.end()
    }
}
