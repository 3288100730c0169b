//! String-keyed records of values.

use std::{collections::BTreeMap, fmt};

use super::{List, Value};

/// A record of named values.
///
/// Keys are kept in sorted order so iteration, `Display` and JSON output
/// are deterministic.
///
/// # Examples
///
/// ```
/// # use propedit::value::Doc;
/// let mut doc = Doc::new();
/// doc.set("name", "Alice");
/// doc.set("age", 30);
///
/// assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
/// assert_eq!(doc.get_as::<i64>("age"), Some(30));
/// assert_eq!(doc.get_as::<i64>("name"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Doc {
    children: BTreeMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this document has no members
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct members
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the document has a direct member named `key`
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.children.contains_key(key.as_ref())
    }

    /// Gets a direct member by key
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.children.get(key.as_ref())
    }

    /// Gets a mutable reference to a direct member
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.children.get_mut(key.as_ref())
    }

    /// Gets a direct member with automatic type conversion using TryFrom
    ///
    /// Returns None if the key doesn't exist or the conversion fails.
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Sets a direct member, returns the old value if present
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a direct member, returns its value if present
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.children.remove(key.as_ref())
    }

    /// Returns the member slot for `key`, inserting null if absent
    pub fn entry(&mut self, key: impl Into<String>) -> &mut Value {
        self.children.entry(key.into()).or_insert(Value::Null)
    }

    /// Returns an iterator over all key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.children.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Clears all data from this document
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Converts to a compact JSON string.
    #[cfg(not(feature = "json"))]
    pub fn to_json_string(&self) -> String {
        let mut result = String::with_capacity(self.children.len() * 16);
        result.push('{');
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                result.push(',');
            }
            result.push_str(&super::quote_json(key));
            result.push(':');
            result.push_str(&value.to_json_string());
        }
        result.push('}');
        result
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Doc {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut doc = Doc::new();
        for (key, value) in iter {
            doc.set(key, value);
        }
        doc
    }
}

// Builder pattern methods
impl Doc {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set a boolean value
    pub fn with_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.with(key, Value::Bool(value))
    }

    /// Builder method to set an integer value
    pub fn with_int(self, key: impl Into<String>, value: i64) -> Self {
        self.with(key, Value::Int(value))
    }

    /// Builder method to set a text value
    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Value::Text(value.into()))
    }

    /// Builder method to set a list value
    pub fn with_list(self, key: impl Into<String>, value: impl Into<List>) -> Self {
        self.with(key, Value::List(value.into()))
    }

    /// Builder method to set a nested Doc
    pub fn with_doc(self, key: impl Into<String>, value: impl Into<Doc>) -> Self {
        self.with(key, Value::Doc(value.into()))
    }
}
