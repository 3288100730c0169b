//! A dynamically-typed data tree.
//!
//! [`Value`] is the container type this crate ships with. It holds leaf
//! values (null, booleans, integers, text) and branch values ([`Doc`]
//! records and [`List`] sequences), and implements [`Container`] so every
//! property accessor works on it directly.
//!
//! # Usage
//!
//! ```
//! use propedit::value::{Doc, Value};
//!
//! let mut root = Value::Doc(Doc::new());
//! root.set_path("test.nested[1].test", 1)?;
//!
//! assert_eq!(root.get_path("test.nested[1].test")?, Some(&Value::Int(1)));
//! assert_eq!(root.get_path("test.nested[0].test")?, None);
//! assert_eq!(root.to_json_string(), r#"{"test":{"nested":[null,{"test":1}]}}"#);
//! # Ok::<(), propedit::Error>(())
//! ```

use std::fmt;

use crate::{
    accessor::{get_property_reader, get_property_writer},
    container::{Container, NodeKind, SlotError, check_padding},
    path::Segment,
};

pub mod doc;
pub mod errors;
pub mod list;

pub use doc::Doc;
pub use errors::ValueError;
pub use list::List;

/// Values that can be stored in a data tree.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - Represents null/empty values
/// - [`Value::Bool`] - Boolean values (true/false)
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Branch Values
/// - [`Value::Doc`] - Nested records
/// - [`Value::List`] - Ordered sequences
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types:
///
/// ```
/// # use propedit::value::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(42 == number);
/// assert!(!(text == 42));
/// ```
///
/// Serde uses the plain JSON shapes (`null`, `true`, `3`, `"x"`, `{..}`,
/// `[..]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    // Leaf values (terminal nodes)
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Text string value
    Text(String),

    // Branch values (can contain other nodes)
    /// Record of named values
    Doc(Doc),
    /// Ordered collection of values
    List(List),
}

impl Value {
    /// Returns true if this is a leaf value (terminal node)
    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    /// Returns true if this is a branch value (can contain other nodes)
    pub fn is_branch(&self) -> bool {
        matches!(self, Value::Doc(_) | Value::List(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a Doc (returns immutable reference)
    pub fn as_doc(&self) -> Option<&Doc> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable Doc reference
    pub fn as_doc_mut(&mut self) -> Option<&mut Doc> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Reads the value at a property path.
    ///
    /// Returns `Ok(None)` if anything along the path is missing. Fails only
    /// if the path is invalid or `self` is not a record or list.
    pub fn get_path(&self, path: &str) -> crate::Result<Option<&Value>> {
        Ok(get_property_reader(self, path)?.read())
    }

    /// Writes a value at a property path, creating intermediate records and
    /// lists as needed.
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> crate::Result<()> {
        get_property_writer(self, path)?.write(value)?;
        Ok(())
    }

    /// Converts to a compact JSON string.
    #[cfg(not(feature = "json"))]
    pub fn to_json_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Text(s) => quote_json(s),
            Value::Doc(doc) => doc.to_json_string(),
            Value::List(list) => {
                let mut result = String::with_capacity(list.len() * 8);
                result.push('[');
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        result.push(',');
                    }
                    result.push_str(&item.to_json_string());
                }
                result.push(']');
                result
            }
        }
    }
}

#[cfg(not(feature = "json"))]
fn quote_json(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if u32::from(c) < 0x20 => quoted.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl Container for Value {
    fn kind(&self) -> Option<NodeKind> {
        match self {
            Value::Doc(_) => Some(NodeKind::Record),
            Value::List(_) => Some(NodeKind::Sequence),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Doc(_) => "doc",
            Value::List(_) => "list",
        }
    }

    fn is_nullish(&self) -> bool {
        self.is_null()
    }

    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Text(s) => s.is_empty(),
            Value::Doc(_) | Value::List(_) => false,
        }
    }

    fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Record => Value::Doc(Doc::new()),
            NodeKind::Sequence => Value::List(List::new()),
        }
    }

    fn child(&self, segment: &Segment) -> Option<&Self> {
        match (self, segment) {
            (Value::Doc(doc), Segment::Field(name)) => doc.get(name),
            (Value::List(list), Segment::Index(index)) => list.get(*index),
            _ => None,
        }
    }

    fn check_slot(&self, segment: &Segment) -> Result<(), SlotError> {
        match (self, segment) {
            (Value::Doc(_), Segment::Field(_)) => Ok(()),
            (Value::List(list), Segment::Index(index)) => check_padding(list.len(), *index),
            _ => Err(SlotError::WrongKind),
        }
    }

    fn slot_mut(&mut self, segment: &Segment) -> Result<&mut Self, SlotError> {
        match (self, segment) {
            (Value::Doc(doc), Segment::Field(name)) => Ok(doc.entry(name.as_str())),
            (Value::List(list), Segment::Index(index)) => list.slot_mut(*index),
            _ => Err(SlotError::WrongKind),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Doc(doc) => write!(f, "{doc}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Value::Doc(iter.into_iter().collect())
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        // Values above i64::MAX saturate
        Value::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        // Truncates the fractional part
        Value::Int(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Doc> for Value {
    fn from(value: Doc) -> Self {
        Value::Doc(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

fn mismatch(expected: &str, actual: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected: expected.to_string(),
        actual: actual.type_name().to_string(),
    }
}

// TryFrom implementations for typed reads
impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(mismatch("String", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(mismatch("&str", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(mismatch("i64", value)),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(mismatch("bool", value)),
        }
    }
}

impl TryFrom<&Value> for Doc {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Doc(doc) => Ok(doc.clone()),
            _ => Err(mismatch("Doc", value)),
        }
    }
}

impl TryFrom<&Value> for List {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => Ok(list.clone()),
            _ => Err(mismatch("List", value)),
        }
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
