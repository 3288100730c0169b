//! JSON support.
//!
//! Implements [`Container`] for [`serde_json::Value`] so property accessors
//! work on parsed JSON documents without conversion, and provides the
//! conversions between [`Value`] and `serde_json::Value`.
//!
//! ```
//! use propedit::get_property_editor;
//! use serde_json::json;
//!
//! let mut config = json!({ "server": { "ports": [80] } });
//! let mut editor = get_property_editor(&mut config, "server.ports[1]")?;
//! editor.write(443)?;
//!
//! assert_eq!(config, json!({ "server": { "ports": [80, 443] } }));
//! # Ok::<(), propedit::Error>(())
//! ```

use serde_json::{Map, Value as JsonValue};

use crate::{
    container::{Container, NodeKind, SlotError, check_padding, padded_slot},
    path::Segment,
    value::{Doc, List, Value},
};

impl Container for JsonValue {
    fn kind(&self) -> Option<NodeKind> {
        match self {
            JsonValue::Object(_) => Some(NodeKind::Record),
            JsonValue::Array(_) => Some(NodeKind::Sequence),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    fn is_nullish(&self) -> bool {
        self.is_null()
    }

    fn is_falsy(&self) -> bool {
        match self {
            JsonValue::Null => true,
            JsonValue::Bool(b) => !b,
            JsonValue::Number(n) => n.as_f64() == Some(0.0),
            JsonValue::String(s) => s.is_empty(),
            JsonValue::Array(_) | JsonValue::Object(_) => false,
        }
    }

    fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Record => JsonValue::Object(Map::new()),
            NodeKind::Sequence => JsonValue::Array(Vec::new()),
        }
    }

    fn child(&self, segment: &Segment) -> Option<&Self> {
        match (self, segment) {
            (JsonValue::Object(map), Segment::Field(name)) => map.get(name),
            (JsonValue::Array(items), Segment::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    fn check_slot(&self, segment: &Segment) -> Result<(), SlotError> {
        match (self, segment) {
            (JsonValue::Object(_), Segment::Field(_)) => Ok(()),
            (JsonValue::Array(items), Segment::Index(index)) => check_padding(items.len(), *index),
            _ => Err(SlotError::WrongKind),
        }
    }

    fn slot_mut(&mut self, segment: &Segment) -> Result<&mut Self, SlotError> {
        match (self, segment) {
            (JsonValue::Object(map), Segment::Field(name)) => {
                Ok(map.entry(name.clone()).or_insert(JsonValue::Null))
            }
            (JsonValue::Array(items), Segment::Index(index)) => {
                padded_slot(items, *index, JsonValue::Null)
            }
            _ => Err(SlotError::WrongKind),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // Large unsigned values saturate, floats truncate toward zero
                None => n
                    .as_u64()
                    .map(Value::from)
                    .or_else(|| n.as_f64().map(Value::from))
                    .unwrap_or(Value::Null),
            },
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                Value::Doc(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Int(n) => JsonValue::from(n),
            Value::Text(s) => JsonValue::String(s),
            Value::Doc(doc) => JsonValue::from(doc),
            Value::List(list) => JsonValue::from(list),
        }
    }
}

impl From<Doc> for JsonValue {
    fn from(doc: Doc) -> Self {
        let map: Map<String, JsonValue> = doc
            .iter()
            .map(|(key, value)| (key.clone(), JsonValue::from(value.clone())))
            .collect();
        JsonValue::Object(map)
    }
}

impl From<List> for JsonValue {
    fn from(list: List) -> Self {
        JsonValue::Array(list.into_iter().map(JsonValue::from).collect())
    }
}

impl Value {
    /// Parses a JSON document into a [`Value`].
    ///
    /// Fractional numbers are truncated to integers. Numbers outside the
    /// `i64` range saturate to `i64::MIN` or `i64::MAX`.
    pub fn from_json_str(json: &str) -> crate::Result<Value> {
        let parsed: JsonValue = serde_json::from_str(json)?;
        Ok(parsed.into())
    }

    /// Converts to a [`serde_json::Value`].
    pub fn to_json(&self) -> JsonValue {
        self.clone().into()
    }

    /// Converts to a compact JSON string.
    ///
    /// ```
    /// # use propedit::value::Value;
    /// assert_eq!(Value::from("hi \"you\"").to_json_string(), r#""hi \"you\"""#);
    /// assert_eq!(Value::Null.to_json_string(), "null");
    /// ```
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl Doc {
    /// Converts to a compact JSON string.
    pub fn to_json_string(&self) -> String {
        JsonValue::from(self.clone()).to_string()
    }
}
