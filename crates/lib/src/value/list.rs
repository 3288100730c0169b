//! Ordered sequences of values.

use super::Value;
use crate::container::{SlotError, padded_slot};

/// An ordered collection of values addressed by position.
///
/// Writing past the end of a list pads the gap with [`Value::Null`], so
/// `list[3] = x` on an empty list yields `[null, null, null, x]`. A single
/// write pads at most [`MAX_PADDING`](crate::container::MAX_PADDING) slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements, holes included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends a value and returns its index
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.items.push(value.into());
        self.items.len() - 1
    }

    /// Stores a value at `index`, padding with null, and returns the old value
    ///
    /// Fails without modifying the list if `index` is too far past the end.
    pub fn set(
        &mut self,
        index: usize,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, SlotError> {
        let old = std::mem::replace(self.slot_mut(index)?, value.into());
        Ok((!old.is_null()).then_some(old))
    }

    /// Returns the slot at `index`, growing the list with null if needed
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut Value, SlotError> {
        padded_slot(&mut self.items, index, Value::Null)
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Returns the elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
