// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Persistent, structurally shared encoding of form data.
//!
//! Lists and maps live behind [`Arc`], so cloning a [`SharedValue`] is cheap and
//! [`SharedValue::set`] only copies the spine of the map being updated. Untouched
//! children keep pointing at the same allocation as the original.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Immutable counterpart of [`serde_json::Value`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SharedValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(Arc<str>),
    List(Arc<Vec<SharedValue>>),
    Map(Arc<IndexMap<String, SharedValue>>),
}

impl SharedValue {
    /// Build a map from `(key, value)` pairs, keeping insertion order.
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, SharedValue)>,
        K: Into<String>,
    {
        Self::Map(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Build a list from values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SharedValue>,
    {
        Self::List(Arc::new(items.into_iter().collect()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Look up a key in a map, or a numeric index in a list.
    pub fn get(&self, key: &str) -> Option<&SharedValue> {
        match self {
            Self::Map(entries) => entries.get(key),
            Self::List(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            _ => None,
        }
    }

    /// Follow a key path through nested maps and lists.
    ///
    /// ```
    /// use publisher_form::SharedValue;
    /// use serde_json::json;
    ///
    /// let form = SharedValue::from(&json!({"publisherSection": {"area": {"id": 4}}}));
    /// let id = form.get_in(&["publisherSection", "area", "id"]);
    /// assert_eq!(id, Some(&SharedValue::from(&json!(4))));
    /// ```
    pub fn get_in(&self, path: &[&str]) -> Option<&SharedValue> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Return a copy of this map with `key` set to `value`.
    ///
    /// The receiver is left untouched and every other entry is shared with the
    /// result. Setting a key on a non-map value yields a fresh single-entry map.
    pub fn set(&self, key: impl Into<String>, value: SharedValue) -> SharedValue {
        let mut entries = match self {
            Self::Map(entries) => Arc::clone(entries),
            _ => Arc::new(IndexMap::new()),
        };
        Arc::make_mut(&mut entries).insert(key.into(), value);
        Self::Map(entries)
    }

    /// Whether both values point at the same shared list or map allocation.
    pub fn ptr_eq(&self, other: &SharedValue) -> bool {
        match (self, other) {
            (Self::Map(a), Self::Map(b)) => Arc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            (Self::String(a), Self::String(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Convert back into a plain JSON record.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.to_string()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<&Value> for SharedValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::String(Arc::from(s.as_str())),
            Value::Array(items) => Self::list(items.iter().map(Self::from)),
            Value::Object(entries) => {
                Self::map(entries.iter().map(|(k, v)| (k.clone(), Self::from(v))))
            }
        }
    }
}

impl From<Value> for SharedValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<bool> for SharedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SharedValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<&str> for SharedValue {
    fn from(value: &str) -> Self {
        Self::String(Arc::from(value))
    }
}
