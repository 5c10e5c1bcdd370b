// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Normalization of every supported input encoding into one canonical record.
//!
//! Validators call [`FormInput::to_record`] once at their boundary and then only
//! deal with `serde_json::Value`. Plain records are borrowed as-is; persistent
//! maps are converted.

use std::borrow::Cow;

use serde_json::Value;

use super::shared::SharedValue;

static NULL: Value = Value::Null;

/// Anything a validator accepts as input.
pub trait FormInput {
    /// Canonical plain-record view of this value.
    fn to_record(&self) -> Cow<'_, Value>;
}

impl FormInput for Value {
    fn to_record(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl FormInput for SharedValue {
    fn to_record(&self) -> Cow<'_, Value> {
        Cow::Owned(self.to_json())
    }
}

impl<T: FormInput + ?Sized> FormInput for &T {
    fn to_record(&self) -> Cow<'_, Value> {
        (**self).to_record()
    }
}

/// `None` stands for an absent or null value.
impl<T: FormInput> FormInput for Option<T> {
    fn to_record(&self) -> Cow<'_, Value> {
        match self {
            Some(inner) => inner.to_record(),
            None => Cow::Borrowed(&NULL),
        }
    }
}

/// Value stored under `key`, or `None` when the key is missing or `record` is not a map.
pub fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.as_object().and_then(|entries| entries.get(key))
}

/// Value stored under `key`, treating a missing key as `null`.
pub fn field_or_null<'a>(record: &'a Value, key: &str) -> &'a Value {
    field(record, key).unwrap_or(&NULL)
}
