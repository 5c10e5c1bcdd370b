// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Known-good and known-bad form sections used across validator tests.

use serde_json::{Value, json};

use crate::models::identifier_type::IdentifierType;

/// Copy of `base` with `key` replaced by `value`.
pub(crate) fn with(base: &Value, key: &str, value: Value) -> Value {
    let mut out = base.clone();
    if let Some(entries) = out.as_object_mut() {
        entries.insert(key.to_string(), value);
    }
    out
}

/// Copy of `base` with `key` removed.
pub(crate) fn without(base: &Value, key: &str) -> Value {
    let mut out = base.clone();
    if let Some(entries) = out.as_object_mut() {
        entries.remove(key);
    }
    out
}

pub(crate) fn identifier_types() -> Vec<IdentifierType> {
    vec![
        IdentifierType::new(1, "ISNI", r"^\d{15}[\dX]$").unwrap(),
        IdentifierType::new(2, "Wikidata", r"^Q\d+$").unwrap(),
    ]
}

pub(crate) fn valid_alias() -> Value {
    json!({"language": 1, "name": "test", "primary": true, "sortName": "test"})
}

pub(crate) fn valid_aliases() -> Value {
    json!({"1": valid_alias(), "n2": valid_alias()})
}

pub(crate) fn invalid_aliases() -> Value {
    json!({"1": valid_alias(), "n2": with(&valid_alias(), "name", json!(""))})
}

pub(crate) fn valid_identifier() -> Value {
    json!({"type": 2, "value": "Q42"})
}

pub(crate) fn valid_identifiers() -> Value {
    json!({
        "1": valid_identifier(),
        "n2": {"type": 1, "value": "000000012146438X"}
    })
}

pub(crate) fn invalid_identifiers() -> Value {
    json!({
        "1": valid_identifier(),
        "n2": {"type": 1, "value": "Q42"}
    })
}

pub(crate) fn valid_name_section() -> Value {
    json!({"disambiguation": "test", "language": 1, "name": "test", "sortName": "test"})
}

pub(crate) fn invalid_name_section() -> Value {
    with(&valid_name_section(), "name", json!(""))
}

pub(crate) fn valid_submission_section() -> Value {
    json!({"note": "test"})
}

pub(crate) fn invalid_submission_section() -> Value {
    json!({"note": 1})
}

pub(crate) fn valid_publisher_section() -> Value {
    json!({"area": null, "beginDate": null, "endDate": null, "ended": true, "type": 1})
}

pub(crate) fn invalid_publisher_section() -> Value {
    with(&valid_publisher_section(), "type", json!({}))
}

pub(crate) fn valid_form() -> Value {
    json!({
        "aliasEditor": valid_aliases(),
        "identifierEditor": valid_identifiers(),
        "nameSection": valid_name_section(),
        "publisherSection": valid_publisher_section(),
        "submissionSection": valid_submission_section()
    })
}
