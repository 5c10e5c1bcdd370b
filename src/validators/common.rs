// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Sections every entity form shares: aliases, identifiers, name and submission.

use serde_json::Value;
use tracing::debug;

use super::all_pass;
use super::base::{
    as_positive_integer, validate_boolean, validate_optional_string, validate_positive_integer,
    validate_required_string,
};
use crate::models::identifier_type::{IdentifierType, find_type};
use crate::models::record::{FormInput, field_or_null};

/// The alias name must be a non-empty string.
pub fn validate_alias_name<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_required_string(value)
}

/// The alias sort name must be a non-empty string.
pub fn validate_alias_sort_name<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_required_string(value)
}

/// The alias language is a required language id.
pub fn validate_alias_language<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_positive_integer(value, true)
}

/// The primary flag must be a boolean.
pub fn validate_alias_primary<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_boolean(value)
}

/// A single alias entry: name, sort name, language and primary flag.
pub fn validate_alias<V: FormInput + ?Sized>(alias: &V) -> bool {
    let alias = alias.to_record();
    if !alias.is_object() {
        debug!(section = "alias", "not a record");
        return false;
    }
    all_pass(
        "alias",
        &[
            ("name", validate_alias_name(field_or_null(&alias, "name"))),
            (
                "sortName",
                validate_alias_sort_name(field_or_null(&alias, "sortName")),
            ),
            (
                "language",
                validate_alias_language(field_or_null(&alias, "language")),
            ),
            (
                "primary",
                validate_alias_primary(field_or_null(&alias, "primary")),
            ),
        ],
    )
}

/// The alias editor: a keyed record or list of aliases, all of which must be valid.
pub fn validate_aliases<V: FormInput + ?Sized>(aliases: &V) -> bool {
    every_entry("aliasEditor", &aliases.to_record(), |alias| {
        validate_alias(alias)
    })
}

/// The type must be a known identifier type id.
pub fn validate_identifier_type<V: FormInput + ?Sized>(
    type_id: &V,
    types: &[IdentifierType],
) -> bool {
    as_positive_integer(&type_id.to_record()).is_some_and(|id| find_type(types, id).is_some())
}

/// The value must be a non-empty string matching the pattern of the selected type.
///
/// Without a recognized type there is nothing to match against, so the value is rejected.
pub fn validate_identifier_value<V, T>(value: &V, type_id: &T, types: &[IdentifierType]) -> bool
where
    V: FormInput + ?Sized,
    T: FormInput + ?Sized,
{
    let value = value.to_record();
    let Some(text) = value.as_str().filter(|s| !s.is_empty()) else {
        return false;
    };
    as_positive_integer(&type_id.to_record())
        .and_then(|id| find_type(types, id))
        .is_some_and(|selected| selected.accepts(text))
}

/// A single identifier entry: its value must match the pattern of its known type.
pub fn validate_identifier<V: FormInput + ?Sized>(
    identifier: &V,
    types: &[IdentifierType],
) -> bool {
    let identifier = identifier.to_record();
    if !identifier.is_object() {
        debug!(section = "identifier", "not a record");
        return false;
    }
    let type_id = field_or_null(&identifier, "type");
    all_pass(
        "identifier",
        &[
            (
                "value",
                validate_identifier_value(field_or_null(&identifier, "value"), type_id, types),
            ),
            ("type", validate_identifier_type(type_id, types)),
        ],
    )
}

/// The identifier editor: a keyed record or list of identifiers, all of which must be valid.
pub fn validate_identifiers<V: FormInput + ?Sized>(
    identifiers: &V,
    types: &[IdentifierType],
) -> bool {
    every_entry("identifierEditor", &identifiers.to_record(), |identifier| {
        validate_identifier(identifier, types)
    })
}

/// The entity name must be a non-empty string.
pub fn validate_name_section_name<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_required_string(value)
}

/// The sort name must be a non-empty string.
pub fn validate_name_section_sort_name<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_required_string(value)
}

/// The name language is a required language id.
pub fn validate_name_section_language<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_positive_integer(value, true)
}

/// Disambiguation comment, optional.
pub fn validate_name_section_disambiguation<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_optional_string(value)
}

/// Name, sort name, language and disambiguation must all be valid.
pub fn validate_name_section<V: FormInput + ?Sized>(section: &V) -> bool {
    let section = section.to_record();
    if !section.is_object() {
        debug!(section = "nameSection", "not a record");
        return false;
    }
    all_pass(
        "nameSection",
        &[
            (
                "name",
                validate_name_section_name(field_or_null(&section, "name")),
            ),
            (
                "sortName",
                validate_name_section_sort_name(field_or_null(&section, "sortName")),
            ),
            (
                "language",
                validate_name_section_language(field_or_null(&section, "language")),
            ),
            (
                "disambiguation",
                validate_name_section_disambiguation(field_or_null(&section, "disambiguation")),
            ),
        ],
    )
}

/// The revision note is optional free text.
pub fn validate_submission_section_note<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_optional_string(value)
}

/// The submission section only carries an optional note.
pub fn validate_submission_section<V: FormInput + ?Sized>(section: &V) -> bool {
    let section = section.to_record();
    if !section.is_object() {
        debug!(section = "submissionSection", "not a record");
        return false;
    }
    all_pass(
        "submissionSection",
        &[(
            "note",
            validate_submission_section_note(field_or_null(&section, "note")),
        )],
    )
}

/// Apply `check` to every entry of a keyed record or a list.
fn every_entry(collection: &str, entries: &Value, check: impl Fn(&Value) -> bool) -> bool {
    let passed = match entries {
        Value::Object(map) => map.values().all(&check),
        Value::Array(items) => items.iter().all(&check),
        _ => {
            debug!(section = collection, "not a collection");
            return false;
        }
    };
    if !passed {
        debug!(section = collection, "entry rejected");
    }
    passed
}
