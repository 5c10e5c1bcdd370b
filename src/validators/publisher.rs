// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Publisher section fields and the whole publisher form.

use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use super::all_pass;
use super::base::{validate_boolean, validate_date, validate_positive_integer};
use super::common::{
    validate_aliases, validate_identifiers, validate_name_section, validate_submission_section,
};
use crate::models::identifier_type::IdentifierType;
use crate::models::record::{FormInput, field, field_or_null};

/// The area is optional, but when present it must carry a positive integer `id`.
pub fn validate_publisher_section_area<V: FormInput + ?Sized>(value: &V) -> bool {
    let value = value.to_record();
    match value.as_ref() {
        Value::Null => true,
        Value::Object(_) => validate_positive_integer(field_or_null(&value, "id"), true),
        _ => false,
    }
}

/// Optional date the publisher started operating.
pub fn validate_publisher_section_begin_date<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_date(value, false)
}

/// Optional date the publisher stopped operating.
pub fn validate_publisher_section_end_date<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_date(value, false)
}

/// The ended flag must be a boolean.
pub fn validate_publisher_section_ended<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_boolean(value)
}

/// Optional publisher type id.
pub fn validate_publisher_section_type<V: FormInput + ?Sized>(value: &V) -> bool {
    validate_positive_integer(value, false)
}

/// Area, begin/end dates, ended flag and publisher type must all be valid.
///
/// Anything that is not a record, `null` included, is rejected.
pub fn validate_publisher_section<V: FormInput + ?Sized>(section: &V) -> bool {
    let section = section.to_record();
    if !section.is_object() {
        debug!(section = "publisherSection", "not a record");
        return false;
    }
    all_pass(
        "publisherSection",
        &[
            (
                "area",
                validate_publisher_section_area(field_or_null(&section, "area")),
            ),
            (
                "beginDate",
                validate_publisher_section_begin_date(field_or_null(&section, "beginDate")),
            ),
            (
                "endDate",
                validate_publisher_section_end_date(field_or_null(&section, "endDate")),
            ),
            (
                "ended",
                validate_publisher_section_ended(field_or_null(&section, "ended")),
            ),
            (
                "type",
                validate_publisher_section_type(field_or_null(&section, "type")),
            ),
        ],
    )
}

/// Top-level sections of the publisher form, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormSection {
    AliasEditor,
    IdentifierEditor,
    NameSection,
    PublisherSection,
    SubmissionSection,
}

impl FormSection {
    pub const ALL: [FormSection; 5] = [
        FormSection::AliasEditor,
        FormSection::IdentifierEditor,
        FormSection::NameSection,
        FormSection::PublisherSection,
        FormSection::SubmissionSection,
    ];

    /// Key of this section in the form record.
    pub fn key(&self) -> &'static str {
        match self {
            FormSection::AliasEditor => "aliasEditor",
            FormSection::IdentifierEditor => "identifierEditor",
            FormSection::NameSection => "nameSection",
            FormSection::PublisherSection => "publisherSection",
            FormSection::SubmissionSection => "submissionSection",
        }
    }

    fn validate(&self, value: &Value, types: &[IdentifierType]) -> bool {
        match self {
            FormSection::AliasEditor => validate_aliases(value),
            FormSection::IdentifierEditor => validate_identifiers(value, types),
            FormSection::NameSection => validate_name_section(value),
            FormSection::PublisherSection => validate_publisher_section(value),
            FormSection::SubmissionSection => validate_submission_section(value),
        }
    }
}

impl fmt::Display for FormSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sections of `form` that fail validation, in form order.
///
/// A section missing from the form is checked as an empty record; one set to
/// `null` fails. Returns `None` when `form` itself is not a record.
pub fn invalid_sections<V: FormInput + ?Sized>(
    form: &V,
    identifier_types: &[IdentifierType],
) -> Option<Vec<FormSection>> {
    let form = form.to_record();
    if !form.is_object() {
        return None;
    }
    let empty = Value::Object(Map::new());
    Some(
        FormSection::ALL
            .into_iter()
            .filter(|section| {
                let value = field(&form, section.key()).unwrap_or(&empty);
                !section.validate(value, identifier_types)
            })
            .collect(),
    )
}

/// Whether every section of the publisher form is valid.
///
/// ```
/// use publisher_form::{IdentifierType, validate_form};
/// use serde_json::json;
///
/// let types = vec![IdentifierType::new(1, "Wikidata", r"^Q\d+$").unwrap()];
/// let form = json!({
///     "aliasEditor": {},
///     "identifierEditor": {"0": {"type": 1, "value": "Q42"}},
///     "nameSection": {"name": "Penguin", "sortName": "Penguin", "language": 120},
///     "publisherSection": {"area": {"id": 221}, "beginDate": "1935", "ended": false, "type": 1},
///     "submissionSection": {"note": null}
/// });
/// assert!(validate_form(&form, &types));
/// assert!(!validate_form(&json!(null), &types));
/// ```
pub fn validate_form<V: FormInput + ?Sized>(
    form: &V,
    identifier_types: &[IdentifierType],
) -> bool {
    match invalid_sections(form, identifier_types) {
        Some(failed) if failed.is_empty() => true,
        Some(failed) => {
            debug!(?failed, "form rejected");
            false
        }
        None => {
            debug!("form is not a record");
            false
        }
    }
}
