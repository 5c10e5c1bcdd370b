// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Recognized identifier kinds (ISNI, VIAF, ...) and their value patterns.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

/// One identifier kind the form accepts, with its compiled validation pattern.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "IdentifierTypeRaw")]
pub struct IdentifierType {
    pub id: u64,
    pub label: String,
    validation_regex: Regex,
}

#[derive(Debug, Deserialize)]
struct IdentifierTypeRaw {
    id: u64,
    #[serde(default)]
    label: String,
    #[serde(rename = "validationRegex")]
    validation_regex: String,
}

impl TryFrom<IdentifierTypeRaw> for IdentifierType {
    type Error = regex::Error;

    fn try_from(raw: IdentifierTypeRaw) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            label: raw.label,
            validation_regex: Regex::new(&raw.validation_regex)?,
        })
    }
}

impl IdentifierType {
    /// Compile a new identifier type.
    ///
    /// # Errors
    ///
    /// Returns an error when `validation_regex` is not a valid pattern.
    pub fn new(id: u64, label: impl Into<String>, validation_regex: &str) -> Result<Self> {
        let label = label.into();
        let validation_regex = Regex::new(validation_regex).with_context(|| {
            format!("Invalid validation pattern for identifier type {label:?} ({id})")
        })?;
        Ok(Self {
            id,
            label,
            validation_regex,
        })
    }

    /// Source text of the validation pattern.
    pub fn validation_regex(&self) -> &str {
        self.validation_regex.as_str()
    }

    /// Whether `value` matches this type's pattern anywhere in the string.
    pub fn accepts(&self, value: &str) -> bool {
        self.validation_regex.is_match(value)
    }
}

/// Find the identifier type with the given id.
pub fn find_type(types: &[IdentifierType], id: u64) -> Option<&IdentifierType> {
    types.iter().find(|t| t.id == id)
}
