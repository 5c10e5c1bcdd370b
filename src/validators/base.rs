// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field-level validators shared by every section.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::models::record::FormInput;

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`, with an optional leading `-` on the year.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]{4})(?:-([0-9]{2})(?:-([0-9]{2}))?)?$").expect("date pattern compiles")
});

/// True when the value is required but `null`.
pub fn absent_and_required<V: FormInput + ?Sized>(value: &V, required: bool) -> bool {
    required && value.to_record().is_null()
}

/// `null` or any string.
pub fn validate_optional_string<V: FormInput + ?Sized>(value: &V) -> bool {
    let value = value.to_record();
    value.is_null() || value.is_string()
}

/// A non-empty string.
pub fn validate_required_string<V: FormInput + ?Sized>(value: &V) -> bool {
    value
        .to_record()
        .as_str()
        .is_some_and(|s| !s.is_empty())
}

/// `true` or `false`, nothing else.
pub fn validate_boolean<V: FormInput + ?Sized>(value: &V) -> bool {
    value.to_record().is_boolean()
}

/// An integer greater than zero; `null` passes unless `required`.
///
/// Integral floats such as `3.0` count as integers, matching how the editor
/// serializes numeric inputs.
pub fn validate_positive_integer<V: FormInput + ?Sized>(value: &V, required: bool) -> bool {
    let value = value.to_record();
    if value.is_null() {
        return !required;
    }
    as_positive_integer(&value).is_some()
}

/// A date string in one of the accepted shapes; `null` and `""` pass unless `required`.
pub fn validate_date<V: FormInput + ?Sized>(value: &V, required: bool) -> bool {
    match value.to_record().as_ref() {
        Value::Null => !required,
        Value::String(s) if s.is_empty() => !required,
        Value::String(s) => is_well_formed_date(s),
        _ => false,
    }
}

/// Extract a positive integer from a JSON number.
pub(crate) fn as_positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = number.as_f64()?;
    (f.is_finite() && f.fract() == 0.0 && f > 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

/// Check the shape of a date string and that it names a real calendar day.
fn is_well_formed_date(raw: &str) -> bool {
    let Some(caps) = DATE_SHAPE.captures(raw) else {
        return false;
    };
    let Ok(year) = caps[1].parse::<i32>() else {
        return false;
    };
    let Some(month) = caps.get(2) else {
        return true;
    };
    let Ok(month) = month.as_str().parse::<u32>() else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }
    match caps.get(3) {
        None => true,
        Some(day) => day
            .as_str()
            .parse::<u32>()
            .ok()
            .and_then(|day| NaiveDate::from_ymd_opt(year, month, day))
            .is_some(),
    }
}
