// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable contract checks for field validators.
//!
//! Every case runs twice: once on the plain record and once on its persistent-map
//! encoding, and both runs must agree.

use serde_json::{Value, json};

use crate::models::record::FormInput;
use crate::models::shared::SharedValue;

/// Assert that `validator` returns `expected` for `value` under both encodings.
pub(crate) fn expect_both<F>(validator: &F, value: Value, expected: bool, case: &str)
where
    F: Fn(&dyn FormInput) -> bool,
{
    let plain: &dyn FormInput = &value;
    assert_eq!(validator(plain), expected, "plain record: {case}");

    let shared = SharedValue::from(&value);
    let shared: &dyn FormInput = &shared;
    assert_eq!(validator(shared), expected, "shared map: {case}");
}

/// Contract of a boolean flag field.
pub(crate) fn check_boolean_validator<F>(validator: F)
where
    F: Fn(&dyn FormInput) -> bool,
{
    expect_both(&validator, json!(true), true, "true");
    expect_both(&validator, json!(false), true, "false");
    expect_both(&validator, json!(null), false, "null");
    expect_both(&validator, json!({}), false, "object");
    expect_both(&validator, json!(1), false, "number");
    expect_both(&validator, json!("true"), false, "string");
}

/// Contract of a date field.
pub(crate) fn check_date_validator<F>(validator: F, required: bool)
where
    F: Fn(&dyn FormInput) -> bool,
{
    expect_both(&validator, json!("2017-04-01"), true, "full date");
    expect_both(&validator, json!("2017-04"), true, "year and month");
    expect_both(&validator, json!("2017"), true, "year only");
    expect_both(&validator, json!("201"), false, "truncated year");
    expect_both(&validator, json!("2017-04-31"), false, "day past month end");
    expect_both(&validator, json!("2017/04/01"), false, "wrong separator");
    expect_both(&validator, json!("2017-04-01T10:00"), false, "trailing time");
    expect_both(&validator, json!(2017), false, "number");
    expect_both(&validator, json!({}), false, "object");
    expect_both(&validator, json!(null), !required, "null");
    expect_both(&validator, json!(""), !required, "empty string");
}

/// Contract of a positive integer field.
pub(crate) fn check_positive_integer_validator<F>(validator: F, required: bool)
where
    F: Fn(&dyn FormInput) -> bool,
{
    expect_both(&validator, json!(1), true, "one");
    expect_both(&validator, json!(1_000_000), true, "large");
    expect_both(&validator, json!(0), false, "zero");
    expect_both(&validator, json!(-1), false, "negative");
    expect_both(&validator, json!(1.5), false, "fraction");
    expect_both(&validator, json!("1"), false, "numeric string");
    expect_both(&validator, json!({}), false, "object");
    expect_both(&validator, json!(true), false, "boolean");
    expect_both(&validator, json!(null), !required, "null");
}
