// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Boolean validators for every field and section of the entity editor form.
//!
//! Field validators live in [`base`], the sections shared by all entity forms in
//! [`common`], and the publisher-specific section plus the whole-form check in
//! [`publisher`]. None of them panic or return errors: malformed input is `false`.

pub mod base;
pub mod common;
pub mod publisher;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
pub(crate) mod test_helpers;

use tracing::debug;

/// Combine named field results, logging every field that failed.
pub(crate) fn all_pass(section: &str, checks: &[(&str, bool)]) -> bool {
    let mut passed = true;
    for (field, ok) in checks {
        if !ok {
            debug!(section, field, "field rejected");
            passed = false;
        }
    }
    passed
}
