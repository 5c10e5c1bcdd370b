// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validators for the publisher entity editor form.
//!
//! Every validator takes any [`FormInput`] (a plain [`serde_json::Value`] record or a
//! persistent [`SharedValue`] map) and returns a plain `bool`.

pub mod logic;
pub mod models;
pub mod validators;

pub use models::identifier_type::IdentifierType;
pub use models::record::FormInput;
pub use models::shared::SharedValue;
pub use validators::publisher::{FormSection, invalid_sections, validate_form};
