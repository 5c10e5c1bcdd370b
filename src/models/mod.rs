// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: input encodings, normalization and identifier type definitions.

pub mod identifier_type;
pub mod record;
pub mod shared;
