// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application logic on top of the validators: loading documents and reporting.

pub mod check;
