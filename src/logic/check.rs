// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Check form documents stored on disk.
//!
//! Responsibilities:
//! - Load identifier type definitions and form documents from JSON files.
//! - Run the whole-form validator and turn its result into a printable report.
//! - Check a batch of files and summarize the batch as an exit status.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::identifier_type::IdentifierType;
use crate::models::record::FormInput;
use crate::validators::publisher::{FormSection, invalid_sections};

/// Outcome of checking one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormReport {
    Valid,
    /// Sections that failed, in form order.
    Invalid(Vec<FormSection>),
    /// The document is not a record at all.
    NotARecord,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        matches!(self, FormReport::Valid)
    }
}

impl fmt::Display for FormReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormReport::Valid => f.write_str("valid"),
            FormReport::NotARecord => f.write_str("invalid: form is not a record"),
            FormReport::Invalid(sections) => {
                let keys: Vec<_> = sections.iter().map(FormSection::key).collect();
                write!(f, "invalid: {}", keys.join(", "))
            }
        }
    }
}

/// Read a JSON array of identifier type definitions.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not a JSON array of
/// definitions, or contains a validation pattern that does not compile.
pub fn load_identifier_types(path: &Path) -> Result<Vec<IdentifierType>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read identifier types {:?}", path))?;
    let types: Vec<IdentifierType> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse identifier types {:?}", path))?;
    debug!(count = types.len(), path = %path.display(), "loaded identifier types");
    Ok(types)
}

/// Read a form document as a plain JSON record.
pub fn load_form(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read form {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse form JSON {:?}", path))
}

/// Validate a form already in memory.
pub fn check_form<V: FormInput + ?Sized>(form: &V, types: &[IdentifierType]) -> FormReport {
    match invalid_sections(form, types) {
        None => FormReport::NotARecord,
        Some(failed) if failed.is_empty() => FormReport::Valid,
        Some(failed) => FormReport::Invalid(failed),
    }
}

/// Load and validate the form stored at `path`.
pub fn check_form_file(path: &Path, types: &[IdentifierType]) -> Result<FormReport> {
    let form = load_form(path)?;
    let report = check_form(&form, types);
    info!(path = %path.display(), valid = report.is_valid(), "checked form");
    Ok(report)
}

/// Summary of a batch of form files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    AllValid,
    SomeInvalid,
    /// At least one file could not be read or parsed.
    Failed,
}

impl RunStatus {
    /// Process exit code: 0 when every form is valid, 1 when some form is
    /// invalid, 2 when a file could not be checked at all.
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::AllValid => 0,
            RunStatus::SomeInvalid => 1,
            RunStatus::Failed => 2,
        }
    }

    fn merge(self, other: RunStatus) -> RunStatus {
        if self.exit_code() >= other.exit_code() {
            self
        } else {
            other
        }
    }
}

/// Check every file in `paths`, writing one line per file.
///
/// Reports go to `out`; files that cannot be read or parsed are reported on
/// `errors` and do not stop the remaining files from being checked.
///
/// # Errors
///
/// Only fails when writing to `out` or `errors` fails.
pub fn check_files<O: Write, E: Write>(
    paths: &[PathBuf],
    types: &[IdentifierType],
    out: &mut O,
    errors: &mut E,
) -> Result<RunStatus> {
    let mut status = RunStatus::AllValid;
    for path in paths {
        match check_form_file(path, types) {
            Ok(report) => {
                writeln!(out, "{}: {report}", path.display())
                    .context("Failed to write report")?;
                if !report.is_valid() {
                    status = status.merge(RunStatus::SomeInvalid);
                }
            }
            Err(err) => {
                warn!(path = %path.display(), "form could not be checked");
                writeln!(errors, "{}: error: {err:#}", path.display())
                    .context("Failed to write error")?;
                status = status.merge(RunStatus::Failed);
            }
        }
    }
    Ok(status)
}
