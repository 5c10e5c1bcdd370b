// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use publisher_form::logic::check::{RunStatus, check_files, load_identifier_types};
use tracing_subscriber::EnvFilter;

/// Check publisher form documents before submission.
#[derive(Parser, Debug)]
#[command(name = "publisher-form")]
#[command(version)]
struct Args {
    /// JSON array of recognized identifier types (`id`, `label`, `validationRegex`)
    #[arg(short, long, value_name = "PATH")]
    identifier_types: Option<PathBuf>,

    /// Log every rejected field (overridden by `RUST_LOG`)
    #[arg(short, long)]
    verbose: bool,

    /// Form documents to check
    #[arg(required = true, value_name = "FORM")]
    forms: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(args.verbose);

    match run(&args) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(RunStatus::Failed.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<RunStatus> {
    let types = match &args.identifier_types {
        Some(path) => load_identifier_types(path)?,
        None => Vec::new(),
    };
    check_files(
        &args.forms,
        &types,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
