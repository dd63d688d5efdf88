// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Check that every manifest in a tree is placed and named correctly.
//! Exits non-zero on the first offending file.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use manifest_tools::config::Config;
use manifest_tools::error::ManifestError;
use manifest_tools::validator::validate_tree;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Manifest errors already carry their cause in the message
            match e.downcast_ref::<ManifestError>() {
                Some(err) => eprintln!("{}", err),
                None => eprintln!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    let checked = validate_tree(config.root(), |path| {
        writeln!(stdout, "Validating {}...", path.display())?;
        stdout.flush()
    })?;

    info!("All {} manifests are valid", checked);
    Ok(())
}
