// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Print the `<cluster-key>/<namespace>` pairs declared by a manifest tree.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use manifest_tools::config::Config;
use manifest_tools::error::ManifestError;
use manifest_tools::lister::list_namespaces;

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
    let root = config.ensure_directory()?;
    let records = list_namespaces(root)?;

    let mut stdout = io::stdout().lock();
    for record in &records {
        writeln!(stdout, "{}", record).context("Failed to write to stdout")?;
    }
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
