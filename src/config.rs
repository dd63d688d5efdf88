// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::{ManifestError, Result};

/// Command-line configuration shared by both tools
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Root of the manifest tree
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Config { path: path.into() }
    }

    pub fn root(&self) -> &Path {
        &self.path
    }

    /// Fail unless the root denotes a directory
    pub fn ensure_directory(&self) -> Result<&Path> {
        if self.path.is_dir() {
            Ok(&self.path)
        } else {
            Err(ManifestError::NotADirectory(self.path.clone()))
        }
    }
}
