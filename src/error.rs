// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::NAME_CHARSET;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to traverse {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} failed to parse as valid YAML! {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Manifest {} is in a directory called '{directory}', but should be in '{namespace}'!", path.display())]
    Placement {
        path: PathBuf,
        directory: String,
        namespace: String,
    },

    #[error("ERROR: Manifest {} is named '{name}'. Please check your characters and make sure they are valid for K8s (/{}+/).", path.display(), NAME_CHARSET)]
    InvalidName { path: PathBuf, name: String },

    #[error("ERROR: Manifest {} is named '{filename}', but should be in '{expected}' (filename and name field should align)!", path.display())]
    FilenameMismatch {
        path: PathBuf,
        filename: String,
        expected: String,
    },

    #[error("Failed to report progress: {0}")]
    Progress(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
