// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Placement and naming rules for manifests.
//!
//! Rules are checked in a fixed order and the first failure wins:
//! the file must parse, live in a directory named after its namespace,
//! carry a name built from `[a-zA-Z0-9-]`, and be called `{name}.yaml`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::{ManifestError, Result};
use crate::tree::{find_candidates, Candidate};
use crate::types::manifest::Field;
use crate::types::Manifest;

/// Matches any character a manifest name may not contain.
static FORBIDDEN_NAME_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-]").unwrap_or_else(|_| unreachable!()));

/// True if `name` has no character outside `[a-zA-Z0-9-]`. The empty name
/// passes; it is caught by the filename rule instead.
pub fn is_valid_name(name: &str) -> bool {
    !FORBIDDEN_NAME_CHAR.is_match(name)
}

/// Check a single manifest file against every rule.
///
/// A `name` or `namespace` written as a number or boolean never matches a
/// directory name and is never a valid name.
pub fn validate_manifest(candidate: &Candidate) -> Result<Manifest> {
    let manifest = Manifest::load(&candidate.path)?;
    let context = candidate.context();

    let directory = context.parent_dir_name().unwrap_or_default();
    if manifest.namespace_text() != Some(directory) {
        return Err(ManifestError::Placement {
            path: candidate.path.clone(),
            directory: directory.to_string(),
            namespace: manifest.namespace_rendered().to_string(),
        });
    }

    let name_ok = match &manifest.name {
        None => true,
        Some(Field::Text(name)) => is_valid_name(name),
        Some(Field::Other(_)) => false,
    };
    if !name_ok {
        return Err(ManifestError::InvalidName {
            path: candidate.path.clone(),
            name: manifest.name_rendered().to_string(),
        });
    }

    let filename = context.filename().unwrap_or_default();
    let expected = manifest.expected_filename();
    if filename != expected {
        return Err(ManifestError::FilenameMismatch {
            path: candidate.path.clone(),
            filename: filename.to_string(),
            expected,
        });
    }

    debug!("Manifest {} is valid", candidate.path.display());
    Ok(manifest)
}

/// Validate every manifest under `root`, calling `announce` before each one.
/// Stops at the first failure, including a failed announcement; returns the
/// number of manifests checked.
#[instrument(skip(announce))]
pub fn validate_tree<F>(root: &Path, mut announce: F) -> Result<usize>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut checked = 0;
    for candidate in find_candidates(root) {
        let candidate = candidate?;
        announce(&candidate.path).map_err(ManifestError::Progress)?;
        validate_manifest(&candidate)?;
        checked += 1;
    }
    debug!("Validated {} manifests", checked);
    Ok(checked)
}
