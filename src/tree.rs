// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Recursive discovery of manifest files below a root path.
//!
//! Symlinks are followed and hidden entries are visited. Entries come back
//! in the order the filesystem lists them; nothing is sorted.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::constants::MANIFEST_SUFFIX;
use crate::error::{ManifestError, Result};
use crate::types::PathContext;

/// A regular, readable `.yaml` file found during the walk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Path as discovered, relative to the root argument as given
    pub path: PathBuf,
    /// Lexically absolute form of `path`
    pub absolute: PathBuf,
}

impl Candidate {
    fn from_path(path: PathBuf) -> Result<Self> {
        let absolute = std::path::absolute(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(Candidate { path, absolute })
    }

    pub fn context(&self) -> PathContext {
        PathContext::from_absolute(&self.absolute)
    }
}

/// Walk `root` and yield every manifest candidate.
///
/// A traversal failure (missing root, unreadable directory, symlink loop)
/// is yielded as an error; callers stop at the first one.
pub fn find_candidates(root: &Path) -> impl Iterator<Item = Result<Candidate>> {
    debug!("Walking manifest tree at {}", root.display());
    let root = root.to_path_buf();

    WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if is_candidate(&entry) => Some(Candidate::from_path(entry.into_path())),
            Ok(_) => None,
            Err(source) if is_dangling_link(&source, &root) => {
                debug!("Skipping dangling symlink {}", source.path().unwrap_or(root.as_path()).display());
                None
            }
            Err(source) => {
                let path = source.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                Some(Err(ManifestError::Traversal { path, source }))
            }
        })
}

/// A symlink below the root whose target is gone is not a regular file, so
/// it is skipped. Errors on the root, directory reads and loops stay fatal.
fn is_dangling_link(error: &walkdir::Error, root: &Path) -> bool {
    if error.loop_ancestor().is_some() || error.depth() == 0 {
        return false;
    }
    let Some(path) = error.path() else {
        return false;
    };
    path != root
        && fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
        && fs::metadata(path).is_err()
}

fn is_candidate(entry: &DirEntry) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }
    let has_suffix = entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.ends_with(MANIFEST_SUFFIX));
    if !has_suffix {
        return false;
    }
    if File::open(entry.path()).is_err() {
        trace!("Skipping unreadable file {}", entry.path().display());
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FixtureTree;

    fn collect(root: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = find_candidates(root)
            .map(|c| c.unwrap().path)
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_finds_yaml_files_recursively() {
        let tree = FixtureTree::new();
        let a = tree.write("a.yaml", "");
        let b = tree.write("x/y/z/b.yaml", "");

        assert_eq!(collect(tree.root()), vec![a, b]);
    }

    #[test]
    fn test_ignores_other_suffixes() {
        let tree = FixtureTree::new();
        tree.write("a.yml", "");
        tree.write("b.YAML", "");
        tree.write("c.yaml.bak", "");
        tree.write("README.md", "");
        let keep = tree.write("d.yaml", "");

        assert_eq!(collect(tree.root()), vec![keep]);
    }

    #[test]
    fn test_ignores_directories_named_like_manifests() {
        let tree = FixtureTree::new();
        tree.mkdir("dir.yaml");

        assert!(collect(tree.root()).is_empty());
    }

    #[test]
    fn test_visits_hidden_directories() {
        let tree = FixtureTree::new();
        let hidden = tree.write(".hidden/ns/m.yaml", "");

        assert_eq!(collect(tree.root()), vec![hidden]);
    }

    #[test]
    fn test_root_file_is_a_candidate() {
        let tree = FixtureTree::new();
        let file = tree.write("only.yaml", "");

        assert_eq!(collect(&file), vec![file]);
    }

    #[test]
    fn test_missing_root_is_a_traversal_error() {
        let tree = FixtureTree::new();
        let missing = tree.root().join("missing");
        let first = find_candidates(&missing).next().unwrap();

        assert!(matches!(first, Err(ManifestError::Traversal { .. })));
    }

    #[test]
    fn test_candidate_absolute_path() {
        let tree = FixtureTree::new();
        tree.write("bf2/DEVEL/foo/foo.yaml", "");
        let candidate = find_candidates(tree.root()).next().unwrap().unwrap();

        assert!(candidate.absolute.is_absolute());
        assert_eq!(
            candidate.context().cluster_key().unwrap().to_string(),
            "bf2-DEVEL"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_symlinked_directories() {
        let tree = FixtureTree::new();
        tree.write("real/ns/m.yaml", "");
        std::os::unix::fs::symlink(tree.root().join("real"), tree.root().join("link")).unwrap();

        let paths = collect(tree.root());
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&tree.root().join("link/ns/m.yaml")));
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_symlinked_files() {
        let tree = FixtureTree::new();
        let target = tree.write("real/m.yaml", "");
        std::os::unix::fs::symlink(&target, tree.root().join("linked.yaml")).unwrap();

        let paths = collect(tree.root());
        assert_eq!(paths, vec![tree.root().join("linked.yaml"), target]);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_dangling_symlinks() {
        let tree = FixtureTree::new();
        let keep = tree.write("bf2/DEVEL/foo/foo.yaml", "");
        std::os::unix::fs::symlink(tree.root().join("gone"), tree.root().join("bf2/README.md"))
            .unwrap();
        std::os::unix::fs::symlink(tree.root().join("gone.yaml"), tree.root().join("bf2/x.yaml"))
            .unwrap();

        assert_eq!(collect(tree.root()), vec![keep]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_root_is_a_traversal_error() {
        let tree = FixtureTree::new();
        let root = tree.root().join("root");
        std::os::unix::fs::symlink(tree.root().join("gone"), &root).unwrap();

        let first = find_candidates(&root).next().unwrap();
        assert!(matches!(first, Err(ManifestError::Traversal { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_unreadable_files() {
        use std::os::unix::fs::PermissionsExt;

        let tree = FixtureTree::new();
        let keep = tree.write("ns/readable.yaml", "");
        let locked = tree.write("ns/locked.yaml", "");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can open the file regardless of its mode
        if File::open(&locked).is_ok() {
            return;
        }
        assert_eq!(collect(tree.root()), vec![keep]);
    }
}
