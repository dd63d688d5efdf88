// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use std::path::{Component, Path};

use crate::constants::offsets;

/// Positional information carried by a manifest's location in the tree.
///
/// Components are counted from the end of the absolute path, so a file at
/// `/srv/bf2/DEVEL/foo/foo.yaml` has filename `foo.yaml`, parent directory
/// `foo`, cluster `DEVEL` and availability zone `bf2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathContext {
    components: Vec<String>,
}

impl PathContext {
    /// Build from an absolute path. The root directory and prefix components
    /// are not counted, so `/a/b` has two components. `..` is resolved
    /// lexically without touching the filesystem.
    pub fn from_absolute(path: &Path) -> Self {
        let mut components = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => components.push(part.to_string_lossy().into_owned()),
                Component::ParentDir => {
                    components.pop();
                }
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            }
        }
        PathContext { components }
    }

    /// Component at `offset` from the end, 1 being the last one
    fn from_end(&self, offset: usize) -> Option<&str> {
        self.components
            .len()
            .checked_sub(offset)
            .and_then(|i| self.components.get(i))
            .map(String::as_str)
    }

    pub fn filename(&self) -> Option<&str> {
        self.from_end(offsets::FILENAME)
    }

    pub fn parent_dir_name(&self) -> Option<&str> {
        self.from_end(offsets::PARENT_DIR)
    }

    pub fn cluster(&self) -> Option<&str> {
        self.from_end(offsets::CLUSTER)
    }

    pub fn availability_zone(&self) -> Option<&str> {
        self.from_end(offsets::AVAILABILITY_ZONE)
    }

    /// Cluster key for this location, if both parts are present and non-empty
    pub fn cluster_key(&self) -> Option<ClusterKey> {
        let az = self.availability_zone().filter(|s| !s.is_empty())?;
        let cluster = self.cluster().filter(|s| !s.is_empty())?;
        Some(ClusterKey::new(az, cluster))
    }
}

/// Identifies a deployment target as `{availability-zone}-{cluster}`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterKey(String);

impl ClusterKey {
    pub fn new(availability_zone: &str, cluster: &str) -> Self {
        ClusterKey(format!("{}-{}", availability_zone, cluster))
    }
}

impl fmt::Display for ClusterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
