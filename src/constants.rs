// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Only files ending in this suffix (case-sensitive) are manifests
pub const MANIFEST_SUFFIX: &str = ".yaml";

/// Character class a manifest name may be built from
pub const NAME_CHARSET: &str = "[a-zA-Z0-9-]";

/// Offsets counted from the end of an absolute path, the filename being 1.
///
/// Layout: `.../{availability-zone}/{cluster}/{namespace}/{name}.yaml`
pub mod offsets {
    pub const FILENAME: usize = 1;
    pub const PARENT_DIR: usize = 2;
    pub const CLUSTER: usize = 3;
    pub const AVAILABILITY_ZONE: usize = 4;
}
