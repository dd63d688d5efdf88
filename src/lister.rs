// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespaces declared across a manifest tree, keyed by cluster.

use std::fmt;
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::tree::{find_candidates, Candidate};
use crate::types::{ClusterKey, Manifest};

/// A namespace that must exist on a given cluster
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceRecord {
    pub cluster: ClusterKey,
    pub namespace: String,
}

impl fmt::Display for NamespaceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cluster, self.namespace)
    }
}

/// Collect one record per manifest whose location names an availability
/// zone and cluster and whose contents name a namespace. Records follow
/// traversal order. A manifest that fails to parse aborts the listing.
#[instrument]
pub fn list_namespaces(root: &Path) -> Result<Vec<NamespaceRecord>> {
    let mut records = Vec::new();
    for candidate in find_candidates(root) {
        if let Some(record) = record_for(&candidate?)? {
            records.push(record);
        }
    }
    debug!("Found {} namespace records", records.len());
    Ok(records)
}

fn record_for(candidate: &Candidate) -> Result<Option<NamespaceRecord>> {
    let cluster = candidate.context().cluster_key();
    let manifest = Manifest::load(&candidate.path)?;

    match (cluster, manifest.namespace()) {
        (Some(cluster), Some(namespace)) => Ok(Some(NamespaceRecord {
            cluster,
            namespace: namespace.to_string(),
        })),
        _ => {
            debug!(
                "Skipping {}: no cluster or namespace",
                candidate.path.display()
            );
            Ok(None)
        }
    }
}
