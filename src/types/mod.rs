// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest contents and the information carried by their location.

pub mod manifest;
pub mod path_context;

pub use manifest::Manifest;
pub use path_context::{ClusterKey, PathContext};
