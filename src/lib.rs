// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod lister;
pub mod tree;
pub mod types;
pub mod validator;

#[cfg(test)]
mod test_utils;
