// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::de;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use crate::constants::MANIFEST_SUFFIX;
use crate::error::{ManifestError, Result};

/// Value of a consulted manifest key
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// A YAML string
    Text(String),
    /// A boolean or number, rendered from its decoded value (`1.10` reads as `1.1`)
    Other(String),
}

impl Field {
    /// The string value, if the YAML value was a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            Field::Other(_) => None,
        }
    }

    /// Textual form of any scalar
    pub fn rendered(&self) -> &str {
        match self {
            Field::Text(s) | Field::Other(s) => s,
        }
    }
}

/// The consulted keys of a manifest's top-level mapping. All other keys,
/// including non-string ones, are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<Field>,
    pub namespace: Option<Field>,
}

impl Manifest {
    /// Read and decode a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a manifest document; the top level must be a mapping
    pub fn parse(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let document: Value = serde_yaml::from_str(contents)?;
        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(de::Error::custom(format!(
                    "expected a top-level mapping, found {}",
                    kind_of(&other)
                )))
            }
        };

        Ok(Manifest {
            name: scalar_field(&mapping, "name")?,
            namespace: scalar_field(&mapping, "namespace")?,
        })
    }

    /// Namespace in its textual form, if present and non-empty
    pub fn namespace(&self) -> Option<&str> {
        self.namespace
            .as_ref()
            .map(Field::rendered)
            .filter(|ns| !ns.is_empty())
    }

    /// Namespace only when written as a YAML string
    pub fn namespace_text(&self) -> Option<&str> {
        self.namespace.as_ref().and_then(Field::as_text)
    }

    /// Namespace as shown in diagnostics, absent reads as empty
    pub fn namespace_rendered(&self) -> &str {
        self.namespace.as_ref().map(Field::rendered).unwrap_or_default()
    }

    /// Name as it takes part in validation, absent reads as empty
    pub fn name_rendered(&self) -> &str {
        self.name.as_ref().map(Field::rendered).unwrap_or_default()
    }

    /// The filename this manifest is expected to live in
    pub fn expected_filename(&self) -> String {
        format!("{}{}", self.name_rendered(), MANIFEST_SUFFIX)
    }
}

/// Look up `key` and keep scalars; `null` or a missing key is absent.
fn scalar_field(
    mapping: &Mapping,
    key: &str,
) -> std::result::Result<Option<Field>, serde_yaml::Error> {
    let Some(value) = mapping.get(key) else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(Field::Text(s.clone()))),
        Value::Bool(b) => Ok(Some(Field::Other(b.to_string()))),
        Value::Number(n) => Ok(Some(Field::Other(n.to_string()))),
        Value::Tagged(tagged) => match &tagged.value {
            Value::String(s) => Ok(Some(Field::Text(s.clone()))),
            other => Err(not_a_scalar(key, other)),
        },
        other => Err(not_a_scalar(key, other)),
    }
}

fn not_a_scalar(key: &str, value: &Value) -> serde_yaml::Error {
    de::Error::custom(format!(
        "expected `{}` to be a scalar, found {}",
        key,
        kind_of(value)
    ))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
