//! latest-mac.yml manifests
//!
//! A manifest is the auto-update metadata electron-builder publishes next to a
//! macOS release: a top-level mapping with `version`, `releaseDate`, a `files`
//! list keyed by `url` and an optional `packages` list keyed by `path`. Any
//! other keys are carried along untouched.
//!
//! Merging two manifests is split into:
//! - [`merge::merge_list_field`]: union of one list field, deduplicated by identifier
//! - [`merge::reconcile_release_date`] / [`merge::reconcile_version`]: scalar rules
//! - [`merge::merge_manifests`]: the fixed sequence applied to Intel + ARM inputs

pub mod merge;
pub mod value;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Result, manifest as manifest_error};

pub use merge::{FILES, PACKAGES, merge_manifests};

/// A parsed auto-update manifest
///
/// Wraps the top-level mapping so key order survives a load/merge/save cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Mapping,
}

impl Manifest {
    /// Load a manifest from disk
    ///
    /// Fails if the file does not exist, is not valid YAML, or does not
    /// contain a mapping at the top level.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(manifest_error::not_found(path));
        }

        let content =
            fs::read_to_string(path).map_err(|e| manifest_error::read_failed(path, e.to_string()))?;

        let manifest = Self::parse(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            keys = manifest.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest content; `origin` is only used for error messages
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Err(manifest_error::invalid(origin, value::kind_of(&Value::Null)));
        }

        let document: Value = serde_yaml::from_str(content)
            .map_err(|e| manifest_error::parse_failed(origin, e.to_string()))?;

        match document {
            Value::Mapping(entries) => Ok(Self { entries }),
            other => Err(manifest_error::invalid(origin, value::kind_of(&other))),
        }
    }

    /// Serialize to YAML, keys in insertion order
    ///
    /// `serde_yaml` only quotes strings that YAML 1.2 would misread, so values
    /// like `2024-01-01` or `yes` come out plain and a YAML 1.1 reader turns
    /// them into dates and booleans. Such strings are swapped for unique plain
    /// tokens before emitting and replaced by single-quoted scalars afterwards.
    pub fn to_yaml(&self) -> Result<String> {
        let plain = serde_yaml::to_string(self)?;

        let mut token_prefix = String::from("mlmq");
        while plain.contains(&token_prefix) {
            token_prefix.push('q');
        }

        let mut quoted = Vec::new();
        let masked = mask_ambiguous(
            Value::Mapping(self.entries.clone()),
            &token_prefix,
            &mut quoted,
        );
        if quoted.is_empty() {
            return Ok(plain);
        }

        let mut yaml = serde_yaml::to_string(&masked)?;
        for (index, original) in quoted.iter().enumerate() {
            let token = format!("{token_prefix}{index}x");
            yaml = yaml.replace(&token, &value::single_quoted(original));
        }
        Ok(yaml)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert or replace a key, keeping its position if it already exists
    pub fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(Value::String(key.to_string()), value);
    }

    /// Remove a key, preserving the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.entries.get(key).cloned()?;
        let entries = std::mem::take(&mut self.entries);
        self.entries = entries
            .into_iter()
            .filter(|(k, _)| k.as_str() != Some(key))
            .collect();
        Some(removed)
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Top-level keys in document order
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }
}

/// Replace every string that needs quoting with `{prefix}{n}x`, recording it in `quoted`
fn mask_ambiguous(node: Value, prefix: &str, quoted: &mut Vec<String>) -> Value {
    match node {
        Value::String(s) if value::needs_quotes(&s) => {
            let token = format!("{prefix}{}x", quoted.len());
            quoted.push(s);
            Value::String(token)
        }
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| mask_ambiguous(item, prefix, quoted))
                .collect(),
        ),
        Value::Mapping(entries) => {
            let mut masked = Mapping::with_capacity(entries.len());
            for (key, val) in entries {
                let key = mask_ambiguous(key, prefix, quoted);
                let val = mask_ambiguous(val, prefix, quoted);
                masked.insert(key, val);
            }
            Value::Mapping(masked)
        }
        Value::Tagged(mut tagged) => {
            tagged.value = mask_ambiguous(tagged.value, prefix, quoted);
            Value::Tagged(tagged)
        }
        other => other,
    }
}
