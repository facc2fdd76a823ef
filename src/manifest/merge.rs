//! Merge rules for combining the Intel and ARM manifests
//!
//! The destination starts as a copy of the Intel manifest. List fields are
//! unioned and deduplicated by identifier, with the ARM entry winning on
//! conflict. `releaseDate` takes the latest value and `version` must agree.
//!
//! Keys that exist only in the ARM manifest (other than the fields merged
//! here) are not carried into the result.

use std::collections::BTreeMap;

use serde_yaml::Value;

use super::Manifest;
use super::value::{is_truthy, text_of};
use crate::error::{Result, manifest as manifest_error};

pub const RELEASE_DATE: &str = "releaseDate";
pub const VERSION: &str = "version";

/// A list-valued manifest field and the entry key that identifies its items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListField {
    pub name: &'static str,
    pub identifier: &'static str,
}

/// Update artifacts, one per `url`
pub const FILES: ListField = ListField {
    name: "files",
    identifier: "url",
};

/// Differential update packages, one per `path`
pub const PACKAGES: ListField = ListField {
    name: "packages",
    identifier: "path",
};

/// List fields merged, in application order
pub const MERGED_LIST_FIELDS: [ListField; 2] = [FILES, PACKAGES];

/// Merge one list field from both sources into `dest`
///
/// A source whose value is not a sequence is skipped. Entries that are not
/// mappings, or whose identifier is unset, are dropped. When both sources
/// carry the same identifier the ARM entry replaces the Intel one. The result
/// is sorted by identifier text; if nothing survives the field is removed
/// from `dest` altogether.
///
/// Returns the number of entries written.
pub fn merge_list_field(
    dest: &mut Manifest,
    intel: &Manifest,
    arm: &Manifest,
    field: ListField,
) -> usize {
    let mut entries: BTreeMap<String, Value> = BTreeMap::new();

    for source in [intel, arm] {
        let Some(Value::Sequence(items)) = source.get(field.name) else {
            continue;
        };

        for entry in items {
            let Value::Mapping(map) = entry else {
                continue;
            };
            let Some(ident) = map.get(field.identifier).filter(|v| is_truthy(v)) else {
                continue;
            };

            if entries.insert(text_of(ident), entry.clone()).is_some() {
                tracing::trace!(
                    field = field.name,
                    identifier = %text_of(ident),
                    "later entry replaces earlier one"
                );
            }
        }
    }

    let count = entries.len();
    if entries.is_empty() {
        dest.remove(field.name);
    } else {
        dest.set(field.name, Value::Sequence(entries.into_values().collect()));
    }

    tracing::debug!(field = field.name, entries = count, "merged list field");
    count
}

/// Set `releaseDate` to the latest value found in either source
///
/// Unset values are ignored. When neither source has one, `dest` keeps
/// whatever it inherited.
pub fn reconcile_release_date(dest: &mut Manifest, intel: &Manifest, arm: &Manifest) {
    let latest = [intel, arm]
        .into_iter()
        .filter_map(|source| source.get(RELEASE_DATE))
        .filter(|value| is_truthy(value))
        .fold(None::<&Value>, |best, candidate| match best {
            Some(current) if text_of(current) >= text_of(candidate) => Some(current),
            _ => Some(candidate),
        });

    if let Some(value) = latest {
        tracing::debug!(release_date = %text_of(value), "reconciled releaseDate");
        dest.set(RELEASE_DATE, value.clone());
    }
}

/// Require both sources to agree on `version` and copy it to `dest`
///
/// Null or missing values do not take part. Two distinct values are an error.
pub fn reconcile_version(dest: &mut Manifest, intel: &Manifest, arm: &Manifest) -> Result<()> {
    let mut versions: Vec<&Value> = Vec::new();
    for value in [intel, arm]
        .into_iter()
        .filter_map(|source| source.get(VERSION))
        .filter(|value| !value.is_null())
    {
        if !versions.contains(&value) {
            versions.push(value);
        }
    }

    match versions.as_slice() {
        [] => {}
        [version] => {
            tracing::debug!(version = %text_of(version), "reconciled version");
            dest.set(VERSION, (*version).clone());
        }
        [intel_version, arm_version, ..] => {
            return Err(manifest_error::version_mismatch(
                text_of(intel_version),
                text_of(arm_version),
            ));
        }
    }

    Ok(())
}

/// Merge the Intel and ARM manifests into one
pub fn merge_manifests(intel: &Manifest, arm: &Manifest) -> Result<Manifest> {
    let mut merged = intel.clone();

    for field in MERGED_LIST_FIELDS {
        merge_list_field(&mut merged, intel, arm, field);
    }

    reconcile_release_date(&mut merged, intel, arm);
    reconcile_version(&mut merged, intel, arm)?;

    Ok(merged)
}
