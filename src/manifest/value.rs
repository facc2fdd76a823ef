//! Scalar helpers over YAML values
//!
//! Manifests are loosely typed, so merge decisions are made on two derived
//! properties of a value: whether it counts as set, and the text it sorts by.
//! Strings are also checked against the YAML 1.1 resolvers so the emitter can
//! keep them strings for consumers like electron-updater.

use std::sync::LazyLock;

use regex::RegexSet;
use serde_yaml::Value;

/// Implicit scalar resolvers of a YAML 1.1 loader (bool, float, int, merge,
/// null, timestamp, value). A plain scalar matching any of these is not read
/// back as a string by PyYAML or js-yaml.
#[allow(clippy::expect_used)]
static YAML11_IMPLICIT: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"^(?:yes|Yes|YES|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF)$",
        r"^(?:[-+]?(?:[0-9][0-9_]*)\.[0-9_]*(?:[eE][-+][0-9]+)?|\.[0-9_]+(?:[eE][-+][0-9]+)?|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$",
        r"^(?:[-+]?0b[0-1_]+|[-+]?0[0-7_]+|[-+]?(?:0|[1-9][0-9_]*)|[-+]?0x[0-9a-fA-F_]+|[-+]?[1-9][0-9_]*(?::[0-5]?[0-9])+)$",
        r"^(?:<<)$",
        r"^(?:~|null|Null|NULL|)$",
        r"^(?:[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]|[0-9][0-9][0-9][0-9]-[0-9][0-9]?-[0-9][0-9]?(?:[Tt]|[ \t]+)[0-9][0-9]?:[0-9][0-9]:[0-9][0-9](?:\.[0-9]*)?(?:[ \t]*(?:Z|[-+][0-9][0-9]?(?::[0-9][0-9])?))?)$",
        r"^(?:=)$",
    ])
    .expect("invalid YAML 1.1 resolver regex")
});

/// Returns `true` when `s` written as a plain scalar would not read back as a string
pub fn needs_quotes(s: &str) -> bool {
    YAML11_IMPLICIT.is_match(s)
}

/// Single-quoted YAML scalar for `s`
pub fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Returns `true` when a value counts as set.
///
/// Null, `false`, numeric zero, the empty string and empty collections are unset.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Text form of a value used for identity and ordering.
///
/// Strings are taken verbatim, numbers and booleans use their YAML spelling,
/// anything else falls back to its compact YAML rendering.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Human-readable name of a value's YAML kind, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
