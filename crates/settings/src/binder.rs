//! Applying key file entries to typed properties.
//!
//! Every step can fail and none of them aborts the pass: a failure is logged,
//! returned as a [`ConfigIssue`], and the property keeps its previous value.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{CoercionError, ConfigIssue};
use crate::keyfile::ConfigDocument;
use crate::registry::{Configurable, EnumNicks, PropertyDescriptor, PropertyRegistry, Setter};

/// Maps `section.key` in the key file to a property on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub section: &'static str,
    pub key: &'static str,
    pub property: &'static str,
}

impl Binding {
    pub const fn new(section: &'static str, key: &'static str, property: &'static str) -> Self {
        Self {
            section,
            key,
            property,
        }
    }
}

/// Outcome of running a list of bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Number of properties that were set.
    pub applied: usize,
    /// Everything that was skipped, in binding order.
    pub issues: Vec<ConfigIssue>,
}

impl BindReport {
    pub fn missing_keys(&self) -> usize {
        self.issues.iter().filter(|i| i.is_missing_key()).count()
    }
}

/// Set `property` on `target` from `section.key` of `document`.
pub fn apply<T: Configurable>(
    target: &mut T,
    registry: &PropertyRegistry<T>,
    document: &ConfigDocument,
    section: &str,
    key: &str,
    property: &str,
) -> Result<(), ConfigIssue> {
    let Some(raw) = document.get(section, key) else {
        tracing::debug!("No {}.{} in config, keeping {}", section, key, property);
        return Err(ConfigIssue::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        });
    };

    let Some(descriptor) = registry.find(property) else {
        tracing::warn!(
            "Unknown property '{}' on {} (from {}.{})",
            property,
            std::any::type_name::<T>(),
            section,
            key
        );
        return Err(ConfigIssue::UnknownProperty {
            name: property.to_string(),
        });
    };

    let value = match descriptor.setter {
        // String values get key-file escapes decoded; everything else parses the raw text.
        Setter::String(_) => document.get_string(section, key).unwrap_or_default(),
        _ => raw.to_string(),
    };

    match set(target, descriptor, &value) {
        Ok(()) => {
            tracing::debug!("Set {} = {} (from {}.{})", property, raw, section, key);
            Ok(())
        }
        Err(reason) => {
            tracing::warn!(
                "Ignoring {}.{} = '{}': {} expects {}: {}",
                section,
                key,
                raw,
                property,
                descriptor.kind(),
                reason
            );
            Err(ConfigIssue::Coercion {
                property: property.to_string(),
                value: raw.to_string(),
                reason,
            })
        }
    }
}

/// Run every binding in order. Never stops early.
pub fn apply_all<T: Configurable>(
    target: &mut T,
    registry: &PropertyRegistry<T>,
    document: &ConfigDocument,
    bindings: &[Binding],
) -> BindReport {
    let mut report = BindReport::default();
    for binding in bindings {
        match apply(
            target,
            registry,
            document,
            binding.section,
            binding.key,
            binding.property,
        ) {
            Ok(()) => report.applied += 1,
            Err(issue) => report.issues.push(issue),
        }
    }
    report
}

/// Coerce `raw` per the descriptor's kind, then call its setter.
/// The setter only runs once the value converted cleanly.
fn set<T>(target: &mut T, descriptor: &PropertyDescriptor<T>, raw: &str) -> Result<(), CoercionError> {
    match descriptor.setter {
        Setter::String(set) => set(target, raw.to_string()),
        Setter::Bool(set) => set(target, parse_bool(raw)?),
        Setter::Int32(set) => set(target, parse_int::<i32>(raw)?),
        Setter::UInt32(set) => set(target, parse_int::<u32>(raw)?),
        Setter::Int64(set) => set(target, parse_int::<i64>(raw)?),
        Setter::Float64(set) => set(target, parse_float(raw)?),
        Setter::Enum { nicks, set } => set(target, parse_nick(nicks, raw)?),
    }
    Ok(())
}

pub(crate) fn parse_bool(raw: &str) -> Result<bool, CoercionError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Ok(false)
    } else {
        Err(CoercionError::NotABool)
    }
}

pub(crate) fn parse_int<N>(raw: &str) -> Result<N, CoercionError>
where
    N: FromStr<Err = ParseIntError>,
{
    raw.trim()
        .parse::<N>()
        .map_err(|e| CoercionError::NotAnInteger(e.to_string()))
}

pub(crate) fn parse_float(raw: &str) -> Result<f64, CoercionError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CoercionError::NotANumber),
    }
}

/// Nicks are matched exactly; an unmapped nick is an error, never a default.
pub(crate) fn parse_nick(nicks: EnumNicks, raw: &str) -> Result<i32, CoercionError> {
    let raw = raw.trim();
    nicks
        .iter()
        .find(|(nick, _)| *nick == raw)
        .map(|(_, value)| *value)
        .ok_or_else(|| CoercionError::UnknownNick {
            allowed: nicks.iter().map(|(nick, _)| *nick).collect(),
        })
}
