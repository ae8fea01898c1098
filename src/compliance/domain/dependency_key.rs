use crate::shared::error::LicenseError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// DependencyKey value object identifying one resolved dependency
///
/// Rendered and serialized as `name@version`. Ordering is by name, then
/// version, so sets of keys serialize in a stable order.
///
/// A name is non-empty and may contain `@` only as a leading scope marker
/// (`@types/node`); the version is free-form (`npm:string-width@4.2.3`).
/// Keys built with `try_new` always parse back from their rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DependencyKey {
    name: String,
    version: String,
}

impl DependencyKey {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Builds a key whose rendering is guaranteed to parse back
    ///
    /// # Errors
    /// Returns `LicenseError::Validation` if the name is empty or carries an
    /// `@` anywhere but as the scope prefix
    pub fn try_new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(LicenseError::Validation {
                message: format!("'{}' is not a valid dependency name", name),
            }
            .into());
        }
        Ok(Self::new(name, version))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

impl FromStr for DependencyKey {
    type Err = anyhow::Error;

    /// Splits on the first `@` after an optional scope marker, so both
    /// `@types/node@1.0.0` and `alias@npm:real@2.0.0` survive.
    fn from_str(s: &str) -> Result<Self> {
        let scope_len = usize::from(s.starts_with('@'));
        match s[scope_len..].split_once('@') {
            Some((rest, version)) if !rest.is_empty() => {
                Ok(Self::new(&s[..scope_len + rest.len()], version))
            }
            _ => Err(LicenseError::Validation {
                message: format!("'{}' is not a name@version dependency key", s),
            }
            .into()),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    let unscoped = name.strip_prefix('@').unwrap_or(name);
    !unscoped.is_empty() && !unscoped.contains('@')
}

impl Serialize for DependencyKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DependencyKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
