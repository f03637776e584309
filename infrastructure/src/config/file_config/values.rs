//! Pre-seeded input values from TOML (`[values]` section)

use super::ConfigValidationError;
use provision_application::StaticValues;
use provision_domain::{ValueSource, lookup_key};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw `[values]` table. Keys are environment variable names; lower-case
/// spellings (`host_ip`) are accepted and normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileValuesConfig(BTreeMap<String, String>);

impl FileValuesConfig {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match self
            .0
            .keys()
            .find(|name| lookup_key(&name.to_ascii_uppercase()).is_none())
        {
            Some(unknown) => Err(ConfigValidationError::UnknownValueKey(unknown.clone())),
            None => Ok(()),
        }
    }

    /// Variable source for the resolver.
    pub fn to_source(&self) -> StaticValues {
        let values = self
            .0
            .iter()
            .map(|(name, value)| (name.to_ascii_uppercase(), value.clone()))
            .collect();
        StaticValues::from_map(ValueSource::ConfigFile, values)
    }

    /// Copy with secret values masked, for `--show-config`.
    pub fn redacted(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(name, value)| {
                    let secret = lookup_key(&name.to_ascii_uppercase()).is_some_and(|k| k.secret);
                    let shown = if secret { "********".to_string() } else { value.clone() };
                    (name.clone(), shown)
                })
                .collect(),
        )
    }
}
