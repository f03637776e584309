//! Resolved configuration values

use super::config_key::ConfigKey;
use serde::{Serialize, Serializer};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Environment,
    ConfigFile,
    Default,
    Prompt,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Environment => "env",
            ValueSource::ConfigFile => "config",
            ValueSource::Default => "default",
            ValueSource::Prompt => "prompt",
        }
    }
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resolved key.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub key: ConfigKey,
    pub value: String,
    pub source: ValueSource,
}

impl ResolvedValue {
    /// Value safe for display: secrets are masked.
    pub fn display_value(&self) -> &str {
        if self.key.is_secret() {
            "********"
        } else {
            &self.value
        }
    }
}

impl std::fmt::Debug for ResolvedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedValue")
            .field("key", &self.key)
            .field("value", &self.display_value())
            .field("source", &self.source)
            .finish()
    }
}

impl Serialize for ResolvedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ResolvedValue", 3)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("value", self.display_value())?;
        state.serialize_field("source", &self.source)?;
        state.end()
    }
}

/// Ordered mapping of resolved keys, built once by the resolver.
///
/// Insertion order is preserved; inserting a key twice replaces the
/// earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedValues {
    entries: Vec<ResolvedValue>,
}

impl ResolvedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ConfigKey, value: impl Into<String>, source: ValueSource) {
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => {
                existing.value = value;
                existing.source = source;
            }
            None => self.entries.push(ResolvedValue { key, value, source }),
        }
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.insert(key, value, ValueSource::Environment);
        self
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.entry(key).map(|e| e.value.as_str())
    }

    pub fn entry(&self, key: ConfigKey) -> Option<&ResolvedValue> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values that came from the given source.
    pub fn count_from(&self, source: ValueSource) -> usize {
        self.entries.iter().filter(|e| e.source == source).count()
    }
}
