//! Variable source port.
//!
//! A source answers "what is the value of `HOST_IP`?" without prompting.
//! The resolver consults sources in order and takes the first non-empty
//! answer.
//!
//! # Implementations
//!
//! - **Process environment**: `ProcessEnvironment` in the infrastructure layer
//! - **Config file `[values]`**: [`StaticValues`] built by the config loader
//! - **Tests**: [`StaticValues`]

use provision_domain::ValueSource;
use std::collections::BTreeMap;

pub trait VariableSource: Send + Sync {
    /// Which source this is, recorded alongside every value it provides.
    fn source(&self) -> ValueSource;

    /// Raw value for an environment-style name, if present.
    ///
    /// May return an empty string; the resolver treats that as unset.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// A fixed name → value table.
#[derive(Debug, Clone)]
pub struct StaticValues {
    source: ValueSource,
    values: BTreeMap<String, String>,
}

impl StaticValues {
    pub fn new(source: ValueSource) -> Self {
        Self {
            source,
            values: BTreeMap::new(),
        }
    }

    pub fn from_map(source: ValueSource, values: BTreeMap<String, String>) -> Self {
        Self { source, values }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariableSource for StaticValues {
    fn source(&self) -> ValueSource {
        self.source
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_values_lookup() {
        let values = StaticValues::new(ValueSource::ConfigFile).with("HOST_IP", "10.0.0.2");
        assert_eq!(values.lookup("HOST_IP"), Some("10.0.0.2".to_string()));
        assert_eq!(values.lookup("ROLE"), None);
        assert_eq!(values.source(), ValueSource::ConfigFile);
        assert_eq!(values.len(), 1);
    }
}
