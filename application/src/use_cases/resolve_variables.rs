//! Resolve variables use case
//!
//! Walks the key registry in order and resolves each key exactly once:
//!
//! 1. **Sources** - first non-empty value from the configured sources
//!    (process environment, then config file `[values]`)
//! 2. **Default** - the registry default, for keys that have one
//! 3. **Prompt** - one question to the operator; the answer is taken as-is,
//!    including an empty line
//! 4. **Missing** - no terminal: collected and reported together
//!
//! The result is an immutable [`ResolvedValues`]; nothing is exported into
//! the process environment.

use crate::ports::prompt::{PromptError, PromptPort};
use crate::ports::variable_source::VariableSource;
use provision_domain::{ConfigKeyInfo, ResolvedValues, ValueSource, known_keys};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Required keys had no value and no terminal was available.
    #[error("Missing required values and no interactive terminal: {}", .0.join(", "))]
    MissingValues(Vec<&'static str>),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

pub struct ResolveVariablesUseCase {
    sources: Vec<Arc<dyn VariableSource>>,
    prompt: Arc<dyn PromptPort>,
}

impl ResolveVariablesUseCase {
    pub fn new(prompt: Arc<dyn PromptPort>) -> Self {
        Self {
            sources: Vec::new(),
            prompt,
        }
    }

    /// Add a source; sources added first win.
    pub fn with_source(mut self, source: Arc<dyn VariableSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn execute(&self) -> Result<ResolvedValues, ResolveError> {
        self.resolve_keys(known_keys())
    }

    fn resolve_keys(&self, keys: &[ConfigKeyInfo]) -> Result<ResolvedValues, ResolveError> {
        let mut values = ResolvedValues::new();
        let mut missing = Vec::new();
        let interactive = self.prompt.is_interactive();

        for info in keys {
            if let Some((value, source)) = self.lookup(info) {
                debug!(key = info.env, %source, "Resolved from source");
                values.insert(info.key, value, source);
            } else if let Some(default) = info.default {
                debug!(key = info.env, "Using default");
                values.insert(info.key, default, ValueSource::Default);
            } else if interactive {
                let answer = self.prompt.prompt(info)?;
                debug!(key = info.env, empty = answer.is_empty(), "Resolved from prompt");
                values.insert(info.key, answer, ValueSource::Prompt);
            } else {
                missing.push(info.env);
            }
        }

        if !missing.is_empty() {
            return Err(ResolveError::MissingValues(missing));
        }

        info!(
            total = values.len(),
            prompted = values.count_from(ValueSource::Prompt),
            defaults = values.count_from(ValueSource::Default),
            "Resolved configuration values"
        );
        Ok(values)
    }

    fn lookup(&self, info: &ConfigKeyInfo) -> Option<(String, ValueSource)> {
        self.sources.iter().find_map(|source| {
            source
                .lookup(info.env)
                .filter(|value| !value.is_empty())
                .map(|value| (value, source.source()))
        })
    }
}
