//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod config_key;
mod output_format;
mod values;

pub use config_key::{ConfigKey, ConfigKeyInfo, known_keys, lookup_key};
pub use output_format::OutputFormat;
pub use values::{ResolvedValue, ResolvedValues, ValueSource};
