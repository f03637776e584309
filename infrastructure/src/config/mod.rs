//! Configuration file loading for ha-provision
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HA_PROVISION_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./ha-provision.toml` or `./.ha-provision.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ha-provision/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FilePathsConfig,
    FileProvisionConfig, FileValuesConfig,
};
pub use loader::ConfigLoader;
