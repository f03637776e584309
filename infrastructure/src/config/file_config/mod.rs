//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [values]
//! HOST_IP = "10.0.0.2"
//! PEER_IPS = "10.0.0.3"
//!
//! [paths]
//! stack_dir = "/opt/npm"
//!
//! [provision]
//! packages = ["keepalived", "syncthing"]
//!
//! [output]
//! color = false
//! ```

mod output;
mod paths;
mod provision;
mod values;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use paths::FilePathsConfig;
pub use provision::FileProvisionConfig;
pub use values::FileValuesConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("unknown key in [values]: {0}")]
    UnknownValueKey(String),

    #[error("paths.stack_dir cannot be empty")]
    EmptyStackDir,

    #[error("provision.{0} cannot be empty")]
    EmptyProvisionField(&'static str),
}

/// Complete TOML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Pre-seeded input values, keyed by environment variable name
    pub values: FileValuesConfig,
    /// Artifact locations
    pub paths: FilePathsConfig,
    /// `apply` settings
    pub provision: FileProvisionConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.values.validate()?;

        if self.paths.stack_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyStackDir);
        }

        if self.provision.compose_project.trim().is_empty() {
            return Err(ConfigValidationError::EmptyProvisionField("compose_project"));
        }
        if self.provision.syncthing_user.trim().is_empty() {
            return Err(ConfigValidationError::EmptyProvisionField("syncthing_user"));
        }

        Ok(())
    }
}
