//! Infrastructure layer for ha-provision
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod env;
pub mod files;
pub mod process;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FilePathsConfig, FileProvisionConfig, FileValuesConfig,
};
pub use env::ProcessEnvironment;
pub use files::{AtomicFileWriter, DryRunWriter};
pub use process::{DryRunCommandRunner, SystemCommandRunner};
