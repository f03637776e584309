//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod artifact_writer;
pub mod command_runner;
pub mod progress;
pub mod prompt;
pub mod variable_source;
