//! Application layer for ha-provision
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ProvisionParams;
pub use ports::{
    artifact_writer::{ArtifactWriter, WriteError},
    command_runner::{CommandError, CommandRunner},
    progress::{NoProgress, ProvisionProgress},
    prompt::{NoPrompt, PromptError, PromptPort},
    variable_source::{StaticValues, VariableSource},
};
pub use use_cases::apply_provision::{ApplyError, ApplyOutput, ApplyProvisionUseCase};
pub use use_cases::render_artifacts::{
    ArtifactSummary, RenderArtifactsUseCase, RenderError, RenderOutput,
};
pub use use_cases::resolve_variables::{ResolveError, ResolveVariablesUseCase};
