//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod apply_provision;
pub mod render_artifacts;
pub mod resolve_variables;
