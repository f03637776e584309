//! Progress notification port
//!
//! Defines the interface for reporting progress while rendering and applying.

use provision_domain::{HostCommand, RenderedArtifact};

/// Callback for progress updates.
///
/// Implementations live in the presentation layer.
pub trait ProvisionProgress: Send + Sync {
    /// Called after an artifact has been written.
    fn on_artifact_written(&self, artifact: &RenderedArtifact);

    /// Called before a host command starts; `index` is 1-based.
    fn on_command_start(&self, _command: &HostCommand, _index: usize, _total: usize) {}

    /// Called when a host command finishes.
    fn on_command_complete(&self, _command: &HostCommand, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProvisionProgress for NoProgress {
    fn on_artifact_written(&self, _artifact: &RenderedArtifact) {}
}
