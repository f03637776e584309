//! Writer that only logs, for `apply --dry-run`.

use provision_application::{ArtifactWriter, WriteError};
use provision_domain::RenderedArtifact;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunWriter;

impl ArtifactWriter for DryRunWriter {
    fn write(&self, artifact: &RenderedArtifact) -> Result<(), WriteError> {
        info!(
            path = %artifact.path().display(),
            bytes = artifact.len(),
            "Dry run: not writing"
        );
        Ok(())
    }
}
