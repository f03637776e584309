//! Render artifacts use case
//!
//! Renders every artifact from the immutable [`ProvisionConfig`] and hands
//! each one to the [`ArtifactWriter`] in a fixed order. Stops at the first
//! write failure; files already written are left in place.

use crate::ports::artifact_writer::{ArtifactWriter, WriteError};
use crate::ports::progress::{NoProgress, ProvisionProgress};
use provision_domain::{ArtifactKind, ProvisionConfig, RenderedArtifact, StackLayout, render_all};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// What was written, without the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub bytes: usize,
    /// Written owner-only (mode 0600).
    pub private: bool,
}

impl From<&RenderedArtifact> for ArtifactSummary {
    fn from(artifact: &RenderedArtifact) -> Self {
        Self {
            kind: artifact.kind,
            path: artifact.path.clone(),
            bytes: artifact.len(),
            private: artifact.is_private(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderOutput {
    pub artifacts: Vec<ArtifactSummary>,
}

pub struct RenderArtifactsUseCase {
    writer: Arc<dyn ArtifactWriter>,
}

impl RenderArtifactsUseCase {
    pub fn new(writer: Arc<dyn ArtifactWriter>) -> Self {
        Self { writer }
    }

    pub fn execute(
        &self,
        config: &ProvisionConfig,
        layout: &StackLayout,
    ) -> Result<RenderOutput, RenderError> {
        self.execute_with_progress(config, layout, &NoProgress)
    }

    pub fn execute_with_progress(
        &self,
        config: &ProvisionConfig,
        layout: &StackLayout,
        progress: &dyn ProvisionProgress,
    ) -> Result<RenderOutput, RenderError> {
        let mut output = RenderOutput::default();

        for artifact in render_all(config, layout) {
            self.writer.write(&artifact)?;
            info!(
                artifact = artifact.kind.label(),
                path = %artifact.path.display(),
                bytes = artifact.len(),
                "Wrote artifact"
            );
            progress.on_artifact_written(&artifact);
            output.artifacts.push(ArtifactSummary::from(&artifact));
        }

        Ok(output)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use provision_domain::{ConfigKey, ResolvedValues};
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Keeps written artifacts in memory; fails on paths in `fail_on`.
    #[derive(Default)]
    pub(crate) struct MemoryWriter {
        pub written: Mutex<Vec<RenderedArtifact>>,
        pub fail_on: HashSet<PathBuf>,
    }

    impl ArtifactWriter for MemoryWriter {
        fn write(&self, artifact: &RenderedArtifact) -> Result<(), WriteError> {
            if self.fail_on.contains(&artifact.path) {
                return Err(WriteError::new(
                    artifact.path.clone(),
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                ));
            }
            self.written.lock().unwrap().push(artifact.clone());
            Ok(())
        }
    }

    pub(crate) fn sample_config() -> ProvisionConfig {
        let values = ResolvedValues::new()
            .with(ConfigKey::HostIp, "10.0.0.2")
            .with(ConfigKey::PeerIps, "10.0.0.3")
            .with(ConfigKey::FloatingIp, "10.0.0.100")
            .with(ConfigKey::Role, "MASTER")
            .with(ConfigKey::Priority, "150")
            .with(ConfigKey::SyncthingDeviceId, "SELF")
            .with(ConfigKey::SyncthingPeerDeviceIds, "PEER")
            .with(ConfigKey::DbRootPass, "rootpw")
            .with(ConfigKey::DbUser, "svc")
            .with(ConfigKey::DbUserPass, "pw")
            .with(ConfigKey::DbName, "npm")
            .with(ConfigKey::ClusterName, "proxy_cluster")
            .with(ConfigKey::XtrabackupPassword, "sstpw")
            .with(ConfigKey::LetsencryptDir, "/etc/letsencrypt")
            .with(ConfigKey::Puid, "1000")
            .with(ConfigKey::Pgid, "1000")
            .with(ConfigKey::DbPort, "3306")
            .with(ConfigKey::KeepalivedInterface, "eth0")
            .with(ConfigKey::VirtualRouterId, "51")
            .with(ConfigKey::SyncthingRescanInterval, "3600");
        ProvisionConfig::from_values(&values).unwrap()
    }

    #[test]
    fn test_writes_every_artifact_in_order() {
        let writer = Arc::new(MemoryWriter::default());
        let use_case = RenderArtifactsUseCase::new(writer.clone());

        let output = use_case
            .execute(&sample_config(), &StackLayout::new("/srv/stack"))
            .unwrap();

        let kinds: Vec<_> = output.artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, ArtifactKind::ALL.to_vec());
        assert_eq!(writer.written.lock().unwrap().len(), 5);
        let private: Vec<_> = output.artifacts.iter().filter(|a| a.private).collect();
        assert_eq!(private.len(), 1);
        assert_eq!(private[0].kind, ArtifactKind::ComposeManifest);
        assert!(output.artifacts.iter().all(|a| a.bytes > 0));
    }

    #[test]
    fn test_same_input_same_bytes() {
        let first = Arc::new(MemoryWriter::default());
        let second = Arc::new(MemoryWriter::default());
        let layout = StackLayout::new("/srv/stack");

        RenderArtifactsUseCase::new(first.clone())
            .execute(&sample_config(), &layout)
            .unwrap();
        RenderArtifactsUseCase::new(second.clone())
            .execute(&sample_config(), &layout)
            .unwrap();

        assert_eq!(*first.written.lock().unwrap(), *second.written.lock().unwrap());
    }

    #[test]
    fn test_stops_at_first_write_failure() {
        let layout = StackLayout::new("/srv/stack");
        let writer = Arc::new(MemoryWriter {
            fail_on: HashSet::from([layout.compose_file()]),
            ..Default::default()
        });
        let use_case = RenderArtifactsUseCase::new(writer.clone());

        let err = use_case.execute(&sample_config(), &layout).unwrap_err();

        assert!(err.to_string().contains("docker-compose.yml"));
        let written = writer.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].kind, ArtifactKind::SqlInit);
    }
}
