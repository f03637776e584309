//! Artifact renderers.
//!
//! Each artifact is a pure function of [`ProvisionConfig`] and the
//! [`StackLayout`]; none reads another artifact's output. Rendering the
//! same input twice produces byte-identical text.

pub mod compose;
pub mod escape;
pub mod galera;
pub mod keepalived;
pub mod sql;
pub mod syncthing;

use crate::provision::settings::ProvisionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Compose manifest file name inside the stack directory.
pub const COMPOSE_FILE: &str = "docker-compose.yml";
/// Galera option files, relative to the stack directory; mounted at `/etc/mysql/conf.d`.
pub const GALERA_CONF_DIR: &str = "mariadb/conf.d";
/// SQL init scripts, relative to the stack directory; mounted at `/docker-entrypoint-initdb.d`.
pub const INIT_SQL_DIR: &str = "mariadb/init";

/// The artifacts produced by a render, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    SqlInit,
    ComposeManifest,
    GaleraConfig,
    KeepalivedConfig,
    SyncthingConfig,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::SqlInit,
        ArtifactKind::ComposeManifest,
        ArtifactKind::GaleraConfig,
        ArtifactKind::KeepalivedConfig,
        ArtifactKind::SyncthingConfig,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::SqlInit => "SQL init script",
            ArtifactKind::ComposeManifest => "Compose manifest",
            ArtifactKind::GaleraConfig => "Galera config",
            ArtifactKind::KeepalivedConfig => "Keepalived config",
            ArtifactKind::SyncthingConfig => "Syncthing config",
        }
    }

    /// Whether the file is restricted to its owner.
    ///
    /// Only the compose manifest qualifies: it embeds passwords and is read
    /// by host root alone. The SQL script and the Galera fragment embed
    /// passwords too, but the MariaDB container reads them as its own
    /// unprivileged user through bind mounts, so they stay world-readable.
    pub fn is_private(&self) -> bool {
        matches!(self, ArtifactKind::ComposeManifest)
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the artifacts live on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackLayout {
    /// Directory holding the compose manifest and the MariaDB mounts.
    pub stack_dir: PathBuf,
    /// Proxy data directory; mounted into the proxy and synced by Syncthing.
    pub app_data_dir: PathBuf,
    pub keepalived_config: PathBuf,
    pub syncthing_config: PathBuf,
}

impl StackLayout {
    /// Layout with the default locations for everything outside `stack_dir`.
    pub fn new(stack_dir: impl Into<PathBuf>) -> Self {
        let stack_dir = stack_dir.into();
        Self {
            app_data_dir: stack_dir.join("data"),
            keepalived_config: PathBuf::from("/etc/keepalived/keepalived.conf"),
            syncthing_config: PathBuf::from("/root/.config/syncthing/config.xml"),
            stack_dir,
        }
    }

    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        match kind {
            ArtifactKind::SqlInit => self.stack_dir.join(INIT_SQL_DIR).join("init.sql"),
            ArtifactKind::ComposeManifest => self.compose_file(),
            ArtifactKind::GaleraConfig => self.stack_dir.join(GALERA_CONF_DIR).join("galera.cnf"),
            ArtifactKind::KeepalivedConfig => self.keepalived_config.clone(),
            ArtifactKind::SyncthingConfig => self.syncthing_config.clone(),
        }
    }

    pub fn compose_file(&self) -> PathBuf {
        self.stack_dir.join(COMPOSE_FILE)
    }
}

/// One rendered file, ready to be written.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedArtifact {
    pub fn is_private(&self) -> bool {
        self.kind.is_private()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl std::fmt::Debug for RenderedArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedArtifact")
            .field("kind", &self.kind)
            .field("path", &self.path)
            .field("bytes", &self.contents.len())
            .finish()
    }
}

/// Render a single artifact.
pub fn render_artifact(
    kind: ArtifactKind,
    config: &ProvisionConfig,
    layout: &StackLayout,
) -> RenderedArtifact {
    let contents = match kind {
        ArtifactKind::SqlInit => sql::render(config),
        ArtifactKind::ComposeManifest => compose::render(config, layout),
        ArtifactKind::GaleraConfig => galera::render(config),
        ArtifactKind::KeepalivedConfig => keepalived::render(config),
        ArtifactKind::SyncthingConfig => syncthing::render(config, layout),
    };
    RenderedArtifact {
        kind,
        path: layout.path_for(kind),
        contents,
    }
}

/// Render every artifact, in [`ArtifactKind::ALL`] order.
pub fn render_all(config: &ProvisionConfig, layout: &StackLayout) -> Vec<RenderedArtifact> {
    ArtifactKind::ALL
        .iter()
        .map(|kind| render_artifact(*kind, config, layout))
        .collect()
}
